//! Propositional formula trees and their conversion to NNF, CNF and DNF.

#[macro_use]
mod util;

mod classify;
mod clauses;
mod distrib;
mod error;
mod form;
mod nnf;
mod normal;
pub mod short;
mod simp;
pub mod term;
#[cfg(test)]
mod tests;
pub mod traverse;
mod tseitin;
mod var;
mod var_map;
pub mod visit;

pub use classify::Classification;
pub use clauses::ClauseList;
pub use error::{Error, Result};
pub use form::{Formula, Kind, Literal, QuantifierKind};
pub use normal::{Config, NormalForm, Normalized};
pub use term::Term;
pub use tseitin::{Tseitin, AUX_PREFIX};
pub use var::Var;
pub use var_map::VariableMap;

type P<T> = Box<T>;
type List<T> = Vec<T>;
