//! CNF as a flat list of clauses over signed variable indices, the way SAT solvers consume it.

use crate::{Error, Formula, Kind, List, Literal, NormalForm, Result, VariableMap};

/// A clause list in DIMACS convention: `n` is variable `n`, `-n` its negation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClauseList {
    pub clauses: List<List<i32>>,
    /// The highest variable index of the map the clauses were built against.
    pub variable_count: u32,
}

impl ClauseList {
    /// Flattens a formula in (possibly degenerate) CNF.
    ///
    /// Clauses containing `True` are dropped, as are `False` literals.
    pub fn from_cnf(form: &Formula, vars: &VariableMap) -> Result<Self> {
        if !form.is_cnf() {
            return Err(Error::NotClausal {
                form: NormalForm::Cnf,
                formula: form.to_string(),
            });
        }

        let mut form = form.clone();
        form.make_clausal(Kind::And);
        unwrap!(let Formula::And(list) = form);

        let mut clauses = List::with_capacity(list.len());
        'clauses: for clause in list {
            unwrap!(let Formula::Or(lits) = clause);

            let mut out = List::with_capacity(lits.len());
            for lit in lits {
                match lit {
                    Formula::Literal(lit) => out.push(vars.require(&lit.var)?.signed(lit.positive)),
                    Formula::Trivial(true) => continue 'clauses,
                    Formula::Trivial(false) => {}
                    _ => unreachable!("clausal CNF only has literals below its clauses"),
                }
            }

            clauses.push(out);
        }

        Ok(ClauseList {
            clauses,
            variable_count: vars.max_index(),
        })
    }

    /// Rebuilds a strict CNF formula. Every index must be mapped in `vars`.
    pub fn to_formula(&self, vars: &VariableMap) -> Result<Formula> {
        let clauses = self
            .clauses
            .iter()
            .map(|clause| -> Result<Formula> {
                let lits = clause
                    .iter()
                    .map(|&signed| -> Result<Formula> {
                        let (name, positive) = vars.resolve(signed)?;
                        Ok(Literal::new(name, positive).into())
                    })
                    .collect::<Result<List<_>>>()?;
                Ok(Formula::Or(lits))
            })
            .collect::<Result<List<_>>>()?;

        Ok(Formula::And(clauses))
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }
}
