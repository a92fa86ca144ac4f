//! Numeric terms. These only appear inside comparison predicates, which the normal-form pipeline
//! rejects.

use std::fmt;

use crate::List;

/// The domain an expression evaluates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    Bool,
    Int,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    Constant(i64),
    Variable(String),
    Add(List<Term>),
    Multiply(List<Term>),
}

impl Term {
    pub fn value_type(&self) -> ValueType {
        ValueType::Int
    }

    pub fn children(&self) -> &[Term] {
        match self {
            Term::Constant(_) | Term::Variable(_) => &[],
            Term::Add(list) | Term::Multiply(list) => list,
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Term::Constant(c) => write!(f, "{}", c),
            Term::Variable(name) => write!(f, "{}", name),
            Term::Add(list) | Term::Multiply(list) => {
                let sep = if matches!(self, Term::Add(_)) { '+' } else { '*' };
                write!(f, "(")?;
                for (i, term) in list.iter().enumerate() {
                    if i > 0 {
                        write!(f, " {} ", sep)?;
                    }
                    write!(f, "{}", term)?;
                }
                write!(f, ")")
            }
        }
    }
}

/// A comparison between two numeric terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            CompareOp::Eq => "=",
            CompareOp::Ne => "≠",
            CompareOp::Lt => "<",
            CompareOp::Le => "≤",
            CompareOp::Gt => ">",
            CompareOp::Ge => "≥",
        };

        write!(f, "{}", s)
    }
}
