//! Terse constructors for various `Formula`s.

use crate::term::{CompareOp, Term};
use crate::{Formula, Literal, QuantifierKind, P};

/// A positive literal.
pub fn lit(var: impl Into<String>) -> Formula {
    Formula::Literal(Literal::new(var, true))
}

/// A negative literal.
pub fn neg(var: impl Into<String>) -> Formula {
    Formula::Literal(Literal::new(var, false))
}

pub fn not(form: Formula) -> Formula {
    if let Formula::Trivial(sat) = form {
        return (!sat).into();
    }

    Formula::Not(P::new(form))
}

pub fn or(a: Formula, b: Formula) -> Formula {
    Formula::Or(vec![a, b])
}

pub fn or_(forms: impl IntoIterator<Item = Formula>) -> Formula {
    Formula::Or(forms.into_iter().collect())
}

pub fn and(a: Formula, b: Formula) -> Formula {
    Formula::And(vec![a, b])
}

pub fn and_(forms: impl IntoIterator<Item = Formula>) -> Formula {
    Formula::And(forms.into_iter().collect())
}

pub fn implies(antecedent: Formula, consequent: Formula) -> Formula {
    Formula::Implies(P::new(antecedent), P::new(consequent))
}

pub fn iff(a: Formula, b: Formula) -> Formula {
    Formula::BiImplies(P::new(a), P::new(b))
}

pub fn forall(var: impl Into<String>, form: Formula) -> Formula {
    Formula::Bind(QuantifierKind::ForAll, var.into(), P::new(form))
}

pub fn exists(var: impl Into<String>, form: Formula) -> Formula {
    Formula::Bind(QuantifierKind::Exists, var.into(), P::new(form))
}

pub fn compare(op: CompareOp, left: Term, right: Term) -> Formula {
    Formula::Compare(op, left, right)
}
