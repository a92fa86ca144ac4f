use insta::assert_display_snapshot;

use super::*;
use crate::{Classification, Config, NormalForm};

const NORMAL: Classification = Classification {
    normal: true,
    clausal: false,
};
const CLAUSAL: Classification = Classification {
    normal: true,
    clausal: true,
};
const NEITHER: Classification = Classification {
    normal: false,
    clausal: false,
};

#[test]
fn literal() {
    assert_eq!(a().classify(NormalForm::Cnf), NORMAL);
    assert_eq!(a().classify(NormalForm::Dnf), NORMAL);
    assert_eq!(a().classify(NormalForm::Nnf), CLAUSAL);
    assert_eq!(Formula::Trivial(false).classify(NormalForm::Cnf), NORMAL);
}

#[test]
fn conjunction_of_clauses() {
    let f = and(or(a(), b()), or_([c()]));
    assert_eq!(f.classify(NormalForm::Cnf), CLAUSAL);
    assert_eq!(f.classify(NormalForm::Dnf), NEITHER);
}

#[test]
fn disjunction_of_terms() {
    let f = or(and(a(), b()), and_([c()]));
    assert_eq!(f.classify(NormalForm::Dnf), CLAUSAL);
    assert_eq!(f.classify(NormalForm::Cnf), NEITHER);
}

#[test]
fn missing_levels() {
    let f = and(a(), or(b(), c()));
    assert_eq!(f.classify(NormalForm::Cnf), NORMAL);

    assert_eq!(or(a(), neg("b")).classify(NormalForm::Cnf), NORMAL);
    assert_eq!(or(a(), neg("b")).classify(NormalForm::Dnf), NORMAL);
    assert_eq!(and(a(), b()).classify(NormalForm::Dnf), NORMAL);
}

#[test]
fn too_deep() {
    assert_eq!(and(or(a(), and(b(), c())), d()).classify(NormalForm::Cnf), NEITHER);
    assert_eq!(and(and(a(), b()), c()).classify(NormalForm::Cnf), NEITHER);
    assert_eq!(not(a()).classify(NormalForm::Cnf), NEITHER);
    assert_eq!(and(implies(a(), b()), c()).classify(NormalForm::Cnf), NEITHER);
}

#[test]
fn empty() {
    assert_eq!(and_([]).classify(NormalForm::Cnf), CLAUSAL);
    assert_eq!(or_([]).classify(NormalForm::Cnf), NORMAL);
    assert_eq!(and(or_([]), a()).classify(NormalForm::Cnf), NORMAL);
}

#[test]
fn strict() {
    let strict = |form: Formula, nf: NormalForm| {
        let config = Config::new(nf).strict(true);
        let normalized = form.to_normal_form(&config).unwrap();
        assert!(normalized.clausal);
        assert!(normalized.formula.is_clausal(nf));
        normalized.formula
    };

    assert_display_snapshot!(strict(a(), NormalForm::Cnf), @"∧(∨(a))");
    assert_display_snapshot!(strict(or(a(), b()), NormalForm::Cnf), @"∧(a ∨ b)");
    assert_display_snapshot!(strict(and(a(), or(b(), c())), NormalForm::Cnf), @"∨(a) ∧ (b ∨ c)");
    assert_display_snapshot!(strict(and(a(), b()), NormalForm::Dnf), @"∨(a ∧ b)");
    assert_display_snapshot!(strict(or(and(a(), b()), and_([c()])), NormalForm::Cnf), @"(c ∨ b) ∧ (c ∨ a)");
    assert_display_snapshot!(strict(Formula::Trivial(true), NormalForm::Cnf), @"∧(∨(True))");

    // Already clausal shapes are left alone.
    assert_eq!(strict(and_([]), NormalForm::Cnf), and_([]));
}

#[test]
fn loose_by_default() {
    let normalized = a().to_normal_form(&Config::new(NormalForm::Cnf)).unwrap();
    assert_eq!(normalized.formula, a());
    assert!(!normalized.clausal);

    let normalized = a().to_normal_form(&Config::new(NormalForm::Nnf)).unwrap();
    assert!(normalized.clausal);
}
