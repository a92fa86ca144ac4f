use insta::assert_display_snapshot;

use super::*;
use crate::{ClauseList, Error, NormalForm};

#[test]
fn from_cnf() {
    let vars = vars();
    let clauses = ClauseList::from_cnf(&and(or(a(), neg("b")), neg("d")), &vars).unwrap();

    assert_eq!(clauses.clauses, [vec![1, -2], vec![-4]]);
    assert_eq!(clauses.variable_count, 4);
    assert_eq!(clauses.len(), 2);
}

#[test]
fn degenerate_shapes() {
    let vars = vars();
    let list = |form: Formula| ClauseList::from_cnf(&form, &vars).unwrap().clauses;

    assert_eq!(list(c()), [vec![3]]);
    assert_eq!(list(or(a(), b())), [vec![1, 2]]);
    assert!(list(and_([])).is_empty());
    assert_eq!(list(or_([])), [Vec::<i32>::new()]);
}

#[test]
fn constants() {
    let vars = vars();
    let f = and_([or(a(), true.into()), or(b(), false.into()), false.into()]);
    let clauses = ClauseList::from_cnf(&f, &vars).unwrap();

    assert_eq!(clauses.clauses, [vec![2], vec![]]);
}

#[test]
fn not_cnf() {
    let err = ClauseList::from_cnf(&or(and(a(), b()), c()), &vars()).unwrap_err();
    assert!(matches!(err, Error::NotClausal { form: NormalForm::Cnf, .. }));
    assert_display_snapshot!(err, @"formula is not in CNF: `(a ∧ b) ∨ c`");

    let err = ClauseList::from_cnf(&or(a(), lit("z")), &vars()).unwrap_err();
    assert_eq!(err, Error::UnknownVariable { name: "z".into() });
}

#[test]
fn to_formula() {
    let vars = vars();
    let clauses = ClauseList {
        clauses: vec![vec![1, -3], vec![2]],
        variable_count: 4,
    };

    let f = clauses.to_formula(&vars).unwrap();
    assert_display_snapshot!(f, @"(a ∨ ¬c) ∧ ∨(b)");
    assert_eq!(ClauseList::from_cnf(&f, &vars).unwrap(), clauses);

    let clauses = ClauseList {
        clauses: vec![vec![5]],
        variable_count: 4,
    };
    assert_eq!(
        clauses.to_formula(&vars).unwrap_err(),
        Error::IndexOutOfRange { index: 5, max: 4 }
    );
}

#[test]
fn tseitin_clauses() {
    let tseitin = or(and(a(), b()), c()).tseitin(&vars()).unwrap();
    let clauses = ClauseList::from_cnf(&tseitin.formula, &tseitin.variables).unwrap();

    assert_eq!(clauses.variable_count, 6);
    assert_eq!(
        clauses.clauses,
        [
            vec![-5, 1],
            vec![-5, 2],
            vec![5, -1, -2],
            vec![6, -5],
            vec![6, -3],
            vec![-6, 5, 3],
            vec![6],
        ]
    );
}
