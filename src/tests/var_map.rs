use super::*;
use crate::{Error, Var};

fn index(vars: &VariableMap, name: &str) -> Option<u32> {
    vars.index(name).map(Var::index)
}

#[test]
fn from_names() {
    let vars = VariableMap::from_names(["x", "y", "x", "z"]);

    assert_eq!(vars.len(), 3);
    assert_eq!(vars.max_index(), 3);
    assert_eq!(index(&vars, "x"), Some(1));
    assert_eq!(index(&vars, "z"), Some(3));
    assert_eq!(vars.names().collect::<Vec<_>>(), ["x", "y", "z"]);
    assert_eq!(vars.name(Var::RESERVED), None);

    assert!(VariableMap::new().is_empty());
    assert_eq!(VariableMap::default().max_index(), 0);
}

#[test]
fn of_formula() {
    let vars = VariableMap::of(&and(or(c(), neg("a")), implies(c(), b())));
    assert_eq!(vars.names().collect::<Vec<_>>(), ["c", "a", "b"]);
}

#[test]
fn with_variable() {
    let vars = VariableMap::from_names(["a"]);
    let more = vars.with_variable("b").unwrap();

    assert_eq!(index(&more, "b"), Some(2));
    assert!(!vars.contains("b"));

    let err = more.with_variable("a").unwrap_err();
    assert_eq!(err, Error::DuplicateVariable { name: "a".into() });
}

#[test]
fn without_variable_leaves_a_hole() {
    let vars = VariableMap::from_names(["a", "b", "c"]);
    let fewer = vars.without_variable("b").unwrap();

    assert_eq!(fewer.len(), 2);
    assert_eq!(fewer.max_index(), 3);
    assert_eq!(index(&fewer, "c"), Some(3));
    assert!(!fewer.has_index(Var::new(2).unwrap()));
    assert!(vars.has_index(Var::new(2).unwrap()));

    // The freed index is not handed out again.
    let again = fewer.with_variable("d").unwrap();
    assert_eq!(index(&again, "d"), Some(4));

    assert!(matches!(fewer.without_variable("b"), Err(Error::UnknownVariable { .. })));
}

#[test]
fn renamed() {
    let vars = VariableMap::from_names(["a", "b"]);
    let renamed = vars.renamed("a", "z").unwrap();

    assert_eq!(index(&renamed, "z"), Some(1));
    assert!(!renamed.contains("a"));
    assert_eq!(renamed.name(Var::new(1).unwrap()), Some("z"));

    assert_eq!(vars.renamed("a", "a").unwrap(), vars);
    assert!(matches!(vars.renamed("a", "b"), Err(Error::DuplicateVariable { .. })));
    assert!(matches!(vars.renamed("q", "r"), Err(Error::UnknownVariable { .. })));
}

#[test]
fn resolve() {
    let vars = VariableMap::from_names(["a", "b"]);

    assert_eq!(vars.resolve(1).unwrap(), ("a", true));
    assert_eq!(vars.resolve(-2).unwrap(), ("b", false));
    assert_eq!(vars.resolve(0).unwrap_err(), Error::IndexOutOfRange { index: 0, max: 2 });
    assert_eq!(vars.resolve(-3).unwrap_err(), Error::IndexOutOfRange { index: 3, max: 2 });
    assert_eq!(Var::new(2).unwrap().signed(false), -2);
}

#[test]
fn check() {
    let vars = VariableMap::from_names(["a", "b"]);

    assert!(vars.check(&or(a(), neg("b"))).is_ok());
    assert_eq!(
        vars.check(&and(a(), c())).unwrap_err(),
        Error::UnknownVariable { name: "c".into() }
    );

    let err = and(a(), c()).to_normal_form_with(&vars, &Default::default()).unwrap_err();
    assert!(matches!(err, Error::UnknownVariable { .. }));
}

#[test]
fn var_debug() {
    assert_eq!(format!("{:?}", Var::new(4).unwrap()), "#4");
    assert_eq!(format!("{:?}", Var::RESERVED), "_");
    assert_eq!(Var::new(0), None);
}
