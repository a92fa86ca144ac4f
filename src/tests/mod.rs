use crate::{short::*, Formula, VariableMap};

mod classify;
mod clauses;
mod var_map;

fn a() -> Formula {
    lit("a")
}

fn b() -> Formula {
    lit("b")
}

fn c() -> Formula {
    lit("c")
}

fn d() -> Formula {
    lit("d")
}

fn vars() -> VariableMap {
    VariableMap::from_names(["a", "b", "c", "d"])
}

/// Every assignment to variables `1..=n`, with unknown values if `three_valued`. Slot 0 is unused.
fn assignments(n: u32, three_valued: bool) -> Vec<Vec<Option<bool>>> {
    let domain: &[Option<bool>] = if three_valued {
        &[None, Some(false), Some(true)]
    } else {
        &[Some(false), Some(true)]
    };

    let mut all = vec![vec![None]];
    for _ in 0..n {
        all = all
            .into_iter()
            .flat_map(|values| {
                domain.iter().map(move |&x| {
                    let mut values = values.clone();
                    values.push(x);
                    values
                })
            })
            .collect();
    }

    all
}

/// `true` if both formulas agree on every three-valued assignment to `vars`.
fn equivalent(f: &Formula, g: &Formula, vars: &VariableMap) -> bool {
    assignments(vars.max_index(), true)
        .iter()
        .all(|values| f.evaluate(vars, values).unwrap() == g.evaluate(vars, values).unwrap())
}

#[test]
fn display() {
    insta::assert_display_snapshot!(and(or(a(), neg("b")), not(c())), @"(a ∨ ¬b) ∧ ¬c");
    insta::assert_display_snapshot!(implies(and(a(), b()), iff(c(), d())), @"(a ∧ b) → (c ↔ d)");
    insta::assert_display_snapshot!(or_([and_([]), or_([a()])]), @"∧() ∨ ∨(a)");
    insta::assert_display_snapshot!(not(or(a(), b())), @"¬(a ∨ b)");
}

#[test]
fn structural_equality() {
    assert_eq!(and(a(), b()), and(a(), b()));
    assert_ne!(and(a(), b()), and(b(), a()));
    assert_ne!(and(a(), b()), or(a(), b()));
    assert_ne!(a(), neg("a"));
    assert_eq!(Formula::Trivial(true), true.into());
}

#[test]
fn evaluate() {
    let vars = vars();
    let values = [None, Some(true), Some(false), None];

    let eval = |f: Formula| f.evaluate(&vars, &values).unwrap();
    assert_eq!(eval(a()), Some(true));
    assert_eq!(eval(neg("b")), Some(true));
    assert_eq!(eval(c()), None);
    // `d` lies past the end of `values`.
    assert_eq!(eval(d()), None);

    assert_eq!(eval(and(a(), c())), None);
    assert_eq!(eval(and(b(), c())), Some(false));
    assert_eq!(eval(or(a(), c())), Some(true));
    assert_eq!(eval(implies(b(), c())), Some(true));
    assert_eq!(eval(implies(a(), c())), None);
    assert_eq!(eval(iff(a(), b())), Some(false));

    assert_eq!(eval(and_([])), Some(true));
    assert_eq!(eval(or_([])), Some(false));
}

#[test]
fn evaluate_unknown_variable() {
    let err = lit("z").evaluate(&vars(), &[]).unwrap_err();
    assert_eq!(err, crate::Error::UnknownVariable { name: "z".into() });
}

#[test]
fn queries() {
    let f = and(or(b(), neg("a")), implies(b(), c()));

    assert_eq!(f.variables(), ["b", "a", "c"]);
    assert_eq!(f.literal_count(), 4);
    assert!(f.has_variable("c"));
    assert!(!f.has_variable("d"));
    assert!(!f.has_quantifiers());
    assert!(exists("x", f).has_quantifiers());
}

#[test]
fn rename_variable() {
    let mut f = and(a(), or(neg("a"), b()));
    f.rename_variable("a", "z");
    assert_eq!(f, and(lit("z"), or(neg("z"), b())));

    let mut g = or(a(), forall("a", a()));
    g.rename_variable("a", "z");
    assert_eq!(g, or(lit("z"), forall("a", a())));
}

#[test]
fn replace_children() {
    let mut f = and_([a(), or(b(), c()), d()]);

    f.replace_children(|child| child.is_or().then(|| neg("x")));
    assert_eq!(f, and_([a(), neg("x"), d()]));

    f.replace_children_with_list(|child| match child {
        Formula::Literal(lit) if lit.var == "a" => Some(vec![]),
        Formula::Literal(lit) if lit.var == "d" => Some(vec![b(), c()]),
        _ => None,
    });
    assert_eq!(f, and_([neg("x"), b(), c()]));

    let mut g = not(a());
    g.replace_children_with_list(|_| Some(vec![b()]));
    assert_eq!(g, not(b()));
}

#[test]
fn value_type_and_name() {
    use crate::term::ValueType;

    assert_eq!(a().name(), "a");
    assert_eq!(neg("a").name(), "a");
    assert_eq!(and(a(), b()).name(), "and");
    assert_eq!(Formula::Trivial(false).name(), "false");
    assert_eq!(or(a(), b()).value_type(), ValueType::Bool);
}

#[test]
fn terms() {
    use crate::term::{CompareOp, Term, ValueType};

    let product = Term::Multiply(vec![Term::Constant(2), Term::Variable("y".into())]);
    let sum = Term::Add(vec![Term::Variable("x".into()), product]);
    assert_eq!(sum.children().len(), 2);
    assert_eq!(sum.value_type(), ValueType::Int);

    let f = compare(CompareOp::Ge, sum, Term::Constant(0));
    insta::assert_display_snapshot!(f, @"(x + (2 * y)) ≥ 0");
    assert!(f.is_atomic());
    assert_eq!(f.literal_count(), 0);
}
