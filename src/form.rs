use std::collections::HashSet;
use std::convert::Infallible;
use std::ops::ControlFlow::{self as Flow, Break, Continue};
use std::{fmt, mem, ops};

use crate::term::{CompareOp, Term, ValueType};
use crate::traverse::{traverse, Step, TreeVisitor};
use crate::visit::{AnonFormVisitor, Visit, VisitMut};
use crate::{short::*, Error, List, Result, VariableMap, P};

/// A quantifier, either "for all", or "there exists".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum QuantifierKind {
    ForAll,
    Exists,
}

impl fmt::Display for QuantifierKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Self::ForAll => "∀",
            Self::Exists => "∃",
        };

        write!(f, "{}", s)
    }
}

/// A variable reference with a polarity.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal {
    pub var: String,
    pub positive: bool,
}

impl Literal {
    pub fn new(var: impl Into<String>, positive: bool) -> Self {
        Literal {
            var: var.into(),
            positive,
        }
    }

    pub fn negated(self) -> Self {
        Literal {
            positive: !self.positive,
            ..self
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.positive {
            write!(f, "{}", self.var)
        } else {
            write!(f, "¬{}", self.var)
        }
    }
}

/// The kind of a `Formula` node, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Literal,
    Trivial,
    Not,
    And,
    Or,
    Implies,
    BiImplies,
    Bind,
    Compare,
}

impl Kind {
    /// The other n-ary connective. Only meaningful for `And` and `Or`.
    pub fn dual(self) -> Self {
        match self {
            Kind::And => Kind::Or,
            Kind::Or => Kind::And,
            kind => kind,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            Kind::Literal => "literal",
            Kind::Trivial => "constant",
            Kind::Not => "not",
            Kind::And => "and",
            Kind::Or => "or",
            Kind::Implies => "implies",
            Kind::BiImplies => "biimplies",
            Kind::Bind => "quantifier",
            Kind::Compare => "comparison",
        };

        write!(f, "{}", s)
    }
}

/// A Boolean-valued expression tree.
///
/// Equality is structural and order-sensitive: `a ∧ b` and `b ∧ a` are different trees. Each node
/// owns its children, so a clone is always safe to rewrite in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Formula {
    Literal(Literal),

    Trivial(bool),
    Not(P<Formula>),

    /// An empty conjunction is true.
    And(List<Formula>),
    /// An empty disjunction is false.
    Or(List<Formula>),

    Implies(P<Formula>, P<Formula>),
    BiImplies(P<Formula>, P<Formula>),

    /// An existential or universal quantifier over a named variable.
    Bind(QuantifierKind, String, P<Formula>),

    /// A predicate over numeric terms.
    Compare(CompareOp, Term, Term),
}

impl From<bool> for Formula {
    fn from(x: bool) -> Self {
        Formula::Trivial(x)
    }
}

impl From<Literal> for Formula {
    fn from(lit: Literal) -> Self {
        Formula::Literal(lit)
    }
}

impl ops::Not for Formula {
    type Output = Self;

    fn not(self) -> Self::Output {
        not(self)
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fn needs_parens(form: &Formula) -> bool {
            match form {
                Formula::Trivial(_) | Formula::Literal(_) | Formula::Compare(..) => false,
                Formula::Not(inner) => needs_parens(inner),
                Formula::And(list) | Formula::Or(list) => list.len() > 1,
                _ => true,
            }
        }

        fn operand(f: &mut fmt::Formatter, form: &Formula) -> fmt::Result {
            if needs_parens(form) {
                write!(f, "({})", form)
            } else {
                write!(f, "{}", form)
            }
        }

        match self {
            Formula::Trivial(true) => write!(f, "True"),
            Formula::Trivial(false) => write!(f, "False"),
            Formula::Literal(lit) => write!(f, "{}", lit),

            Formula::Compare(op, left, right) => write!(f, "{} {} {}", left, op, right),

            Formula::Bind(kind, var, form) if form.is_bind() => write!(f, "{}{}{}", kind, var, form),
            Formula::Bind(kind, var, form) => write!(f, "{}{}.({})", kind, var, form),

            Formula::Not(inner) if !needs_parens(inner) => write!(f, "¬{}", inner),
            Formula::Not(form) => write!(f, "¬({})", form),

            Formula::Implies(a, b) | Formula::BiImplies(a, b) => {
                let sep = if self.is_implies() { '→' } else { '↔' };
                operand(f, a)?;
                write!(f, " {} ", sep)?;
                operand(f, b)
            }

            Formula::And(list) | Formula::Or(list) => {
                let sep = match self {
                    Formula::And(_) => '∧',
                    Formula::Or(_) => '∨',
                    _ => unreachable!(),
                };

                // Degenerate connectives print in prefix form so they stay visible.
                if list.len() < 2 {
                    write!(f, "{}(", sep)?;
                    if let Some(form) = list.first() {
                        write!(f, "{}", form)?;
                    }
                    return write!(f, ")");
                }

                let mut first = true;
                for form in list {
                    if !first {
                        write!(f, " {} ", sep)?;
                    } else {
                        first = false;
                    }

                    operand(f, form)?;
                }

                Ok(())
            }
        }
    }
}

impl Formula {
    pub fn take(&mut self) -> Self {
        mem::replace(self, false.into())
    }

    pub fn kind(&self) -> Kind {
        match self {
            Formula::Literal(_) => Kind::Literal,
            Formula::Trivial(_) => Kind::Trivial,
            Formula::Not(_) => Kind::Not,
            Formula::And(_) => Kind::And,
            Formula::Or(_) => Kind::Or,
            Formula::Implies(..) => Kind::Implies,
            Formula::BiImplies(..) => Kind::BiImplies,
            Formula::Bind(..) => Kind::Bind,
            Formula::Compare(..) => Kind::Compare,
        }
    }

    /// The display label of this node: the variable name for a literal, the connective otherwise.
    pub fn name(&self) -> &str {
        match self {
            Formula::Literal(lit) => &lit.var,
            Formula::Trivial(true) => "true",
            Formula::Trivial(false) => "false",
            Formula::Not(_) => "not",
            Formula::And(_) => "and",
            Formula::Or(_) => "or",
            Formula::Implies(..) => "implies",
            Formula::BiImplies(..) => "biimplies",
            Formula::Bind(QuantifierKind::ForAll, ..) => "forall",
            Formula::Bind(QuantifierKind::Exists, ..) => "exists",
            Formula::Compare(..) => "compare",
        }
    }

    pub fn value_type(&self) -> ValueType {
        ValueType::Bool
    }

    #[rustfmt::skip]
    pub fn is_atomic(&self) -> bool {
        match self {
            | Formula::Trivial(_)
            | Formula::Literal(_)
            | Formula::Compare(..)
            => true,

            | Formula::Not(_)
            | Formula::And(_)
            | Formula::Or(_)
            | Formula::Implies(..)
            | Formula::BiImplies(..)
            | Formula::Bind(..)
            => false,
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Formula::Literal(_))
    }

    pub fn is_trivial(&self) -> bool {
        matches!(self, Self::Trivial(..))
    }

    pub fn is_not(&self) -> bool {
        matches!(self, Formula::Not(_))
    }

    pub fn is_or(&self) -> bool {
        matches!(self, Formula::Or(_))
    }

    pub fn is_and(&self) -> bool {
        matches!(self, Formula::And(_))
    }

    pub fn is_implies(&self) -> bool {
        matches!(self, Formula::Implies(..))
    }

    pub fn is_bind(&self) -> bool {
        matches!(self, Formula::Bind(..))
    }

    /// Builds an `And` or `Or` node.
    pub(crate) fn connective(kind: Kind, list: List<Formula>) -> Self {
        match kind {
            Kind::And => Formula::And(list),
            Kind::Or => Formula::Or(list),
            _ => unreachable!("{} is not an n-ary connective", kind),
        }
    }

    /// The children of an `And` or `Or` node of the given kind.
    pub(crate) fn operands(&self, kind: Kind) -> Option<&List<Formula>> {
        match (self, kind) {
            (Formula::And(list), Kind::And) | (Formula::Or(list), Kind::Or) => Some(list),
            _ => None,
        }
    }

    pub(crate) fn operands_mut(&mut self, kind: Kind) -> Option<&mut List<Formula>> {
        match (self, kind) {
            (Formula::And(list), Kind::And) | (Formula::Or(list), Kind::Or) => Some(list),
            _ => None,
        }
    }

    /// The direct `Formula` children of this node, in order. Terms are not included.
    pub fn children(&self) -> List<&Formula> {
        match self {
            Formula::Literal(_) | Formula::Trivial(_) | Formula::Compare(..) => vec![],
            Formula::Not(form) | Formula::Bind(_, _, form) => vec![&**form],
            Formula::And(list) | Formula::Or(list) => list.iter().collect(),
            Formula::Implies(a, b) | Formula::BiImplies(a, b) => vec![&**a, &**b],
        }
    }

    pub fn children_mut(&mut self) -> List<&mut Formula> {
        match self {
            Formula::Literal(_) | Formula::Trivial(_) | Formula::Compare(..) => vec![],
            Formula::Not(form) | Formula::Bind(_, _, form) => vec![&mut **form],
            Formula::And(list) | Formula::Or(list) => list.iter_mut().collect(),
            Formula::Implies(a, b) | Formula::BiImplies(a, b) => vec![&mut **a, &mut **b],
        }
    }

    /// Replaces each child for which `f` returns `Some`.
    pub fn replace_children(&mut self, mut f: impl FnMut(&mut Formula) -> Option<Formula>) {
        for child in self.children_mut() {
            if let Some(new) = f(child) {
                *child = new;
            }
        }
    }

    /// Replaces each child for which `f` returns `Some` with the returned list.
    ///
    /// An empty list deletes the child and a longer one is spliced in its place. Only `And` and
    /// `Or` can change their number of children; other nodes must get exactly one replacement.
    pub fn replace_children_with_list(
        &mut self,
        mut f: impl FnMut(&mut Formula) -> Option<List<Formula>>,
    ) {
        match self {
            Formula::And(list) | Formula::Or(list) => {
                let mut out = List::with_capacity(list.len());
                for mut child in mem::take(list) {
                    match f(&mut child) {
                        None => out.push(child),
                        Some(replacement) => out.extend(replacement),
                    }
                }

                *list = out;
            }

            _ => {
                let kind = self.kind();
                self.replace_children(|child| {
                    let mut list = f(child)?;
                    assert_eq!(list.len(), 1, "cannot change the arity of a {} node", kind);
                    list.pop()
                })
            }
        }
    }

    pub fn visit_with_pre<R>(&self, mut f: impl FnMut(&Self) -> Flow<R>) -> Flow<R> {
        AnonFormVisitor::pre(|x: &Self, _: &mut ()| f(x)).visit_formula(self)
    }

    pub fn visit_with_stateful<S, R>(
        &self,
        initial_state: S,
        mut f: impl FnMut(&Self, &S) -> Flow<R, S>,
    ) -> Flow<R, ()> {
        let pre = |form: &Formula, stack: &mut Vec<S>| {
            let new_state: S = match stack.last() {
                Some(state) => f(form, state)?,
                None => unreachable!("the state stack is never empty"),
            };
            stack.push(new_state);
            Continue(())
        };

        let post = |_form: &Formula, stack: &mut Vec<S>| {
            stack.pop();
            Continue(())
        };

        AnonFormVisitor {
            pre,
            post,
            state: vec![initial_state],
        }
        .visit_formula(self)
    }

    /// True if any literal in this formula refers to the given variable.
    pub fn has_variable(&self, name: &str) -> bool {
        matches!(HasVar(name).visit_formula(self), Break(FoundVar))
    }

    /// The names of all variables referenced by literals, in order of first occurrence.
    pub fn variables(&self) -> List<&str> {
        traverse(self, &mut CollectVariables::default())
    }

    /// The number of literal nodes in this formula, counting repeats.
    pub fn literal_count(&self) -> usize {
        let mut counter = CountLiterals(0);
        let _ = counter.visit_formula(self);
        counter.0
    }

    pub fn has_quantifiers(&self) -> bool {
        FindQuantifier.visit_formula(self).is_break()
    }

    /// Returns `true` if this contains an `And` immediately within another `And` or an `Or` within
    /// another `Or`.
    pub fn has_nested_connective(&self) -> bool {
        self.visit_with_pre(|form| match form {
            Formula::Or(l) if l.iter().any(Formula::is_or) => Break(()),
            Formula::And(l) if l.iter().any(Formula::is_and) => Break(()),
            _ => Continue(()),
        })
        .is_break()
    }

    /// Renames every literal over `old` to refer to `new`, in place. Quantified variables are
    /// left alone.
    pub fn rename_variable(&mut self, old: &str, new: &str) {
        let _ = RenameVariable { old, new }.visit_formula(self);
    }

    /// Evaluates this formula with Kleene's three-valued logic.
    ///
    /// `values` is indexed by variable index (slot 0 is ignored). A variable whose index lies past
    /// the end of `values`, or whose value is `None`, is unknown.
    pub fn evaluate(&self, vars: &VariableMap, values: &[Option<bool>]) -> Result<Option<bool>> {
        let val = match self {
            Formula::Trivial(sat) => Some(*sat),
            Formula::Literal(lit) => {
                let var = vars.require(&lit.var)?;
                values
                    .get(var.index() as usize)
                    .copied()
                    .flatten()
                    .map(|val| val == lit.positive)
            }

            Formula::Not(form) => form.evaluate(vars, values)?.map(|val| !val),
            Formula::And(list) => evaluate_connective(list, vars, values, false)?,
            Formula::Or(list) => evaluate_connective(list, vars, values, true)?,

            Formula::Implies(a, b) => {
                match (a.evaluate(vars, values)?, b.evaluate(vars, values)?) {
                    (Some(false), _) | (_, Some(true)) => Some(true),
                    (Some(true), Some(false)) => Some(false),
                    _ => None,
                }
            }
            Formula::BiImplies(a, b) => {
                match (a.evaluate(vars, values)?, b.evaluate(vars, values)?) {
                    (Some(a), Some(b)) => Some(a == b),
                    _ => None,
                }
            }

            Formula::Bind(..) | Formula::Compare(..) => return Err(Error::unsupported(self)),
        };

        Ok(val)
    }
}

/// `short_circ` is the value that decides the connective: `true` for `Or`, `false` for `And`.
fn evaluate_connective(
    list: &[Formula],
    vars: &VariableMap,
    values: &[Option<bool>],
    short_circ: bool,
) -> Result<Option<bool>> {
    let mut unknown = false;
    for form in list {
        match form.evaluate(vars, values)? {
            Some(val) if val == short_circ => return Ok(Some(short_circ)),
            Some(_) => {}
            None => unknown = true,
        }
    }

    Ok(if unknown { None } else { Some(!short_circ) })
}

struct FoundVar;
struct HasVar<'n>(&'n str);

impl Visit for HasVar<'_> {
    type Break = FoundVar;

    fn visit_literal(&mut self, lit: &Literal) -> Flow<Self::Break> {
        if lit.var == self.0 {
            Break(FoundVar)
        } else {
            Continue(())
        }
    }
}

struct CountLiterals(usize);

impl Visit for CountLiterals {
    type Break = Infallible;

    fn visit_literal(&mut self, _: &Literal) -> Flow<Self::Break> {
        self.0 += 1;
        Continue(())
    }
}

struct FindQuantifier;

impl Visit for FindQuantifier {
    type Break = ();

    fn visit_bind(&mut self, _: QuantifierKind, _: &String, _: &Formula) -> Flow<()> {
        Break(())
    }
}

struct RenameVariable<'a> {
    old: &'a str,
    new: &'a str,
}

impl VisitMut for RenameVariable<'_> {
    type Break = ();

    fn visit_literal(&mut self, lit: &mut Literal) -> Flow<()> {
        if lit.var == self.old {
            lit.var = self.new.to_owned();
        }

        Continue(())
    }

    fn visit_bind(&mut self, _: QuantifierKind, var: &mut String, body: &mut Formula) -> Flow<()> {
        if *var == self.old {
            return Continue(());
        }

        self.visit_formula(body)
    }
}

#[derive(Default)]
struct CollectVariables<'a> {
    names: List<&'a str>,
    seen: HashSet<&'a str>,
}

impl<'a> TreeVisitor<'a> for CollectVariables<'a> {
    type Output = List<&'a str>;

    fn reset(&mut self) {
        self.names.clear();
        self.seen.clear();
    }

    fn first_visit(&mut self, path: &[&'a Formula]) -> Step {
        if let Some(&Formula::Literal(ref lit)) = path.last().copied() {
            if self.seen.insert(&lit.var) {
                self.names.push(&lit.var);
            }
        }

        Step::Continue
    }

    fn result(&mut self) -> Self::Output {
        mem::take(&mut self.names)
    }
}
