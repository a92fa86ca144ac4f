//! Structural recognition of normal forms.

use std::mem;

use contracts::*;

use crate::traverse::{traverse, Step, TreeVisitor};
use crate::{Formula, Kind, NormalForm};

/// The result of classifying a formula against a normal form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    /// In the normal form, possibly with degenerate, shallower nesting.
    pub normal: bool,
    /// In the strict three-level clausal shape.
    pub clausal: bool,
}

impl Formula {
    pub fn classify(&self, form: NormalForm) -> Classification {
        match form.outer() {
            Some(outer) => traverse(self, &mut Classifier::new(outer)),
            None => {
                let normal = self.is_negation_normal_form();
                Classification {
                    normal,
                    clausal: normal,
                }
            }
        }
    }

    /// Wraps the degenerate parts of a normal form so that every clause sits at depth two below a
    /// root of kind `outer`.
    ///
    /// For CNF: `a` → `∧(∨(a))`, `a ∨ b` → `∧(a ∨ b)`, `a ∧ (b ∨ c)` → `∨(a) ∧ (b ∨ c)`.
    #[debug_requires(outer == Kind::And || outer == Kind::Or)]
    #[debug_ensures(traverse(self, &mut Classifier::new(outer)).clausal)]
    pub(crate) fn make_clausal(&mut self, outer: Kind) {
        let inner = outer.dual();
        let wrap = |form: Formula| {
            if form.kind() == inner {
                form
            } else {
                Formula::connective(inner, vec![form])
            }
        };

        *self = match self.take() {
            form if form.kind() == inner => Formula::connective(outer, vec![form]),
            mut form => match form.operands_mut(outer) {
                Some(list) => {
                    let list = mem::take(list).into_iter().map(wrap).collect();
                    Formula::connective(outer, list)
                }
                None => Formula::connective(outer, vec![wrap(form)]),
            },
        };
    }
}

/// Checks a formula against the shape `outer(inner(leaf…)…)`.
///
/// Leaves are literals and constants. A leaf or an `inner` connective may also stand on its own
/// where a level is missing; that keeps `normal` but clears `clausal`.
struct Classifier {
    outer: Kind,
    normal: bool,
    clausal: bool,
}

impl Classifier {
    fn new(outer: Kind) -> Self {
        Classifier {
            outer,
            normal: true,
            clausal: true,
        }
    }

    fn reject(&mut self) -> Step {
        self.normal = false;
        self.clausal = false;
        Step::SkipAll
    }
}

impl<'a> TreeVisitor<'a> for Classifier {
    type Output = Classification;

    fn reset(&mut self) {
        self.normal = true;
        self.clausal = true;
    }

    fn first_visit(&mut self, path: &[&'a Formula]) -> Step {
        let (outer, inner) = (self.outer, self.outer.dual());
        let kind = match path.last() {
            Some(form) => form.kind(),
            None => return Step::SkipAll,
        };
        let leaf = matches!(kind, Kind::Literal | Kind::Trivial);

        match path.len() {
            1 if kind == outer => Step::Continue,
            1 if leaf || kind == inner => {
                self.clausal = false;
                Step::Continue
            }

            2 if path[0].kind() == outer && kind == inner => Step::Continue,
            2 if path[0].kind() == outer && leaf => {
                self.clausal = false;
                Step::Continue
            }
            2 if leaf => Step::Continue,

            3 if leaf => Step::Continue,

            _ => self.reject(),
        }
    }

    fn result(&mut self) -> Self::Output {
        Classification {
            normal: self.normal,
            clausal: self.clausal,
        }
    }
}
