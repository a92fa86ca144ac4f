#[allow(unused_imports)]
use std::ops::ControlFlow::{self as Flow, Break, Continue};
use std::mem;

use itertools::Itertools;

use crate::traverse::{rewrite, RewriteVisitor, Step};
use crate::Formula;

impl Formula {
    /// Rewrites a connective to remove boolean constants.
    ///
    /// Applies the following identities:
    ///
    /// - ¬⊥ → ⊤
    /// - ¬⊤ → ⊥
    /// - ⊥ ∨ P → P
    /// - ⊤ ∧ P → P
    /// - ⊤ ∨ P → ⊤
    /// - ⊥ ∧ P → ⊥
    ///
    /// An empty connective is left alone.
    pub fn simplify_trivial_connective(&mut self) {
        let (l, short_circ) = match self {
            Formula::Not(inner) => {
                if let Formula::Trivial(sat) = **inner {
                    *self = (!sat).into();
                }
                return;
            }

            Formula::Or(l) => (l, true),
            Formula::And(l) => (l, false),

            _ => return,
        };

        // (⊥ ∨ P → P) ∧ (⊤ ∧ P → P)
        l.retain(|f| !matches!(f, Formula::Trivial(sat) if *sat != short_circ));

        // (⊤ ∨ P → ⊤) ∧ (⊥ ∧ P → ⊥)
        if l.iter()
            .any(|f| matches!(f, Formula::Trivial(sat) if *sat == short_circ))
        {
            *self = short_circ.into();
        }
    }

    /// Splices the children of nested connectives of the same kind into this one.
    ///
    /// ((a ∨ b) ∨ c) → (a ∨ b ∨ c)
    pub fn flatten_connective(&mut self) {
        let kind = self.kind();
        if !(self.is_and() || self.is_or()) {
            return;
        }

        self.replace_children_with_list(|child| child.operands_mut(kind).map(mem::take));
    }

    /// Removes children that are structurally equal to an earlier sibling.
    ///
    /// Only exact repeats are removed: `a ∨ b` and `b ∨ a` are distinct children.
    pub fn remove_duplicate_children(&mut self) {
        if let Formula::And(l) | Formula::Or(l) = self {
            if l.len() > 1 {
                *l = mem::take(l).into_iter().unique().collect();
            }
        }
    }

    /// Replaces a connective with a single child by that child.
    pub fn collapse_singleton_connective(&mut self) {
        if let Formula::And(l) | Formula::Or(l) = self {
            if l.len() == 1 {
                if let Some(form) = l.pop() {
                    *self = form;
                }
            }
        }
    }

    /// Returns `true` if this formula contains a literal false or true as part of a connective.
    #[cfg(test)]
    pub(crate) fn has_trivial_connectives(&self) -> bool {
        self.visit_with_pre(|form| match form {
            Formula::Or(l) | Formula::And(l) if l.iter().any(Formula::is_trivial) => Break(()),
            Formula::Not(inner) if inner.is_trivial() => Break(()),

            _ => Continue(()),
        })
        .is_break()
    }

    /// Removes constants from connectives, flattens nested connectives, drops repeated children
    /// and collapses singleton connectives, bottom-up.
    ///
    /// Does not look for complementary literals: `p ∧ ¬p` stays as it is.
    pub fn simplify(&mut self) {
        rewrite(self, &mut Simplifier);
    }
}

struct Simplifier;

impl RewriteVisitor for Simplifier {
    type Output = ();

    fn last_visit(&mut self, form: &mut Formula, _depth: usize) -> Step {
        // NOTE: Order matters.
        form.simplify_trivial_connective();
        form.flatten_connective();
        form.remove_duplicate_children();
        form.collapse_singleton_connective();

        Step::Continue
    }

    fn result(&mut self) {}
}
