use std::ops::ControlFlow::{Break, Continue};

use tracing::trace;

use crate::traverse::{rewrite, RewriteVisitor, Step};
use crate::{short::*, Error, Formula, Result};

impl Formula {
    pub fn negation_normal_form(mut self) -> Result<Self> {
        self.make_negation_normal_form()?;
        Ok(self)
    }

    /// Eliminates `→` and `↔`, then pushes every negation down onto the literals.
    ///
    /// Fails on quantifiers and comparisons. On failure `self` may be partially rewritten.
    pub fn make_negation_normal_form(&mut self) -> Result<()> {
        rewrite(self, &mut PolarityNormalizer::default())
    }

    /// Negates a formula that is already in negation normal form, keeping it in negation normal
    /// form.
    pub fn negated(self) -> Self {
        match self {
            Self::Trivial(sat) => Self::Trivial(!sat),
            Self::Literal(lit) => Self::Literal(lit.negated()),
            Self::Not(form) => *form,

            // ¬(a ∧ b) → ¬a ∨ ¬b
            Self::And(list) => Self::Or(list.into_iter().map(Formula::negated).collect()),
            // ¬(a ∨ b) → ¬a ∧ ¬b
            Self::Or(list) => Self::And(list.into_iter().map(Formula::negated).collect()),

            form => not(form),
        }
    }

    /// Returns `true` if this formula is in negation normal form, i.e. if it has only atomic
    /// formulas inside a `Not` and no `→` or `↔`.
    pub fn is_negation_normal_form(&self) -> bool {
        let inside_negation = false;
        self.visit_with_stateful(inside_negation, |form, &in_neg| {
            if in_neg && !form.is_atomic() {
                return Break(());
            }

            match form {
                Formula::Implies(..) | Formula::BiImplies(..) => Break(()),
                Formula::Bind(..) | Formula::Compare(..) => Break(()),
                _ => Continue(form.is_not()),
            }
        })
        .is_continue()
    }
}

#[derive(Default)]
struct PolarityNormalizer {
    failure: Option<Error>,
}

impl RewriteVisitor for PolarityNormalizer {
    type Output = Result<()>;

    fn reset(&mut self) {
        self.failure = None;
    }

    fn first_visit(&mut self, form: &Formula, _depth: usize) -> Step {
        match form {
            Formula::Bind(..) | Formula::Compare(..) => {
                self.failure = Some(Error::unsupported(form));
                Step::SkipAll
            }

            _ => Step::Continue,
        }
    }

    fn last_visit(&mut self, form: &mut Formula, _depth: usize) -> Step {
        // Children are already in NNF here, so `negated` only has to flip them.
        let new = match form {
            // a → b ≡ ¬a ∨ b
            Formula::Implies(a, b) => or(a.take().negated(), b.take()),

            // a ↔ b ≡ (¬a ∨ b) ∧ (¬b ∨ a)
            Formula::BiImplies(a, b) => {
                let (a, b) = (a.take(), b.take());
                and(or(a.clone().negated(), b.clone()), or(b.negated(), a))
            }

            Formula::Not(inner) => inner.take().negated(),

            _ => return Step::Continue,
        };

        trace!(result = %new, "normalized polarity");
        *form = new;
        Step::Continue
    }

    fn result(&mut self) -> Self::Output {
        self.failure.take().map_or(Ok(()), Err)
    }
}
