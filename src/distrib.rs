use std::mem;

use contracts::*;
use itertools::Itertools;
use tracing::debug;

use crate::traverse::{rewrite, RewriteVisitor, Step};
use crate::{Formula, Kind, List, Result};

/// The distributive expansion would have generated more literals than allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LimitExceeded;

impl Formula {
    /// Converts to conjunctive normal form by distributing `∨` over `∧`.
    ///
    /// The result is logically equivalent to `self`, but can be exponentially larger.
    pub fn conjunctive_normal_form(mut self) -> Result<Self> {
        self.make_negation_normal_form()?;
        self.simplify();
        let _ = self.make_distributive_normal_form(Kind::And, usize::MAX);
        self.simplify();
        Ok(self)
    }

    /// Converts to disjunctive normal form by distributing `∧` over `∨`.
    pub fn disjunctive_normal_form(mut self) -> Result<Self> {
        self.make_negation_normal_form()?;
        self.simplify();
        let _ = self.make_distributive_normal_form(Kind::Or, usize::MAX);
        self.simplify();
        Ok(self)
    }

    /// Expands a formula in negation normal form into a connective of kind `outer` over
    /// connectives of the dual kind.
    ///
    /// Gives up as soon as the clauses generated so far hold more than `limit` literals in total.
    /// `self` is left half-expanded in that case.
    #[debug_requires(self.is_negation_normal_form())]
    pub(crate) fn make_distributive_normal_form(
        &mut self,
        outer: Kind,
        limit: usize,
    ) -> Result<(), LimitExceeded> {
        rewrite(
            self,
            &mut DistributiveExpander {
                outer,
                limit,
                generated: 0,
                exceeded: false,
            },
        )
    }
}

struct DistributiveExpander {
    outer: Kind,
    limit: usize,
    // Literals in all clauses generated during this rewrite.
    generated: usize,
    exceeded: bool,
}

impl DistributiveExpander {
    /// Distributes `form`, an inner connective, over its children of the outer kind.
    ///
    /// For CNF: (a ∧ b) ∨ c → (c ∨ b) ∧ (c ∨ a)
    fn expand(&mut self, form: &mut Formula) -> Step {
        let (outer, inner) = (self.outer, self.outer.dual());

        let list = match form.operands_mut(inner) {
            Some(list) if list.iter().any(|f| f.kind() == outer) => mem::take(list),
            _ => return Step::Continue,
        };

        // Each child of the outer kind contributes one of its operands to every new clause. All
        // other children appear in every clause.
        let mut groups: List<List<Formula>> = vec![];
        let mut fixed: List<Formula> = vec![];
        for child in list {
            let kind = child.kind();
            match child {
                Formula::And(l) | Formula::Or(l) if kind == outer => groups.push(l),
                child => push_operand(&mut fixed, child, inner),
            }
        }

        let mut clauses = vec![];
        let mut stack = vec![(0, fixed)];
        while let Some((i, clause)) = stack.pop() {
            let Some(choices) = groups.get(i) else {
                self.generated = self.generated.saturating_add(clause.len());
                if self.generated > self.limit {
                    debug!(limit = self.limit, "distributive expansion exceeded literal limit");
                    self.exceeded = true;
                    return Step::SkipAll;
                }

                clauses.push(Formula::connective(inner, clause.into_iter().unique().collect()));
                continue;
            };

            for choice in choices {
                let mut next = clause.clone();
                push_operand(&mut next, choice.clone(), inner);
                stack.push((i + 1, next));
            }
        }

        *form = Formula::connective(outer, clauses);
        Step::Continue
    }
}

/// Pushes `form` onto `clause`, splicing it in if it is itself a connective of kind `inner`.
fn push_operand(clause: &mut List<Formula>, form: Formula, inner: Kind) {
    let kind = form.kind();
    match form {
        Formula::And(l) | Formula::Or(l) if kind == inner => clause.extend(l),
        form => clause.push(form),
    }
}

impl RewriteVisitor for DistributiveExpander {
    type Output = Result<(), LimitExceeded>;

    fn reset(&mut self) {
        self.generated = 0;
        self.exceeded = false;
    }

    fn last_visit(&mut self, form: &mut Formula, _depth: usize) -> Step {
        form.flatten_connective();
        self.expand(form)
    }

    fn result(&mut self) -> Self::Output {
        if self.exceeded {
            Err(LimitExceeded)
        } else {
            Ok(())
        }
    }
}
