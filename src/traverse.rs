//! Depth-first traversal with pre- and post-order callbacks that can steer the walk.
//!
//! [`traverse`] walks a shared tree and hands each callback the path from the root to the current
//! node. [`rewrite`] walks an exclusively borrowed tree; its `last_visit` gets the current node by
//! `&mut`, so a pass can replace any node, the root included, by assigning to it.

use crate::Formula;

/// What a traversal should do after a callback returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Descend into the children, or move on to the next node.
    Continue,
    /// Do not descend into the children of this node. Its `last_visit` still runs.
    SkipChildren,
    /// Do not visit the remaining siblings of this node.
    SkipSiblings,
    /// Abort the traversal immediately.
    SkipAll,
}

/// A read-only visitor driven by [`traverse`].
pub trait TreeVisitor<'a> {
    type Output;

    /// Clears per-run state. Called once at the start of every traversal.
    fn reset(&mut self) {}

    /// Called before the children of `path.last()` are visited.
    fn first_visit(&mut self, _path: &[&'a Formula]) -> Step {
        Step::Continue
    }

    /// Called after the children of `path.last()` were visited.
    fn last_visit(&mut self, _path: &[&'a Formula]) -> Step {
        Step::Continue
    }

    fn result(&mut self) -> Self::Output;
}

struct Frame<'a> {
    node: &'a Formula,
    // `None` until `first_visit` ran for `node`.
    pending: Option<std::vec::IntoIter<&'a Formula>>,
}

fn skip_rest(stack: &mut [Frame<'_>]) {
    if let Some(parent) = stack.last_mut() {
        parent.pending = Some(Vec::new().into_iter());
    }
}

/// Walks `root` depth-first, children in order, without recursing on the call stack.
pub fn traverse<'a, V: TreeVisitor<'a>>(root: &'a Formula, visitor: &mut V) -> V::Output {
    visitor.reset();

    let mut path: Vec<&'a Formula> = Vec::new();
    let mut stack = vec![Frame {
        node: root,
        pending: None,
    }];

    while let Some(top) = stack.len().checked_sub(1) {
        if stack[top].pending.is_none() {
            let node = stack[top].node;
            path.push(node);

            let children = match visitor.first_visit(&path) {
                Step::Continue => node.children(),
                Step::SkipChildren => Vec::new(),
                Step::SkipSiblings => {
                    skip_rest(&mut stack[..top]);
                    Vec::new()
                }
                Step::SkipAll => return visitor.result(),
            };

            stack[top].pending = Some(children.into_iter());
        }

        let next = stack[top].pending.as_mut().and_then(Iterator::next);
        match next {
            Some(child) => stack.push(Frame {
                node: child,
                pending: None,
            }),

            None => {
                let step = visitor.last_visit(&path);
                path.pop();
                stack.pop();

                match step {
                    Step::SkipAll => return visitor.result(),
                    Step::SkipSiblings => skip_rest(&mut stack),
                    Step::Continue | Step::SkipChildren => {}
                }
            }
        }
    }

    visitor.result()
}

/// A rewriting visitor driven by [`rewrite`].
///
/// `depth` is 0 for the root.
pub trait RewriteVisitor {
    type Output;

    fn reset(&mut self) {}

    fn first_visit(&mut self, _form: &Formula, _depth: usize) -> Step {
        Step::Continue
    }

    /// Called once the children of `form` are final. May replace `form` entirely.
    fn last_visit(&mut self, _form: &mut Formula, _depth: usize) -> Step {
        Step::Continue
    }

    fn result(&mut self) -> Self::Output;
}

/// Rewrites `root` in place, bottom-up.
pub fn rewrite<V: RewriteVisitor>(root: &mut Formula, visitor: &mut V) -> V::Output {
    visitor.reset();
    rewrite_(root, 0, visitor);
    visitor.result()
}

fn rewrite_<V: RewriteVisitor>(form: &mut Formula, depth: usize, visitor: &mut V) -> Step {
    let first = visitor.first_visit(form, depth);
    match first {
        Step::SkipAll => return Step::SkipAll,
        Step::SkipChildren | Step::SkipSiblings => {}
        Step::Continue => {
            for child in form.children_mut() {
                match rewrite_(child, depth + 1, visitor) {
                    Step::SkipAll => return Step::SkipAll,
                    Step::SkipSiblings => break,
                    Step::Continue | Step::SkipChildren => {}
                }
            }
        }
    }

    match visitor.last_visit(form, depth) {
        Step::SkipAll => Step::SkipAll,
        _ if first == Step::SkipSiblings => Step::SkipSiblings,
        step => step,
    }
}
