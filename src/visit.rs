//! Recursive iteration over `Formula`s using the visitor pattern.
//!
//! These visitors short-circuit through `ControlFlow` and are meant for queries. Passes that
//! rewrite the tree use [`crate::traverse`] instead.

#[allow(unused_imports)]
use std::ops::ControlFlow::{self as Flow, Break, Continue};

use paste::paste;

use crate::term::{CompareOp, Term};
use crate::{Formula, Literal, QuantifierKind};

macro_rules! make_visitor {
    ([$($mt:tt)?]) => {
        paste! {
            make_visitor!(
                [<Visit $($mt:camel)?>]
                [<AnonFormVisitor $($mt:camel)?>]
                [<NoOp $($mt:camel)?>]
                [<no_op $(_ $mt)?>]
                [$($mt)?]
            );
        }
    };

    ($Visit:ident $Anon:ident $NoOp:ident $no_op:ident [$($mt:tt)?]) => {
        /// Hooks are called in pre-order. Overriding a hook replaces the descent below it; call
        /// `super_formula` to keep it.
        pub trait $Visit {
            type Break;

            fn visit_formula(&mut self, form: & $($mt)? Formula) -> Flow<Self::Break> {
                self.super_formula(form)
            }

            fn visit_literal(&mut self, _lit: & $($mt)? Literal) -> Flow<Self::Break> {
                Continue(())
            }

            fn visit_compare(
                &mut self,
                _op: CompareOp,
                _left: & $($mt)? Term,
                _right: & $($mt)? Term,
            ) -> Flow<Self::Break> {
                Continue(())
            }

            fn visit_bind(
                &mut self,
                _kind: QuantifierKind,
                _var: & $($mt)? String,
                body: & $($mt)? Formula,
            ) -> Flow<Self::Break> {
                self.visit_formula(body)
            }

            fn super_formula(&mut self, form: & $($mt)? Formula) -> Flow<Self::Break> {
                match form {
                    Formula::Trivial(_) => Continue(()),
                    Formula::Literal(lit) => self.visit_literal(lit),
                    Formula::Compare(op, left, right) => self.visit_compare(*op, left, right),
                    Formula::Bind(kind, var, body) => self.visit_bind(*kind, var, body),

                    Formula::Not(form) => self.visit_formula(form),

                    Formula::Implies(a, b) | Formula::BiImplies(a, b) => {
                        self.visit_formula(a)?;
                        self.visit_formula(b)
                    }

                    Formula::And(list) | Formula::Or(list) => {
                        for form in list {
                            self.visit_formula(form)?;
                        }

                        Continue(())
                    }
                }
            }
        }

        type $NoOp<R, S> = fn(& $($mt)? Formula, &mut S) -> Flow<R>;
        fn $no_op<R, S>(_: & $($mt)? Formula, _: &mut S) -> Flow<R> { Continue(()) }

        /// An anonymous `Formula` visitor built from a pre-order and a post-order closure, which
        /// share `state`.
        pub struct $Anon<A, B, S = ()> {
            pub pre: A,
            pub post: B,
            pub state: S,
        }

        impl<F, R> $Anon<F, $NoOp<R, ()>>
            where F: FnMut(& $($mt)? Formula, &mut ()) -> Flow<R>
        {
            pub fn pre(pre: F) -> Self {
                Self { pre, post: $no_op, state: () }
            }
        }

        impl<R, A, B, S> $Visit for $Anon<A, B, S>
            where A: FnMut(& $($mt)? Formula, &mut S) -> Flow<R>,
                  B: FnMut(& $($mt)? Formula, &mut S) -> Flow<R>,
        {
            type Break = R;

            fn visit_formula(&mut self, form: & $($mt)? Formula) -> Flow<Self::Break> {
                (self.pre)(form, &mut self.state)?;
                self.super_formula(form)?;
                (self.post)(form, &mut self.state)
            }
        }
    };
}

make_visitor!([]);
make_visitor!([mut]);
