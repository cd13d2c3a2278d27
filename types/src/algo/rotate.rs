//! Rotate the last element of a sequence to the front.
//!
//! Natural-order signatures list the return type last, while [`FnCtor`]
//! wants it first. [`RotateLastToFront`] bridges the two:
//! `[x1, .., xn]` becomes `[xn, x1, .., x(n-1)]`.
//!
//! The empty sequence has no last element and does not rotate:
//!
//! ```compile_fail
//! use beautiful_types::{Nil, Rotated};
//!
//! let _: Option<Rotated<Nil>> = None;
//! ```
//!
//! [`FnCtor`]: crate::FnCtor

use crate::list::{Cons, Nil, PushBack, PushFront, TyList};

/// Moves the final element of `Self` onto the front of `Acc`.
///
/// Every element before the final one is appended to `Acc` on the way down,
/// so for `Acc = Nil` the result is the rotated sequence.
pub trait LastAsFirst<Acc: TyList> {
    type Output: TyList;
}

impl<Acc, X> LastAsFirst<Acc> for Cons<X, Nil>
where
    Acc: PushFront<X>,
{
    type Output = <Acc as PushFront<X>>::Output;
}

impl<Acc, X, Y, Ys> LastAsFirst<Acc> for Cons<X, Cons<Y, Ys>>
where
    Acc: PushBack<X>,
    Cons<Y, Ys>: LastAsFirst<<Acc as PushBack<X>>::Output>,
{
    type Output = <Cons<Y, Ys> as LastAsFirst<<Acc as PushBack<X>>::Output>>::Output;
}

/// `[x1, .., xn]` to `[xn, x1, .., x(n-1)]`, for `n >= 1`.
pub trait RotateLastToFront: TyList {
    type Output: TyList;
}

impl<L> RotateLastToFront for L
where
    L: TyList + LastAsFirst<Nil>,
{
    type Output = <L as LastAsFirst<Nil>>::Output;
}

/// `L` with its last element moved to the front.
pub type Rotated<L> = <L as RotateLastToFront>::Output;
