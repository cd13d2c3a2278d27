//! Type-level sequences.
//!
//! A sequence is built from [`Nil`] and [`Cons`], both zero-sized markers that
//! only exist during type checking. Sequences grow at either end and are
//! consumed once by [`Apply`]; there is no way to index into or shrink one.
//!
//! ```
//! use beautiful_types::{Append, Cons, Nil, Prepend, TyList, tylist};
//! use static_assertions::assert_type_eq_all;
//!
//! type Xs = tylist![u8, u16];
//!
//! assert_type_eq_all!(Xs, Cons<u8, Cons<u16, Nil>>);
//! assert_type_eq_all!(Prepend<Xs, bool>, tylist![bool, u8, u16]);
//! assert_type_eq_all!(Append<Xs, bool>, tylist![u8, u16, bool]);
//! assert_eq!(<Append<Xs, bool> as TyList>::LEN, 3);
//! ```

use core::marker::PhantomData;

use crate::ctor::TyCtor;

/// The empty sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Nil;

/// A sequence with head `H` followed by the sequence `T`.
///
/// `H` may be unsized (e.g. `[u8]` or `dyn Fn()`): the marker never holds a
/// value of it.
pub struct Cons<H: ?Sized, T>(PhantomData<fn() -> (PhantomData<H>, T)>);

/// Implemented by every well-formed sequence.
pub trait TyList {
    /// Number of tokens in the sequence.
    const LEN: usize;
}

impl TyList for Nil {
    const LEN: usize = 0;
}

impl<H: ?Sized, T: TyList> TyList for Cons<H, T> {
    const LEN: usize = T::LEN + 1;
}

/// Prepend `X` to a sequence.
pub trait PushFront<X: ?Sized>: TyList {
    type Output: TyList;
}

impl<L: TyList, X: ?Sized> PushFront<X> for L {
    type Output = Cons<X, L>;
}

/// Append `X` to a sequence.
pub trait PushBack<X: ?Sized>: TyList {
    type Output: TyList;
}

impl<X: ?Sized> PushBack<X> for Nil {
    type Output = Cons<X, Nil>;
}

impl<H: ?Sized, T: PushBack<X>, X: ?Sized> PushBack<X> for Cons<H, T> {
    type Output = Cons<H, <T as PushBack<X>>::Output>;
}

/// Feed the whole sequence, in order, to the constructor `F`.
///
/// Whether this resolves is up to `F`: a constructor only implements
/// [`TyCtor`] for the argument lists it accepts.
pub trait Apply<F>: TyList {
    type Output: ?Sized;
}

impl<L: TyList, F: TyCtor<L>> Apply<F> for L {
    type Output = <F as TyCtor<L>>::Output;
}

/// `L` with `X` in front.
pub type Prepend<L, X> = <L as PushFront<X>>::Output;

/// `L` with `X` at the back.
pub type Append<L, X> = <L as PushBack<X>>::Output;

/// The type produced by applying `L` to the constructor `F`.
pub type Applied<L, F> = <L as Apply<F>>::Output;
