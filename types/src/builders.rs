//! Composite-type builders.
//!
//! Each builder is a type alias over [`Applied`], so it resolves entirely
//! during type checking:
//!
//! | Builder | Resolves to |
//! |---------|-------------|
//! | `Ptr<T>` | `*mut T` |
//! | `Ref<'a, T>` | `&'a T` |
//! | `Cnst<T>` | [`Const<T>`] |
//! | `Vltl<T>` | [`Volatile<T>`] |
//! | `Array<T, tylist![Dim<3>, Dim<5>]>` | `[[T; 5]; 3]` |
//! | `Array<T, Nil>` | `[T]` |
//! | `LFun<tylist![R, P1, P2]>` | `dyn Fn(P1, P2) -> R` |
//! | `Fun<tylist![P1, P2, R]>` | `dyn Fn(P1, P2) -> R` |
//! | `PLFun<tylist![R, P1, P2]>` | `fn(P1, P2) -> R` |
//! | `PFun<tylist![P1, P2, R]>` | `fn(P1, P2) -> R` |
//!
//! A natural-order builder needs at least the return type:
//!
//! ```compile_fail
//! use beautiful_types::{Fun, Nil};
//!
//! fn takes(_: &Fun<Nil>) {}
//! ```
//!
//! [`Const<T>`]: crate::Const
//! [`Volatile<T>`]: crate::Volatile

use crate::algo::Rotated;
use crate::ctor::{ArrayCtor, ConstCtor, FnCtor, FnPointee, PtrCtor, RefCtor, VolatileCtor};
use crate::list::{Applied, Cons, Nil};

/// Pointer to `T`.
pub type Ptr<T> = Applied<Cons<T, Nil>, PtrCtor>;

/// Shared reference to `T`.
pub type Ref<'a, T> = Applied<Cons<T, Nil>, RefCtor<'a>>;

/// Const-qualified `T`.
pub type Cnst<T> = Applied<Cons<T, Nil>, ConstCtor>;

/// Volatile-qualified `T`.
pub type Vltl<T> = Applied<Cons<T, Nil>, VolatileCtor>;

/// Array of `T` with the dimensions in `Dims`, outermost first.
pub type Array<T, Dims> = Applied<Dims, ArrayCtor<T>>;

/// Function type from a return-type-first list.
pub type LFun<L> = Applied<L, FnCtor>;

/// Function type from a return-type-last list.
pub type Fun<L> = LFun<Rotated<L>>;

/// Pointer to a function type built from a return-type-first list.
pub type PLFun<L> = FnPtr<LFun<L>>;

/// Pointer to a function type built from a return-type-last list.
pub type PFun<L> = FnPtr<Fun<L>>;

/// Pointer to the function type `F`.
///
/// Unlike [`Ptr`], which would give `*mut dyn Fn(..)`, this is the native
/// `fn(..)` pointer that can hold a plain function item.
pub type FnPtr<F> = <F as FnPointee>::Pointer;
