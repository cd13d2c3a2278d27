//! Type constructors that a sequence can be applied to.
//!
//! A constructor is a marker type implementing [`TyCtor`] once per argument
//! list shape it accepts. Anything else fails to resolve, which is how arity
//! and kind mismatches are rejected:
//!
//! ```compile_fail
//! use beautiful_types::{Applied, PtrCtor, tylist};
//!
//! // A pointer takes exactly one pointee.
//! type Bad = Applied<tylist![u8, u16], PtrCtor>;
//! let _: Option<Bad> = None;
//! ```

use core::marker::PhantomData;

use crate::list::{Cons, Nil, TyList};
use crate::qualify::{Const, Volatile};

/// A type-level function from the argument list `Args` to `Self::Output`.
pub trait TyCtor<Args: TyList> {
    type Output: ?Sized;
}

/// `[T]` to `*mut T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PtrCtor;

impl<T: ?Sized> TyCtor<Cons<T, Nil>> for PtrCtor {
    type Output = *mut T;
}

/// `[T]` to `&'a T`.
pub struct RefCtor<'a>(PhantomData<&'a ()>);

impl<'a, T: ?Sized + 'a> TyCtor<Cons<T, Nil>> for RefCtor<'a> {
    type Output = &'a T;
}

/// `[T]` to [`Const<T>`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ConstCtor;

impl<T> TyCtor<Cons<T, Nil>> for ConstCtor {
    type Output = Const<T>;
}

/// `[T]` to [`Volatile<T>`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct VolatileCtor;

impl<T> TyCtor<Cons<T, Nil>> for VolatileCtor {
    type Output = Volatile<T>;
}

/// A compile-time array dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dim<const N: usize>;

/// Dimension list to array of `T`, outermost dimension first.
///
/// The empty dimension list yields the unknown-bound array `[T]`.
pub struct ArrayCtor<T>(PhantomData<fn() -> T>);

impl<T> TyCtor<Nil> for ArrayCtor<T> {
    type Output = [T];
}

impl<T, const N: usize> TyCtor<Cons<Dim<N>, Nil>> for ArrayCtor<T> {
    type Output = [T; N];
}

impl<T, const N: usize, const M: usize, Rest> TyCtor<Cons<Dim<N>, Cons<Dim<M>, Rest>>>
    for ArrayCtor<T>
where
    Rest: TyList,
    ArrayCtor<T>: TyCtor<Cons<Dim<M>, Rest>>,
    <ArrayCtor<T> as TyCtor<Cons<Dim<M>, Rest>>>::Output: Sized,
{
    type Output = [<ArrayCtor<T> as TyCtor<Cons<Dim<M>, Rest>>>::Output; N];
}

/// Return-type-first signature list `[R, P1..Pm]` to `dyn Fn(P1..Pm) -> R`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FnCtor;

/// Maps a function type to the native pointer that calls it.
///
/// Implemented for every `dyn Fn(P..) -> R` that [`FnCtor`] can produce.
pub trait FnPointee {
    type Pointer;
}

macro_rules! impl_fn_ctor {
    ($($param:ident)*) => {
        impl<R, $($param,)*> TyCtor<$crate::tylist![R $(, $param)*]> for FnCtor {
            type Output = dyn Fn($($param),*) -> R;
        }

        impl<R, $($param,)*> FnPointee for dyn Fn($($param),*) -> R {
            type Pointer = fn($($param),*) -> R;
        }
    };
}

impl_fn_ctor!();
impl_fn_ctor!(P1);
impl_fn_ctor!(P1 P2);
impl_fn_ctor!(P1 P2 P3);
impl_fn_ctor!(P1 P2 P3 P4);
impl_fn_ctor!(P1 P2 P3 P4 P5);
impl_fn_ctor!(P1 P2 P3 P4 P5 P6);
impl_fn_ctor!(P1 P2 P3 P4 P5 P6 P7);
impl_fn_ctor!(P1 P2 P3 P4 P5 P6 P7 P8);
impl_fn_ctor!(P1 P2 P3 P4 P5 P6 P7 P8 P9);
impl_fn_ctor!(P1 P2 P3 P4 P5 P6 P7 P8 P9 P10);
impl_fn_ctor!(P1 P2 P3 P4 P5 P6 P7 P8 P9 P10 P11);
impl_fn_ctor!(P1 P2 P3 P4 P5 P6 P7 P8 P9 P10 P11 P12);
