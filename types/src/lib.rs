//! Composite types spelled left to right, resolved at compile time.
//!
//! The crate is a small type-level engine: sequences of types ([`Nil`],
//! [`Cons`]) that grow at either end and are applied once to a constructor
//! ([`TyCtor`]), plus the [`RotateLastToFront`] reordering that lets function
//! types list their return type last. Builders such as [`Ptr`], [`Array`] and
//! [`Fun`] are type aliases over that engine; nothing here exists at runtime
//! except the [`Const`] and [`Volatile`] wrappers.
//!
//! # Example
//!
//! ```
//! use beautiful_types::all::*;
//! use static_assertions::assert_type_eq_all;
//!
//! // Parameters first, return type last.
//! type Handler = pfun![i32, i32];
//! assert_type_eq_all!(Handler, fn(i32) -> i32);
//!
//! assert_type_eq_all!(Ptr<i32>, *mut i32);
//! assert_type_eq_all!(array![i32; 5], [i32; 5]);
//!
//! fn twice(x: i32) -> i32 {
//!     2 * x
//! }
//! let f: Handler = twice;
//! assert_eq!(f(21), 42);
//! ```

#![no_std]

pub mod algo;
mod builders;
mod ctor;
mod list;
mod macros;
mod qualify;
pub mod shorthand;

pub use algo::{LastAsFirst, RotateLastToFront, Rotated};
pub use builders::{Array, Cnst, FnPtr, Fun, LFun, PFun, PLFun, Ptr, Ref, Vltl};
pub use ctor::{ArrayCtor, ConstCtor, Dim, FnCtor, FnPointee, PtrCtor, RefCtor, TyCtor, VolatileCtor};
pub use list::{Append, Applied, Apply, Cons, Nil, Prepend, PushBack, PushFront, TyList};
pub use qualify::{Const, Volatile};
pub use shorthand::all;
