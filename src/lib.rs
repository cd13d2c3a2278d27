//! Beautiful - readable shorthand for composite types
//!
//! # Overview
//!
//! Spelling out a pointer to a function returning an array of pointers is
//! hard to read and easy to get wrong. Beautiful builds such types from
//! small builders applied left to right instead:
//!
//! | Builder              | Resolves to               |
//! |----------------------|---------------------------|
//! | `Ptr<T>`             | `*mut T`                  |
//! | `Ref<'a, T>`         | `&'a T`                   |
//! | `Cnst<T>`            | [`Const<T>`]              |
//! | `Vltl<T>`            | [`Volatile<T>`]           |
//! | `array![T; 3, 5]`    | `[[T; 5]; 3]`             |
//! | `array![T]`          | `[T]`                     |
//! | `lfun![R, P1, P2]`   | `dyn Fn(P1, P2) -> R`     |
//! | `fun![P1, P2, R]`    | `dyn Fn(P1, P2) -> R`     |
//! | `plfun![R, P1, P2]`  | `fn(P1, P2) -> R`         |
//! | `pfun![P1, P2, R]`   | `fn(P1, P2) -> R`         |
//!
//! # Quick Start
//!
//! ```
//! use beautiful::all::*;
//!
//! fn map<T: Copy, const N: usize>(f: pfun![T, T], items: &mut array![T; N]) {
//!     for item in items.iter_mut() {
//!         *item = f(*item);
//!     }
//! }
//!
//! fn twice(x: i32) -> i32 {
//!     2 * x
//! }
//!
//! let mut items = [1, 2, 3];
//! map::<i32, 3>(twice, &mut items);
//! assert_eq!(items, [2, 4, 6]);
//! ```
//!
//! # Declaration files
//!
//! With the default `decl` feature the same shorthand can be written as text
//! and expanded into Rust source, which is what the `beautiful` command-line
//! tool does:
//!
//! ```
//! use beautiful::decl::{GenOptions, expand};
//!
//! let ty = expand("pfun<ref<str>, usize>", &GenOptions::default()).unwrap();
//! assert_eq!(ty, "fn(&str) -> usize");
//! ```

#![cfg_attr(not(feature = "decl"), no_std)]

pub use beautiful_types::*;

#[cfg(feature = "decl")]
pub use beautiful_decl as decl;

#[cfg(feature = "decl")]
mod error_renderer;

#[cfg(feature = "decl")]
pub use error_renderer::{CharSet, RenderConfig, error_code, render_error, render_error_to};
