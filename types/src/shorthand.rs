//! Import groups.
//!
//! Bring every builder into scope with `use beautiful_types::all::*;`, or a
//! single capability with its group, renamed if that reads better at the use
//! site:
//!
//! ```
//! use beautiful_types::shorthand::ptr::Ptr as Pointer;
//! use beautiful_types::shorthand::fun::fun;
//!
//! fn call(f: &fun![i32, i32], x: Pointer<i32>) -> i32 {
//!     // SAFETY: the caller passes a pointer to a live `i32`.
//!     f(unsafe { *x })
//! }
//!
//! let mut x = 21;
//! assert_eq!(call(&|x: i32| x * 2, &mut x), 42);
//! ```
//!
//! Each group only exports its own builder (and the macro of the same name),
//! so a group import never shadows anything else.

/// Every builder and its macro.
pub mod all {
    pub use crate::builders::{Array, Cnst, Fun, LFun, PFun, PLFun, Ptr, Ref, Vltl};
    pub use crate::ctor::Dim;
    pub use crate::list::Nil;
    pub use crate::{array, fun, lfun, pfun, plfun, tylist};
}

/// Reference construction.
pub mod r#ref {
    pub use crate::builders::Ref;
}

/// Pointer construction.
pub mod ptr {
    pub use crate::builders::Ptr;
}

/// Array construction with any number of dimensions.
pub mod array {
    pub use crate::array;
    pub use crate::builders::Array;
    pub use crate::ctor::Dim;
}

/// Const qualification.
pub mod cnst {
    pub use crate::builders::Cnst;
}

/// Volatile qualification.
pub mod vltl {
    pub use crate::builders::Vltl;
}

/// Function type, return type first.
pub mod lfun {
    pub use crate::builders::LFun;
    pub use crate::lfun;
}

/// Function type, return type last.
pub mod fun {
    pub use crate::builders::Fun;
    pub use crate::fun;
}

/// Pointer to function, return type first.
pub mod plfun {
    pub use crate::builders::PLFun;
    pub use crate::plfun;
}

/// Pointer to function, return type last.
pub mod pfun {
    pub use crate::builders::PFun;
    pub use crate::pfun;
}
