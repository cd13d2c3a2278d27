#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

//! The declaration language for `beautiful` type shorthand.
//!
//! The `beautiful-types` crate builds composite types inside the type system.
//! This crate does the same work on values: it reads shorthand such as
//! `pfun<ref<str>, usize>` and spells out the Rust type it stands for, either
//! one expression at a time ([`expand`]) or as a module of type aliases
//! generated from a declaration file ([`generate`]):
//!
//! ```text
//! // handlers.bt
//! type Handler = pfun<i32, i32>;
//! type Grid<T> = array<T, 3, 5>;
//! ```
//!
//! The sequence engine behind the function builders lives in [`seq`].

extern crate alloc;

pub mod error;
pub mod expr;
pub mod generate;
pub mod parser;
pub mod render;
pub mod seq;

pub use error::{Arity, DeclError, Span};
pub use expr::{Builder, TypeArena, TypeExpr};
pub use generate::{GenOptions, Visibility, check, expand, generate};
pub use parser::{Decl, parse_file, parse_type};
pub use render::Renderer;
pub use seq::{Seq, SeqCtor};

#[cfg(test)]
pub(crate) mod test_utils {
    /// Send `tracing` output to the test harness. Honors `RUST_LOG`.
    pub fn init_test_logging() {
        use tracing_subscriber::{EnvFilter, fmt};

        let _ = fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    }
}
