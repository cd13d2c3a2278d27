//! Beautiful CLI library.
//!
//! This crate provides the command-line interface for expanding and
//! generating `beautiful` type shorthand.
//! The public modules are primarily exposed for testing purposes.

pub mod cli;
pub mod commands;
pub mod common;
