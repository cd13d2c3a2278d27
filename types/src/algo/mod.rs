//! Algorithms over type-level sequences.

mod rotate;

pub use rotate::{LastAsFirst, RotateLastToFront, Rotated};
