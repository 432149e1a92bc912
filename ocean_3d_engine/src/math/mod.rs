//! Math module - minimal 3-vector and 4x4 matrix for graphics work.
//!
//! Both types are `Copy` values: every operation returns a new instance.
//! Conversions to and from `glam` are provided for interop.

mod vector;
mod matrix;

pub use vector::Vector;
pub use matrix::Matrix;
