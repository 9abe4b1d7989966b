//! Distance storage.
//!
//! Provides a symmetric matrix that keeps only the lower triangle.

mod matrix;

pub use matrix::TriangularMatrix;
