//! # Linear algebra primitives
//!
//! Dense matrices and vectors. Problem sizes are small (tens of rows and columns), so everything
//! is stored densely and bases are inverted from scratch.

pub mod matrix;
pub mod vector;
