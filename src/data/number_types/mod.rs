//! # Number types
//!
//! Algorithms are written against the `OrderedField` trait rather than against `f64` directly,
//! so the same code runs in single and double precision.
pub mod traits;
