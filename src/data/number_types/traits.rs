//! # Traits
//!
//! The simplex algorithm is defined over the ordered fields. Floating point numbers only
//! approximate one, so every comparison against zero in the algorithms goes through a tolerance.
use std::fmt::{Debug, Display};

use num_traits::Float;

/// Numbers that the algorithms compute with.
///
/// Besides arithmetic, values need to be printable for logging and diagnostics. Automatically
/// implemented for all types satisfying the trait's bounds, `f32` and `f64` in practice.
pub trait OrderedField: Float + Debug + Display + Send + Sync + 'static {}
impl<T> OrderedField for T where T: Float + Debug + Display + Send + Sync + 'static {}

/// Convert a constant, such as a tolerance, into the number type.
///
/// Falls back to the machine epsilon of `F` for values that can't be represented.
pub fn cast<F: Float>(value: f64) -> F {
    F::from(value).unwrap_or_else(F::epsilon)
}
