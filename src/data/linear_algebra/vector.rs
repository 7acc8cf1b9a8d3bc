//! # Dense vector helpers
//!
//! Vectors are plain slices and `Vec`s of a fixed length. These functions provide the few
//! operations the simplex family needs on them.
use num_traits::Float;

/// Inner product of two vectors of equal length.
pub fn inner_product<F: Float>(left: &[F], right: &[F]) -> F {
    debug_assert_eq!(left.len(), right.len());

    left.iter().zip(right).fold(F::zero(), |total, (&x, &y)| total + x * y)
}

/// Inner product of a vector with an iterator of values, such as a matrix column.
pub fn inner_product_with_iter<F, I>(left: &[F], right: I) -> F
where
    F: Float,
    I: IntoIterator<Item = F>,
{
    left.iter().zip(right).fold(F::zero(), |total, (&x, y)| total + x * y)
}

/// Negate all values of a vector in place.
pub fn negate<F: Float>(vector: &mut [F]) {
    for value in vector {
        *value = -*value;
    }
}

/// Whether all values are at least `-tolerance`.
pub fn is_nonnegative<F: Float>(vector: &[F], tolerance: F) -> bool {
    vector.iter().all(|&value| value >= -tolerance)
}
