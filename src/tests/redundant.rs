//! The last row is the sum of the first two.
//!
//! Optimal value `-8` at `x = (0, 4, 0, 6)`.
use crate::data::linear_program::problem::{Problem, StandardForm};

pub fn cost() -> Vec<f64> {
    vec![-1f64, -2f64, 0f64, 0f64]
}

pub fn constraints() -> Vec<Vec<f64>> {
    vec![
        vec![1f64, 1f64, 1f64, 0f64],
        vec![1f64, -1f64, 0f64, 1f64],
        vec![2f64, 0f64, 1f64, 1f64],
    ]
}

pub fn b() -> Vec<f64> {
    vec![4f64, 2f64, 6f64]
}

pub fn problem() -> Problem<f64> {
    Problem::minimize(cost(), constraints(), b()).unwrap()
}

pub fn standard_form() -> StandardForm<f64> {
    problem().standard_form()
}
