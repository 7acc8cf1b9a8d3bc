//! `min -x_0 s.t. s x_0 + x_1 = s, s x_0 + x_2 = s (1 + 5e-10)` for a scale `s`.
//!
//! From the slack basis, the two ratios differ by `5e-10` only, less than the default tolerance,
//! but leaving on the second row makes `x_1` negative by `5e-10 s`. Optimal value `-1` at
//! `x = (1, 0, 5e-10 s)`.
use crate::data::linear_program::problem::{Problem, StandardForm};

pub fn problem(scale: f64) -> Problem<f64> {
    Problem::minimize(
        vec![-1f64, 0f64, 0f64],
        vec![
            vec![scale, 1f64, 0f64],
            vec![scale, 0f64, 1f64],
        ],
        vec![scale, scale + 5e-10 * scale],
    ).unwrap()
}

pub fn standard_form(scale: f64) -> StandardForm<f64> {
    problem(scale).standard_form()
}

pub fn initial_basis() -> Vec<usize> {
    vec![1, 2]
}
