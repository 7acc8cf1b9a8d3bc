//! `min 2 x_0 + 3 x_1 s.t. x_0 + x_1 >= 2, x_0 + 2 x_1 >= 3`, with surplus columns written as
//! slacks of the negated rows.
//!
//! The slack basis is dual feasible but not primal feasible. Optimal value `5` at `x = (1, 1)`.
use crate::data::linear_program::problem::{Problem, StandardForm};

pub fn problem() -> Problem<f64> {
    Problem::minimize(
        vec![2f64, 3f64, 0f64, 0f64],
        vec![
            vec![-1f64, -1f64, 1f64, 0f64],
            vec![-1f64, -2f64, 0f64, 1f64],
        ],
        vec![-2f64, -3f64],
    ).unwrap()
}

pub fn standard_form() -> StandardForm<f64> {
    problem().standard_form()
}

pub fn initial_basis() -> Vec<usize> {
    vec![2, 3]
}
