//! # A dense simplex solver
//!
//! Linear programs `min (or max) c·x s.t. A x = b, x >= 0` are solved with the revised Simplex
//! method on dense matrices. Included are:
//!
//! * the primal Simplex method, with a lexicographic ratio test that prevents cycling;
//! * the dual Simplex method, starting from a dual feasible basis;
//! * the two phase method, which finds a starting basis using artificial variables and removes
//! redundant constraints it encounters.
//!
//! ```
//! use lexi_simplex::{solve, Problem, Status};
//!
//! // min -3 x_0 - 4 x_1 - 2 x_2 s.t. 2 x_0 <= 4, x_0 + 2 x_2 <= 8, 3 x_1 + x_2 <= 6
//! let problem = Problem::from_inequalities(
//!     Default::default(),
//!     vec![-3f64, -4f64, -2f64],
//!     vec![vec![2f64, 0f64, 0f64], vec![1f64, 0f64, 2f64], vec![0f64, 3f64, 1f64]],
//!     vec![4f64, 8f64, 6f64],
//! )?;
//! let solution = solve(&problem, None)?;
//!
//! assert_eq!(solution.status(), Status::Optimal);
//! assert!((solution.objective().unwrap() + 16f64).abs() < 1e-9);
//! # Ok::<(), lexi_simplex::SolveError>(())
//! ```
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod error;

pub use algorithm::{OptimizationResult, Phase, Solver, solve, solve_dual};
pub use algorithm::observer::{NoObserver, Observer, Snapshot};
pub use algorithm::options::Options;
pub use algorithm::ratio_test::LeavingRule;
pub use algorithm::strategy::pivot_rule::EnteringRule;
pub use data::linear_program::elements::Objective;
pub use data::linear_program::problem::Problem;
pub use data::linear_program::solution::{Optimum, Solution, Status};
pub use error::SolveError;

#[cfg(test)]
mod tests;
