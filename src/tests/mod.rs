//! # Problems shared by the unit tests.
//!
//! Convention for function names:
//!
//! * `fn cost()`, `fn constraints()`, `fn b()`: raw data
//! * `fn problem()`: the `Problem` as a user would create it
//! * `fn standard_form()`: the minimization the algorithms operate on
//! * `fn initial_basis()`: a basis to start from, where the problem comes with one
pub mod dual_1;
pub mod near_tie;
pub mod redundant;
