//! # Representing linear programs
//!
//! Problems are given in equality form with nonnegative variables. Inequality problems are
//! brought into that form by adding slack columns.
pub mod elements;
pub mod problem;
pub mod solution;
