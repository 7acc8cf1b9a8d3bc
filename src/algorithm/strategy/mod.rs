//! # Strategies
//!
//! Choices the primal Simplex method leaves open.
pub mod pivot_rule;
