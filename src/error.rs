//! # Error reporting
//!
//! Terminal outcomes of the simplex method (infeasible, unbounded) are not errors; they are
//! reported through `algorithm::OptimizationResult`. The errors here are precondition failures on
//! entry and internal defects that end a run.
use thiserror::Error;

/// Why a solve could not run to a terminal status.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SolveError {
    /// The problem data is malformed: shapes don't match, it is empty, or it contains non-finite
    /// values.
    ///
    /// The contained `String` is a message for the end user.
    #[error("inconsistent problem dimensions: {0}")]
    Dimension(String),
    /// The basis matrix could not be inverted.
    ///
    /// This indicates a corrupted basis, or a constraint matrix that is not of full row rank when
    /// it is required to be. It is not recoverable.
    #[error("basis matrix for columns {0:?} is singular")]
    SingularBasis(Vec<usize>),
    /// A caller-supplied starting basis doesn't satisfy the precondition of the method.
    #[error("invalid initial basis: {0}")]
    InvalidInitialBasis(String),
    /// The configured maximum number of pivots was reached before termination.
    #[error("iteration limit of {0} pivots reached")]
    IterationLimit(usize),
    /// Floating point trouble that can't happen in exact arithmetic.
    #[error("numerical trouble: {0}")]
    Numerical(String),
}
