//! # Representation of solve outcomes
//!
//! Once a linear program is solved, the terminal status is reported together with the optimal
//! vertex, its basis and the duals when the optimum is finite.
use std::fmt::{self, Display, Formatter};

use enum_map::EnumMap;

use crate::algorithm::{OptimizationResult, Phase};

/// Terminal status of a solve.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Status {
    Optimal,
    Unbounded,
    Infeasible,
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Status::Optimal => "OPTIMAL",
            Status::Unbounded => "UNBOUNDED",
            Status::Infeasible => "INFEASIBLE",
        })
    }
}

/// A finite optimum.
///
/// All values are expressed in the direction of the original problem: for a maximization
/// problem, `objective` is the maximum and `shadow_price` are the duals of the maximization.
#[derive(Clone, Debug, PartialEq)]
pub struct Optimum<F> {
    /// Value of the objective function at `x`.
    pub objective: F,
    /// Value of every variable, length `n`.
    pub x: Vec<F>,
    /// Column indices of the final basis, ordered by the row they are basic in.
    ///
    /// Has one entry per row that was not removed as redundant.
    pub basis: Vec<usize>,
    /// Dual value per original constraint row, length `m`. Removed rows have a zero dual.
    pub shadow_price: Vec<F>,
    /// Constraint rows found to be linearly dependent on the others, sorted.
    pub removed_rows: Vec<usize>,
}

/// Outcome of a solve together with statistics.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution<F> {
    result: OptimizationResult<F>,
    iterations: EnumMap<Phase, usize>,
}

impl<F: Copy> Solution<F> {
    pub(crate) fn new(result: OptimizationResult<F>, iterations: EnumMap<Phase, usize>) -> Self {
        Self { result, iterations }
    }

    /// Terminal status.
    pub fn status(&self) -> Status {
        match self.result {
            OptimizationResult::FiniteOptimum(_) => Status::Optimal,
            OptimizationResult::Unbounded => Status::Unbounded,
            OptimizationResult::Infeasible => Status::Infeasible,
        }
    }

    /// The optimum, if there is one.
    pub fn optimum(&self) -> Option<&Optimum<F>> {
        match &self.result {
            OptimizationResult::FiniteOptimum(optimum) => Some(optimum),
            _ => None,
        }
    }

    /// Optimal objective value, defined iff the status is optimal.
    pub fn objective(&self) -> Option<F> {
        self.optimum().map(|optimum| optimum.objective)
    }

    /// Optimal solution vector of length `n`, defined iff the status is optimal.
    pub fn x(&self) -> Option<&[F]> {
        self.optimum().map(|optimum| optimum.x.as_slice())
    }

    /// Final basis, defined iff the status is optimal.
    pub fn basis(&self) -> Option<&[usize]> {
        self.optimum().map(|optimum| optimum.basis.as_slice())
    }

    /// Duals of the original constraint rows, defined iff the status is optimal.
    pub fn shadow_price(&self) -> Option<&[F]> {
        self.optimum().map(|optimum| optimum.shadow_price.as_slice())
    }

    /// Number of pivots performed in a phase.
    pub fn iterations(&self, phase: Phase) -> usize {
        self.iterations[phase]
    }

    /// Number of pivots performed in all phases together.
    pub fn total_iterations(&self) -> usize {
        self.iterations.values().sum()
    }

    /// The underlying result.
    pub fn result(&self) -> &OptimizationResult<F> {
        &self.result
    }

    /// Take the underlying result.
    pub fn into_result(self) -> OptimizationResult<F> {
        self.result
    }
}
