//! # Solver configuration
//!
//! Tolerances and strategy choices. The defaults give Dantzig's entering rule with the
//! lexicographic leaving rule, which is guaranteed to terminate.
use crate::algorithm::ratio_test::LeavingRule;
use crate::algorithm::strategy::pivot_rule::EnteringRule;
use crate::data::number_types::traits::{cast, OrderedField};

/// Configuration of a solve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Options<F> {
    /// Values with an absolute value at or below this are treated as zero when selecting pivots,
    /// comparing ratios and checking feasibility.
    pub tolerance: F,
    /// A phase one objective above this value means that the problem is infeasible.
    pub feasibility_tolerance: F,
    /// How the entering column is selected in the primal method.
    pub entering: EnteringRule,
    /// How ties in the primal ratio test are broken.
    pub leaving: LeavingRule,
    /// Maximum number of pivots per phase, unbounded if `None`.
    pub iteration_limit: Option<usize>,
}

impl<F: OrderedField> Default for Options<F> {
    fn default() -> Self {
        Self {
            tolerance: cast(1e-9),
            feasibility_tolerance: cast(1e-6),
            entering: EnteringRule::default(),
            leaving: LeavingRule::default(),
            iteration_limit: None,
        }
    }
}
