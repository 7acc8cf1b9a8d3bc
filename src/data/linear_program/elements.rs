//! # Building blocks to describe linear programs.
use std::ops::Neg;

use num_traits::One;

/// Direction of optimization.
///
/// The algorithms all minimize; a maximization problem is solved by minimizing the negated cost.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Objective {
    Maximize,
    #[default]
    Minimize,
}

impl Objective {
    /// Factor that converts costs (and the resulting objective value and duals) between this
    /// direction and minimization.
    #[must_use]
    pub fn sign<F: One + Neg<Output = F>>(self) -> F {
        match self {
            Objective::Maximize => -F::one(),
            Objective::Minimize => F::one(),
        }
    }
}
