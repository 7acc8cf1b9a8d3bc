//! # Problem instances
//!
//! A `Problem` is the immutable input of a solve: `c`, `A`, `b` and a direction, with `A x = b`
//! and `x >= 0`. The algorithms work on a `StandardForm`, which is always a minimization.
use itertools::repeat_n;
use index_utils::remove_indices;
use num_traits::Float;

use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_algebra::vector::negate;
use crate::data::linear_program::elements::Objective;
use crate::error::SolveError;

/// A linear program in equality form with nonnegative variables.
///
/// Validated at construction, never changed afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct Problem<F> {
    objective: Objective,
    cost: Vec<F>,
    constraints: DenseMatrix<F>,
    b: Vec<F>,
}

impl<F: Float> Problem<F> {
    /// Create a new problem `optimize c·x s.t. A x = b, x >= 0`.
    ///
    /// # Arguments
    ///
    /// * `objective`: Whether to minimize or maximize.
    /// * `cost`: Objective coefficients, length `n`.
    /// * `constraints`: Row-major constraint matrix of `m` rows of length `n`.
    /// * `b`: Right-hand side, length `m`.
    ///
    /// # Errors
    ///
    /// `SolveError::Dimension` if there are no rows or columns, if lengths don't match or if any
    /// value isn't finite.
    pub fn new(
        objective: Objective,
        cost: Vec<F>,
        constraints: Vec<Vec<F>>,
        b: Vec<F>,
    ) -> Result<Self, SolveError> {
        let (m, n) = (constraints.len(), cost.len());
        if m == 0 {
            return Err(SolveError::Dimension("at least one constraint row is required".into()));
        }
        if n == 0 {
            return Err(SolveError::Dimension("at least one variable is required".into()));
        }
        if let Some((i, row)) = constraints.iter().enumerate().find(|(_, row)| row.len() != n) {
            return Err(SolveError::Dimension(format!(
                "constraint row {} has {} values, but there are {} variables", i, row.len(), n,
            )));
        }
        if b.len() != m {
            return Err(SolveError::Dimension(format!(
                "right-hand side has {} values, but there are {} constraint rows", b.len(), m,
            )));
        }

        let constraints = DenseMatrix::from_data(constraints);
        if !(constraints.is_finite() && cost.iter().chain(&b).all(|v| v.is_finite())) {
            return Err(SolveError::Dimension("all values should be finite".into()));
        }

        Ok(Self { objective, cost, constraints, b })
    }

    /// Create a minimization problem.
    pub fn minimize(cost: Vec<F>, constraints: Vec<Vec<F>>, b: Vec<F>) -> Result<Self, SolveError> {
        Self::new(Objective::Minimize, cost, constraints, b)
    }

    /// Create a maximization problem.
    pub fn maximize(cost: Vec<F>, constraints: Vec<Vec<F>>, b: Vec<F>) -> Result<Self, SolveError> {
        Self::new(Objective::Maximize, cost, constraints, b)
    }

    /// Create a problem from inequalities `A x <= b` by adding a slack column for each row.
    ///
    /// The slack of row `i` gets column index `n + i` and zero cost.
    pub fn from_inequalities(
        objective: Objective,
        cost: Vec<F>,
        constraints: Vec<Vec<F>>,
        b: Vec<F>,
    ) -> Result<Self, SolveError> {
        let m = constraints.len();
        let constraints = constraints.into_iter()
            .enumerate()
            .map(|(i, row)| {
                let slacks = (0..m).map(|k| if k == i { F::one() } else { F::zero() });
                row.into_iter().chain(slacks).collect()
            })
            .collect();
        let cost = cost.into_iter().chain(repeat_n(F::zero(), m)).collect();

        Self::new(objective, cost, constraints, b)
    }

    /// Direction of optimization.
    pub fn objective(&self) -> Objective {
        self.objective
    }

    /// Objective coefficients, as given.
    pub fn cost(&self) -> &[F] {
        &self.cost
    }

    /// The constraint matrix `A`.
    pub fn constraints(&self) -> &DenseMatrix<F> {
        &self.constraints
    }

    /// The right-hand side `b`.
    pub fn b(&self) -> &[F] {
        &self.b
    }

    /// Number of constraints, `m`.
    pub fn nr_rows(&self) -> usize {
        self.constraints.nr_rows()
    }

    /// Number of variables, `n`.
    pub fn nr_columns(&self) -> usize {
        self.constraints.nr_columns()
    }

    /// The minimization form that the algorithms operate on.
    pub(crate) fn standard_form(&self) -> StandardForm<F> {
        let mut cost = self.cost.clone();
        if self.objective == Objective::Maximize {
            negate(&mut cost);
        }

        StandardForm::new(cost, self.constraints.clone(), self.b.clone())
    }
}

/// `min c·x s.t. A x = b, x >= 0`.
///
/// Owned by a single solve. Both the phase one instance and instances with redundant rows removed
/// are new values of this type; the `Problem` they derive from is never changed.
#[derive(Clone, Debug, PartialEq)]
pub struct StandardForm<F> {
    cost: Vec<F>,
    constraints: DenseMatrix<F>,
    b: Vec<F>,
}

impl<F: Float> StandardForm<F> {
    /// Plain constructor.
    pub fn new(cost: Vec<F>, constraints: DenseMatrix<F>, b: Vec<F>) -> Self {
        debug_assert_eq!(cost.len(), constraints.nr_columns());
        debug_assert_eq!(b.len(), constraints.nr_rows());

        Self { cost, constraints, b }
    }

    /// A new instance without the given rows.
    ///
    /// # Arguments
    ///
    /// * `rows`: Sorted, deduplicated row indices.
    pub fn without_rows(&self, rows: &[usize]) -> Self {
        let mut constraints = self.constraints.clone();
        constraints.remove_rows(rows);
        let mut b = self.b.clone();
        remove_indices(&mut b, rows);

        Self::new(self.cost.clone(), constraints, b)
    }

    /// Cost of column `j`.
    pub fn cost(&self, j: usize) -> F {
        self.cost[j]
    }

    /// All costs.
    pub fn costs(&self) -> &[F] {
        &self.cost
    }

    /// The constraint matrix `A`.
    pub fn constraints(&self) -> &DenseMatrix<F> {
        &self.constraints
    }

    /// The right-hand side `b`.
    pub fn b(&self) -> &[F] {
        &self.b
    }

    /// Number of constraints.
    pub fn nr_rows(&self) -> usize {
        self.constraints.nr_rows()
    }

    /// Number of variables.
    pub fn nr_columns(&self) -> usize {
        self.constraints.nr_columns()
    }
}
