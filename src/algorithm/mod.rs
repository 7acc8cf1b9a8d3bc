//! # Algorithms
//!
//! The primal and dual Simplex method, and the two phase method that finds a starting basis for
//! the primal method. A `Solver` bundles the configuration and an optional observer; the free
//! functions `solve` and `solve_dual` use the defaults.
use std::fmt::{self, Display, Formatter};

use enum_map::Enum;
use log::debug;

use crate::algorithm::observer::{NoObserver, Observer, Progress};
use crate::algorithm::options::Options;
use crate::algorithm::ratio_test::LeavingRule;
use crate::algorithm::strategy::pivot_rule::EnteringRule;
use crate::algorithm::tableau::Tableau;
use crate::data::linear_program::problem::Problem;
use crate::data::linear_program::solution::{Optimum, Solution};
use crate::data::number_types::traits::OrderedField;
use crate::error::SolveError;

pub mod dual;
pub mod observer;
pub mod options;
pub mod primal;
pub mod strategy;
pub mod tableau;
pub mod two_phase;

/// A linear program is either infeasible, unbounded or has a finite optimum.
///
/// This is determined as the result of an algorithm.
#[allow(missing_docs)]
#[derive(Clone, Debug, PartialEq)]
pub enum OptimizationResult<F> {
    Infeasible,
    FiniteOptimum(Optimum<F>),
    Unbounded,
}

/// The algorithm, or the phase of the two phase method, that is running.
#[allow(missing_docs)]
#[derive(Enum, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    One,
    Two,
    Dual,
}

impl Display for Phase {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Phase::One => "phase one",
            Phase::Two => "phase two",
            Phase::Dual => "dual",
        })
    }
}

/// Configured solver.
///
/// Holds no state between solves other than the observer, which sees the iterations of every
/// solve in turn.
#[derive(Clone, Debug)]
pub struct Solver<F, O = NoObserver> {
    options: Options<F>,
    observer: O,
}

impl<F: OrderedField> Solver<F> {
    /// Solver with the default options and without observer.
    pub fn new() -> Self {
        Self { options: Options::default(), observer: NoObserver }
    }
}

impl<F: OrderedField> Default for Solver<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: OrderedField, O: Observer<F>> Solver<F, O> {
    /// Replace all options.
    #[must_use]
    pub fn with_options(mut self, options: Options<F>) -> Self {
        self.options = options;
        self
    }

    /// Set the zero threshold used in pivot selection and feasibility checks.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: F) -> Self {
        self.options.tolerance = tolerance;
        self
    }

    /// Set the rule that selects the entering column in the primal method.
    #[must_use]
    pub fn with_entering_rule(mut self, rule: EnteringRule) -> Self {
        self.options.entering = rule;
        self
    }

    /// Set the rule that breaks ties in the primal ratio test.
    #[must_use]
    pub fn with_leaving_rule(mut self, rule: LeavingRule) -> Self {
        self.options.leaving = rule;
        self
    }

    /// Limit the number of pivots in every phase.
    #[must_use]
    pub fn with_iteration_limit(mut self, limit: usize) -> Self {
        self.options.iteration_limit = Some(limit);
        self
    }

    /// Use an observer, such as a closure taking a `&Snapshot<F>`.
    pub fn with_observer<P: Observer<F>>(self, observer: P) -> Solver<F, P> {
        Solver { options: self.options, observer }
    }

    /// Current configuration.
    pub fn options(&self) -> &Options<F> {
        &self.options
    }

    /// Take the observer back, for example to inspect what it collected.
    pub fn into_observer(self) -> O {
        self.observer
    }

    /// Solve a problem with the primal Simplex method.
    ///
    /// # Arguments
    ///
    /// * `problem`: Problem to solve.
    /// * `basis`: A primal feasible basis to start from. If `None`, the two phase method is used to
    /// find one, removing redundant constraints along the way.
    ///
    /// # Errors
    ///
    /// `SolveError::InvalidInitialBasis` or `SolveError::SingularBasis` if the provided basis is
    /// not usable. `SolveError::IterationLimit` if the limit was configured and reached. Singular
    /// bases or numerical trouble during the iterations are also reported as errors.
    pub fn solve(&mut self, problem: &Problem<F>, basis: Option<&[usize]>) -> Result<Solution<F>, SolveError> {
        debug!("Solving a problem with {} rows and {} columns", problem.nr_rows(), problem.nr_columns());

        let mut progress = Progress::new(&mut self.observer, self.options.iteration_limit);
        let result = two_phase::solve(problem, basis, &self.options, &mut progress)?;

        Ok(Solution::new(result, progress.into_iterations()))
    }

    /// Solve a problem with the dual Simplex method.
    ///
    /// # Arguments
    ///
    /// * `problem`: Problem to solve.
    /// * `basis`: A dual feasible basis: no relative cost `y A_j - c_j` of the minimization may be
    /// positive. Its basic solution may be primal infeasible.
    ///
    /// # Errors
    ///
    /// `SolveError::InvalidInitialBasis` if the basis is malformed or not dual feasible,
    /// `SolveError::SingularBasis` if it can't be inverted. Also those of the iterations, see
    /// `solve`.
    pub fn solve_dual(&mut self, problem: &Problem<F>, basis: &[usize]) -> Result<Solution<F>, SolveError> {
        debug!("Solving a problem with {} rows and {} columns using the dual method", problem.nr_rows(), problem.nr_columns());

        let instance = problem.standard_form();
        let mut tableau = Tableau::new(&instance, basis.to_vec(), self.options.tolerance, 0)?;
        let mut progress = Progress::new(&mut self.observer, self.options.iteration_limit);
        let status = dual::dual(&mut tableau, &mut progress)?;
        let result = two_phase::phase_two::into_result(problem, &tableau, status, &[]);

        Ok(Solution::new(result, progress.into_iterations()))
    }
}

/// Solve a problem with the default configuration, see `Solver::solve`.
///
/// # Errors
///
/// See `Solver::solve`.
pub fn solve<F: OrderedField>(problem: &Problem<F>, basis: Option<&[usize]>) -> Result<Solution<F>, SolveError> {
    Solver::new().solve(problem, basis)
}

/// Solve a problem from a dual feasible basis with the default configuration, see
/// `Solver::solve_dual`.
///
/// # Errors
///
/// See `Solver::solve_dual`.
pub fn solve_dual<F: OrderedField>(problem: &Problem<F>, basis: &[usize]) -> Result<Solution<F>, SolveError> {
    Solver::new().solve_dual(problem, basis)
}
