//! # Iteration diagnostics
//!
//! After every basis computation, the algorithms hand a `Snapshot` of their state to an
//! `Observer`. Closures taking a `&Snapshot` are observers.
use enum_map::EnumMap;
use log::{debug, trace};

use crate::algorithm::Phase;
use crate::algorithm::tableau::Tableau;
use crate::data::number_types::traits::OrderedField;
use crate::error::SolveError;

/// State of an algorithm at the start of an iteration.
///
/// Values are those of the minimization that is solved internally: for a maximization problem,
/// the objective and the shadow prices have the opposite sign of those in the final `Solution`.
/// In phase one, the problem is the auxiliary problem with artificial columns appended.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot<F> {
    /// Which algorithm, or which phase of the two phase method, is running.
    pub phase: Phase,
    /// Number of pivots performed so far in this phase.
    pub iteration: usize,
    /// Basis column per row.
    pub basis: Vec<usize>,
    /// `y = c_B B^-1`.
    pub shadow_price: Vec<F>,
    /// `z_j = y A_j - c_j` for every column; zero for basis columns.
    pub reduced_costs: Vec<F>,
    /// `c_B x_B`.
    pub objective: F,
    /// The basic solution, zero on non basic columns.
    pub solution: Vec<F>,
}

/// Receives a snapshot of every iteration.
pub trait Observer<F> {
    /// Called with the state at the start of each iteration, including the final one.
    fn observe(&mut self, snapshot: &Snapshot<F>);

    /// Whether snapshots should be computed at all.
    fn is_active(&self) -> bool {
        true
    }
}

/// Observer that ignores everything, and avoids the cost of creating snapshots.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoObserver;

impl<F> Observer<F> for NoObserver {
    fn observe(&mut self, _snapshot: &Snapshot<F>) {
    }

    fn is_active(&self) -> bool {
        false
    }
}

impl<F, T> Observer<F> for T
where
    T: FnMut(&Snapshot<F>),
{
    fn observe(&mut self, snapshot: &Snapshot<F>) {
        self(snapshot)
    }
}

/// Bookkeeping of a single solve across its phases: pivot counts, the iteration limit and the
/// observer.
pub(crate) struct Progress<'a, F> {
    observer: &'a mut dyn Observer<F>,
    iterations: EnumMap<Phase, usize>,
    iteration_limit: Option<usize>,
}

impl<'a, F: OrderedField> Progress<'a, F> {
    pub(crate) fn new(observer: &'a mut dyn Observer<F>, iteration_limit: Option<usize>) -> Self {
        Self { observer, iterations: EnumMap::default(), iteration_limit }
    }

    /// Log the state of the tableau and pass it on to the observer.
    pub(crate) fn report(&mut self, phase: Phase, tableau: &Tableau<F>) {
        let iteration = self.iterations[phase];
        debug!(
            "{} iteration {}: basis {:?}, objective {}",
            phase, iteration, tableau.basis_indices(), tableau.objective_function_value(),
        );
        trace!("{}", tableau);

        if self.observer.is_active() {
            self.observer.observe(&tableau.snapshot(phase, iteration));
        }
    }

    /// Account for a pivot that is about to happen.
    ///
    /// # Errors
    ///
    /// `SolveError::IterationLimit` if the phase already used all pivots it is allowed.
    pub(crate) fn count_pivot(&mut self, phase: Phase) -> Result<(), SolveError> {
        if let Some(limit) = self.iteration_limit {
            if self.iterations[phase] >= limit {
                return Err(SolveError::IterationLimit(limit));
            }
        }
        self.iterations[phase] += 1;

        Ok(())
    }

    pub(crate) fn into_iterations(self) -> EnumMap<Phase, usize> {
        self.iterations
    }
}
