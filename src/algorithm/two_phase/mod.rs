//! # The two phase method
//!
//! The first phase searches a basic feasible solution by minimizing the sum of artificial
//! variables. Artificial variables that remain in the basis at zero level are replaced, or, if that
//! is impossible, identify a redundant constraint that is removed. The second phase optimizes the
//! original objective starting from the basis found.
use log::debug;

use crate::algorithm::OptimizationResult;
use crate::algorithm::observer::Progress;
use crate::algorithm::options::Options;
use crate::algorithm::tableau::Tableau;
use crate::data::linear_program::problem::Problem;
use crate::data::number_types::traits::OrderedField;
use crate::error::SolveError;

pub mod phase_one;
pub mod phase_two;


/// Solve a problem using the two phase method.
///
/// # Arguments
///
/// * `problem`: Problem to solve.
/// * `basis`: An optional primal feasible basis to start the second phase with. The first phase
/// is skipped if it is provided.
///
/// # Errors
///
/// `SolveError::InvalidInitialBasis` if the provided basis is not valid or not primal feasible.
/// See `primal` for other errors.
pub(crate) fn solve<F: OrderedField>(
    problem: &Problem<F>,
    basis: Option<&[usize]>,
    options: &Options<F>,
    progress: &mut Progress<F>,
) -> Result<OptimizationResult<F>, SolveError> {
    let instance = problem.standard_form();

    if let Some(basis) = basis {
        let tableau = Tableau::new(&instance, basis.to_vec(), options.tolerance, 0)?;
        if !tableau.is_primal_feasible() {
            return Err(SolveError::InvalidInitialBasis(format!(
                "basis {:?} is not primal feasible", basis,
            )));
        }

        debug!("Skipping phase one, starting from basis {:?}", basis);
        return phase_two::primal(problem, tableau, &[], options, progress);
    }

    match phase_one::primal(&instance, options, progress)? {
        RankedFeasibilityResult::Feasible { rank, basis } => match rank {
            Rank::Deficient(rows_to_remove) => {
                debug!("Removing redundant rows {:?}", rows_to_remove);
                let reduced = instance.without_rows(&rows_to_remove);
                let tableau = Tableau::new(&reduced, basis, options.tolerance, 0)?;
                phase_two::primal(problem, tableau, &rows_to_remove, options, progress)
            },
            Rank::Full => {
                let tableau = Tableau::new(&instance, basis, options.tolerance, 0)?;
                phase_two::primal(problem, tableau, &[], options, progress)
            },
        },
        RankedFeasibilityResult::Infeasible => Ok(OptimizationResult::Infeasible),
    }
}

/// LP's can be either feasible (allowing at least one solution) or infeasible (allowing no
/// solutions).
///
/// If the problem is feasible, it can either have full rank, or be rank deficient.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RankedFeasibilityResult {
    /// The problem is feasible and all information necessary to start the second phase is in this
    /// variant.
    Feasible {
        /// Whether the problem needs rows to be removed.
        rank: Rank,
        /// Basis without artificial variables, one column for each row that remains.
        basis: Vec<usize>,
    },
    /// The problem is not feasible.
    Infeasible,
}

/// A matrix or linear program either has full rank, or be rank deficient.
///
/// In case it is rank deficient, a sorted, deduplicated list of (row)indices should be provided,
/// that when removed, makes the matrix or linear program full rank.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Rank {
    /// The matrix is full rank, no rows need to be removed.
    Full,
    /// The `Vec<usize>` is sorted and contains no duplicate values.
    Deficient(Vec<usize>),
}
