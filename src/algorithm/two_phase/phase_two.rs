//! # Phase two
//!
//! Optimizing the original objective from a basic feasible solution, and translating the final
//! tableau back in terms of the problem that was provided.
use crate::algorithm::{OptimizationResult, Phase};
use crate::algorithm::observer::Progress;
use crate::algorithm::options::Options;
use crate::algorithm::primal::primal as primal_simplex;
use crate::algorithm::tableau::Tableau;
use crate::data::linear_program::problem::Problem;
use crate::data::linear_program::solution::{Optimum, Status};
use crate::data::number_types::traits::OrderedField;
use crate::error::SolveError;

/// Reduces the cost of the basic feasible solution to the minimum.
///
/// While calling this method, a number of requirements should be satisfied:
/// - There should be a valid basis (not necessarily optimal <=> dual feasible)
/// - All constraint values need to be nonnegative (primal feasibility)
///
/// # Arguments
///
/// * `problem`: The problem as provided by the user, used to express the result in.
/// * `tableau`: Tableau for the standard form of `problem`, without the rows in `removed_rows`.
/// * `removed_rows`: Sorted indices of redundant rows.
///
/// # Return value
///
/// An `OptimizationResult` indicating whether or not the problem has a finite optimum. It cannot be
/// infeasible, as a feasible solution is needed to start using this method.
pub(crate) fn primal<F: OrderedField>(
    problem: &Problem<F>,
    mut tableau: Tableau<F>,
    removed_rows: &[usize],
    options: &Options<F>,
    progress: &mut Progress<F>,
) -> Result<OptimizationResult<F>, SolveError> {
    let status = primal_simplex(&mut tableau, Phase::Two, options, progress)?;

    Ok(into_result(problem, &tableau, status, removed_rows))
}

/// Express a final tableau in terms of the original problem.
///
/// Undoes the negation of the cost for maximization problems and gives removed rows a zero dual.
pub(crate) fn into_result<F: OrderedField>(
    problem: &Problem<F>,
    tableau: &Tableau<F>,
    status: Status,
    removed_rows: &[usize],
) -> OptimizationResult<F> {
    match status {
        Status::Optimal => OptimizationResult::FiniteOptimum(optimum(problem, tableau, removed_rows)),
        Status::Unbounded => OptimizationResult::Unbounded,
        Status::Infeasible => OptimizationResult::Infeasible,
    }
}

fn optimum<F: OrderedField>(
    problem: &Problem<F>,
    tableau: &Tableau<F>,
    removed_rows: &[usize],
) -> Optimum<F> {
    debug_assert!(removed_rows.is_sorted());
    debug_assert_eq!(tableau.nr_rows() + removed_rows.len(), problem.nr_rows());

    let sign = problem.objective().sign::<F>();

    let mut shadow_price = tableau.shadow_price().iter()
        .map(|&price| sign * price)
        .collect::<Vec<_>>();
    // In ascending order, every zero lands at its original row index
    for &row in removed_rows {
        shadow_price.insert(row, F::zero());
    }

    Optimum {
        objective: sign * tableau.objective_function_value(),
        x: tableau.current_bfs(),
        basis: tableau.basis_indices().to_vec(),
        shadow_price,
        removed_rows: removed_rows.to_vec(),
    }
}
