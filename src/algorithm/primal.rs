//! # Primal Simplex
//!
//! Moves from basic feasible solution to basic feasible solution, decreasing the objective, until
//! no column has a positive relative cost.
use log::debug;

use crate::algorithm::Phase;
use crate::algorithm::observer::Progress;
use crate::algorithm::options::Options;
use crate::algorithm::ratio_test::select_primal_pivot_row;
use crate::algorithm::tableau::{debug_assert_in_basic_feasible_solution_state, Tableau};
use crate::data::linear_program::solution::Status;
use crate::data::number_types::traits::OrderedField;
use crate::error::SolveError;

/// Reduces the cost of the basic feasible solution to the minimum.
///
/// # Arguments
///
/// * `tableau`: A primal feasible tableau. Contains the final basis afterwards, also when the
/// problem turns out to be unbounded.
/// * `phase`: Used for reporting and counting only.
///
/// # Return value
///
/// `Status::Optimal` or `Status::Unbounded`.
///
/// # Errors
///
/// When the iteration limit is reached, or when a pivot results in a singular basis.
pub(crate) fn primal<F: OrderedField>(
    tableau: &mut Tableau<F>,
    phase: Phase,
    options: &Options<F>,
    progress: &mut Progress<F>,
) -> Result<Status, SolveError> {
    let mut rule = options.entering.into_pivot_rule::<F>();

    loop {
        if cfg!(debug_assertions) {
            debug_assert_in_basic_feasible_solution_state(tableau);
        }
        progress.report(phase, tableau);

        match rule.select_primal_pivot_column(tableau) {
            Some((column_index, cost)) => {
                let column = tableau.generate_column(column_index);
                match select_primal_pivot_row(tableau, &column, options.leaving) {
                    Some(row_index) => {
                        progress.count_pivot(phase)?;
                        let leaving = tableau.bring_into_basis(column_index, row_index)?;
                        debug!(
                            "{}: column {} (relative cost {}) enters in row {}, column {} leaves",
                            phase, column_index, cost, row_index, leaving,
                        );
                    },
                    None => {
                        debug!("{}: column {} is an unbounded direction", phase, column_index);
                        break Ok(Status::Unbounded)
                    },
                }
            },
            None => break Ok(Status::Optimal),
        }
    }
}
