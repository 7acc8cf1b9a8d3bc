//! # Dual Simplex
//!
//! Starts from a basis whose relative costs are all nonpositive and keeps them that way, while
//! removing primal infeasibility one row at a time.
use log::debug;

use crate::algorithm::Phase;
use crate::algorithm::observer::Progress;
use crate::algorithm::ratio_test::{select_dual_pivot_column, select_dual_pivot_row};
use crate::algorithm::tableau::Tableau;
use crate::data::linear_program::solution::Status;
use crate::data::number_types::traits::OrderedField;
use crate::error::SolveError;

/// Iterate until the basic solution is primal feasible, or until a row proves infeasibility.
///
/// # Return value
///
/// `Status::Optimal` or `Status::Infeasible`.
///
/// # Errors
///
/// `SolveError::InvalidInitialBasis` if the tableau is not dual feasible on entry. Also when the
/// iteration limit is reached, or when a pivot results in a singular basis.
pub(crate) fn dual<F: OrderedField>(
    tableau: &mut Tableau<F>,
    progress: &mut Progress<F>,
) -> Result<Status, SolveError> {
    if !tableau.is_dual_feasible() {
        return Err(SolveError::InvalidInitialBasis("initial basis is not dual feasible".into()));
    }

    loop {
        debug_assert!(
            tableau.entering_candidates()
                .all(|j| tableau.is_in_basis(j) || tableau.relative_cost(j) <= tableau.tolerance().sqrt()),
            "dual feasibility was lost",
        );
        progress.report(Phase::Dual, tableau);

        let Some(row_index) = select_dual_pivot_row(tableau) else {
            break Ok(Status::Optimal);
        };
        match select_dual_pivot_column(tableau, row_index) {
            Some(column_index) => {
                progress.count_pivot(Phase::Dual)?;
                let leaving = tableau.bring_into_basis(column_index, row_index)?;
                debug!(
                    "{}: column {} leaves from row {}, column {} enters",
                    Phase::Dual, leaving, row_index, column_index,
                );
            },
            None => {
                debug!("{}: row {} has no negative value, primal infeasible", Phase::Dual, row_index);
                break Ok(Status::Infeasible);
            },
        }
    }
}
