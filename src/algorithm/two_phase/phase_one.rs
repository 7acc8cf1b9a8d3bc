//! # Phase one
//!
//! Finding a basic feasible solution using artificial variables.
use itertools::repeat_n;
use log::debug;

use crate::algorithm::Phase;
use crate::algorithm::observer::Progress;
use crate::algorithm::options::Options;
use crate::algorithm::primal::primal as primal_simplex;
use crate::algorithm::tableau::Tableau;
use crate::algorithm::two_phase::{Rank, RankedFeasibilityResult};
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_program::problem::StandardForm;
use crate::data::linear_program::solution::Status;
use crate::data::number_types::traits::OrderedField;
use crate::error::SolveError;

/// Build the auxiliary problem `min 1·x_a s.t. A' x + x_a = b', x, x_a >= 0`.
///
/// Rows with a negative right-hand side are negated, such that the artificial variables form a
/// feasible basis. Artificial variable `n + i` belongs to row `i`.
pub(crate) fn artificial_instance<F: OrderedField>(instance: &StandardForm<F>) -> StandardForm<F> {
    let (m, n) = (instance.nr_rows(), instance.nr_columns());

    let mut constraints = instance.constraints().clone();
    let mut b = instance.b().to_vec();
    for (i, value) in b.iter_mut().enumerate() {
        if *value < F::zero() {
            constraints.multiply_row(i, -F::one());
            *value = -*value;
        }
    }

    let cost = repeat_n(F::zero(), n).chain(repeat_n(F::one(), m)).collect();
    StandardForm::new(cost, constraints.hcat(DenseMatrix::identity(m)), b)
}

/// Reduces the artificial cost of the basic feasible solution to zero, if possible. In doing so, a
/// basic feasible solution to the standard form linear program is found.
///
/// # Arguments
///
/// * `instance`: Problem for which a basic feasible solution is searched.
///
/// # Return value
///
/// Whether the problem is feasible, and if so, the basis to start the second phase with.
///
/// # Errors
///
/// `SolveError::Numerical` if the artificial cost turns out unbounded, which is impossible in exact
/// arithmetic. Also those of `primal`.
pub(crate) fn primal<F: OrderedField>(
    instance: &StandardForm<F>,
    options: &Options<F>,
    progress: &mut Progress<F>,
) -> Result<RankedFeasibilityResult, SolveError> {
    let (m, n) = (instance.nr_rows(), instance.nr_columns());
    let artificial = artificial_instance(instance);
    let mut tableau = Tableau::new(&artificial, (n..(n + m)).collect(), options.tolerance, m)?;

    match primal_simplex(&mut tableau, Phase::One, options, progress)? {
        Status::Optimal => {},
        _ => return Err(SolveError::Numerical("artificial cost can not be unbounded".into())),
    }

    let artificial_cost = tableau.objective_function_value();
    if artificial_cost > options.feasibility_tolerance {
        debug!("Phase one ended with artificial cost {}, infeasible", artificial_cost);
        return Ok(RankedFeasibilityResult::Infeasible);
    }

    let rows_to_remove = remove_artificial_basis_variables(&mut tableau)?;
    let basis = tableau.basis_indices().iter()
        .copied()
        .filter(|&j| j < n)
        .collect::<Vec<_>>();
    debug_assert_eq!(basis.len() + rows_to_remove.len(), m);

    let rank = if rows_to_remove.is_empty() {
        Rank::Full
    } else {
        Rank::Deficient(rows_to_remove)
    };

    Ok(RankedFeasibilityResult::Feasible { rank, basis })
}

/// Removes all artificial variables from the tableau by making a basis change "at zero level", or
/// without change of cost of the current solution.
///
/// # Arguments
///
/// * `tableau`: Tableau to change the basis for.
///
/// # Return value
///
/// A `Vec` with indices of rows that are redundant. Is sorted as a side effect of the algorithm.
///
/// # Errors
///
/// `SolveError::Numerical` if an artificial variable has a value above the tolerance (but within
/// the feasibility tolerance) and no column can replace it without becoming negative.
///
/// An artificial variable that can't be exchanged has a tableau row with only zeros on the
/// non-artificial columns. The constraint it was created for is then a linear combination of the
/// other constraints.
pub(crate) fn remove_artificial_basis_variables<F: OrderedField>(
    tableau: &mut Tableau<F>,
) -> Result<Vec<usize>, SolveError> {
    let first_artificial = tableau.nr_columns() - tableau.nr_artificial_variables();
    let mut artificial_variable_indices = tableau.basis_indices().iter()
        .copied()
        .filter(|&j| j >= first_artificial)
        .collect::<Vec<_>>();
    artificial_variable_indices.sort_unstable();
    let mut rows_to_remove = Vec::new();

    for artificial in artificial_variable_indices {
        let pivot_row = tableau.basis_indices().iter()
            .position(|&j| j == artificial)
            .ok_or_else(|| SolveError::Numerical(format!("artificial {} left the basis", artificial)))?;
        let value = tableau.constraint_values()[pivot_row];
        let tolerance = tableau.tolerance();
        let elements = tableau.entering_candidates()
            .filter(|&j| !tableau.is_in_basis(j))
            .map(|j| (j, tableau.generate_element(pivot_row, j)))
            .filter(|&(_, element)| element.abs() > tolerance)
            .collect::<Vec<_>>();
        // Above zero level, a negative pivot would make the entering variable negative
        let pivot_column = if value <= tolerance {
            elements.first()
        } else {
            elements.iter().find(|&&(_, element)| element > F::zero())
        };

        match pivot_column {
            Some(&(pivot_column, _)) => {
                debug!("Exchanging artificial {} at value {} for column {}", artificial, value, pivot_column);
                tableau.bring_into_basis(pivot_column, pivot_row)?;
            },
            None if elements.is_empty() => {
                debug!("Artificial {} can't be exchanged, row {} is redundant", artificial, artificial - first_artificial);
                rows_to_remove.push(artificial - first_artificial);
            },
            None => return Err(SolveError::Numerical(format!(
                "artificial {} remains basic at value {} without a positive pivot", artificial, value,
            ))),
        }
    }

    debug_assert!(rows_to_remove.is_sorted());
    Ok(rows_to_remove)
}
