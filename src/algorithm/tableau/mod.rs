//! # Data structures for Simplex
//!
//! Contains the simplex tableau and logic for elementary operations which can be performed upon it.
//! The tableau holds a reference to the instance it solves and owns the basis together with the
//! quantities derived from it.
use std::cmp::max;
use std::collections::HashSet;
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::ops::Range;

use crate::algorithm::Phase;
use crate::algorithm::observer::Snapshot;
use crate::algorithm::tableau::basis_algebra::BasisAlgebra;
use crate::data::linear_algebra::vector::is_nonnegative;
use crate::data::linear_program::problem::StandardForm;
use crate::data::number_types::traits::OrderedField;
use crate::error::SolveError;

pub mod basis_algebra;

/// The most high-level data structure that is used by the Simplex algorithm: the Simplex tableau.
///
/// It holds only a reference to the (immutable) problem it solves, but owns the data structures
/// that describe the current solution basis.
#[derive(Clone, Debug, PartialEq)]
pub struct Tableau<'a, F> {
    instance: &'a StandardForm<F>,
    /// Column index of the basic variable of each row.
    basis_indices: Vec<usize>,
    /// All columns currently in the basis.
    ///
    /// Could also be derived from `basis_indices`, but is here for faster reading and writing.
    basis_columns: HashSet<usize>,
    /// Derived from `basis_indices`, recomputed at every basis change.
    algebra: BasisAlgebra<F>,
    tolerance: F,
    /// The last columns of the instance that may leave the basis, but never enter it.
    ///
    /// Nonzero only in the first phase of the two-phase method.
    nr_artificial_variables: usize,
}

impl<'a, F: OrderedField> Tableau<'a, F> {
    /// Create a tableau for a basis.
    ///
    /// # Arguments
    ///
    /// * `instance`: Problem to solve.
    /// * `basis`: Column index for every row.
    /// * `tolerance`: Zero threshold.
    /// * `nr_artificial_variables`: Number of trailing columns that are not allowed to enter.
    ///
    /// # Errors
    ///
    /// `SolveError::InvalidInitialBasis` if the basis has the wrong size, contains duplicates or
    /// indices out of range. `SolveError::SingularBasis` if the basis matrix can't be inverted.
    pub fn new(
        instance: &'a StandardForm<F>,
        basis: Vec<usize>,
        tolerance: F,
        nr_artificial_variables: usize,
    ) -> Result<Self, SolveError> {
        debug_assert!(nr_artificial_variables <= instance.nr_columns());

        if basis.len() != instance.nr_rows() {
            return Err(SolveError::InvalidInitialBasis(format!(
                "basis has {} indices, but there are {} rows", basis.len(), instance.nr_rows(),
            )));
        }
        if let Some(&j) = basis.iter().find(|&&j| j >= instance.nr_columns()) {
            return Err(SolveError::InvalidInitialBasis(format!(
                "column index {} is out of range for {} variables", j, instance.nr_columns(),
            )));
        }
        let basis_columns = basis.iter().copied().collect::<HashSet<_>>();
        if basis_columns.len() != basis.len() {
            return Err(SolveError::InvalidInitialBasis(format!(
                "basis {:?} contains duplicate indices", basis,
            )));
        }

        let algebra = BasisAlgebra::new(instance, &basis, tolerance)?;

        Ok(Self {
            instance,
            basis_indices: basis,
            basis_columns,
            algebra,
            tolerance,
            nr_artificial_variables,
        })
    }

    /// Brings a column into the basis by exchanging it with the basic variable of a row.
    ///
    /// # Arguments
    ///
    /// * `pivot_column_index`: Column that enters, not yet in the basis.
    /// * `pivot_row_index`: Row whose basic variable leaves.
    ///
    /// # Return value
    ///
    /// The column index of the variable that left the basis.
    ///
    /// # Errors
    ///
    /// `SolveError::SingularBasis` if the new basis can't be inverted, in which case the tableau
    /// is unchanged.
    pub fn bring_into_basis(
        &mut self,
        pivot_column_index: usize,
        pivot_row_index: usize,
    ) -> Result<usize, SolveError> {
        debug_assert!(pivot_column_index < self.nr_columns());
        debug_assert!(pivot_row_index < self.nr_rows());
        debug_assert!(!self.is_in_basis(pivot_column_index));

        let mut basis = self.basis_indices.clone();
        let leaving_column = basis[pivot_row_index];
        basis[pivot_row_index] = pivot_column_index;
        self.algebra = BasisAlgebra::new(self.instance, &basis, self.tolerance)?;
        self.basis_indices = basis;
        self.update_basis_columns(pivot_column_index, leaving_column);

        Ok(leaving_column)
    }

    fn update_basis_columns(&mut self, pivot_column: usize, leaving_column: usize) {
        let was_there = self.basis_columns.remove(&leaving_column);
        debug_assert!(was_there);
        let was_not_there = self.basis_columns.insert(pivot_column);
        debug_assert!(was_not_there);
    }

    /// Calculates the relative cost `z_j = y A_j - c_j` of a column.
    ///
    /// # Note
    ///
    /// That column will typically not be a basis column. The value is valid for those as well,
    /// where it is zero up to rounding.
    pub fn relative_cost(&self, j: usize) -> F {
        debug_assert!(j < self.nr_columns());

        self.algebra.reduced_cost(self.instance, j)
    }

    /// Relative costs of all columns, exactly zero for the basis columns.
    pub fn reduced_costs(&self) -> Vec<F> {
        (0..self.nr_columns())
            .map(|j| if self.is_in_basis(j) { F::zero() } else { self.relative_cost(j) })
            .collect()
    }

    /// Column of original problem with respect to the current basis, `B^-1 A_j`.
    pub fn generate_column(&self, j: usize) -> Vec<F> {
        debug_assert!(j < self.nr_columns());

        self.algebra.column(self.instance, j)
    }

    /// Single element `(B^-1 A_j)_i` with respect to the current basis.
    pub fn generate_element(&self, i: usize, j: usize) -> F {
        debug_assert!(i < self.nr_rows());
        debug_assert!(j < self.nr_columns());

        self.algebra.element(self.instance, i, j)
    }

    /// Row `i` of the basis inverse.
    pub fn basis_inverse_row(&self, i: usize) -> &[F] {
        self.algebra.basis_inverse_row(i)
    }

    /// Element of column `j` in the tableau row belonging to `basis_inverse_row`.
    pub fn row_element(&self, basis_inverse_row: &[F], j: usize) -> F {
        BasisAlgebra::row_element(basis_inverse_row, self.instance, j)
    }

    /// Whether a column is in the basis.
    pub fn is_in_basis(&self, column: usize) -> bool {
        debug_assert!(column < self.nr_columns());

        self.basis_columns.contains(&column)
    }

    /// Basis column of each row.
    pub fn basis_indices(&self) -> &[usize] {
        &self.basis_indices
    }

    /// Column that is basic in row `i`.
    pub fn basis_column_index_for_row(&self, i: usize) -> usize {
        self.basis_indices[i]
    }

    /// Values of the basic variables, `x_B = B^-1 b`, by row.
    pub fn constraint_values(&self) -> &[F] {
        self.algebra.basic_values()
    }

    /// Dual values `y = c_B B^-1`.
    pub fn shadow_price(&self) -> &[F] {
        self.algebra.shadow_price()
    }

    /// Get the cost of the current solution.
    pub fn objective_function_value(&self) -> F {
        self.algebra.objective(self.instance, &self.basis_indices)
    }

    /// Get the current basic solution, with a value for every column.
    pub fn current_bfs(&self) -> Vec<F> {
        self.algebra.solution(&self.basis_indices, self.nr_columns())
    }

    /// Whether all basic variables are nonnegative, up to the tolerance.
    pub fn is_primal_feasible(&self) -> bool {
        is_nonnegative(self.constraint_values(), self.tolerance)
    }

    /// Whether no column that may enter has a positive relative cost.
    pub fn is_dual_feasible(&self) -> bool {
        self.entering_candidates()
            .filter(|&j| !self.is_in_basis(j))
            .all(|j| self.relative_cost(j) <= self.tolerance)
    }

    /// Columns that are allowed to enter the basis.
    pub fn entering_candidates(&self) -> Range<usize> {
        0..(self.nr_columns() - self.nr_artificial_variables)
    }

    /// Number of rows in the tableau.
    pub fn nr_rows(&self) -> usize {
        self.instance.nr_rows()
    }

    /// Number of variables in the problem, including artificial ones.
    pub fn nr_columns(&self) -> usize {
        self.instance.nr_columns()
    }

    /// Number of trailing columns that may not enter.
    pub fn nr_artificial_variables(&self) -> usize {
        self.nr_artificial_variables
    }

    /// Zero threshold.
    pub fn tolerance(&self) -> F {
        self.tolerance
    }

    /// Instance being solved.
    pub fn instance(&self) -> &'a StandardForm<F> {
        self.instance
    }

    /// Copy the state of the tableau for an observer.
    pub fn snapshot(&self, phase: Phase, iteration: usize) -> Snapshot<F> {
        Snapshot {
            phase,
            iteration,
            basis: self.basis_indices.clone(),
            shadow_price: self.shadow_price().to_vec(),
            reduced_costs: self.reduced_costs(),
            objective: self.objective_function_value(),
            solution: self.current_bfs(),
        }
    }
}

/// Check whether the tableau currently has a valid basic feasible solution.
///
/// Only used for debug purposes.
pub fn debug_assert_in_basic_feasible_solution_state<F: OrderedField>(tableau: &Tableau<F>) {
    debug_assert_eq!(tableau.basis_columns.len(), tableau.nr_rows());

    // Basis columns are unit vectors
    let tolerance = tableau.tolerance().sqrt();
    for (i, &j) in tableau.basis_indices().iter().enumerate() {
        for (k, value) in tableau.generate_column(j).into_iter().enumerate() {
            let expected = if k == i { F::one() } else { F::zero() };
            debug_assert!(
                (value - expected).abs() <= tolerance,
                "Column {} is not equal to e_{}: value {} at row {}", j, i, value, k,
            );
        }
    }

    for (i, &value) in tableau.constraint_values().iter().enumerate() {
        debug_assert!(
            value >= -tolerance,
            "rhs (b) is not always nonnegative: at index {} we have {} < 0", i, value,
        );
    }
}

impl<'a, F: OrderedField> Display for Tableau<'a, F> {
    fn fmt(&self, f: &mut Formatter) -> FormatResult {
        writeln!(f, "=== Tableau ===")?;
        let objective = format!("{:.4}", self.objective_function_value());
        let cost = self.reduced_costs().into_iter()
            .map(|value| format!("{:.4}", value))
            .collect::<Vec<_>>();
        let b = self.constraint_values().iter()
            .map(|value| format!("{:.4}", value))
            .collect::<Vec<_>>();
        let columns = (0..self.nr_columns())
            .map(|j| {
                self.generate_column(j).into_iter()
                    .map(|value| format!("{:.4}", value))
                    .collect::<Vec<_>>()
            })
            .collect::<Vec<_>>();

        let row_counter_width = max("cost".len(), self.nr_rows().to_string().len());
        let column_width = columns.iter().enumerate()
            .map(|(j, column)| {
                column.iter().map(String::len)
                    .chain([j.to_string().len(), cost[j].len()])
                    .max()
                    .unwrap_or(0)
            })
            .collect::<Vec<_>>();
        let b_inner_width = b.iter().map(String::len).max().unwrap_or(0).max(objective.len());

        // Column counters
        write!(f, "{0:>width$} |", "", width = row_counter_width)?;
        write!(f, " {0:^width$} |", "b", width = b_inner_width)?;
        for (j, width) in column_width.iter().enumerate() {
            write!(f, " {0:^width$}", j, width = width)?;
        }
        writeln!(f)?;

        let total_width = (row_counter_width + 1) + 1 + (1 + b_inner_width + 1) + 1 +
            column_width.iter().map(|l| 1 + l).sum::<usize>();
        writeln!(f, "{}", "-".repeat(total_width))?;

        // Cost row
        write!(f, "{0:>width$} |", "cost", width = row_counter_width)?;
        write!(f, " {0:^width$} |", objective, width = b_inner_width)?;
        for (j, width) in column_width.iter().enumerate() {
            write!(f, " {0:^width$}", cost[j], width = width)?;
        }
        writeln!(f)?;
        writeln!(f, "{}", "-".repeat(total_width))?;

        for i in 0..self.nr_rows() {
            write!(f, "{0:>width$} |", i, width = row_counter_width)?;
            write!(f, " {0:^width$} |", b[i], width = b_inner_width)?;
            for (j, width) in column_width.iter().enumerate() {
                write!(f, " {0:^width$}", columns[j][i], width = width)?;
            }
            writeln!(f)?;
        }
        writeln!(f)?;

        writeln!(f, "=== Basis Columns ===")?;
        writeln!(f, "{:?}", self.basis_indices)?;
        writeln!(f, "=== Shadow Prices ===")?;
        writeln!(f, "{:?}", self.shadow_price())
    }
}
