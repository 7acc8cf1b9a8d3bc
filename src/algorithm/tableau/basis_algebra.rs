//! # Basis algebra
//!
//! Everything that follows from a basis: its inverse, the values of the basic variables and the
//! shadow prices. Computed from scratch for every basis; there is no incremental update of the
//! inverse.
use crate::data::linear_algebra::matrix::DenseMatrix;
use crate::data::linear_algebra::vector::{inner_product, inner_product_with_iter};
use crate::data::linear_program::problem::StandardForm;
use crate::data::number_types::traits::OrderedField;
use crate::error::SolveError;

/// Quantities derived from a basis `B` of a `StandardForm`.
#[derive(Clone, Debug, PartialEq)]
pub struct BasisAlgebra<F> {
    /// `B^-1`, rows correspond to the basis rows.
    basis_inverse: DenseMatrix<F>,
    /// `x_B = B^-1 b`, indexed by basis row.
    basic_values: Vec<F>,
    /// `y = c_B B^-1`, indexed by constraint row.
    shadow_price: Vec<F>,
}

impl<F: OrderedField> BasisAlgebra<F> {
    /// Invert the basis and derive the primal and dual values.
    ///
    /// # Arguments
    ///
    /// * `instance`: Problem that the basis indexes into.
    /// * `basis`: Column index for each row, length `m`.
    /// * `tolerance`: Pivot threshold for the inversion.
    ///
    /// # Errors
    ///
    /// `SolveError::SingularBasis` if the basis columns are (numerically) linearly dependent.
    pub fn new(instance: &StandardForm<F>, basis: &[usize], tolerance: F) -> Result<Self, SolveError> {
        debug_assert_eq!(basis.len(), instance.nr_rows());

        let basis_inverse = instance.constraints()
            .select_columns(basis)
            .inverse(tolerance)
            .ok_or_else(|| SolveError::SingularBasis(basis.to_vec()))?;
        let basic_values = basis_inverse.mul_vector(instance.b());
        let basic_costs = basis.iter().map(|&j| instance.cost(j)).collect::<Vec<_>>();
        let shadow_price = basis_inverse.left_mul_vector(&basic_costs);

        Ok(Self { basis_inverse, basic_values, shadow_price })
    }

    /// Reduced cost `z_j = y A_j - c_j`.
    ///
    /// In a minimization, entering a column with positive reduced cost decreases the objective.
    pub fn reduced_cost(&self, instance: &StandardForm<F>, j: usize) -> F {
        let column = instance.constraints().column(j);
        inner_product(&self.shadow_price, &column) - instance.cost(j)
    }

    /// Column `B^-1 A_j` of the tableau.
    pub fn column(&self, instance: &StandardForm<F>, j: usize) -> Vec<F> {
        self.basis_inverse.mul_vector(&instance.constraints().column(j))
    }

    /// Element `(B^-1 A_j)_i` of the tableau.
    pub fn element(&self, instance: &StandardForm<F>, i: usize, j: usize) -> F {
        self.basis_inverse.row_times_column(i, instance.constraints(), j)
    }

    /// Row `i` of the tableau restricted to column `j`, using a precomputed row of `B^-1`.
    ///
    /// Cheaper than `element` when a whole tableau row is needed, as in the dual ratio test.
    pub fn row_element(row: &[F], instance: &StandardForm<F>, j: usize) -> F {
        let constraints = instance.constraints();
        inner_product_with_iter(row, (0..constraints.nr_rows()).map(|i| constraints.get_value(i, j)))
    }

    /// Row `i` of `B^-1`.
    pub fn basis_inverse_row(&self, i: usize) -> &[F] {
        self.basis_inverse.row(i)
    }

    /// `B^-1`.
    pub fn basis_inverse(&self) -> &DenseMatrix<F> {
        &self.basis_inverse
    }

    /// `x_B`, by basis row.
    pub fn basic_values(&self) -> &[F] {
        &self.basic_values
    }

    /// `y = c_B B^-1`.
    pub fn shadow_price(&self) -> &[F] {
        &self.shadow_price
    }

    /// Objective value `c_B x_B` of the basic solution.
    pub fn objective(&self, instance: &StandardForm<F>, basis: &[usize]) -> F {
        basis.iter()
            .zip(&self.basic_values)
            .fold(F::zero(), |total, (&j, &value)| total + instance.cost(j) * value)
    }

    /// The basic solution as a vector of length `n`, zero on the non basic positions.
    pub fn solution(&self, basis: &[usize], nr_columns: usize) -> Vec<F> {
        let mut solution = vec![F::zero(); nr_columns];
        for (&j, &value) in basis.iter().zip(&self.basic_values) {
            solution[j] = value;
        }

        solution
    }
}
