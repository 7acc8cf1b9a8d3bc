//! # Dense matrices
//!
//! Row-major storage with a shape that is fixed at creation. Only the operations that the simplex
//! family needs are provided: column selection, inversion and products with vectors.
use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};

use index_utils::remove_indices;
use num_traits::{Float, Zero};

use crate::data::linear_algebra::vector::inner_product;

/// Uses a `Vec<Vec<F>>` as underlying data structure. Dimensions are fixed at creation.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseMatrix<F> {
    data: Vec<Vec<F>>,
    nr_rows: usize,
    nr_columns: usize,
}

impl<F: Float> DenseMatrix<F> {
    /// Create a `DenseMatrix` from row-major data.
    ///
    /// All rows should have the same length; callers that can't guarantee this should validate
    /// first (see `Problem::new`).
    pub fn from_data(data: Vec<Vec<F>>) -> Self {
        let nr_rows = data.len();
        let nr_columns = data.first().map_or(0, Vec::len);
        debug_assert!(data.iter().all(|row| row.len() == nr_columns));

        Self { data, nr_rows, nr_columns }
    }

    /// Create a dense square identity matrix of size `len`.
    pub fn identity(len: usize) -> Self {
        let data = (0..len)
            .map(|i| (0..len).map(|j| if i == j { F::one() } else { F::zero() }).collect())
            .collect();

        Self { data, nr_rows: len, nr_columns: len }
    }

    /// Create a dense matrix of zero's of dimension `rows` x `columns`.
    pub fn zeros(rows: usize, columns: usize) -> Self {
        Self { data: vec![vec![F::zero(); columns]; rows], nr_rows: rows, nr_columns: columns }
    }

    /// Get the value at coordinate (`i`, `j`).
    pub fn get_value(&self, i: usize, j: usize) -> F {
        debug_assert!(i < self.nr_rows);
        debug_assert!(j < self.nr_columns);

        self.data[i][j]
    }

    /// Get all values in row `i` of this matrix.
    pub fn row(&self, i: usize) -> &[F] {
        debug_assert!(i < self.nr_rows);

        &self.data[i]
    }

    /// Get all values in column `j` of this matrix.
    pub fn column(&self, j: usize) -> Vec<F> {
        debug_assert!(j < self.nr_columns);

        self.data.iter().map(|row| row[j]).collect()
    }

    /// Square (or not) submatrix consisting of the given columns, in the given order.
    ///
    /// This is how the basis matrix `B` is formed from the constraint matrix and a list of basis
    /// indices.
    pub fn select_columns(&self, columns: &[usize]) -> Self {
        debug_assert!(columns.iter().all(|&j| j < self.nr_columns));

        let data = self.data.iter()
            .map(|row| columns.iter().map(|&j| row[j]).collect())
            .collect();

        Self { data, nr_rows: self.nr_rows, nr_columns: columns.len() }
    }

    /// Concatenate another matrix to the "right" (high column indices) of this matrix
    /// "horizontally" (number of rows must be equal).
    pub fn hcat(mut self, other: Self) -> Self {
        debug_assert_eq!(self.nr_rows, other.nr_rows);

        for (row, extension) in self.data.iter_mut().zip(other.data) {
            row.extend(extension);
        }
        self.nr_columns += other.nr_columns;

        self
    }

    /// Remove a set of rows.
    ///
    /// # Arguments
    ///
    /// * `rows`: Indices of the rows to remove, sorted and without duplicates.
    pub fn remove_rows(&mut self, rows: &[usize]) {
        debug_assert!(rows.is_sorted());
        debug_assert!(rows.iter().all(|&i| i < self.nr_rows));

        remove_indices(&mut self.data, rows);
        self.nr_rows = self.data.len();
    }

    /// Multiply row `i` with a factor `factor`.
    pub fn multiply_row(&mut self, i: usize, factor: F) {
        debug_assert!(i < self.nr_rows);

        for value in &mut self.data[i] {
            *value = *value * factor;
        }
    }

    /// Add a multiple of row `read_row` to row `write_row`.
    pub fn mul_add_rows(&mut self, read_row: usize, write_row: usize, factor: F) {
        debug_assert!(read_row < self.nr_rows);
        debug_assert!(write_row < self.nr_rows);
        debug_assert_ne!(read_row, write_row);

        for j in 0..self.nr_columns {
            let read = self.data[read_row][j];
            self.data[write_row][j] = self.data[write_row][j] + factor * read;
        }
    }

    /// Invert a square matrix using Gauss-Jordan elimination with partial pivoting.
    ///
    /// # Arguments
    ///
    /// * `tolerance`: Pivots with an absolute value at or below this value are considered zero.
    ///
    /// # Return value
    ///
    /// The inverse, or `None` if the matrix is (numerically) singular.
    pub fn inverse(&self, tolerance: F) -> Option<Self> {
        debug_assert_eq!(self.nr_rows, self.nr_columns);

        let size = self.nr_rows;
        let mut work = self.clone();
        let mut inverse = Self::identity(size);

        for column in 0..size {
            let pivot_row = (column..size)
                .max_by(|&left, &right| {
                    let (left, right) = (work.data[left][column].abs(), work.data[right][column].abs());
                    left.partial_cmp(&right).unwrap_or(Ordering::Equal)
                })?;
            let pivot = work.data[pivot_row][column];
            if pivot.abs() <= tolerance || !pivot.is_finite() {
                return None;
            }

            work.data.swap(column, pivot_row);
            inverse.data.swap(column, pivot_row);

            let factor = pivot.recip();
            work.multiply_row(column, factor);
            inverse.multiply_row(column, factor);

            for row in (0..size).filter(|&row| row != column) {
                let value = work.data[row][column];
                if !value.is_zero() {
                    work.mul_add_rows(column, row, -value);
                    inverse.mul_add_rows(column, row, -value);
                }
            }
        }

        Some(inverse)
    }

    /// Matrix-vector product `self * x`.
    pub fn mul_vector(&self, x: &[F]) -> Vec<F> {
        debug_assert_eq!(x.len(), self.nr_columns);

        self.data.iter().map(|row| inner_product(row, x)).collect()
    }

    /// Vector-matrix product `yᵀ * self`.
    pub fn left_mul_vector(&self, y: &[F]) -> Vec<F> {
        debug_assert_eq!(y.len(), self.nr_rows);

        let mut result = vec![F::zero(); self.nr_columns];
        for (row, &factor) in self.data.iter().zip(y) {
            if factor.is_zero() {
                continue;
            }
            for (total, &value) in result.iter_mut().zip(row) {
                *total = *total + factor * value;
            }
        }

        result
    }

    /// Inner product of row `i` with column `j` of another matrix.
    ///
    /// Used to compute single tableau elements `(B^-1 A_j)_i` without computing the whole column.
    pub fn row_times_column(&self, i: usize, other: &Self, j: usize) -> F {
        debug_assert_eq!(self.nr_columns, other.nr_rows);

        self.data[i].iter()
            .zip(&other.data)
            .fold(F::zero(), |total, (&left, right)| total + left * right[j])
    }

    /// Whether all values are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.data.iter().flatten().all(|value| value.is_finite())
    }

    /// Get the number of rows in this matrix.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Get the number of columns in this matrix.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }
}

impl<F: Float + Display> Display for DenseMatrix<F> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in &self.data {
            let values = row.iter().map(|value| format!("{:>10.4}", value)).collect::<Vec<_>>();
            writeln!(f, "[{}]", values.join(" "))?;
        }

        Ok(())
    }
}
