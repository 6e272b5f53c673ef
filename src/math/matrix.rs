use crate::math;
use crate::math::tuple::Tuple;
use approx::AbsDiffEq;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum MatrixError {
    #[error("invalid matrix shape {rows}x{columns}")]
    InvalidShape { rows: usize, columns: usize },
    #[error("expected {expected} values for a {rows}x{columns} matrix, got {got}")]
    InvalidValueCount {
        rows: usize,
        columns: usize,
        expected: usize,
        got: usize,
    },
    #[error("incompatible shapes for multiplication: {left_rows}x{left_columns} * {right_rows}x{right_columns}")]
    ShapeMismatch {
        left_rows: usize,
        left_columns: usize,
        right_rows: usize,
        right_columns: usize,
    },
    #[error("operation requires a square matrix, got {rows}x{columns}")]
    NotSquare { rows: usize, columns: usize },
    #[error("matrix is not invertible (determinant is zero)")]
    NotInvertible,
}

/// A grid of numbers, stored row-major.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    rows: usize,
    columns: usize,
    values: Vec<f64>,
}

impl Matrix {
    /// Creates a zero-filled matrix.
    pub fn zeros(rows: usize, columns: usize) -> Result<Matrix, MatrixError> {
        if rows < 1 || columns < 1 {
            return Err(MatrixError::InvalidShape { rows, columns });
        }
        Ok(Matrix {
            rows,
            columns,
            values: vec![0.0; rows * columns],
        })
    }

    /// Creates a matrix from an explicit row-major value list.
    pub fn from_values(rows: usize, columns: usize, values: Vec<f64>) -> Result<Matrix, MatrixError> {
        if rows < 1 || columns < 1 {
            return Err(MatrixError::InvalidShape { rows, columns });
        }
        let expected = rows * columns;
        if values.len() != expected {
            return Err(MatrixError::InvalidValueCount {
                rows,
                columns,
                expected,
                got: values.len(),
            });
        }
        Ok(Matrix {
            rows,
            columns,
            values,
        })
    }

    // Shape is known good at every call site; the transform builders and the
    // internal recursion go through here.
    pub(crate) fn new_unchecked(rows: usize, columns: usize, values: Vec<f64>) -> Matrix {
        debug_assert!(rows >= 1 && columns >= 1);
        debug_assert_eq!(values.len(), rows * columns);
        Matrix {
            rows,
            columns,
            values,
        }
    }

    /// The 4x4 identity matrix. Multiplying by it returns the original matrix.
    pub fn identity() -> Matrix {
        Matrix::new_unchecked(
            4,
            4,
            vec![
                1.0, 0.0, 0.0, 0.0, //
                0.0, 1.0, 0.0, 0.0, //
                0.0, 0.0, 1.0, 0.0, //
                0.0, 0.0, 0.0, 1.0,
            ],
        )
    }

    /// Creates a 4x1 column matrix from a tuple.
    pub fn from_tuple(t: &Tuple) -> Matrix {
        Matrix::new_unchecked(4, 1, vec![t.x, t.y, t.z, t.w])
    }

    /// Converts a 4x1 column matrix back to a tuple.
    pub fn to_tuple(&self) -> Tuple {
        debug_assert!(self.rows == 4 && self.columns == 1);
        Tuple::new(
            self.value(0, 0),
            self.value(1, 0),
            self.value(2, 0),
            self.value(3, 0),
        )
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    fn index(&self, row: usize, column: usize) -> usize {
        assert!(
            row < self.rows && column < self.columns,
            "index ({}, {}) out of range for matrix {}x{}",
            row,
            column,
            self.rows,
            self.columns
        );
        row * self.columns + column
    }

    /// Returns the value at (row, column).
    pub fn value(&self, row: usize, column: usize) -> f64 {
        self.values[self.index(row, column)]
    }

    /// Sets the value at (row, column).
    pub fn set_value(&mut self, row: usize, column: usize, value: f64) {
        let i = self.index(row, column);
        self.values[i] = value;
    }

    /// Approximately compares two matrices.
    pub fn equal(&self, other: &Matrix) -> bool {
        if self.rows != other.rows || self.columns != other.columns {
            return false;
        }
        self.values
            .iter()
            .zip(other.values.iter())
            .all(|(a, b)| math::equals(*a, *b))
    }

    /// Multiplies the matrix by another matrix.
    pub fn mat_mul(&self, other: &Matrix) -> Result<Matrix, MatrixError> {
        if self.columns != other.rows {
            return Err(MatrixError::ShapeMismatch {
                left_rows: self.rows,
                left_columns: self.columns,
                right_rows: other.rows,
                right_columns: other.columns,
            });
        }

        let mut result = Matrix::new_unchecked(
            self.rows,
            other.columns,
            vec![0.0; self.rows * other.columns],
        );
        for row in 0..result.rows {
            for col in 0..result.columns {
                let mut val = 0.0;
                for i in 0..self.columns {
                    val += self.value(row, i) * other.value(i, col);
                }
                result.set_value(row, col, val);
            }
        }
        Ok(result)
    }

    /// Multiplies the matrix by a tuple, via a 4x1 column matrix.
    pub fn tup_mul(&self, t: &Tuple) -> Result<Tuple, MatrixError> {
        Ok(self.mat_mul(&Matrix::from_tuple(t))?.to_tuple())
    }

    /// Turns rows into columns and columns into rows.
    pub fn transpose(&self) -> Matrix {
        let mut result =
            Matrix::new_unchecked(self.columns, self.rows, vec![0.0; self.rows * self.columns]);
        for row in 0..result.rows {
            for col in 0..result.columns {
                result.set_value(row, col, self.value(col, row));
            }
        }
        result
    }

    /// Computes the determinant by Laplace expansion along the first row.
    /// Exponential in matrix size, but only ever invoked on 2x2, 3x3 and 4x4
    /// matrices in this domain.
    pub fn determinant(&self) -> Result<f64, MatrixError> {
        if self.rows != self.columns {
            return Err(MatrixError::NotSquare {
                rows: self.rows,
                columns: self.columns,
            });
        }

        if self.rows == 1 {
            return Ok(self.value(0, 0));
        }
        if self.rows == 2 {
            return Ok(self.value(0, 0) * self.value(1, 1) - self.value(0, 1) * self.value(1, 0));
        }

        let mut det = 0.0;
        for col in 0..self.columns {
            det += self.value(0, col) * self.cofactor(0, col)?;
        }
        Ok(det)
    }

    /// Extracts the submatrix that excludes the given row and column.
    pub fn submatrix(&self, row: usize, column: usize) -> Result<Matrix, MatrixError> {
        if self.rows < 2 || self.columns < 2 {
            return Err(MatrixError::InvalidShape {
                rows: self.rows - 1,
                columns: self.columns - 1,
            });
        }

        let mut values = Vec::with_capacity((self.rows - 1) * (self.columns - 1));
        for r in 0..self.rows {
            if r == row {
                continue;
            }
            for c in 0..self.columns {
                if c == column {
                    continue;
                }
                values.push(self.value(r, c));
            }
        }
        Ok(Matrix::new_unchecked(self.rows - 1, self.columns - 1, values))
    }

    /// The determinant of the submatrix.
    pub fn minor(&self, row: usize, column: usize) -> Result<f64, MatrixError> {
        self.submatrix(row, column)?.determinant()
    }

    /// The minor, negated when row + column is odd.
    pub fn cofactor(&self, row: usize, column: usize) -> Result<f64, MatrixError> {
        let minor = self.minor(row, column)?;
        if (row + column) % 2 != 0 {
            Ok(-minor)
        } else {
            Ok(minor)
        }
    }

    /// An exact zero check, not an epsilon one: inversion is a hard
    /// mathematical precondition, and an epsilon tolerance here would accept
    /// near-singular matrices with large numerical error.
    pub fn is_invertible(&self) -> Result<bool, MatrixError> {
        Ok(self.determinant()? != 0.0)
    }

    /// Returns the inverse of the matrix. The transposed index assignment
    /// folds the adjugate transpose into the same loop as the division.
    pub fn inverse(&self) -> Result<Matrix, MatrixError> {
        let det = self.determinant()?;
        if det == 0.0 {
            return Err(MatrixError::NotInvertible);
        }

        let mut result =
            Matrix::new_unchecked(self.rows, self.columns, vec![0.0; self.rows * self.columns]);
        for row in 0..self.rows {
            for col in 0..self.columns {
                result.set_value(col, row, self.cofactor(row, col)? / det);
            }
        }
        Ok(result)
    }
}

impl AbsDiffEq for Matrix {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        math::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.rows == other.rows
            && self.columns == other.columns
            && self
                .values
                .iter()
                .zip(other.values.iter())
                .all(|(a, b)| f64::abs_diff_eq(a, b, epsilon))
    }
}
