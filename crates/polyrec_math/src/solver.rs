//! Dense Vandermonde solve for polynomial interpolation.
//!
//! Poses "find the degree K-1 polynomial through K points" as the linear
//! system `V c = y` with `V[i][j] = x_i^j`, then runs Gaussian elimination
//! with partial pivoting and back-substitution. Partial pivoting matters
//! here: Vandermonde matrices are badly conditioned even for moderate K, so
//! the largest-magnitude candidate pivot is selected at every column.

use num_traits::Float;

use crate::error::MathError;

/// Square matrix in row-major order with an attached right-hand side, the
/// working state of the elimination.
struct Tableau<F> {
    a: Vec<F>,
    b: Vec<F>,
    n: usize,
}

impl<F: Float> Tableau<F> {
    /// Build the Vandermonde tableau: row i holds the powers of `xs[i]`
    /// from 0 to n-1, rhs holds `ys`.
    fn vandermonde(xs: &[F], ys: &[F]) -> Self {
        let n = xs.len();
        let mut a = vec![F::zero(); n * n];
        for i in 0..n {
            for j in 0..n {
                a[i * n + j] = xs[i].powi(j as i32);
            }
        }
        Tableau {
            a,
            b: ys.to_vec(),
            n,
        }
    }

    #[inline]
    fn at(&self, row: usize, col: usize) -> F {
        self.a[row * self.n + col]
    }

    fn swap_rows(&mut self, r1: usize, r2: usize) {
        if r1 == r2 {
            return;
        }
        for j in 0..self.n {
            self.a.swap(r1 * self.n + j, r2 * self.n + j);
        }
        self.b.swap(r1, r2);
    }

    /// Forward elimination with partial pivoting. Leaves the tableau upper
    /// triangular or fails on a (numerically) zero pivot.
    fn eliminate(&mut self) -> Result<(), MathError> {
        let n = self.n;
        for col in 0..n {
            // Select the largest-magnitude pivot among rows col..n
            let mut pivot_row = col;
            for row in col + 1..n {
                if self.at(row, col).abs() > self.at(pivot_row, col).abs() {
                    pivot_row = row;
                }
            }
            self.swap_rows(col, pivot_row);

            let pivot = self.at(col, col);
            if pivot.abs() <= F::epsilon() {
                return Err(MathError::SingularMatrix { pivot_col: col });
            }

            for row in col + 1..n {
                let factor = self.at(row, col) / pivot;
                for j in col..n {
                    let updated = self.at(row, j) - factor * self.at(col, j);
                    self.a[row * n + j] = updated;
                }
                self.b[row] = self.b[row] - factor * self.b[col];
            }
        }
        Ok(())
    }

    /// Back-substitution over the upper-triangular tableau.
    fn back_substitute(self) -> Vec<F> {
        let n = self.n;
        let mut coeffs = vec![F::zero(); n];
        for i in (0..n).rev() {
            let mut acc = self.b[i];
            for j in i + 1..n {
                acc = acc - self.at(i, j) * coeffs[j];
            }
            coeffs[i] = acc / self.at(i, i);
        }
        coeffs
    }
}

/// Solve for the coefficients of the polynomial of degree `xs.len() - 1`
/// passing through the points `(xs[i], ys[i])`.
///
/// Returns coefficients ordered lowest degree first. The x-values must be
/// pairwise distinct; repeated x-values make the Vandermonde matrix singular
/// and surface as [`MathError::SingularMatrix`].
pub fn solve_vandermonde<F: Float>(xs: &[F], ys: &[F]) -> Result<Vec<F>, MathError> {
    if xs.len() != ys.len() || xs.is_empty() {
        return Err(MathError::DimensionMismatch {
            xs: xs.len(),
            ys: ys.len(),
        });
    }
    let mut tableau = Tableau::vandermonde(xs, ys);
    tableau.eliminate()?;
    Ok(tableau.back_substitute())
}
