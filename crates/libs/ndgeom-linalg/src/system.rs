//! Dense linear systems `A x = b`.

use crate::expr::{LinearExpr, Unknown};
use num_traits::Float;

/// A dense linear system in row-major augmented form.
///
/// Each row is one equation `a0 * x0 + ... + a{n-1} * x{n-1} = b`, where the
/// columns follow the order of the unknowns the system was built with.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearSystem<T> {
    /// Number of equations.
    rows: usize,
    /// Number of unknowns.
    cols: usize,
    /// Coefficients, `rows * cols` elements.
    coeffs: Vec<T>,
    /// Right hand side, one element per equation.
    rhs: Vec<T>,
}

impl<T: Float> LinearSystem<T> {
    /// Builds the system `expr = 0` for every expression.
    ///
    /// The constant term of each expression moves to the right hand side.
    /// Coefficients of unknowns that are not listed are ignored.
    pub fn from_exprs(equations: &[LinearExpr<T>], unknowns: &[Unknown]) -> Self {
        let rows = equations.len();
        let cols = unknowns.len();
        let mut coeffs = Vec::with_capacity(rows * cols);
        let mut rhs = Vec::with_capacity(rows);
        for eqn in equations {
            if eqn.unknowns().any(|x| !unknowns.contains(&x)) {
                log::warn!("equation references unknowns outside of the solved set, ignoring them");
            }
            coeffs.extend(unknowns.iter().map(|x| eqn.coeff(*x)));
            rhs.push(-eqn.constant_term());
        }
        Self {
            rows,
            cols,
            coeffs,
            rhs,
        }
    }

    /// Builds a system from row-major coefficients and a right hand side.
    ///
    /// Returns `None` if the sizes do not agree.
    pub fn from_rows(cols: usize, coeffs: Vec<T>, rhs: Vec<T>) -> Option<Self> {
        if coeffs.len() != rhs.len() * cols {
            return None;
        }
        Some(Self {
            rows: rhs.len(),
            cols,
            coeffs,
            rhs,
        })
    }

    /// Number of equations.
    pub fn rows(&self) -> usize { self.rows }

    /// Number of unknowns.
    pub fn cols(&self) -> usize { self.cols }

    /// Coefficient at the given equation and unknown column.
    pub fn coeff(&self, row: usize, col: usize) -> T { self.coeffs[row * self.cols + col] }

    /// Right hand side of the given equation.
    pub fn rhs(&self, row: usize) -> T { self.rhs[row] }

    /// Returns true if every right hand side is zero.
    pub fn is_homogeneous(&self) -> bool { self.rhs.iter().all(|b| b.is_zero()) }

    /// Largest absolute value among all entries, including the right hand side.
    pub fn max_abs(&self) -> T {
        self.coeffs
            .iter()
            .chain(self.rhs.iter())
            .fold(T::zero(), |acc, v| acc.max(v.abs()))
    }

    /// Splits the system into its augmented rows, `cols + 1` values each.
    pub(crate) fn augmented(&self) -> Vec<Vec<T>> {
        (0..self.rows)
            .map(|r| {
                let mut row = self.coeffs[r * self.cols..(r + 1) * self.cols].to_vec();
                row.push(self.rhs[r]);
                row
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_exprs() {
        let xs = Unknown::sequence(2);
        let eqns = vec![
            LinearExpr::from_coeffs(vec![1.0f64, 2.0], -3.0),
            LinearExpr::from_coeffs(vec![0.0, 5.0], 0.0),
        ];
        let sys = LinearSystem::from_exprs(&eqns, &xs);
        assert_eq!(sys.rows(), 2);
        assert_eq!(sys.cols(), 2);
        assert_eq!(sys.coeff(0, 1), 2.0);
        assert_eq!(sys.coeff(1, 1), 5.0);
        assert_eq!(sys.rhs(0), 3.0);
        assert!(!sys.is_homogeneous());
        assert_eq!(sys.max_abs(), 5.0);
    }

    #[test]
    fn test_from_exprs_column_order_follows_unknowns() {
        let xs = vec![Unknown(1), Unknown(0)];
        let eqns = vec![LinearExpr::from_coeffs(vec![7.0f64, 9.0], 0.0)];
        let sys = LinearSystem::from_exprs(&eqns, &xs);
        assert_eq!(sys.coeff(0, 0), 9.0);
        assert_eq!(sys.coeff(0, 1), 7.0);
        assert!(sys.is_homogeneous());
    }

    #[test]
    fn test_from_rows_size_mismatch() {
        assert!(LinearSystem::from_rows(2, vec![1.0f64, 2.0, 3.0], vec![0.0, 0.0]).is_none());
        let sys = LinearSystem::from_rows(2, vec![1.0f64, 2.0, 3.0, 4.0], vec![0.0, 1.0]).unwrap();
        assert_eq!(sys.augmented(), vec![vec![1.0, 2.0, 0.0], vec![3.0, 4.0, 1.0]]);
    }
}
