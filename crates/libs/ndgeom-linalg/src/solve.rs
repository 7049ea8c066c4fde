//! Solving linear systems.

use crate::{
    expr::{LinearExpr, Unknown},
    system::LinearSystem,
};
use num_traits::Float;

/// Value assigned to an unknown by a [`Solution`].
#[derive(Debug, Clone, PartialEq)]
pub enum Binding<T> {
    /// The unknown has exactly this value.
    Fixed(T),
    /// The unknown is `constant + Σ coeff * free` over free unknowns.
    Dependent {
        /// Constant part of the value.
        constant: T,
        /// Free unknowns with their coefficients.
        terms: Vec<(Unknown, T)>,
    },
    /// The unknown can take any value.
    Free,
}

impl<T: Float> Binding<T> {
    /// Returns the value if it is fully determined.
    pub fn value(&self) -> Option<T> {
        match self {
            Binding::Fixed(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns true if the unknown is determined and equal to zero.
    pub fn is_zero(&self) -> bool { matches!(self, Binding::Fixed(v) if v.is_zero()) }
}

/// Solution set of a consistent linear system.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<T> {
    unknowns: Vec<Unknown>,
    bindings: Vec<Binding<T>>,
}

impl<T: Float> Solution<T> {
    /// Returns the binding of the given unknown, if it was solved for.
    pub fn get(&self, unknown: Unknown) -> Option<&Binding<T>> {
        self.unknowns
            .iter()
            .position(|x| *x == unknown)
            .map(|i| &self.bindings[i])
    }

    /// Iterates over the unknowns and their bindings.
    pub fn iter(&self) -> impl Iterator<Item = (Unknown, &Binding<T>)> {
        self.unknowns.iter().copied().zip(self.bindings.iter())
    }

    /// Returns true if every unknown has a single value.
    pub fn is_unique(&self) -> bool { self.bindings.iter().all(|b| b.value().is_some()) }

    /// Returns true if the only solution is the one where every unknown is zero.
    pub fn is_trivial(&self) -> bool { self.bindings.iter().all(Binding::is_zero) }

    /// Unknowns that can take any value.
    pub fn free_unknowns(&self) -> Vec<Unknown> {
        self.iter()
            .filter(|(_, b)| matches!(b, Binding::Free))
            .map(|(x, _)| x)
            .collect()
    }
}

/// Solves a set of linear equations for a set of unknowns.
pub trait EquationSolver<T> {
    /// Solves `equation = 0` for every equation.
    ///
    /// Returns `None` when there is no solution to report, either because the
    /// system is inconsistent or because there is nothing to solve.
    fn solve(&self, equations: &[LinearExpr<T>], unknowns: &[Unknown]) -> Option<Solution<T>>;
}

/// Gauss-Jordan elimination with partial pivoting.
///
/// Entries whose magnitude is below `tolerance * max|entry|` are treated as
/// zero. A system without any non-zero entry leaves every unknown free.
#[derive(Debug, Copy, Clone)]
pub struct GaussJordan<T> {
    tolerance: T,
}

impl<T: Float> Default for GaussJordan<T> {
    fn default() -> Self {
        Self {
            tolerance: T::epsilon().sqrt(),
        }
    }
}

impl<T: Float> GaussJordan<T> {
    /// Creates a solver with the given relative tolerance.
    pub fn new(tolerance: T) -> Self {
        Self {
            tolerance: tolerance.abs(),
        }
    }

    /// The relative tolerance.
    pub fn tolerance(&self) -> T { self.tolerance }

    /// Solves a prepared system; the unknowns name its columns.
    pub fn solve_system(&self, system: &LinearSystem<T>, unknowns: &[Unknown]) -> Option<Solution<T>> {
        debug_assert_eq!(system.cols(), unknowns.len());
        let (rows, cols) = (system.rows(), system.cols());
        if rows == 0 || cols == 0 {
            return None;
        }
        let eps = self.tolerance * system.max_abs();
        let mut m = system.augmented();
        let mut pivots: Vec<usize> = Vec::with_capacity(rows.min(cols));

        let mut row = 0;
        for col in 0..cols {
            if row == rows {
                break;
            }
            let (best, best_val) = (row..rows)
                .map(|r| (r, m[r][col].abs()))
                .fold((row, T::zero()), |acc, cur| if cur.1 > acc.1 { cur } else { acc });
            if best_val <= eps {
                for r in row..rows {
                    m[r][col] = T::zero();
                }
                continue;
            }
            m.swap(row, best);

            let pivot = m[row][col];
            for v in m[row].iter_mut() {
                *v = *v / pivot;
            }
            for r in 0..rows {
                if r == row {
                    continue;
                }
                let factor = m[r][col];
                if factor.is_zero() {
                    continue;
                }
                for c in 0..=cols {
                    let delta = factor * m[row][c];
                    m[r][c] = m[r][c] - delta;
                    if m[r][c].abs() <= eps {
                        m[r][c] = T::zero();
                    }
                }
            }
            pivots.push(col);
            row += 1;
        }
        log::trace!(
            "gauss-jordan: {} equations, {} unknowns, rank {}",
            rows,
            cols,
            pivots.len()
        );

        if m[row..].iter().any(|r| r[cols].abs() > eps) {
            log::trace!("gauss-jordan: inconsistent system");
            return None;
        }

        let mut bindings = vec![Binding::Free; cols];
        for (r, &pc) in pivots.iter().enumerate() {
            let constant = if m[r][cols].abs() <= eps {
                T::zero()
            } else {
                m[r][cols]
            };
            let terms: Vec<(Unknown, T)> = (0..cols)
                .filter(|c| !pivots.contains(c) && m[r][*c].abs() > eps)
                .map(|c| (unknowns[c], -m[r][c]))
                .collect();
            bindings[pc] = if terms.is_empty() {
                Binding::Fixed(constant)
            } else {
                Binding::Dependent { constant, terms }
            };
        }

        Some(Solution {
            unknowns: unknowns.to_vec(),
            bindings,
        })
    }
}

impl<T: Float> EquationSolver<T> for GaussJordan<T> {
    fn solve(&self, equations: &[LinearExpr<T>], unknowns: &[Unknown]) -> Option<Solution<T>> {
        let system = LinearSystem::from_exprs(equations, unknowns);
        self.solve_system(&system, unknowns)
    }
}
