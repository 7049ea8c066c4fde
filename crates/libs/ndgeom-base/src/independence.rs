//! Linear independence of a set of vectors.
//!
//! One unknown coefficient is assigned to every vector, and the weighted sum
//! `x0 * v0 + x1 * v1 + ...` is required to vanish on every axis. The vectors
//! are independent iff the only solution of this homogeneous system is the
//! one where every coefficient is zero.

use crate::{config::Config, coord::Real, point::PointLike, vector::Vector};
use linalg::{EquationSolver, GaussJordan, LinearExpr, Unknown};

/// Tests the vectors for linear independence with the default solver.
pub fn linear_independent<'a, I>(vectors: I) -> bool
where
    I: IntoIterator<Item = &'a Vector>,
{
    linear_independent_with(&GaussJordan::default(), vectors)
}

/// Tests the vectors for linear independence with the solver configured by
/// `config`.
pub fn linear_independent_with_config<'a, I>(config: &Config, vectors: I) -> bool
where
    I: IntoIterator<Item = &'a Vector>,
{
    linear_independent_with(&config.solver(), vectors)
}

/// Tests the vectors for linear independence with the given solver.
///
/// An empty set yields no system to solve and is reported as not independent.
pub fn linear_independent_with<'a, S, I>(solver: &S, vectors: I) -> bool
where
    S: EquationSolver<Real> + ?Sized,
    I: IntoIterator<Item = &'a Vector>,
{
    let vectors: Vec<&Vector> = vectors.into_iter().collect();
    let unknowns = Unknown::sequence(vectors.len());
    let equations = weighted_sum(&vectors, &unknowns);
    log::trace!(
        "linear independence of {} vectors over {} axes",
        vectors.len(),
        equations.len()
    );
    match solver.solve(&equations, &unknowns) {
        Some(solution) => solution.is_trivial(),
        None => false,
    }
}

/// One expression per axis of `Σ unknown_i * vector_i`.
///
/// Every vector is divided by its largest absolute coordinate so that the
/// solver's zero threshold applies to all of them alike. Scaling a column
/// leaves the rank, and so the triviality of the solution, unchanged.
fn weighted_sum(vectors: &[&Vector], unknowns: &[Unknown]) -> Vec<LinearExpr<Real>> {
    let dim = vectors.iter().map(|v| v.dimension()).max().unwrap_or(0);
    let scales: Vec<Real> = vectors
        .iter()
        .map(|v| match v.iter().fold(0.0, |m: Real, c| m.max(c.abs())) {
            m if m > 0.0 => m.recip(),
            _ => 1.0,
        })
        .collect();
    (0..dim)
        .map(|axis| {
            vectors
                .iter()
                .zip(&scales)
                .zip(unknowns)
                .fold(LinearExpr::zero(), |acc, ((v, s), x)| {
                    acc + LinearExpr::term(*x, v.coord(axis) * s)
                })
        })
        .collect()
}
