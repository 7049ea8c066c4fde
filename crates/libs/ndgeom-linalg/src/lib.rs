//! # ndgeom-linalg
//! Linear algebra helpers for ndgeom.
//!
//! Provides linear expressions over indexed unknowns, linear systems built
//! from them, and an [`EquationSolver`] that reduces a system to reduced row
//! echelon form to describe its solution set.
#![warn(missing_docs)]

pub mod expr;
pub mod solve;
pub mod system;

pub use expr::{LinearExpr, Unknown};
pub use solve::{Binding, EquationSolver, GaussJordan, Solution};
pub use system::LinearSystem;
