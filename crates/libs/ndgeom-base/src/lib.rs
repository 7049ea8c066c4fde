//! # ndgeom-base
//! Core library for ndgeom.
//!
//! Contains the n-dimensional [`Point`] and [`Vector`] value types, the
//! [`Constraint`]s that validate them, and the linear independence test built
//! on top of the solver from `ndgeom-linalg`.
//!
//! Points and vectors of different dimensions interoperate: coordinates past
//! the end of the shorter one are read as zero.
#![warn(missing_docs)]

#[macro_use]
mod macros;

pub mod config;
pub mod constraint;
pub mod coord;
pub mod error;
pub mod independence;
pub mod operand;
pub mod point;
pub mod vector;

pub use config::{Config, ConfigError};
pub use constraint::{Constraint, ConstraintRef, ConstraintSet, ConstraintViolation};
pub use coord::{Coord, Real};
pub use error::{GeomError, Result};
pub use independence::{linear_independent, linear_independent_with, linear_independent_with_config};
pub use operand::Operand;
pub use point::{Kind, Point, PointLike};
pub use vector::{Vector, VectorLike};

/// Traits needed to use points and vectors.
pub mod prelude {
    pub use crate::{
        constraint::Constraint,
        point::{Point, PointLike},
        vector::{Vector, VectorLike},
    };
}
