//! Operands whose kind is only known at runtime.
//!
//! [`Point`] and [`Vector`] expose their operations through typed methods;
//! [`Operand`] covers the cases where scalars, points and vectors are mixed
//! freely and the combination decides which operation applies, if any.

use crate::{
    coord::Real,
    error::{GeomError, Result},
    point::{Point, PointLike},
    vector::{Vector, VectorLike},
};
use std::fmt::{Display, Formatter};

/// A scalar, a point or a vector.
#[derive(Debug, Clone)]
pub enum Operand {
    /// A plain number.
    Scalar(Real),
    /// A bare point.
    Point(Point),
    /// A vector.
    Vector(Vector),
}

impl Operand {
    /// Name of the operand kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Operand::Scalar(_) => "Scalar",
            Operand::Point(_) => "Point",
            Operand::Vector(_) => "Vector",
        }
    }

    /// Returns the operand as a point or vector, if it is one.
    pub fn as_point_like(&self) -> Option<&dyn PointLike> {
        match self {
            Operand::Scalar(_) => None,
            Operand::Point(p) => Some(p),
            Operand::Vector(v) => Some(v),
        }
    }

    /// Returns the scalar value, if it is one.
    pub fn as_scalar(&self) -> Option<Real> {
        match self {
            Operand::Scalar(s) => Some(*s),
            _ => None,
        }
    }

    /// Adds two operands.
    ///
    /// Vectors accept vectors and points; a point only accepts a vector, to
    /// which the addition is handed over.
    pub fn add(&self, rhs: &Operand) -> Result<Operand> {
        match (self, rhs) {
            (Operand::Scalar(a), Operand::Scalar(b)) => Ok(Operand::Scalar(a + b)),
            (Operand::Point(_), Operand::Point(_)) => {
                Err(GeomError::InvalidOperation("can't sum two points"))
            },
            (Operand::Point(p), Operand::Vector(v)) => v.add(p).map(Operand::Vector),
            (Operand::Vector(v), Operand::Point(p)) => v.add(p).map(Operand::Vector),
            (Operand::Vector(a), Operand::Vector(b)) => a.add(b).map(Operand::Vector),
            (Operand::Point(_), Operand::Scalar(_)) | (Operand::Scalar(_), Operand::Point(_)) => {
                Err(GeomError::Unsupported("can't sum points with scalars"))
            },
            (Operand::Vector(_), Operand::Scalar(_)) | (Operand::Scalar(_), Operand::Vector(_)) => {
                Err(GeomError::Unsupported(
                    "can't sum vectors to anything but other vectors or points",
                ))
            },
        }
    }

    /// Subtracts `rhs` from `self`.
    pub fn sub(&self, rhs: &Operand) -> Result<Operand> {
        match (self, rhs) {
            (Operand::Scalar(a), Operand::Scalar(b)) => Ok(Operand::Scalar(a - b)),
            (Operand::Vector(a), Operand::Vector(b)) => a.subtract(b).map(Operand::Vector),
            (Operand::Point(_), _) | (_, Operand::Point(_)) => Err(GeomError::Unsupported(
                "subtraction is not implemented on points",
            )),
            _ => Err(GeomError::Unsupported(
                "can't subtract anything but vectors from other vectors",
            )),
        }
    }

    /// Multiplies two operands.
    ///
    /// A vector times a scalar scales it, a vector times a vector is their dot
    /// product.
    pub fn mul(&self, rhs: &Operand) -> Result<Operand> {
        match (self, rhs) {
            (Operand::Scalar(a), Operand::Scalar(b)) => Ok(Operand::Scalar(a * b)),
            (Operand::Point(_), _) | (_, Operand::Point(_)) => Err(GeomError::Unsupported(
                "multiplication is not implemented on points",
            )),
            (Operand::Scalar(s), Operand::Vector(v)) => v.scalar_multiply(*s).map(Operand::Vector),
            (Operand::Vector(v), other) => v.multiply(other),
        }
    }

    /// Minkowski distance of order `p` between two points or vectors.
    pub fn distance(&self, rhs: &Operand, p: Real) -> Result<Real> {
        let lhs = self.expect_point_like()?;
        let rhs = rhs.expect_point_like()?;
        lhs.distance(rhs, p)
    }

    fn expect_point_like(&self) -> Result<&dyn PointLike> {
        self.as_point_like().ok_or(GeomError::TypeMismatch {
            expected: "Point",
            actual: self.kind_name(),
        })
    }
}

impl From<Real> for Operand {
    fn from(v: Real) -> Self { Operand::Scalar(v) }
}

impl From<Point> for Operand {
    fn from(p: Point) -> Self { Operand::Point(p) }
}

impl From<Vector> for Operand {
    fn from(v: Vector) -> Self { Operand::Vector(v) }
}

impl Display for Operand {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Operand::Scalar(s) => write!(f, "{}", s),
            Operand::Point(p) => write!(f, "{}", p),
            Operand::Vector(v) => write!(f, "{}", v),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point<const N: usize>(c: [f64; N]) -> Operand { Point::new(c).unwrap().into() }

    fn vector<const N: usize>(c: [f64; N]) -> Operand { Vector::new(c).unwrap().into() }

    #[test]
    fn test_scalars() {
        let a = Operand::from(2.0);
        let b = Operand::from(3.0);
        assert_eq!(a.add(&b).unwrap().as_scalar(), Some(5.0));
        assert_eq!(a.sub(&b).unwrap().as_scalar(), Some(-1.0));
        assert_eq!(a.mul(&b).unwrap().as_scalar(), Some(6.0));
    }

    #[test]
    fn test_point_plus_point_is_invalid() {
        assert!(matches!(
            point([1.0]).add(&point([2.0])),
            Err(GeomError::InvalidOperation(_))
        ));
    }

    #[test]
    fn test_point_plus_vector_yields_vector() {
        let r = point([1.0, 2.0]).add(&vector([1.0, 0.0])).unwrap();
        assert_eq!(r.to_string(), "Vector(2, 2)");
        let r = vector([1.0, 0.0]).add(&point([1.0, 2.0])).unwrap();
        assert_eq!(r.to_string(), "Vector(2, 2)");
    }

    #[test]
    fn test_points_reject_sub_and_mul() {
        for rhs in [point([1.0]), vector([1.0]), Operand::from(2.0)] {
            assert!(matches!(point([1.0]).sub(&rhs), Err(GeomError::Unsupported(_))));
            assert!(matches!(point([1.0]).mul(&rhs), Err(GeomError::Unsupported(_))));
        }
        assert!(matches!(vector([1.0]).sub(&point([1.0])), Err(GeomError::Unsupported(_))));
        assert!(matches!(vector([1.0]).mul(&point([1.0])), Err(GeomError::Unsupported(_))));
    }

    #[test]
    fn test_vector_plus_scalar_is_unsupported() {
        assert!(matches!(vector([1.0]).add(&Operand::from(1.0)), Err(GeomError::Unsupported(_))));
        assert!(matches!(Operand::from(1.0).add(&vector([1.0])), Err(GeomError::Unsupported(_))));
        assert!(matches!(vector([1.0]).sub(&Operand::from(1.0)), Err(GeomError::Unsupported(_))));
    }

    #[test]
    fn test_multiplication_dispatch() {
        let scaled = vector([1.0, 2.0]).mul(&Operand::from(3.0)).unwrap();
        assert_eq!(scaled.to_string(), "Vector(3, 6)");
        let reflected = Operand::from(3.0).mul(&vector([1.0, 2.0])).unwrap();
        assert_eq!(reflected.to_string(), "Vector(3, 6)");
        let dot = vector([1.0, 2.0, 3.0]).mul(&vector([4.0, 5.0, 6.0])).unwrap();
        assert_eq!(dot.as_scalar(), Some(32.0));
        assert!(matches!(
            vector([1.0]).mul(&vector([1.0, 2.0])),
            Err(GeomError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_vector_subtraction() {
        let r = vector([3.0, 3.0]).sub(&vector([1.0, 2.0])).unwrap();
        assert_eq!(r.to_string(), "Vector(2, 1)");
    }

    #[test]
    fn test_distance_requires_points() {
        assert_eq!(point([3.0, 4.0]).distance(&vector([0.0]), 2.0).unwrap(), 5.0);
        assert!(matches!(
            point([1.0]).distance(&Operand::from(1.0), 2.0),
            Err(GeomError::TypeMismatch { expected: "Point", actual: "Scalar" })
        ));
    }
}
