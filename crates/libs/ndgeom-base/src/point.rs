//! Points in n-dimensional space.

use crate::{
    constraint::ConstraintSet,
    coord::{padded_pairs, Real},
    error::{GeomError, Result},
    vector::{Vector, VectorLike},
};
use std::fmt::{Debug, Display, Formatter};

/// Kind of a coordinate value.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Kind {
    /// A bare point.
    Point,
    /// A vector.
    Vector,
}

impl Kind {
    /// Name of the kind.
    pub const fn name(&self) -> &'static str {
        match self {
            Kind::Point => "Point",
            Kind::Vector => "Vector",
        }
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.name()) }
}

/// Capabilities shared by points and vectors: coordinates, constraints and
/// distances.
///
/// Coordinates past the dimension read as zero, so values of different
/// dimensions can be compared and measured against each other.
pub trait PointLike: Debug {
    /// The stored coordinates.
    fn coordinates(&self) -> &[Real];

    /// The attached constraints, in check order.
    fn constraints(&self) -> &ConstraintSet;

    /// Whether this is a point or a vector.
    fn kind(&self) -> Kind;

    /// Returns the value as a vector, if it is one.
    fn as_vector(&self) -> Option<&Vector> { None }

    /// Number of stored coordinates.
    fn dimension(&self) -> usize { self.coordinates().len() }

    /// Coordinate along the given axis, zero past the dimension.
    fn coord(&self, axis: usize) -> Real { self.coordinates().get(axis).copied().unwrap_or(0.0) }

    /// Returns true if every coordinate is zero.
    fn is_null(&self) -> bool { self.coordinates().iter().all(|c| *c == 0.0) }

    /// Minkowski distance of order `p`.
    ///
    /// `p = 2` is the Euclidean distance, `p = 1` the Manhattan distance,
    /// `p = ∞` the Chebyshev distance and `p = -∞` the smallest difference
    /// along any axis. `p = 0` is rejected.
    fn distance(&self, other: &dyn PointLike, p: Real) -> Result<Real> {
        minkowski(self.coordinates(), other.coordinates(), p)
    }

    /// Minkowski norm of order `p`, i.e. the distance to the origin.
    fn norm(&self, p: Real) -> Result<Real> { minkowski(self.coordinates(), &[], p) }

    /// Euclidean length, the distance to the origin.
    fn abs(&self) -> Real { power_sum(self.coordinates(), 2.0) }
}

/// Minkowski distance of order `p` over the zero-padded union of the axes.
pub fn minkowski(a: &[Real], b: &[Real], p: Real) -> Result<Real> {
    if p == 0.0 || p.is_nan() {
        return Err(GeomError::InvalidParameter(format!(
            "order `p` of a distance can't be {}",
            p
        )));
    }
    if a.is_empty() && b.is_empty() {
        return Ok(0.0);
    }
    let diffs: Vec<Real> = padded_pairs(a, b).map(|(x, y)| x - y).collect();
    Ok(power_sum(&diffs, p))
}

/// `(Σ |d|^p)^(1/p)` over a non-empty sequence.
///
/// The largest magnitude `m` is factored out, `m * (Σ (|d| / m)^p)^(1/p)`,
/// which keeps every term in `[0, 1]` for positive orders.
fn power_sum(diffs: &[Real], p: Real) -> Real {
    let abs = diffs.iter().map(|d| d.abs());
    if p == Real::INFINITY {
        return abs.fold(Real::NEG_INFINITY, Real::max);
    }
    if p == Real::NEG_INFINITY {
        return abs.fold(Real::INFINITY, Real::min);
    }
    if p == 1.0 {
        return abs.sum();
    }
    let m = abs.clone().fold(0.0, Real::max);
    if m == 0.0 {
        return 0.0;
    }
    let sum: Real = if p == 2.0 {
        abs.map(|d| (d / m) * (d / m)).sum()
    } else {
        abs.map(|d| (d / m).powf(p)).sum()
    };
    m * sum.powf(p.recip())
}

/// A location in n-dimensional space.
///
/// Points can't be added, subtracted or scaled; lift them with
/// [`Point::to_vector`] for that.
#[derive(Debug, Clone)]
pub struct Point {
    pub(crate) coords: Vec<Real>,
    pub(crate) constraints: ConstraintSet,
}

impl_coordinate_type!(Point, Kind::Point);

impl_padded_eq! {
    Point == Point;
    Point == Vector;
    Vector == Point;
    Vector == Vector;
}

impl Point {
    fn vector_ref(&self) -> Option<&Vector> { None }

    /// Adds a vector to this point.
    ///
    /// The addition is delegated to the vector; adding two points is an
    /// invalid operation.
    pub fn add(&self, other: &dyn PointLike) -> Result<Vector> {
        match other.as_vector() {
            Some(v) => v.add(self),
            None => Err(GeomError::InvalidOperation("can't sum two points")),
        }
    }

    /// Lifts the point into a new vector with the same coordinates and
    /// constraints.
    pub fn to_vector(&self) -> Result<Vector> {
        Vector::from_parts(self.coords.clone(), self.constraints.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::{self, ConstraintViolation};
    use approx::assert_relative_eq;
    use proptest::prelude::*;
    use std::{
        collections::hash_map::DefaultHasher,
        hash::{Hash, Hasher},
    };

    fn hash_of<T: Hash>(v: &T) -> u64 {
        let mut h = DefaultHasher::new();
        v.hash(&mut h);
        h.finish()
    }

    #[test]
    fn test_construction_normalizes_coordinates() {
        let p = Point::new([Some(1.0), None, Some(-0.0)]).unwrap();
        assert_eq!(p.coordinates(), &[1.0, 0.0, 0.0]);
        assert_eq!(p.dimension(), 3);
        assert_eq!(p.len(), 3);
        assert!(p.coordinates()[2].is_sign_positive());
        let q = Point::new([true, false]).unwrap();
        assert_eq!(q.coordinates(), &[1.0, 0.0]);
    }

    #[test]
    fn test_construction_checks_constraints() {
        let _ = env_logger::try_init();
        let err = Point::with_constraints([1, 2, 3], constraint::dimension(2)).unwrap_err();
        assert!(err.is_constraint_violation());
        assert!(Point::with_constraints([1, 2], [constraint::dimension(2), constraint::finite()]).is_ok());
    }

    #[test]
    fn test_constraint_error_is_not_wrapped() {
        let c = constraint::from_fn("even", |t| {
            if t.dimension() % 2 == 0 {
                Ok(())
            } else {
                Err(ConstraintViolation::new("even", "odd dimension"))
            }
        });
        match Point::with_constraints([1.0], c) {
            Err(GeomError::ConstraintViolation(v)) => {
                assert_eq!(v.constraint(), "even");
                assert_eq!(v.message(), "odd dimension");
            },
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_set_coordinates_revalidates() {
        let mut p = Point::with_constraints([0.5, 0.5], constraint::bounded(0.0, 1.0)).unwrap();
        p.set_coordinates([Some(0.25), None]).unwrap();
        assert_eq!(p.coordinates(), &[0.25, 0.0]);
        assert!(p.set_coordinates([2.0, 0.0]).is_err());
        // the rejected coordinates are rolled back
        assert_eq!(p.coordinates(), &[0.25, 0.0]);
    }

    #[test]
    fn test_add_constraints_appends_and_revalidates() {
        let mut p = Point::with_constraints([1.0, 2.0], constraint::finite()).unwrap();
        p.add_constraints(constraint::max_dimension(3)).unwrap();
        assert_eq!(p.constraints().len(), 2);
        assert!(p.add_constraints(constraint::dimension(5)).is_err());
        assert_eq!(p.constraints().len(), 2);
        p.add_constraints(vec![constraint::dimension(2), constraint::bounded(0.0, 2.0)])
            .unwrap();
        assert_eq!(p.constraints().len(), 4);
    }

    #[test]
    fn test_equality_is_zero_padded() {
        let a = Point::new([1.0, 2.0]).unwrap();
        let b = Point::new([1.0, 2.0, 0.0, 0.0]).unwrap();
        let c = Point::new([1.0, 2.0, 0.1]).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_eq!(Point::default(), Point::origin(4));
        assert_eq!(a, a.to_vector().unwrap());
    }

    #[test]
    fn test_truthiness() {
        assert!(!Point::origin(3).is_non_null());
        assert!(Point::origin(3).is_null());
        assert!(Point::new([0.0, 0.0, 1e-300]).unwrap().is_non_null());
        assert!(Point::default().is_null());
    }

    #[test]
    fn test_indexing_and_slicing() {
        let p = Point::new([1.0, 2.0, 3.0]).unwrap();
        assert_eq!(p[0], 1.0);
        assert_eq!(p[2], 3.0);
        assert_eq!(p[10], 0.0);
        assert_eq!(p.coord(7), 0.0);
        assert_eq!(p.slice(1..), &[2.0, 3.0]);
        assert_eq!(p.slice(..=1), &[1.0, 2.0]);
        assert_eq!(p.slice(2..10), &[3.0]);
        assert!(p.slice(5..8).is_empty());
        let (start, end) = (2, 1);
        assert!(p.slice(start..end).is_empty());
        assert_eq!(p.iter().collect::<Vec<_>>(), vec![1.0, 2.0, 3.0]);
        assert_eq!((&p).into_iter().sum::<Real>(), 6.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Point::new([3.0, 4.5]).unwrap().to_string(), "Point(3, 4.5)");
        assert_eq!(Point::default().to_string(), "Point()");
    }

    #[test]
    fn test_euclidean_distance() {
        let a = Point::new([3, 4]).unwrap();
        let b = Point::new([0, 0]).unwrap();
        assert_eq!(a.distance(&b, 2.0).unwrap(), 5.0);
        assert_eq!(a.norm(2.0).unwrap(), 5.0);
    }

    #[test]
    fn test_manhattan_distance() {
        let a = Point::new([1, 1]).unwrap();
        let b = Point::new([0, 0]).unwrap();
        assert_eq!(a.distance(&b, 1.0).unwrap(), 2.0);
    }

    #[test]
    fn test_chebyshev_distances() {
        let a = Point::new([1.0, -5.0, 2.0]).unwrap();
        let b = Point::new([0.0, 0.0]).unwrap();
        assert_eq!(a.distance(&b, Real::INFINITY).unwrap(), 5.0);
        assert_eq!(a.distance(&b, Real::NEG_INFINITY).unwrap(), 1.0);
    }

    #[test]
    fn test_general_order_distance() {
        let a = Point::new([1.0, 2.0]).unwrap();
        let b = Point::new([0.0]).unwrap();
        assert_relative_eq!(a.distance(&b, 3.0).unwrap(), 9.0f64.cbrt(), epsilon = 1e-12);
        assert_relative_eq!(
            a.norm(0.5).unwrap(),
            (1.0 + 2.0f64.sqrt()).powi(2),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_large_orders() {
        let origin = Point::origin(1);
        let near = Point::new([0.001]).unwrap();
        let far = Point::new([10.0]).unwrap();
        assert_relative_eq!(near.distance(&origin, 200.0).unwrap(), 0.001, max_relative = 1e-12);
        assert_relative_eq!(far.distance(&origin, 400.0).unwrap(), 10.0, max_relative = 1e-12);
        let a = Point::new([3.0, 4.0]).unwrap();
        let d = a.norm(400.0).unwrap();
        assert!(d.is_finite());
        assert!(d >= 4.0 && d < 4.0 + 1e-9);
        let huge = Point::new([3e200, 4e200]).unwrap();
        assert_relative_eq!(huge.norm(2.0).unwrap(), 5e200, max_relative = 1e-12);
    }

    #[test]
    fn test_abs_is_euclidean_length() {
        assert_eq!(Point::new([3.0, -4.0]).unwrap().abs(), 5.0);
        assert_eq!(Point::default().abs(), 0.0);
        assert_eq!(Point::origin(3).abs(), 0.0);
    }

    #[test]
    fn test_zero_order_is_rejected() {
        let a = Point::new([1.0]).unwrap();
        assert!(matches!(
            a.distance(&a, 0.0),
            Err(GeomError::InvalidParameter(_))
        ));
        assert!(a.norm(Real::NAN).is_err());
    }

    #[test]
    fn test_distance_between_empty_points() {
        assert_eq!(Point::default().norm(2.0).unwrap(), 0.0);
        assert_eq!(Point::default().norm(Real::INFINITY).unwrap(), 0.0);
    }

    #[test]
    fn test_point_plus_point_is_invalid() {
        let a = Point::new([1.0]).unwrap();
        let b = Point::new([2.0]).unwrap();
        assert!(matches!(a.add(&b), Err(GeomError::InvalidOperation(_))));
    }

    #[test]
    fn test_point_plus_vector_delegates() {
        let a = Point::new([1.0, 2.0]).unwrap();
        let v = Vector::new([1.0, 1.0]).unwrap();
        let sum = a.add(&v).unwrap();
        assert_eq!(sum.kind(), Kind::Vector);
        assert_eq!(sum.coordinates(), &[2.0, 3.0]);
    }

    #[test]
    fn test_to_vector_is_independent_copy() {
        let mut p = Point::with_constraints([1.0, 2.0], constraint::finite()).unwrap();
        let v = p.to_vector().unwrap();
        p.set_coordinates([5.0]).unwrap();
        assert_eq!(v.coordinates(), &[1.0, 2.0]);
        assert_eq!(v.constraints().len(), 1);
        assert_eq!(v.kind(), Kind::Vector);
    }

    fn coords(max_len: usize) -> impl Strategy<Value = Vec<Real>> {
        prop::collection::vec(-1.0e3..1.0e3f64, 0..max_len)
    }

    proptest! {
        #[test]
        fn distance_to_self_is_zero(a in coords(6), p in 0.5f64..5.0) {
            let a = Point::new(a).unwrap();
            prop_assert_eq!(a.distance(&a, p).unwrap(), 0.0);
        }

        #[test]
        fn distance_is_symmetric(a in coords(6), b in coords(6), p in 0.5f64..5.0) {
            let a = Point::new(a).unwrap();
            let b = Point::new(b).unwrap();
            prop_assert_eq!(a.distance(&b, p).unwrap(), b.distance(&a, p).unwrap());
        }

        #[test]
        fn triangle_inequality(a in coords(5), b in coords(5), c in coords(5), p in 1.0f64..4.0) {
            let a = Point::new(a).unwrap();
            let b = Point::new(b).unwrap();
            let c = Point::new(c).unwrap();
            let direct = a.distance(&c, p).unwrap();
            let detour = a.distance(&b, p).unwrap() + b.distance(&c, p).unwrap();
            prop_assert!(direct <= detour * (1.0 + 1e-9) + 1e-9);
        }

        #[test]
        fn padded_points_are_equal(a in coords(5), extra in 0usize..4) {
            let mut longer = a.clone();
            longer.extend(std::iter::repeat(0.0).take(extra));
            let a = Point::new(a).unwrap();
            let b = Point::new(longer).unwrap();
            prop_assert_eq!(&a, &b);
            prop_assert_eq!(hash_of(&a), hash_of(&b));
        }
    }
}
