//! Vectors in n-dimensional space.

use crate::{
    constraint::ConstraintSet,
    coord::{padded_eq, Real},
    error::{GeomError, Result},
    independence::linear_independent,
    operand::Operand,
    point::{Kind, Point, PointLike},
};

/// Vector space operations on top of [`PointLike`].
pub trait VectorLike: PointLike {
    /// Adds a vector or a point, producing a new vector.
    fn add(&self, other: &dyn PointLike) -> Result<Vector>;

    /// Subtracts a vector: `self + other * -1`.
    fn subtract(&self, other: &Vector) -> Result<Vector>;

    /// Multiplies every coordinate by `factor`.
    fn scalar_multiply(&self, factor: Real) -> Result<Vector>;

    /// Dot product; both vectors must have exactly the same dimension.
    fn dot_product(&self, other: &Vector) -> Result<Real>;

    /// Scalar multiplication for a scalar operand, dot product for a vector.
    fn multiply(&self, rhs: &Operand) -> Result<Operand>;

    /// Returns true if the two vectors are linearly dependent.
    fn is_parallel_to(&self, other: &dyn PointLike) -> Result<bool>;

    /// Returns true if the dot product of the two vectors is zero.
    fn is_perpendicular_to(&self, other: &dyn PointLike) -> Result<bool>;
}

/// A vector in n-dimensional space.
///
/// Every operation returns a new vector; the constraints of the result are
/// the union of the operands' constraints, checked against the result.
#[derive(Debug, Clone)]
pub struct Vector {
    pub(crate) coords: Vec<Real>,
    pub(crate) constraints: ConstraintSet,
}

impl_coordinate_type!(Vector, Kind::Vector);

impl Vector {
    fn vector_ref(&self) -> Option<&Vector> { Some(self) }

    /// The null vector without any coordinate.
    pub fn null() -> Self { Self::origin(0) }

    /// Sums the vectors over the zero-padded union of their axes.
    ///
    /// The sum of nothing is the null vector.
    pub fn sum<'a, I>(vectors: I) -> Result<Vector>
    where
        I: IntoIterator<Item = &'a Vector>,
    {
        let values: Vec<&dyn PointLike> = vectors
            .into_iter()
            .map(|v| v as &dyn PointLike)
            .collect();
        sum_of(&values)
    }

    /// Lowers the vector into a new point with the same coordinates and
    /// constraints.
    pub fn to_point(&self) -> Result<Point> {
        Point::from_parts(self.coords.clone(), self.constraints.clone())
    }

    /// Alias of [`VectorLike::dot_product`].
    pub fn scalar_product(&self, other: &Vector) -> Result<Real> { self.dot_product(other) }

    /// See [`linear_independent`](crate::linear_independent).
    pub fn linear_independent<'a, I>(vectors: I) -> bool
    where
        I: IntoIterator<Item = &'a Vector>,
    {
        linear_independent(vectors)
    }
}

fn sum_of(values: &[&dyn PointLike]) -> Result<Vector> {
    let dim = match values.iter().map(|v| v.dimension()).max() {
        Some(dim) => dim,
        None => return Ok(Vector::null()),
    };
    let coords: Vec<Real> = (0..dim)
        .map(|axis| values.iter().map(|v| v.coord(axis)).sum::<Real>())
        .collect();
    let constraints = ConstraintSet::union(values.iter().map(|v| v.constraints()));
    Vector::from_parts(coords, constraints)
}

impl VectorLike for Vector {
    fn add(&self, other: &dyn PointLike) -> Result<Vector> {
        match (self.is_null(), other.is_null()) {
            (false, true) => {
                log::trace!("{} + null: copying the non-null operand", self);
                Vector::from_parts(self.coords.clone(), self.constraints.clone())
            },
            (true, _) => {
                log::trace!("null + {:?}: copying the other operand", other);
                Vector::from_parts(other.coordinates().to_vec(), other.constraints().clone())
            },
            _ if padded_eq(&self.coords, other.coordinates()) => self.scalar_multiply(2.0),
            _ => {
                let operands: [&dyn PointLike; 2] = [self, other];
                sum_of(&operands)
            },
        }
    }

    fn subtract(&self, other: &Vector) -> Result<Vector> { self.add(&other.scalar_multiply(-1.0)?) }

    fn scalar_multiply(&self, factor: Real) -> Result<Vector> {
        Vector::from_parts(
            self.coords.iter().map(|c| c * factor).collect(),
            self.constraints.clone(),
        )
    }

    fn dot_product(&self, other: &Vector) -> Result<Real> {
        if self.dimension() != other.dimension() {
            return Err(GeomError::DimensionMismatch {
                left: self.dimension(),
                right: other.dimension(),
            });
        }
        Ok(self
            .coords
            .iter()
            .zip(other.coords.iter())
            .map(|(a, b)| a * b)
            .sum())
    }

    fn multiply(&self, rhs: &Operand) -> Result<Operand> {
        match rhs {
            Operand::Scalar(s) => self.scalar_multiply(*s).map(Operand::Vector),
            Operand::Vector(v) => self.dot_product(v).map(Operand::Scalar),
            Operand::Point(_) => Err(GeomError::Unsupported(
                "multiplication is not implemented on points",
            )),
        }
    }

    fn is_parallel_to(&self, other: &dyn PointLike) -> Result<bool> {
        let other = comparable(self, other, "parallelism")?;
        Ok(!linear_independent([self, other]))
    }

    fn is_perpendicular_to(&self, other: &dyn PointLike) -> Result<bool> {
        let other = comparable(self, other, "perpendicularity")?;
        Ok(self.dot_product(other)? == 0.0)
    }
}

/// Guards shared by the direction predicates: no null operand, and the other
/// operand must be a vector.
fn comparable<'a>(
    this: &Vector,
    other: &'a dyn PointLike,
    what: &'static str,
) -> Result<&'a Vector> {
    if this.is_null() || other.is_null() {
        return Err(GeomError::ZeroVector(what));
    }
    other.as_vector().ok_or(GeomError::TypeMismatch {
        expected: Kind::Vector.name(),
        actual: other.kind().name(),
    })
}

macro_rules! impl_vector_binary_ops {
    ($($trait:ident, $op:ident, $method:ident);*) => {
        $(
            impl std::ops::$trait<&Vector> for &Vector {
                type Output = Result<Vector>;

                fn $op(self, rhs: &Vector) -> Result<Vector> { VectorLike::$method(self, rhs) }
            }

            impl std::ops::$trait<Vector> for &Vector {
                type Output = Result<Vector>;

                fn $op(self, rhs: Vector) -> Result<Vector> { VectorLike::$method(self, &rhs) }
            }

            impl std::ops::$trait<&Vector> for Vector {
                type Output = Result<Vector>;

                fn $op(self, rhs: &Vector) -> Result<Vector> { VectorLike::$method(&self, rhs) }
            }

            impl std::ops::$trait<Vector> for Vector {
                type Output = Result<Vector>;

                fn $op(self, rhs: Vector) -> Result<Vector> { VectorLike::$method(&self, &rhs) }
            }
        )*
    };
}

impl_vector_binary_ops! {
    Add, add, add;
    Sub, sub, subtract
}

impl std::ops::Mul<Real> for &Vector {
    type Output = Result<Vector>;

    fn mul(self, rhs: Real) -> Result<Vector> { self.scalar_multiply(rhs) }
}

impl std::ops::Mul<Real> for Vector {
    type Output = Result<Vector>;

    fn mul(self, rhs: Real) -> Result<Vector> { self.scalar_multiply(rhs) }
}

impl std::ops::Mul<&Vector> for Real {
    type Output = Result<Vector>;

    fn mul(self, rhs: &Vector) -> Result<Vector> { rhs.scalar_multiply(self) }
}

impl std::ops::Mul<Vector> for Real {
    type Output = Result<Vector>;

    fn mul(self, rhs: Vector) -> Result<Vector> { rhs.scalar_multiply(self) }
}

/// Dot product.
impl std::ops::Mul<&Vector> for &Vector {
    type Output = Result<Real>;

    fn mul(self, rhs: &Vector) -> Result<Real> { self.dot_product(rhs) }
}

impl std::ops::Neg for &Vector {
    type Output = Result<Vector>;

    fn neg(self) -> Result<Vector> { self.scalar_multiply(-1.0) }
}

impl std::ops::Neg for Vector {
    type Output = Result<Vector>;

    fn neg(self) -> Result<Vector> { self.scalar_multiply(-1.0) }
}
