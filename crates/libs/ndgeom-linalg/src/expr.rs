//! Linear expressions over a set of unknowns.

use num_traits::Float;
use std::{
    fmt::{Display, Formatter},
    ops::{Add, Mul, Neg, Sub},
};

/// An unknown of a linear system, identified by its position.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Unknown(pub usize);

impl Unknown {
    /// Returns the position of the unknown.
    pub const fn index(&self) -> usize { self.0 }

    /// Creates the unknowns `x0, x1, ..., x{n-1}`.
    pub fn sequence(n: usize) -> Vec<Unknown> { (0..n).map(Unknown).collect() }
}

impl Display for Unknown {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { write!(f, "x{}", self.0) }
}

/// A linear expression `c0 * x0 + c1 * x1 + ... + constant`.
///
/// Coefficients are stored densely, indexed by [`Unknown::index`]; unknowns
/// beyond the stored coefficients have a zero coefficient.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearExpr<T> {
    coeffs: Vec<T>,
    constant: T,
}

impl<T: Float> Default for LinearExpr<T> {
    fn default() -> Self { Self::zero() }
}

impl<T: Float> LinearExpr<T> {
    /// The zero expression.
    pub fn zero() -> Self {
        Self {
            coeffs: Vec::new(),
            constant: T::zero(),
        }
    }

    /// An expression made of a constant only.
    pub fn constant(value: T) -> Self {
        Self {
            coeffs: Vec::new(),
            constant: value,
        }
    }

    /// The single term `coeff * unknown`.
    pub fn term(unknown: Unknown, coeff: T) -> Self {
        let mut coeffs = vec![T::zero(); unknown.index() + 1];
        coeffs[unknown.index()] = coeff;
        Self {
            coeffs,
            constant: T::zero(),
        }
    }

    /// Builds an expression from dense coefficients and a constant term.
    pub fn from_coeffs(coeffs: Vec<T>, constant: T) -> Self { Self { coeffs, constant } }

    /// Coefficient of the given unknown.
    pub fn coeff(&self, unknown: Unknown) -> T {
        self.coeffs
            .get(unknown.index())
            .copied()
            .unwrap_or_else(T::zero)
    }

    /// The constant term.
    pub fn constant_term(&self) -> T { self.constant }

    /// Number of stored coefficients.
    pub fn width(&self) -> usize { self.coeffs.len() }

    /// Returns true if no unknown has a non-zero coefficient.
    pub fn is_constant(&self) -> bool { self.coeffs.iter().all(|c| c.is_zero()) }

    /// Unknowns with a non-zero coefficient, in index order.
    pub fn unknowns(&self) -> impl Iterator<Item = Unknown> + '_ {
        self.coeffs
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_zero())
            .map(|(i, _)| Unknown(i))
    }

    /// Multiplies every coefficient and the constant by `factor`.
    pub fn scale(&self, factor: T) -> Self {
        Self {
            coeffs: self.coeffs.iter().map(|c| *c * factor).collect(),
            constant: self.constant * factor,
        }
    }

    /// Evaluates the expression, missing values count as zero.
    pub fn eval(&self, values: &[T]) -> T {
        self.coeffs
            .iter()
            .zip(values.iter())
            .fold(self.constant, |acc, (c, v)| acc + *c * *v)
    }

    fn zip_with(&self, other: &Self, op: impl Fn(T, T) -> T) -> Self {
        let width = self.width().max(other.width());
        let coeffs = (0..width)
            .map(|i| op(self.coeff(Unknown(i)), other.coeff(Unknown(i))))
            .collect();
        Self {
            coeffs,
            constant: op(self.constant, other.constant),
        }
    }
}

macro_rules! impl_expr_binary_ops {
    ($($trait:ident, $op:ident);*) => {
        $(
            impl<T: Float> $trait for LinearExpr<T> {
                type Output = LinearExpr<T>;

                fn $op(self, rhs: LinearExpr<T>) -> LinearExpr<T> { self.zip_with(&rhs, T::$op) }
            }

            impl<T: Float> $trait<&LinearExpr<T>> for &LinearExpr<T> {
                type Output = LinearExpr<T>;

                fn $op(self, rhs: &LinearExpr<T>) -> LinearExpr<T> { self.zip_with(rhs, T::$op) }
            }
        )*
    };
}

impl_expr_binary_ops! {
    Add, add;
    Sub, sub
}

impl<T: Float> Mul<T> for LinearExpr<T> {
    type Output = LinearExpr<T>;

    fn mul(self, rhs: T) -> LinearExpr<T> { self.scale(rhs) }
}

impl<T: Float> Mul<T> for &LinearExpr<T> {
    type Output = LinearExpr<T>;

    fn mul(self, rhs: T) -> LinearExpr<T> { self.scale(rhs) }
}

impl<T: Float> Neg for LinearExpr<T> {
    type Output = LinearExpr<T>;

    fn neg(self) -> LinearExpr<T> { self.scale(-T::one()) }
}

impl<T: Float + Display> Display for LinearExpr<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (i, c) in self.coeffs.iter().enumerate() {
            if c.is_zero() {
                continue;
            }
            if !first {
                write!(f, " + ")?;
            }
            write!(f, "{}*{}", c, Unknown(i))?;
            first = false;
        }
        if first {
            write!(f, "{}", self.constant)
        } else if !self.constant.is_zero() {
            write!(f, " + {}", self.constant)
        } else {
            Ok(())
        }
    }
}
