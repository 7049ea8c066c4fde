//! Validation predicates attached to points and vectors.
//!
//! A constraint is checked every time the coordinates or the constraint list
//! of its owner change, including at construction.

use crate::{coord::Real, point::PointLike};
use std::{
    error::Error,
    fmt::{Debug, Formatter},
    sync::Arc,
};

/// Error produced by a [`Constraint`] that isn't satisfied.
#[derive(Debug, thiserror::Error)]
#[error("Constraint `{constraint}` violated: {message}")]
pub struct ConstraintViolation {
    constraint: String,
    message: String,
    #[source]
    source: Option<Box<dyn Error + Send + Sync>>,
}

impl ConstraintViolation {
    /// Creates a new violation for the named constraint.
    pub fn new<N, M>(constraint: N, message: M) -> Self
    where
        N: Into<String>,
        M: Into<String>,
    {
        Self {
            constraint: constraint.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Attaches the domain error that caused the violation.
    pub fn with_source<E>(mut self, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        self.source = Some(Box::new(source));
        self
    }

    /// Name of the violated constraint.
    pub fn constraint(&self) -> &str { &self.constraint }

    /// Description of the violation.
    pub fn message(&self) -> &str { &self.message }
}

/// A predicate over a point or a vector.
pub trait Constraint {
    /// Checks the target, returning an error if it isn't satisfied.
    fn check(&self, target: &dyn PointLike) -> Result<(), ConstraintViolation>;

    /// Name used in diagnostics.
    fn name(&self) -> &str { "anonymous" }
}

impl<F> Constraint for F
where
    F: Fn(&dyn PointLike) -> Result<(), ConstraintViolation>,
{
    fn check(&self, target: &dyn PointLike) -> Result<(), ConstraintViolation> { self(target) }
}

/// Shared handle to a constraint.
///
/// Two handles are the same constraint iff they point to the same allocation.
pub type ConstraintRef = Arc<dyn Constraint + Send + Sync>;

/// A constraint made of a closure and a name.
pub struct FnConstraint<F> {
    name: String,
    func: F,
}

impl<F> Constraint for FnConstraint<F>
where
    F: Fn(&dyn PointLike) -> Result<(), ConstraintViolation>,
{
    fn check(&self, target: &dyn PointLike) -> Result<(), ConstraintViolation> {
        (self.func)(target)
    }

    fn name(&self) -> &str { &self.name }
}

/// Wraps a closure into a named constraint.
pub fn from_fn<F>(name: impl Into<String>, func: F) -> ConstraintRef
where
    F: Fn(&dyn PointLike) -> Result<(), ConstraintViolation> + Send + Sync + 'static,
{
    Arc::new(FnConstraint {
        name: name.into(),
        func,
    })
}

/// Requires exactly `n` coordinates.
pub fn dimension(n: usize) -> ConstraintRef {
    from_fn(format!("dimension({})", n), move |target| {
        if target.dimension() == n {
            Ok(())
        } else {
            Err(ConstraintViolation::new(
                format!("dimension({})", n),
                format!("expected {} coordinates, got {}", n, target.dimension()),
            ))
        }
    })
}

/// Requires at most `n` coordinates.
pub fn max_dimension(n: usize) -> ConstraintRef {
    from_fn(format!("max_dimension({})", n), move |target| {
        if target.dimension() <= n {
            Ok(())
        } else {
            Err(ConstraintViolation::new(
                format!("max_dimension({})", n),
                format!("expected at most {} coordinates, got {}", n, target.dimension()),
            ))
        }
    })
}

/// Requires every coordinate to lie in `[lo, hi]`.
pub fn bounded(lo: Real, hi: Real) -> ConstraintRef {
    let name = format!("bounded({}, {})", lo, hi);
    from_fn(name.clone(), move |target| {
        match target
            .coordinates()
            .iter()
            .position(|c| !(lo..=hi).contains(c))
        {
            None => Ok(()),
            Some(axis) => Err(ConstraintViolation::new(
                name.clone(),
                format!(
                    "coordinate {} on axis {} is out of range",
                    target.coordinates()[axis],
                    axis
                ),
            )),
        }
    })
}

/// Rejects NaN and infinite coordinates.
pub fn finite() -> ConstraintRef {
    from_fn("finite", |target| {
        match target.coordinates().iter().position(|c| !c.is_finite()) {
            None => Ok(()),
            Some(axis) => Err(ConstraintViolation::new(
                "finite",
                format!("coordinate on axis {} is not finite", axis),
            )),
        }
    })
}

/// Ordered, append-only list of constraints.
#[derive(Clone, Default)]
pub struct ConstraintSet(Vec<ConstraintRef>);

impl ConstraintSet {
    /// Creates an empty set.
    pub fn new() -> Self { Self(Vec::new()) }

    /// Number of attached constraints.
    pub fn len(&self) -> usize { self.0.len() }

    /// Returns true if no constraint is attached.
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// Iterates over the constraints in check order.
    pub fn iter(&self) -> impl Iterator<Item = &ConstraintRef> { self.0.iter() }

    /// Returns true if this exact constraint is attached.
    pub fn contains(&self, constraint: &ConstraintRef) -> bool {
        self.0.iter().any(|c| Arc::ptr_eq(c, constraint))
    }

    /// Appends constraints, keeping duplicates.
    pub fn extend<I: IntoIterator<Item = ConstraintRef>>(&mut self, constraints: I) {
        self.0.extend(constraints);
    }

    /// Drops every constraint after the first `len`.
    pub(crate) fn truncate(&mut self, len: usize) { self.0.truncate(len); }

    /// Union of several sets: first-seen order, duplicates removed.
    pub fn union<'a, I>(sets: I) -> Self
    where
        I: IntoIterator<Item = &'a ConstraintSet>,
    {
        let mut out = ConstraintSet::new();
        for c in sets.into_iter().flat_map(|s| s.0.iter()) {
            if !out.contains(c) {
                out.0.push(c.clone());
            }
        }
        out
    }

    /// Checks every constraint in order, stopping at the first failure.
    pub fn check(&self, target: &dyn PointLike) -> Result<(), ConstraintViolation> {
        for c in &self.0 {
            if let Err(err) = c.check(target) {
                log::debug!("{:?} rejected by constraint `{}`: {}", target, c.name(), err);
                return Err(err);
            }
        }
        Ok(())
    }
}

impl Debug for ConstraintSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.0.iter().map(|c| c.name()))
            .finish()
    }
}

impl From<ConstraintRef> for ConstraintSet {
    fn from(c: ConstraintRef) -> Self { Self(vec![c]) }
}

impl From<Vec<ConstraintRef>> for ConstraintSet {
    fn from(cs: Vec<ConstraintRef>) -> Self { Self(cs) }
}

impl<const N: usize> From<[ConstraintRef; N]> for ConstraintSet {
    fn from(cs: [ConstraintRef; N]) -> Self { Self(cs.into()) }
}

impl FromIterator<ConstraintRef> for ConstraintSet {
    fn from_iter<I: IntoIterator<Item = ConstraintRef>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a ConstraintSet {
    type Item = &'a ConstraintRef;
    type IntoIter = std::slice::Iter<'a, ConstraintRef>;

    fn into_iter(self) -> Self::IntoIter { self.0.iter() }
}
