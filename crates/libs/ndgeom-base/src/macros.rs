/// Implements everything [`Point`](crate::Point) and
/// [`Vector`](crate::Vector) have in common.
///
/// The type must be a struct with `coords: Vec<Real>` and
/// `constraints: ConstraintSet` fields.
macro_rules! impl_coordinate_type {
    ($t:ident, $kind:expr) => {
        impl $t {
            /// Creates a new instance without constraints.
            pub fn new<I, C>(coords: I) -> $crate::error::Result<Self>
            where
                I: IntoIterator<Item = C>,
                C: Into<$crate::coord::Coord>,
            {
                Self::from_parts(
                    $crate::coord::collect_coords(coords),
                    $crate::constraint::ConstraintSet::new(),
                )
            }

            /// Creates a new instance validated against the given constraints.
            ///
            /// Accepts a single [`ConstraintRef`](crate::ConstraintRef), an
            /// array or a `Vec` of them.
            pub fn with_constraints<I, C, S>(coords: I, constraints: S) -> $crate::error::Result<Self>
            where
                I: IntoIterator<Item = C>,
                C: Into<$crate::coord::Coord>,
                S: Into<$crate::constraint::ConstraintSet>,
            {
                Self::from_parts($crate::coord::collect_coords(coords), constraints.into())
            }

            /// The origin of the `n`-dimensional space.
            pub fn origin(n: usize) -> Self {
                Self {
                    coords: vec![0.0; n],
                    constraints: $crate::constraint::ConstraintSet::new(),
                }
            }

            pub(crate) fn from_parts(
                coords: Vec<$crate::coord::Real>,
                constraints: $crate::constraint::ConstraintSet,
            ) -> $crate::error::Result<Self> {
                let value = Self {
                    coords: coords.into_iter().map($crate::coord::normalize).collect(),
                    constraints,
                };
                value.constraints.check(&value)?;
                Ok(value)
            }

            /// Replaces the coordinates and re-validates every constraint.
            ///
            /// On failure the previous coordinates are restored.
            pub fn set_coordinates<I, C>(&mut self, coords: I) -> $crate::error::Result<()>
            where
                I: IntoIterator<Item = C>,
                C: Into<$crate::coord::Coord>,
            {
                let prev = std::mem::replace(&mut self.coords, $crate::coord::collect_coords(coords));
                if let Err(err) = self.constraints.check(&*self) {
                    self.coords = prev;
                    return Err(err.into());
                }
                Ok(())
            }

            /// Attaches more constraints and re-validates all of them.
            ///
            /// Constraints are never removed; on failure the new ones are
            /// dropped again.
            pub fn add_constraints<S>(&mut self, constraints: S) -> $crate::error::Result<()>
            where
                S: Into<$crate::constraint::ConstraintSet>,
            {
                let len = self.constraints.len();
                let added: $crate::constraint::ConstraintSet = constraints.into();
                self.constraints.extend(added.iter().cloned());
                if let Err(err) = self.constraints.check(&*self) {
                    self.constraints.truncate(len);
                    return Err(err.into());
                }
                Ok(())
            }

            /// Iterates over the stored coordinates.
            pub fn iter(&self) -> impl Iterator<Item = $crate::coord::Real> + '_ {
                self.coords.iter().copied()
            }

            /// Number of stored coordinates.
            pub fn len(&self) -> usize { self.coords.len() }

            /// Returns true if there is no stored coordinate.
            pub fn is_empty(&self) -> bool { self.coords.is_empty() }

            /// Returns true if at least one coordinate is non-zero.
            pub fn is_non_null(&self) -> bool { !$crate::point::PointLike::is_null(self) }

            /// Stored coordinates in the range, clamped to the dimension.
            ///
            /// Unlike indexing, no zero padding happens.
            pub fn slice<R>(&self, range: R) -> &[$crate::coord::Real]
            where
                R: std::ops::RangeBounds<usize>,
            {
                use std::ops::Bound;
                let len = self.coords.len();
                let start = match range.start_bound() {
                    Bound::Included(&s) => s,
                    Bound::Excluded(&s) => s.saturating_add(1),
                    Bound::Unbounded => 0,
                }
                .min(len);
                let end = match range.end_bound() {
                    Bound::Included(&e) => e.saturating_add(1),
                    Bound::Excluded(&e) => e,
                    Bound::Unbounded => len,
                }
                .min(len);
                &self.coords[start..end.max(start)]
            }
        }

        impl $crate::point::PointLike for $t {
            fn coordinates(&self) -> &[$crate::coord::Real] { &self.coords }

            fn constraints(&self) -> &$crate::constraint::ConstraintSet { &self.constraints }

            fn kind(&self) -> $crate::point::Kind { $kind }

            fn as_vector(&self) -> Option<&$crate::vector::Vector> { self.vector_ref() }
        }

        impl Default for $t {
            fn default() -> Self { Self::origin(0) }
        }

        impl std::ops::Index<usize> for $t {
            type Output = $crate::coord::Real;

            fn index(&self, axis: usize) -> &Self::Output {
                static ZERO: $crate::coord::Real = 0.0;
                self.coords.get(axis).unwrap_or(&ZERO)
            }
        }

        impl std::fmt::Display for $t {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}(", stringify!($t))?;
                for (i, c) in self.coords.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", c)?;
                }
                write!(f, ")")
            }
        }

        impl std::hash::Hash for $t {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                let coords = $crate::coord::trimmed(&self.coords);
                std::hash::Hash::hash(&coords.len(), state);
                for c in coords {
                    std::hash::Hash::hash(&c.to_bits(), state);
                }
            }
        }

        impl<'a> IntoIterator for &'a $t {
            type Item = $crate::coord::Real;
            type IntoIter = std::iter::Copied<std::slice::Iter<'a, $crate::coord::Real>>;

            fn into_iter(self) -> Self::IntoIter { self.coords.iter().copied() }
        }

        impl approx::AbsDiffEq for $t {
            type Epsilon = $crate::coord::Real;

            fn default_epsilon() -> Self::Epsilon {
                <$crate::coord::Real as approx::AbsDiffEq>::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
                $crate::coord::padded_pairs(&self.coords, &other.coords)
                    .all(|(a, b)| approx::AbsDiffEq::abs_diff_eq(&a, &b, epsilon))
            }
        }

        impl approx::RelativeEq for $t {
            fn default_max_relative() -> Self::Epsilon {
                <$crate::coord::Real as approx::RelativeEq>::default_max_relative()
            }

            fn relative_eq(
                &self,
                other: &Self,
                epsilon: Self::Epsilon,
                max_relative: Self::Epsilon,
            ) -> bool {
                $crate::coord::padded_pairs(&self.coords, &other.coords)
                    .all(|(a, b)| approx::RelativeEq::relative_eq(&a, &b, epsilon, max_relative))
            }
        }

        impl approx::UlpsEq for $t {
            fn default_max_ulps() -> u32 { <$crate::coord::Real as approx::UlpsEq>::default_max_ulps() }

            fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
                $crate::coord::padded_pairs(&self.coords, &other.coords)
                    .all(|(a, b)| approx::UlpsEq::ulps_eq(&a, &b, epsilon, max_ulps))
            }
        }
    };
}

/// Zero-padded equality between coordinate types, in both directions.
macro_rules! impl_padded_eq {
    ($($lhs:ident == $rhs:ident);+ $(;)?) => {
        $(
            impl PartialEq<$rhs> for $lhs {
                fn eq(&self, other: &$rhs) -> bool {
                    $crate::coord::padded_eq(&self.coords, &other.coords)
                }
            }
        )+
    };
}
