//! Coordinate values.

/// Scalar type of every coordinate.
pub type Real = f64;

/// A coordinate value accepted at construction or mutation.
///
/// Absent values (`None`) and `false` become zero, `true` becomes one, and
/// negative zero is stored as positive zero.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Coord(Real);

impl Coord {
    /// Returns the normalised value.
    pub const fn value(self) -> Real { self.0 }
}

impl From<Coord> for Real {
    fn from(c: Coord) -> Self { c.0 }
}

impl From<f64> for Coord {
    fn from(v: f64) -> Self { Coord(normalize(v)) }
}

impl From<bool> for Coord {
    fn from(v: bool) -> Self { Coord(if v { 1.0 } else { 0.0 }) }
}

impl<T: Into<Coord>> From<Option<T>> for Coord {
    fn from(v: Option<T>) -> Self { v.map(Into::into).unwrap_or_default() }
}

impl<T: Copy + Into<Coord>> From<&T> for Coord {
    fn from(v: &T) -> Self { (*v).into() }
}

macro_rules! impl_coord_from_primitive {
    ($($t:ty)+) => {
        $(
            impl From<$t> for Coord {
                fn from(v: $t) -> Self { Coord(normalize(v as Real)) }
            }
        )+
    };
}

impl_coord_from_primitive!(f32 i8 i16 i32 i64 isize u8 u16 u32 u64 usize);

/// Maps negative zero to zero, leaves everything else untouched.
#[inline]
pub(crate) fn normalize(v: Real) -> Real {
    if v == 0.0 {
        0.0
    } else {
        v
    }
}

/// Converts any coordinate input into stored values.
pub(crate) fn collect_coords<I, C>(coords: I) -> Vec<Real>
where
    I: IntoIterator<Item = C>,
    C: Into<Coord>,
{
    coords.into_iter().map(|c| c.into().value()).collect()
}

/// Pairs up the coordinates of two sequences, padding the shorter with zeros.
pub(crate) fn padded_pairs<'a>(
    a: &'a [Real],
    b: &'a [Real],
) -> impl Iterator<Item = (Real, Real)> + 'a {
    (0..a.len().max(b.len())).map(move |i| {
        (
            a.get(i).copied().unwrap_or(0.0),
            b.get(i).copied().unwrap_or(0.0),
        )
    })
}

/// Equality of two coordinate sequences after zero-padding.
pub(crate) fn padded_eq(a: &[Real], b: &[Real]) -> bool { padded_pairs(a, b).all(|(x, y)| x == y) }

/// Coordinates with trailing zeros removed.
pub(crate) fn trimmed(coords: &[Real]) -> &[Real] {
    let end = coords
        .iter()
        .rposition(|c| *c != 0.0)
        .map_or(0, |i| i + 1);
    &coords[..end]
}
