//! A point with coordinates and an opaque payload.

use crate::r#type::CoordNum;

/// A point: `axis_count` coordinates plus a payload that is carried through the tree verbatim.
///
/// Partitioning and distance code only ever reads [`Point::coords`]. The payload is whatever the
/// caller wants back alongside a search result, e.g. a record id.
#[derive(Debug, Clone, PartialEq)]
pub struct Point<N: CoordNum, P = ()> {
    coords: Box<[N]>,
    payload: P,
}

impl<N: CoordNum> Point<N> {
    /// A point without payload.
    pub fn new(coords: impl Into<Box<[N]>>) -> Self {
        Self::with_payload(coords, ())
    }
}

impl<N: CoordNum, P> Point<N, P> {
    /// A point tagged with `payload`.
    pub fn with_payload(coords: impl Into<Box<[N]>>, payload: P) -> Self {
        Self {
            coords: coords.into(),
            payload,
        }
    }

    /// The coordinates of this point.
    #[inline]
    pub fn coords(&self) -> &[N] {
        &self.coords
    }

    /// The payload attached to this point.
    #[inline]
    pub fn payload(&self) -> &P {
        &self.payload
    }

    /// Number of coordinates.
    #[inline]
    pub fn axis_count(&self) -> usize {
        self.coords.len()
    }

    /// Split into coordinates and payload.
    pub fn into_parts(self) -> (Box<[N]>, P) {
        (self.coords, self.payload)
    }
}

impl<N: CoordNum> From<Vec<N>> for Point<N> {
    fn from(value: Vec<N>) -> Self {
        Self::new(value)
    }
}

impl<N: CoordNum, const D: usize> From<[N; D]> for Point<N> {
    fn from(value: [N; D]) -> Self {
        Self::new(value.to_vec())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn payload_is_kept_apart_from_coords() {
        let point = Point::with_payload(vec![1.0_f64, 2.0, 3.0], "depot-7");
        assert_eq!(point.coords(), &[1.0, 2.0, 3.0]);
        assert_eq!(point.axis_count(), 3);
        assert_eq!(*point.payload(), "depot-7");

        let (coords, payload) = point.into_parts();
        assert_eq!(&*coords, &[1.0, 2.0, 3.0]);
        assert_eq!(payload, "depot-7");
    }

    #[test]
    fn from_array() {
        let point: Point<f32> = [4.0, 5.0].into();
        assert_eq!(point.coords(), &[4.0, 5.0]);
    }
}
