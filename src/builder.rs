use std::any::type_name;

use crate::error::{GeoKDTreeError, Result};
use crate::point::Point;
use crate::r#trait::TreeLayout;
use crate::r#type::CoordNum;
use crate::sort::kd_sort;

/// A builder to create a k-d tree in any [`TreeLayout`].
///
/// ```
/// use geokdtree::{FlatKDTree, KDTreeBuilder, KDTreeIndex};
///
/// let mut builder = KDTreeBuilder::<f64>::new(2);
/// builder.add(&[0., 0.]).unwrap();
/// builder.add(&[5., 5.]).unwrap();
/// builder.add(&[9., 1.]).unwrap();
/// let tree = builder.finish::<FlatKDTree<f64>>();
///
/// let nearest = tree.nearest(&[8., 2.]).unwrap();
/// assert_eq!(nearest.index, 2);
/// assert_eq!(nearest.sq_dist, 2.);
/// ```
#[derive(Debug, Clone)]
pub struct KDTreeBuilder<N: CoordNum, P = ()> {
    /// `axis_count` interleaved values per point
    coords: Vec<N>,
    payloads: Vec<P>,
    axis_count: usize,
}

impl<N: CoordNum, P> KDTreeBuilder<N, P> {
    /// Create a new builder for points with `axis_count` coordinates.
    pub fn new(axis_count: usize) -> Self {
        Self::with_capacity(axis_count, 0)
    }

    /// Create a new builder with room for `num_items` points.
    pub fn with_capacity(axis_count: usize, num_items: usize) -> Self {
        Self {
            coords: Vec::with_capacity(axis_count * num_items),
            payloads: Vec::with_capacity(num_items),
            axis_count,
        }
    }

    /// The number of coordinates each point must have.
    pub fn axis_count(&self) -> usize {
        self.axis_count
    }

    /// The number of points added so far.
    pub fn num_items(&self) -> usize {
        self.payloads.len()
    }

    /// Add a point tagged with `payload`.
    ///
    /// This returns the insertion index, which search results report to reference back into the
    /// original data.
    pub fn add_with_payload(&mut self, coords: &[N], payload: P) -> Result<u32> {
        let index = self.payloads.len();
        if coords.is_empty() || self.axis_count == 0 {
            return Err(GeoKDTreeError::ZeroDimension);
        }
        if coords.len() != self.axis_count {
            return Err(GeoKDTreeError::DimensionMismatch {
                index,
                expected: self.axis_count,
                found: coords.len(),
            });
        }
        if coords.iter().any(|v| !v.is_finite()) {
            return Err(GeoKDTreeError::NonFiniteCoordinate { index });
        }
        let id = u32::try_from(index).map_err(|_| GeoKDTreeError::TooManyPoints)?;

        self.coords.extend_from_slice(coords);
        self.payloads.push(payload);
        Ok(id)
    }

    /// Add a [`Point`], keeping its payload.
    pub fn add_point(&mut self, point: Point<N, P>) -> Result<u32> {
        let (coords, payload) = point.into_parts();
        self.add_with_payload(&coords, payload)
    }

    /// Consume this builder, performing the median partition and materialising the tree.
    pub fn finish<L: TreeLayout<N, P>>(self) -> L {
        let num_items = self.payloads.len();
        let axis_count = self.axis_count;

        // Ids fit in u32; checked on every add
        let mut ids: Vec<u32> = (0..num_items as u32).collect();
        kd_sort(&mut ids, &self.coords, axis_count, 0);

        let tree = L::from_sorted(SortedPoints {
            coords: self.coords,
            payloads: self.payloads,
            ids,
            axis_count,
        });
        log::debug!(
            "built {} with {} points over {} axes",
            type_name::<L>(),
            num_items,
            axis_count
        );
        tree
    }
}

impl<N: CoordNum> KDTreeBuilder<N> {
    /// Add a point to the index.
    ///
    /// This returns the insertion index, which search results report to reference back into the
    /// original data.
    pub fn add(&mut self, coords: &[N]) -> Result<u32> {
        self.add_with_payload(coords, ())
    }
}

/// Points that have been through the median partition, ready to be laid out as a tree.
///
/// [`ids`][Self::ids] encodes the tree implicitly; walk it with
/// [`split_at_median`][crate::split_at_median].
#[derive(Debug)]
pub struct SortedPoints<N: CoordNum, P = ()> {
    coords: Vec<N>,
    payloads: Vec<P>,
    ids: Vec<u32>,
    axis_count: usize,
}

impl<N: CoordNum, P> SortedPoints<N, P> {
    /// The number of coordinates per point.
    pub fn axis_count(&self) -> usize {
        self.axis_count
    }

    /// The number of points.
    pub fn num_items(&self) -> usize {
        self.payloads.len()
    }

    /// The kd-sorted point ids.
    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    /// The coordinates of the point with insertion index `id`.
    pub fn coords(&self, id: u32) -> &[N] {
        let start = id as usize * self.axis_count;
        &self.coords[start..start + self.axis_count]
    }

    /// Split into interleaved coordinates, payloads (both by insertion index) and kd-sorted ids.
    pub fn into_parts(self) -> (Vec<N>, Vec<P>, Vec<u32>) {
        (self.coords, self.payloads, self.ids)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::flat::FlatKDTree;
    use crate::r#trait::KDTreeIndex;

    #[test]
    fn returns_insertion_indices() {
        let mut builder = KDTreeBuilder::<f64>::new(2);
        assert_eq!(builder.add(&[1., 2.]), Ok(0));
        assert_eq!(builder.add(&[3., 4.]), Ok(1));
        assert_eq!(builder.num_items(), 2);
    }

    #[test]
    fn rejects_wrong_dimension() {
        let mut builder = KDTreeBuilder::<f64>::new(2);
        builder.add(&[1., 2.]).unwrap();
        assert_eq!(
            builder.add(&[1., 2., 3.]),
            Err(GeoKDTreeError::DimensionMismatch {
                index: 1,
                expected: 2,
                found: 3
            })
        );
        // Rejected points are not counted
        assert_eq!(builder.num_items(), 1);
    }

    #[test]
    fn rejects_empty_points() {
        let mut builder = KDTreeBuilder::<f32>::new(0);
        assert_eq!(builder.add(&[]), Err(GeoKDTreeError::ZeroDimension));
        let mut builder = KDTreeBuilder::<f32>::new(2);
        assert_eq!(builder.add(&[]), Err(GeoKDTreeError::ZeroDimension));
    }

    #[test]
    fn rejects_non_finite() {
        let mut builder = KDTreeBuilder::<f64>::new(2);
        builder.add(&[0., 0.]).unwrap();
        for bad in [[f64::NAN, 0.], [f64::INFINITY, 0.], [1., f64::NEG_INFINITY]] {
            assert_eq!(
                builder.add(&bad),
                Err(GeoKDTreeError::NonFiniteCoordinate { index: 1 })
            );
        }
        assert_eq!(builder.num_items(), 1);
    }

    #[test]
    fn infinite_points_never_reach_a_search() {
        // An infinite point and an infinite query would meet at a NaN distance
        let mut builder = KDTreeBuilder::<f64>::new(2);
        assert_eq!(
            builder.add(&[f64::INFINITY, 0.]),
            Err(GeoKDTreeError::NonFiniteCoordinate { index: 0 })
        );
        builder.add(&[0., 0.]).unwrap();
        builder.add(&[f64::MAX, 1.]).unwrap();
        let tree = builder.finish::<FlatKDTree<f64>>();
        assert_eq!(tree.nearest(&[f64::INFINITY, 0.]), Err(GeoKDTreeError::NonFiniteQuery));

        // Overflowing distances stay comparable
        let nearest = tree.nearest(&[-f64::MAX, 0.]).unwrap();
        assert_eq!(nearest.index, 0);
        assert!(!nearest.sq_dist.is_nan());
    }

    #[test]
    fn keeps_payloads() {
        let mut builder = KDTreeBuilder::<f64, &str>::new(1);
        builder.add_point(Point::with_payload(vec![10.], "ten")).unwrap();
        builder.add_with_payload(&[20.], "twenty").unwrap();
        let tree = builder.finish::<FlatKDTree<f64, &str>>();
        let nearest = tree.nearest(&[18.]).unwrap();
        assert_eq!(*tree.payload(nearest.index), "twenty");
    }

    #[test]
    fn finishes_empty() {
        let tree = KDTreeBuilder::<f64>::new(3).finish::<FlatKDTree<f64>>();
        assert!(tree.is_empty());
        assert_eq!(tree.nearest(&[0., 0., 0.]), Err(GeoKDTreeError::EmptyIndex));
    }
}
