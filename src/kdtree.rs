//! Nearest-neighbor lookup over n-dimensional Cartesian points.

use std::marker::PhantomData;

use crate::builder::KDTreeBuilder;
use crate::error::Result;
use crate::flat::FlatKDTree;
use crate::r#trait::{Coords, Neighbor, TreeLayout};
use crate::r#type::CoordNum;

/// A static k-d tree over n-dimensional points.
///
/// The axis count is taken from the first point. The tree is stored as a [`FlatKDTree`] unless
/// another [`TreeLayout`] is chosen through [`KDTree::build`].
///
/// ```
/// use geokdtree::KDTree;
///
/// let points: Vec<[f64; 2]> = (0..100).map(|i| [i as f64, (i + 1) as f64]).collect();
/// let tree = KDTree::new(&points).unwrap();
///
/// assert_eq!(tree.closest_point(&[5., 5.5]).unwrap().as_slice(), &[5., 6.]);
/// assert_eq!(tree.closest_idx(&[5., 5.5]).unwrap(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct KDTree<N: CoordNum = f64, T = FlatKDTree<N>> {
    tree: T,
    phantom: PhantomData<N>,
}

impl<N: CoordNum> KDTree<N> {
    /// Build a tree in the default flat layout.
    ///
    /// An empty `points` slice gives an empty tree, on which every query fails with
    /// [`EmptyIndex`][crate::GeoKDTreeError::EmptyIndex].
    pub fn new<C: AsRef<[N]>>(points: &[C]) -> Result<Self> {
        Self::build(points)
    }
}

impl<N: CoordNum, T: TreeLayout<N>> KDTree<N, T> {
    /// Build a tree in layout `T`.
    ///
    /// ```
    /// use geokdtree::{KDTree, PointerKDTree};
    ///
    /// let tree = KDTree::<f64, PointerKDTree<f64>>::build(&[[0., 0.], [3., 3.]]).unwrap();
    /// assert_eq!(tree.closest_idx(&[2., 2.]).unwrap(), 1);
    /// ```
    pub fn build<C: AsRef<[N]>>(points: &[C]) -> Result<Self> {
        let axis_count = points.first().map_or(0, |p| p.as_ref().len());
        let mut builder = KDTreeBuilder::<N>::with_capacity(axis_count, points.len());
        for point in points {
            builder.add(point.as_ref())?;
        }
        Ok(Self {
            tree: builder.finish(),
            phantom: PhantomData,
        })
    }

    /// The closest stored point to `query`.
    pub fn closest_point(&self, query: &[N]) -> Result<Coords<N>> {
        Ok(self.tree.nearest(query)?.point)
    }

    /// The position in the original input of the closest point to `query`.
    pub fn closest_idx(&self, query: &[N]) -> Result<usize> {
        Ok(self.tree.nearest(query)?.index as usize)
    }

    /// The closest point to `query`, with its index and squared distance.
    pub fn closest_point_with_distance(&self, query: &[N]) -> Result<Neighbor<N>> {
        self.tree.nearest(query)
    }

    /// The number of coordinates per point; `0` for an empty tree.
    pub fn axis_count(&self) -> usize {
        self.tree.axis_count()
    }

    /// The number of indexed points.
    pub fn len(&self) -> usize {
        self.tree.num_items()
    }

    /// Returns `true` if no points are indexed.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// The underlying tree.
    pub fn tree(&self) -> &T {
        &self.tree
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::GeoKDTreeError;
    use crate::pointer::PointerKDTree;

    #[test]
    fn infers_axis_count() {
        let tree = KDTree::new(&[vec![1., 2., 3.], vec![4., 5., 6.]]).unwrap();
        assert_eq!(tree.axis_count(), 3);
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.closest_point(&[4., 4., 4.]).unwrap().as_slice(), &[4., 5., 6.]);
    }

    #[test]
    fn rejects_ragged_input() {
        let points = vec![vec![1., 2.], vec![3., 4.], vec![5., 6., 7.]];
        assert_eq!(
            KDTree::<f64>::new(&points).unwrap_err(),
            GeoKDTreeError::DimensionMismatch {
                index: 2,
                expected: 2,
                found: 3
            }
        );
    }

    #[test]
    fn empty_input() {
        let points: Vec<Vec<f64>> = vec![];
        let tree = KDTree::new(&points).unwrap();
        assert!(tree.is_empty());
        assert_eq!(tree.axis_count(), 0);
        assert_eq!(tree.closest_point(&[1., 2.]), Err(GeoKDTreeError::EmptyIndex));
        assert_eq!(tree.closest_idx(&[]), Err(GeoKDTreeError::EmptyIndex));
    }

    #[test]
    fn wrong_query_dimension() {
        let tree = KDTree::new(&[[0., 0.], [1., 1.]]).unwrap();
        assert_eq!(
            tree.closest_idx(&[0.5]),
            Err(GeoKDTreeError::QueryDimensionMismatch {
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn reports_distance() {
        let tree = KDTree::new(&[[0., 0.], [10., 0.], [0., 10.]]).unwrap();
        let nearest = tree.closest_point_with_distance(&[7., 1.]).unwrap();
        assert_eq!(nearest.index, 1);
        assert_eq!(nearest.sq_dist, 10.);
        assert_eq!(nearest.point.as_slice(), &[10., 0.]);
    }

    #[test]
    fn layouts_agree() {
        let points: Vec<[f64; 3]> = (0..500)
            .map(|i| {
                let i = i as f64;
                [(i * 0.37).sin() * 50., (i * 0.11).cos() * 50., i % 17.]
            })
            .collect();
        let flat = KDTree::new(&points).unwrap();
        let pointer = KDTree::<f64, PointerKDTree<f64>>::build(&points).unwrap();
        for query in [[0., 0., 0.], [25., -25., 8.], [-49., 49., 16.], [3.3, 1.1, 4.4]] {
            assert_eq!(
                flat.closest_point_with_distance(&query),
                pointer.closest_point_with_distance(&query)
            );
        }
    }
}
