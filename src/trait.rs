use tinyvec::TinyVec;

use crate::builder::SortedPoints;
use crate::error::{GeoKDTreeError, Result};
use crate::r#type::CoordNum;

/// Coordinates of a returned point. Stored inline for up to four axes.
pub type Coords<N> = TinyVec<[N; 4]>;

/// The closest point found by a nearest-neighbor search.
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor<N: CoordNum> {
    /// Insertion index of the point.
    pub index: u32,
    /// Coordinates of the point.
    pub point: Coords<N>,
    /// Squared Euclidean distance from the query. Only meaningful for ranking.
    pub sq_dist: N,
}

/// A trait for searching a built k-d tree.
///
/// Every implementation must return the point minimizing `(squared distance, insertion index)`,
/// so equidistant points resolve to the lowest index and all layouts agree on every query.
pub trait KDTreeIndex<N: CoordNum> {
    /// The number of coordinates every point in this tree has.
    fn axis_count(&self) -> usize;

    /// The number of points in this tree.
    fn num_items(&self) -> usize;

    /// Returns `true` if the tree holds no points.
    fn is_empty(&self) -> bool {
        self.num_items() == 0
    }

    /// Find the closest point without checking the query.
    ///
    /// Returns `None` only for an empty tree.
    ///
    /// # Panics
    ///
    /// If `query` has fewer than [`axis_count`][Self::axis_count] coordinates.
    fn nearest_unchecked(&self, query: &[N]) -> Option<Neighbor<N>>;

    /// Find the closest point to `query`.
    ///
    /// Fails with [`GeoKDTreeError::EmptyIndex`] on an empty tree, and with
    /// [`GeoKDTreeError::QueryDimensionMismatch`] or [`GeoKDTreeError::NonFiniteQuery`] on a
    /// malformed query.
    fn nearest(&self, query: &[N]) -> Result<Neighbor<N>> {
        if self.is_empty() {
            return Err(GeoKDTreeError::EmptyIndex);
        }
        check_query(query, self.axis_count())?;
        self.nearest_unchecked(query).ok_or(GeoKDTreeError::EmptyIndex)
    }
}

/// A tree layout that can be materialised from kd-sorted points.
///
/// This is the seam for alternative implementations: anything built from the same
/// [`SortedPoints`] and answering [`KDTreeIndex::nearest`] identically can stand in for the
/// layouts shipped with this crate.
pub trait TreeLayout<N: CoordNum, P = ()>: KDTreeIndex<N> + Sized {
    /// Build the tree from points already ordered by the median partition.
    fn from_sorted(points: SortedPoints<N, P>) -> Self;
}

pub(crate) fn check_query<N: CoordNum>(query: &[N], axis_count: usize) -> Result<()> {
    if query.len() != axis_count {
        return Err(GeoKDTreeError::QueryDimensionMismatch {
            expected: axis_count,
            found: query.len(),
        });
    }
    if query.iter().any(|v| !v.is_finite()) {
        return Err(GeoKDTreeError::NonFiniteQuery);
    }
    Ok(())
}

/// Whether a candidate at `dist` with id `index` beats the current best.
#[inline]
pub(crate) fn is_closer<N: CoordNum>(dist: N, index: u32, best: Option<(u32, N)>) -> bool {
    match best {
        None => true,
        Some((best_index, best_dist)) => {
            dist < best_dist || (dist == best_dist && index < best_index)
        }
    }
}
