use crate::builder::{KDTreeBuilder, SortedPoints};
use crate::error::{GeoKDTreeError, Result};
use crate::point::Point;
use crate::pointer::Node;
use crate::r#trait::{check_query, KDTreeIndex, Neighbor, TreeLayout};
use crate::r#type::CoordNum;
use crate::sort::split_at_median;

/// A k-d tree of boxed nodes.
///
/// Produces the same tree shape and the same search results as
/// [`FlatKDTree`][crate::FlatKDTree], but keeps each point together with its payload inside its
/// node, so a search can hand back the stored [`Point`] directly.
#[derive(Debug, Clone, PartialEq)]
pub struct PointerKDTree<N: CoordNum, P = ()> {
    root: Option<Box<Node<N, P>>>,
    axis_count: usize,
    num_items: usize,
}

impl<N: CoordNum, P> PointerKDTree<N, P> {
    /// Build a tree directly from points carrying payloads.
    ///
    /// The axis count is taken from the first point; every other point must match it.
    pub fn from_points(points: impl IntoIterator<Item = Point<N, P>>) -> Result<Self> {
        let mut points = points.into_iter().peekable();
        let axis_count = points.peek().map_or(0, |p| p.axis_count());
        let mut builder = KDTreeBuilder::<N, P>::new(axis_count);
        for point in points {
            builder.add_point(point)?;
        }
        Ok(builder.finish())
    }

    /// The root node, `None` for an empty tree.
    pub fn root(&self) -> Option<&Node<N, P>> {
        self.root.as_deref()
    }

    /// Find the node holding the closest point to `query`.
    ///
    /// Same contract as [`KDTreeIndex::nearest`], but returns the stored node, which gives access
    /// to the point's payload.
    pub fn nearest_node(&self, query: &[N]) -> Result<(&Node<N, P>, N)> {
        if self.is_empty() {
            return Err(GeoKDTreeError::EmptyIndex);
        }
        check_query(query, self.axis_count)?;
        self.search(query).ok_or(GeoKDTreeError::EmptyIndex)
    }

    fn search(&self, query: &[N]) -> Option<(&Node<N, P>, N)> {
        let mut best = None;
        if let Some(root) = self.root() {
            root.search(query, self.axis_count, &mut best);
        }
        best
    }
}

impl<N: CoordNum, P> KDTreeIndex<N> for PointerKDTree<N, P> {
    fn axis_count(&self) -> usize {
        self.axis_count
    }

    fn num_items(&self) -> usize {
        self.num_items
    }

    fn nearest_unchecked(&self, query: &[N]) -> Option<Neighbor<N>> {
        self.search(query).map(|(node, sq_dist)| Neighbor {
            index: node.index,
            point: node.point.coords().iter().copied().collect(),
            sq_dist,
        })
    }
}

impl<N: CoordNum, P> TreeLayout<N, P> for PointerKDTree<N, P> {
    fn from_sorted(points: SortedPoints<N, P>) -> Self {
        let axis_count = points.axis_count();
        let num_items = points.num_items();
        let (coords, payloads, ids) = points.into_parts();

        // Each slot is taken exactly once, when its node is created.
        let mut slots: Vec<Option<Point<N, P>>> = coords
            .chunks_exact(axis_count.max(1))
            .zip(payloads)
            .map(|(coords, payload)| Some(Point::with_payload(coords, payload)))
            .collect();

        let root = build_node(&ids, 0, axis_count, &mut slots);
        Self {
            root,
            axis_count,
            num_items,
        }
    }
}

fn build_node<N: CoordNum, P>(
    ids: &[u32],
    depth: usize,
    axis_count: usize,
    slots: &mut [Option<Point<N, P>>],
) -> Option<Box<Node<N, P>>> {
    let (left, id, right) = split_at_median(ids)?;
    let point = slots[id as usize].take()?;
    Some(Box::new(Node {
        point,
        index: id,
        axis: depth % axis_count,
        left: build_node(left, depth + 1, axis_count, slots),
        right: build_node(right, depth + 1, axis_count, slots),
    }))
}
