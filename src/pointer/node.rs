use crate::distance::squared_distance;
use crate::point::Point;
use crate::r#trait::is_closer;
use crate::r#type::CoordNum;

/// A node in a [`PointerKDTree`][crate::PointerKDTree].
#[derive(Debug, Clone, PartialEq)]
pub struct Node<N: CoordNum, P = ()> {
    pub(crate) point: Point<N, P>,
    pub(crate) index: u32,
    /// The axis this node splits its children over.
    pub(crate) axis: usize,
    pub(crate) left: Option<Box<Node<N, P>>>,
    pub(crate) right: Option<Box<Node<N, P>>>,
}

impl<N: CoordNum, P> Node<N, P> {
    /// The point stored at this node.
    pub fn point(&self) -> &Point<N, P> {
        &self.point
    }

    /// Insertion index of this node's point.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// The splitting axis.
    pub fn axis(&self) -> usize {
        self.axis
    }

    /// The subtree with values on [`axis`][Self::axis] less than or equal to this node's.
    pub fn left(&self) -> Option<&Node<N, P>> {
        self.left.as_deref()
    }

    /// The subtree with values on [`axis`][Self::axis] greater than or equal to this node's.
    pub fn right(&self) -> Option<&Node<N, P>> {
        self.right.as_deref()
    }

    /// Returns `true` if this node has no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Branch-and-bound search of the subtree rooted here, updating `best`.
    pub(crate) fn search<'a>(
        &'a self,
        query: &[N],
        axis_count: usize,
        best: &mut Option<(&'a Node<N, P>, N)>,
    ) {
        let dist = squared_distance(query, self.point.coords(), axis_count);
        if is_closer(dist, self.index, best.map(|(node, d)| (node.index, d))) {
            *best = Some((self, dist));
        }

        let diff = query[self.axis] - self.point.coords()[self.axis];
        let (near, far) = if diff < N::zero() {
            (self.left(), self.right())
        } else {
            (self.right(), self.left())
        };

        if let Some(near) = near {
            near.search(query, axis_count, best);
        }

        // The far side can only hold something at least as close if the splitting plane is.
        // `<=` keeps equidistant points with a lower index reachable.
        if let Some(far) = far {
            if best.is_some_and(|(_, best_dist)| diff * diff <= best_dist) {
                far.search(query, axis_count, best);
            }
        }
    }
}
