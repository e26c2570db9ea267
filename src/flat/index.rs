use crate::builder::SortedPoints;
use crate::r#trait::{Coords, TreeLayout};
use crate::r#type::CoordNum;
use crate::sort::split_at_median;

/// A k-d tree laid out as parallel arrays.
///
/// Usually this will be created via [`KDTreeBuilder`][crate::KDTreeBuilder] or one of the
/// facades, where it is the default layout.
#[derive(Debug, Clone, PartialEq)]
pub struct FlatKDTree<N: CoordNum, P = ()> {
    /// Axis-major coordinates: value of point `i` on axis `a` is at `a * num_items + i`.
    pub(crate) coords: Vec<N>,
    pub(crate) axes: Vec<u32>,
    pub(crate) lefts: Vec<Option<u32>>,
    pub(crate) rights: Vec<Option<u32>>,
    pub(crate) root: Option<u32>,
    pub(crate) payloads: Vec<P>,
    pub(crate) axis_count: usize,
    pub(crate) num_items: usize,
}

impl<N: CoordNum, P> FlatKDTree<N, P> {
    /// All values along `axis`, indexed by insertion position.
    ///
    /// # Panics
    ///
    /// If `axis` is not below the axis count.
    pub fn axis_values(&self, axis: usize) -> &[N] {
        assert!(axis < self.axis_count, "axis {axis} out of range");
        &self.coords[axis * self.num_items..(axis + 1) * self.num_items]
    }

    /// The splitting axis of every node, indexed by insertion position.
    pub fn axes(&self) -> &[u32] {
        &self.axes
    }

    /// The left child of every node, indexed by insertion position.
    pub fn lefts(&self) -> &[Option<u32>] {
        &self.lefts
    }

    /// The right child of every node, indexed by insertion position.
    pub fn rights(&self) -> &[Option<u32>] {
        &self.rights
    }

    /// Insertion index of the root node, `None` for an empty tree.
    pub fn root(&self) -> Option<u32> {
        self.root
    }

    /// Reconstruct the coordinates of the point at insertion index `index`.
    pub fn point(&self, index: u32) -> Coords<N> {
        let i = index as usize;
        (0..self.axis_count)
            .map(|axis| self.coords[axis * self.num_items + i])
            .collect()
    }

    /// The payload of the point at insertion index `index`.
    pub fn payload(&self, index: u32) -> &P {
        &self.payloads[index as usize]
    }

    #[inline]
    pub(crate) fn value(&self, i: usize, axis: usize) -> N {
        self.coords[axis * self.num_items + i]
    }
}

impl<N: CoordNum, P> TreeLayout<N, P> for FlatKDTree<N, P> {
    fn from_sorted(points: SortedPoints<N, P>) -> Self {
        let axis_count = points.axis_count();
        let num_items = points.num_items();
        let (interleaved, payloads, ids) = points.into_parts();

        // transpose into one array per axis
        let mut coords = vec![N::zero(); interleaved.len()];
        for (i, values) in interleaved.chunks_exact(axis_count.max(1)).enumerate() {
            for (axis, value) in values.iter().enumerate() {
                coords[axis * num_items + i] = *value;
            }
        }

        let mut links = Links {
            axes: vec![0; num_items],
            lefts: vec![None; num_items],
            rights: vec![None; num_items],
            axis_count,
        };
        let root = links.link(&ids, 0);

        Self {
            coords,
            axes: links.axes,
            lefts: links.lefts,
            rights: links.rights,
            root,
            payloads,
            axis_count,
            num_items,
        }
    }
}

struct Links {
    axes: Vec<u32>,
    lefts: Vec<Option<u32>>,
    rights: Vec<Option<u32>>,
    axis_count: usize,
}

impl Links {
    /// Record the subtree encoded by `ids` and return its root.
    fn link(&mut self, ids: &[u32], depth: usize) -> Option<u32> {
        let (left, id, right) = split_at_median(ids)?;
        let i = id as usize;
        self.axes[i] = (depth % self.axis_count) as u32;
        self.lefts[i] = self.link(left, depth + 1);
        self.rights[i] = self.link(right, depth + 1);
        Some(id)
    }
}
