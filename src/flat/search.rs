use tinyvec::TinyVec;

use crate::flat::FlatKDTree;
use crate::r#trait::{is_closer, KDTreeIndex, Neighbor};
use crate::r#type::CoordNum;

impl<N: CoordNum, P> KDTreeIndex<N> for FlatKDTree<N, P> {
    fn axis_count(&self) -> usize {
        self.axis_count
    }

    fn num_items(&self) -> usize {
        self.num_items
    }

    fn nearest_unchecked(&self, query: &[N]) -> Option<Neighbor<N>> {
        let root = self.root?;

        // Each entry is a subtree root and the squared distance from the query to the splitting
        // plane that separates it from the path already searched. Use TinyVec to avoid heap
        // allocations.
        let mut stack: TinyVec<[(u32, N); 32]> = TinyVec::new();
        stack.push((root, N::zero()));

        let mut best: Option<(u32, N)> = None;

        while let Some((idx, plane_dist)) = stack.pop() {
            // the far side can only hold something at least as close if the plane is
            if best.is_some_and(|(_, best_dist)| plane_dist > best_dist) {
                continue;
            }

            let i = idx as usize;
            let dist = (0..self.axis_count).fold(N::zero(), |acc, axis| {
                let d = query[axis] - self.value(i, axis);
                acc + d * d
            });
            if is_closer(dist, idx, best) {
                best = Some((idx, dist));
            }

            let axis = self.axes[i] as usize;
            let diff = query[axis] - self.value(i, axis);
            let (near, far) = if diff < N::zero() {
                (self.lefts[i], self.rights[i])
            } else {
                (self.rights[i], self.lefts[i])
            };

            // Note: pushed in backwards order to what gets popped
            if let Some(far) = far {
                stack.push((far, diff * diff));
            }
            if let Some(near) = near {
                stack.push((near, N::zero()));
            }
        }

        best.map(|(index, sq_dist)| Neighbor {
            index,
            point: self.point(index),
            sq_dist,
        })
    }
}
