//! The median partition shared by every tree layout.
//!
//! `kd_sort` reorders a slice of point ids in place so that it encodes a balanced k-d tree
//! implicitly: the root is the id at `len / 2`, its left subtree is the prefix before it and its
//! right subtree the suffix after it, recursively, with the splitting axis cycling by depth.

use std::cmp::Ordering;

use crate::r#type::CoordNum;

/// Below this many ids the two halves are partitioned on the current thread.
#[cfg(feature = "rayon")]
const PARALLEL_THRESHOLD: usize = 16_384;

/// kd-sort `ids` so that each sub-slice's middle element is the median along its axis.
///
/// `coords` holds `axis_count` interleaved values per point, indexed by id.
pub(crate) fn kd_sort<N: CoordNum>(ids: &mut [u32], coords: &[N], axis_count: usize, depth: usize) {
    let len = ids.len();
    if len <= 1 {
        return;
    }

    let axis = depth % axis_count;
    let m = len / 2;

    // Linear-time selection: everything before `m` orders before the median, everything after
    // orders after it. The comparison is a strict total order, so the sets are unique.
    ids.select_nth_unstable_by(m, |&a, &b| compare(coords, axis_count, axis, a, b));

    let (left, rest) = ids.split_at_mut(m);
    let right = &mut rest[1..];

    #[cfg(feature = "rayon")]
    if len >= PARALLEL_THRESHOLD {
        log::trace!("partitioning {} ids in parallel at depth {}", len, depth);
        rayon::join(
            || kd_sort(left, coords, axis_count, depth + 1),
            || kd_sort(right, coords, axis_count, depth + 1),
        );
        return;
    }

    kd_sort(left, coords, axis_count, depth + 1);
    kd_sort(right, coords, axis_count, depth + 1);
}

/// Order two ids by their value along `axis`, breaking ties by id.
#[inline]
fn compare<N: CoordNum>(coords: &[N], axis_count: usize, axis: usize, a: u32, b: u32) -> Ordering {
    let va = coords[a as usize * axis_count + axis];
    let vb = coords[b as usize * axis_count + axis];
    // NaN is rejected when points are added
    va.partial_cmp(&vb)
        .unwrap_or(Ordering::Equal)
        .then(a.cmp(&b))
}

/// Split a kd-sorted slice into `(left subtree, node id, right subtree)`.
///
/// Returns `None` for an empty slice.
#[inline]
pub fn split_at_median(ids: &[u32]) -> Option<(&[u32], u32, &[u32])> {
    if ids.is_empty() {
        return None;
    }
    let m = ids.len() / 2;
    Some((&ids[..m], ids[m], &ids[m + 1..]))
}
