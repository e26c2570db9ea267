//! Squared Euclidean distance over the leading coordinates of a point.

use crate::r#type::CoordNum;

/// The squared Euclidean distance between `a` and `b`, over their first `axis_count`
/// coordinates.
///
/// Anything after `axis_count` is ignored, so a point can carry trailing values that take no
/// part in the ranking.
///
/// ```
/// use geokdtree::squared_distance;
///
/// assert_eq!(squared_distance(&[0., 0., 7.], &[3., 4., 9.], 2), 25.);
/// ```
///
/// # Panics
///
/// If either slice is shorter than `axis_count`.
#[inline]
pub fn squared_distance<N: CoordNum>(a: &[N], b: &[N], axis_count: usize) -> N {
    a[..axis_count]
        .iter()
        .zip(&b[..axis_count])
        .fold(N::zero(), |acc, (&a, &b)| {
            let d = a - b;
            acc + d * d
        })
}
