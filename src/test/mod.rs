//! Shared fixtures and cross-module tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::builder::KDTreeBuilder;
use crate::distance::squared_distance;
use crate::r#trait::{is_closer, TreeLayout};
use crate::r#type::CoordNum;


/// Build a tree in layout `T` from fixed-size points.
pub(crate) fn build<N: CoordNum, T: TreeLayout<N>, const D: usize>(points: &[[N; D]]) -> T {
    let mut builder = KDTreeBuilder::<N>::with_capacity(D, points.len());
    for point in points {
        builder.add(point).unwrap();
    }
    builder.finish()
}

/// Linear scan returning `(index, squared distance)` of the closest point, lowest index on ties.
pub(crate) fn brute_force<N: CoordNum, const D: usize>(
    points: &[[N; D]],
    query: &[N; D],
) -> (u32, N) {
    let mut best = None;
    for (i, point) in points.iter().enumerate() {
        let dist = squared_distance(query, point, D);
        if is_closer(dist, i as u32, best) {
            best = Some((i as u32, dist));
        }
    }
    best.unwrap()
}

/// Uniform random points in `[-1000, 1000)^D`, reproducible from `seed`.
pub(crate) fn random_points<const D: usize>(n: usize, seed: u64) -> Vec<[f64; D]> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| std::array::from_fn(|_| rng.gen_range(-1000.0..1000.0)))
        .collect()
}
