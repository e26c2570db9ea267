use criterion::{criterion_group, criterion_main, Criterion};
use geokdtree::{GeoKDTree, KDTree, PointerKDTree};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_points(n: usize, seed: u64) -> Vec<[f64; 3]> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| std::array::from_fn(|_| rng.gen_range(-1000.0..1000.0)))
        .collect()
}

fn random_lat_lons(n: usize, seed: u64) -> Vec<(f64, f64)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| (rng.gen_range(-90.0..=90.0), rng.gen_range(-180.0..180.0)))
        .collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let points = random_points(100_000, 0);
    let queries = random_points(1000, 1);
    let lat_lons = random_lat_lons(100_000, 2);
    let geo_queries = random_lat_lons(1000, 3);

    c.bench_function("construction (flat)", |b| {
        b.iter(|| KDTree::new(&points).unwrap())
    });

    c.bench_function("construction (pointer)", |b| {
        b.iter(|| KDTree::<f64, PointerKDTree<f64>>::build(&points).unwrap())
    });

    c.bench_function("construction (geo)", |b| {
        b.iter(|| GeoKDTree::new(&lat_lons).unwrap())
    });

    let flat = KDTree::new(&points).unwrap();
    let pointer = KDTree::<f64, PointerKDTree<f64>>::build(&points).unwrap();
    let geo = GeoKDTree::new(&lat_lons).unwrap();

    c.bench_function("1000 nearest (flat)", |b| {
        b.iter(|| {
            for query in &queries {
                flat.closest_idx(query).unwrap();
            }
        })
    });

    c.bench_function("1000 nearest (pointer)", |b| {
        b.iter(|| {
            for query in &queries {
                pointer.closest_idx(query).unwrap();
            }
        })
    });

    c.bench_function("1000 nearest (geo)", |b| {
        b.iter(|| {
            for &query in &geo_queries {
                geo.closest_idx(query).unwrap();
            }
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
