mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use poisson_kernel::domain::Shape;
use poisson_kernel::search::{Generator, SearchConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;

const POINT_COUNTS: [usize; 3] = [8, 16, 32];
const CANDIDATES: usize = 64;

fn search_benches(c: &mut Criterion) {
    let setups = [
        ("line_repeat", 1, Shape::Line, true, 1),
        ("square_repeat", 2, Shape::Box, true, 1),
        ("disk_rotated_4", 2, Shape::Disk, false, 4),
        ("box_repeat", 3, Shape::Box, true, 1),
        ("sphere", 3, Shape::Sphere, false, 1),
    ];

    for (name, dim, shape, repeat, rotations) in setups {
        let generator =
            Generator::configure(dim, shape, repeat, false).expect("valid bench domain");
        let mut group = c.benchmark_group(format!("search/{name}"));

        for &count in &POINT_COUNTS {
            let config = SearchConfig::new(count)
                .with_trial_count(1)
                .with_candidates_per_step(CANDIDATES)
                .with_rotation_count(rotations);
            group.throughput(common::elements_throughput(count));

            let mut rng = StdRng::seed_from_u64(0xC0FFEE_u64 ^ (count as u64));

            group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
                b.iter(|| {
                    let pts = generator
                        .search(&config, &mut rng, None)
                        .expect("valid bench config");
                    black_box(pts.len());
                });
            });
        }

        group.finish();
    }
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = search_benches
}
criterion_main!(benches);
