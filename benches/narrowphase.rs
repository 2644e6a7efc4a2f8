use std::f64::consts::PI;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rs_narrowphase::interactions::{compute_contact, gjk_collision_detection, scan_pairs, test_collision};
use rs_narrowphase::models::{ConvexHull, Quaternion, RigidBody, StockShape};
use rs_narrowphase::simulation::SimulationContext;
use rs_narrowphase::utils::{CollisionConfig, NarrowPhaseStrategy, SimulationConfig};

fn body(stock: StockShape, position: (f64, f64, f64), angle: f64) -> RigidBody {
    RigidBody::new(ConvexHull::stock(stock), position, 1.0)
        .unwrap()
        .with_orientation(Quaternion::from_axis_angle((1.0, 2.0, 3.0), angle))
}

pub fn bench_pair_tests(c: &mut Criterion) {
    let mut group = c.benchmark_group("pair_tests");
    group.measurement_time(std::time::Duration::from_secs(5));
    group.sample_size(100);

    let cases = [
        ("box_overlap", body(StockShape::Box, (0.0, 0.0, 0.0), 0.0), body(StockShape::Box, (0.7, 0.3, 0.2), 0.7)),
        ("box_apart", body(StockShape::Box, (0.0, 0.0, 0.0), 0.0), body(StockShape::Box, (3.0, 0.0, 0.0), PI / 4.0)),
        (
            "dodecahedron_overlap",
            body(StockShape::Dodecahedron, (0.0, 0.0, 0.0), 0.3),
            body(StockShape::Dodecahedron, (3.4, 0.2, 0.0), 1.2),
        ),
    ];

    for (name, a, b) in &cases {
        group.bench_function(format!("gjk_{}", name), |bench| bench.iter(|| {
            gjk_collision_detection(black_box(a), black_box(b))
        }));

        group.bench_function(format!("mpr_{}", name), |bench| bench.iter(|| {
            test_collision(black_box(a), black_box(b))
        }));

        group.bench_function(format!("mpr_contact_{}", name), |bench| bench.iter(|| {
            compute_contact(black_box(a), black_box(b))
        }));
    }
}

pub fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("pairwise_scan");
    group.sample_size(50);

    let mut context = SimulationContext::new(SimulationConfig::default()).unwrap();
    let mut rng = StdRng::seed_from_u64(1);
    context.populate_grid(4, 2.5, &mut rng).unwrap();

    let mpr_only = CollisionConfig::default();
    let gjk_first = CollisionConfig::new(None, None, None, Some(NarrowPhaseStrategy::GjkThenMpr));

    group.bench_function("mpr_64_bodies", |b| b.iter(|| scan_pairs(black_box(context.bodies()), &mpr_only)));
    group.bench_function("gjk_then_mpr_64_bodies", |b| b.iter(|| scan_pairs(black_box(context.bodies()), &gjk_first)));
}

criterion_group!(benches, bench_pair_tests, bench_scan);
criterion_main!(benches);
