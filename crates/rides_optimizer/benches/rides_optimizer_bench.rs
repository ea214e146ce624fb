use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use rand::{SeedableRng, rngs::SmallRng};
use rides_optimizer::{
    generator::{GeneratorParams, generate_problem},
    solver::{
        assign::{
            assign_params::AssignParams, assign_strategy::AssignStrategy, assigner::Assigner,
        },
        scorer::Scorer,
    },
};

fn assign_benchmark(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(2018);
    let problem = generate_problem(
        &GeneratorParams {
            rows: 1_000,
            cols: 1_000,
            fleet_size: 100,
            ride_count: 2_000,
            bonus: 25,
            horizon: 50_000,
        },
        &mut rng,
    );

    for strategy in AssignStrategy::ALL {
        let assigner = Assigner::new(AssignParams {
            strategy,
            ..AssignParams::default()
        })
        .unwrap();

        c.bench_function(&format!("assign ({strategy})"), |b| {
            b.iter(|| assigner.assign(black_box(&problem)))
        });
    }

    let assigner = Assigner::new(AssignParams::default()).unwrap();
    let submission = assigner.assign(&problem);
    let scorer = Scorer::default();
    c.bench_function("score submission", |b| {
        b.iter(|| scorer.score(black_box(&problem), black_box(&submission)))
    });
}

criterion_group!(benches, assign_benchmark);
criterion_main!(benches);
