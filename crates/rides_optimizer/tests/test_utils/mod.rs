#![allow(dead_code)]

use std::path::PathBuf;

use rand::{SeedableRng, rngs::SmallRng};
use rides_optimizer::{
    generator::{GeneratorParams, generate_problem},
    problem::{
        position::Position,
        ride::RideIdx,
        ride_problem::{RideProblem, RideProblemBuilder},
    },
    solver::assign::{
        assign_params::AssignParams, assign_strategy::AssignStrategy, assigner::Assigner,
    },
};

pub fn fixture_path(fixture: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(fixture)
}

pub fn create_test_problem(
    fleet_size: usize,
    bonus: u64,
    horizon: u64,
    rides: &[((u64, u64), (u64, u64), u64, u64)],
) -> RideProblem {
    let mut builder = RideProblemBuilder::default();
    builder
        .set_grid(10, 10)
        .set_fleet_size(fleet_size)
        .set_bonus(bonus)
        .set_horizon(horizon);

    for &(start, end, earliest_start, latest_finish) in rides {
        builder.add_ride(
            Position::from(start),
            Position::from(end),
            earliest_start,
            latest_finish,
        );
    }

    builder.build()
}

pub fn create_random_problem(seed: u64, params: &GeneratorParams) -> RideProblem {
    let mut rng = SmallRng::seed_from_u64(seed);
    generate_problem(params, &mut rng)
}

pub fn create_assigner(strategy: AssignStrategy) -> Assigner {
    Assigner::new(AssignParams {
        strategy,
        ..AssignParams::default()
    })
    .unwrap()
}

pub fn ride_ids(ids: &[usize]) -> Vec<RideIdx> {
    ids.iter().copied().map(RideIdx::from).collect()
}
