use rand::Rng;

use crate::problem::{
    position::Position,
    ride_problem::{RideProblem, RideProblemBuilder},
};

#[derive(Clone, Debug)]
pub struct GeneratorParams {
    pub rows: u64,
    pub cols: u64,
    pub fleet_size: usize,
    pub ride_count: usize,
    pub bonus: u64,
    pub horizon: u64,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        GeneratorParams {
            rows: 100,
            cols: 100,
            fleet_size: 10,
            ride_count: 300,
            bonus: 25,
            horizon: 10_000,
        }
    }
}

/// Builds a random instance. Every ride fits in the grid and its window is
/// at least as long as the ride itself.
pub fn generate_problem<R: Rng>(params: &GeneratorParams, rng: &mut R) -> RideProblem {
    let rows = params.rows.max(1);
    let cols = params.cols.max(1);

    let mut builder = RideProblemBuilder::default();
    builder
        .set_grid(rows, cols)
        .set_fleet_size(params.fleet_size)
        .set_bonus(params.bonus)
        .set_horizon(params.horizon);

    for _ in 0..params.ride_count {
        let start = Position::new(rng.random_range(0..rows), rng.random_range(0..cols));
        let end = Position::new(rng.random_range(0..rows), rng.random_range(0..cols));
        let length = start.distance(&end);

        let latest_start = params.horizon.saturating_sub(length);
        let earliest_start = rng.random_range(0..=latest_start);
        let slack = rng.random_range(0..=latest_start - earliest_start);

        builder.add_ride(start, end, earliest_start, earliest_start + length + slack);
    }

    builder.build()
}
