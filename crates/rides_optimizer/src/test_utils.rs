use crate::problem::{
    position::Position,
    ride::{Ride, RideIdx},
    ride_problem::{RideProblem, RideProblemBuilder},
};

pub type TestRide = ((u64, u64), (u64, u64), u64, u64);

pub fn create_ride(
    index: usize,
    start: (u64, u64),
    end: (u64, u64),
    earliest_start: u64,
    latest_finish: u64,
) -> Ride {
    Ride::new(
        RideIdx::new(index),
        Position::from(start),
        Position::from(end),
        earliest_start,
        latest_finish,
    )
}

pub fn create_test_problem(
    fleet_size: usize,
    bonus: u64,
    horizon: u64,
    rides: &[TestRide],
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

pub fn ride_ids(ids: &[usize]) -> Vec<RideIdx> {
    ids.iter().copied().map(RideIdx::from).collect()
}
