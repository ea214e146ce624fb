use tracing::debug;

use crate::solver::car::Car;

use super::{assign_context::AssignContext, assign_rides::AssignRides};

/// Deals the rides, sorted by earliest start, to cars 0, 1, .., F-1, 0, 1, ..
/// Every ride is committed, reachable or not.
pub struct RoundRobin;

impl AssignRides for RoundRobin {
    fn assign_rides(&self, context: &AssignContext) -> Vec<Car> {
        let problem = context.problem;
        let mut cars = context.build_fleet();
        let fleet_size = cars.len();

        for (ride_id, car_id) in problem
            .rides_by_earliest_start()
            .into_iter()
            .zip((0..fleet_size).cycle())
        {
            cars[car_id].assign_ride(problem.ride(ride_id));
            debug!(car_id, %ride_id, "round robin: ride dealt");
        }

        cars
    }
}
