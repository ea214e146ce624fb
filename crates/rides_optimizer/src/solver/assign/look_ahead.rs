use rayon::prelude::*;
use tracing::debug;

use crate::{
    problem::ride::Ride,
    solver::car::{Car, CarIdx, DeadlineRule, RideTier},
    utils::enumerate_idx::EnumerateIdx,
};

use super::{assign_context::AssignContext, assign_rides::AssignRides};

/// Greedy assignment gated by the car's tier for each ride.
///
/// Rides are taken in earliest start order. The first `F` rides are offered
/// one-to-one to the unstarted cars; every later ride goes to the best ranked
/// car. A ride no car can finish in time is dropped for good, and committed
/// rides are never taken back.
pub struct LookAhead;

impl AssignRides for LookAhead {
    fn assign_rides(&self, context: &AssignContext) -> Vec<Car> {
        let problem = context.problem;
        let deadline_rule = context.params.tier_deadline_rule;
        let rides = problem.rides_by_earliest_start();
        let mut cars = context.build_fleet();
        if cars.is_empty() {
            return cars;
        }

        for (car_id, (car, &ride_id)) in cars.iter_mut().zip(&rides).enumerate_idx() {
            let ride = problem.ride(ride_id);
            offer_ride(car_id, car, ride, deadline_rule);
        }

        // Ties keep the previous ranking, so the order carries over from ride to ride.
        let mut ranking: Vec<CarIdx> = (0..cars.len()).map(CarIdx::from).collect();

        for &ride_id in rides.iter().skip(cars.len()) {
            let ride = problem.ride(ride_id);
            let tiers: Vec<RideTier> = context.thread_pool.install(|| {
                cars.par_iter()
                    .map(|car| car.tier_for_ride(ride, deadline_rule))
                    .collect()
            });

            ranking.sort_by_key(|car_id| tiers[car_id.get()]);

            let best_car = ranking[0];
            offer_ride(best_car, &mut cars[best_car], ride, deadline_rule);
        }

        cars
    }
}

fn offer_ride(car_id: CarIdx, car: &mut Car, ride: &Ride, deadline_rule: DeadlineRule) {
    let tier = car.tier_for_ride(ride, deadline_rule);

    if tier.is_feasible() {
        debug!(%car_id, ride_id = %ride.index(), tier = tier.rank(), "look-ahead: ride assigned");
        car.assign_ride(ride);
    } else {
        debug!(%car_id, ride_id = %ride.index(), "look-ahead: ride dropped");
    }
}
