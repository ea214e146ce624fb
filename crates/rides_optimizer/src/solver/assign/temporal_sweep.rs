use tracing::debug;

use crate::solver::car::Car;

use super::{assign_context::AssignContext, assign_rides::AssignRides};

/// First-fit in time order: at every step, each car that is free takes the
/// next pending ride (by earliest start), whether or not it can make it.
///
/// Only steps at which some car is free are visited, which gives the same
/// result as walking every step from 0 to the horizon.
pub struct TemporalSweep;

impl AssignRides for TemporalSweep {
    fn assign_rides(&self, context: &AssignContext) -> Vec<Car> {
        let problem = context.problem;
        let mut cars = context.build_fleet();
        let mut pending = problem.rides_by_earliest_start().into_iter();

        let mut step = 0;
        while step < problem.horizon() && !pending.as_slice().is_empty() {
            for (car_id, car) in cars.iter_mut().enumerate() {
                if car.free_at() > step {
                    continue;
                }

                let Some(ride_id) = pending.next() else {
                    break;
                };

                car.assign_ride(problem.ride(ride_id));
                debug!(step, car_id, %ride_id, free_at = car.free_at(), "sweep: ride taken");
            }

            let Some(next_free) = cars.iter().map(Car::free_at).min() else {
                break;
            };
            step = next_free.max(step + 1);
        }

        cars
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::SmallRng};

    use crate::{
        generator::{GeneratorParams, generate_problem},
        problem::ride_problem::RideProblem,
        solver::assign::{assign_params::AssignParams, assign_strategy::AssignStrategy},
        test_utils::{create_test_problem, ride_ids},
    };

    use super::*;

    /// Visits every step from 0 to the horizon.
    fn sweep_every_step(problem: &RideProblem) -> Vec<Car> {
        let mut cars: Vec<Car> = (0..problem.fleet_size()).map(|_| Car::new()).collect();
        let mut pending = problem.rides_by_earliest_start().into_iter();

        for step in 0..problem.horizon() {
            for car in cars.iter_mut().filter(|car| car.free_at() <= step) {
                let Some(ride_id) = pending.next() else {
                    return cars;
                };
                car.assign_ride(problem.ride(ride_id));
            }
        }

        cars
    }

    fn run(problem: &RideProblem) -> Vec<Car> {
        let params = AssignParams {
            strategy: AssignStrategy::TemporalSweep,
            ..AssignParams::default()
        };
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(1)
            .build()
            .unwrap();
        let context = AssignContext {
            problem,
            params: &params,
            thread_pool: &thread_pool,
        };

        TemporalSweep.assign_rides(&context)
    }

    #[test]
    fn test_free_cars_take_rides_in_earliest_start_order() {
        let problem = create_test_problem(
            2,
            0,
            100,
            &[
                ((0, 0), (0, 5), 4, 50),
                ((0, 0), (0, 1), 0, 50),
                ((0, 0), (0, 2), 1, 50),
            ],
        );

        let cars = run(&problem);

        // step 0: car 0 takes ride 1 (free at 1), car 1 takes ride 2 (free at 3)
        // step 1: car 0 takes ride 0
        assert_eq!(cars[0].assigned(), ride_ids(&[1, 0]).as_slice());
        assert_eq!(cars[1].assigned(), ride_ids(&[2]).as_slice());
    }

    #[test]
    fn test_assigns_without_feasibility_check() {
        let problem = create_test_problem(1, 0, 100, &[((9, 9), (0, 0), 0, 1)]);

        let cars = run(&problem);

        assert_eq!(cars[0].assigned(), ride_ids(&[0]).as_slice());
    }

    #[test]
    fn test_stops_at_horizon() {
        let problem = create_test_problem(
            1,
            0,
            5,
            &[((0, 0), (0, 9), 0, 50), ((0, 9), (0, 0), 0, 50)],
        );

        let cars = run(&problem);

        // the car is only free again at step 9, past the horizon
        assert_eq!(cars[0].assigned(), ride_ids(&[0]).as_slice());
    }

    #[test]
    fn test_skipping_idle_steps_matches_every_step() {
        let params = GeneratorParams {
            rows: 20,
            cols: 20,
            fleet_size: 4,
            ride_count: 40,
            bonus: 5,
            horizon: 300,
        };

        for seed in 0..100 {
            let mut rng = SmallRng::seed_from_u64(seed);
            let problem = generate_problem(&params, &mut rng);

            let expected = sweep_every_step(&problem);
            let cars = run(&problem);

            for (car, expected) in cars.iter().zip(&expected) {
                assert_eq!(car.assigned(), expected.assigned(), "seed {seed}");
            }
        }
    }

    #[test]
    fn test_empty_fleet() {
        let problem = create_test_problem(0, 0, 5, &[((0, 0), (0, 1), 0, 50)]);

        assert!(run(&problem).is_empty());
    }
}
