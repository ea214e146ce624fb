use fxhash::FxHashMap;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::{
    parsers::{
        error::ParseError,
        hashcode::{parse_problem, parse_submission},
    },
    problem::{ride::RideIdx, ride_problem::RideProblem},
};

use super::{
    car::{Car, CarIdx, DeadlineRule},
    score::ScoreAnalysis,
    submission::Submission,
};

#[derive(Debug, Error)]
pub enum ScoreError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Car {car} references ride {ride} but the problem only has {ride_count} rides")]
    OutOfRangeRideIndex {
        car: CarIdx,
        ride: RideIdx,
        ride_count: usize,
    },

    #[error("Submission assigns rides to {cars} cars but the fleet only has {fleet_size}")]
    TooManyCars { cars: usize, fleet_size: usize },

    #[error("Ride {ride} is assigned to both car {first_car} and car {car}")]
    DuplicateRide {
        ride: RideIdx,
        first_car: CarIdx,
        car: CarIdx,
    },
}

#[derive(Clone, Debug)]
pub struct ScorerParams {
    /// Reject submissions that give the same ride to more than one car, or
    /// twice to the same car.
    pub exclusive_rides: bool,
}

impl Default for ScorerParams {
    fn default() -> Self {
        ScorerParams {
            exclusive_rides: true,
        }
    }
}

/// Replays every car's itinerary and sums the points earned.
#[derive(Default)]
pub struct Scorer {
    params: ScorerParams,
}

impl Scorer {
    pub fn new(params: ScorerParams) -> Self {
        Scorer { params }
    }

    pub fn score_text(
        &self,
        problem_text: &str,
        submission_text: &str,
    ) -> Result<ScoreAnalysis, ScoreError> {
        let problem = parse_problem(problem_text)?;
        let submission = parse_submission(submission_text)?;

        self.score(&problem, &submission)
    }

    #[instrument(skip_all, level = "debug")]
    pub fn score(
        &self,
        problem: &RideProblem,
        submission: &Submission,
    ) -> Result<ScoreAnalysis, ScoreError> {
        self.validate(problem, submission)?;

        let mut score = ScoreAnalysis::default();
        for (car_id, rides) in submission.iter() {
            if rides.is_empty() {
                continue;
            }

            score.cars_used += 1;
            replay_itinerary(problem, rides, &mut score);
            debug!(%car_id, rides = rides.len(), total = score.total, "car replayed");
        }

        Ok(score)
    }

    fn validate(&self, problem: &RideProblem, submission: &Submission) -> Result<(), ScoreError> {
        let used_cars = submission.used_len();
        if used_cars > problem.fleet_size() {
            return Err(ScoreError::TooManyCars {
                cars: used_cars,
                fleet_size: problem.fleet_size(),
            });
        }

        let mut owners: FxHashMap<RideIdx, CarIdx> = FxHashMap::default();
        for (car_id, rides) in submission.iter() {
            for &ride_id in rides {
                if !problem.contains_ride(ride_id) {
                    return Err(ScoreError::OutOfRangeRideIndex {
                        car: car_id,
                        ride: ride_id,
                        ride_count: problem.ride_count(),
                    });
                }

                if !self.params.exclusive_rides {
                    continue;
                }

                if let Some(&first_car) = owners.get(&ride_id) {
                    return Err(ScoreError::DuplicateRide {
                        ride: ride_id,
                        first_car,
                        car: car_id,
                    });
                }
                owners.insert(ride_id, car_id);
            }
        }

        Ok(())
    }
}

/// The ride is scored against the car's state before it is committed. A ride
/// whose completion leaves the car busy past the horizon earns nothing, but
/// still moves the car.
fn replay_itinerary(problem: &RideProblem, rides: &[RideIdx], score: &mut ScoreAnalysis) {
    let mut car = Car::new();

    for &ride_id in rides {
        let ride = problem.ride(ride_id);
        let outcome = car.ride_outcome(ride, DeadlineRule::Strict);
        car.assign_ride(ride);

        if !outcome.finishable {
            score.record_late();
        } else if car.free_at() > problem.horizon() {
            score.record_past_horizon();
        } else {
            score.record_scored(
                ride.length(),
                outcome.bonus_points(problem.bonus()),
                outcome.on_time,
            );
        }
    }
}
