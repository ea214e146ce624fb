use std::fmt::Display;

use serde::Serialize;

use crate::{
    define_index_newtype,
    problem::{
        position::Position,
        ride::{Ride, RideIdx},
    },
};

define_index_newtype!(CarIdx, Car);

/// How the arrival at a ride's destination is compared with its latest finish.
///
/// The scorer only counts rides that arrive strictly before the deadline,
/// while the greedy ranking accepts an arrival exactly at the deadline.
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum DeadlineRule {
    /// `arrival < latest_finish`
    #[default]
    Strict,
    /// `arrival <= latest_finish`
    Inclusive,
}

impl DeadlineRule {
    #[inline]
    pub fn is_met(&self, arrival: u64, latest_finish: u64) -> bool {
        match self {
            DeadlineRule::Strict => arrival < latest_finish,
            DeadlineRule::Inclusive => arrival <= latest_finish,
        }
    }
}

impl Display for DeadlineRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Strict => write!(f, "strict"),
            Self::Inclusive => write!(f, "inclusive"),
        }
    }
}

/// Coarse ranking of a car for a ride, lower is better.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum RideTier {
    OnTime = 1,
    Late = 2,
    Infeasible = 3,
}

impl RideTier {
    pub fn is_feasible(&self) -> bool {
        *self < RideTier::Infeasible
    }

    pub fn rank(&self) -> u8 {
        *self as u8
    }
}

/// What would happen if a car took a ride from its current state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RideOutcome {
    pub arrive_start: u64,
    pub arrive_end: u64,
    pub on_time: bool,
    pub finishable: bool,
}

impl RideOutcome {
    pub fn points(&self, ride: &Ride, bonus: u64) -> u64 {
        if !self.finishable {
            return 0;
        }

        let bonus = if self.on_time { bonus } else { 0 };
        bonus.saturating_add(ride.length())
    }

    pub fn bonus_points(&self, bonus: u64) -> u64 {
        if self.finishable && self.on_time {
            bonus
        } else {
            0
        }
    }
}

/// A vehicle of the fleet. Starts at the origin, free at step 0.
///
/// The state only changes through [`Car::assign_ride`], every other method
/// is a read-only look-ahead.
#[derive(Serialize, Debug, Clone, Default)]
pub struct Car {
    position: Position,
    free_at: u64,
    assigned: Vec<RideIdx>,
}

impl Car {
    pub fn new() -> Self {
        Car {
            position: Position::ORIGIN,
            free_at: 0,
            assigned: Vec::new(),
        }
    }

    /// Where the car will be once it is free, i.e. the end of its last ride.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Step at which the car is done with its last ride.
    pub fn free_at(&self) -> u64 {
        self.free_at
    }

    pub fn assigned(&self) -> &[RideIdx] {
        &self.assigned
    }

    #[inline]
    pub fn distance_to(&self, point: Position) -> u64 {
        self.position.distance(&point)
    }

    /// Step at which the car would be free again after taking `ride`,
    /// including any wait for the ride's earliest start.
    pub fn compute_free_by(&self, ride: &Ride) -> u64 {
        let arrive_start = self.free_at.saturating_add(self.distance_to(ride.start()));

        arrive_start
            .max(ride.earliest_start())
            .saturating_add(ride.length())
    }

    pub fn ride_outcome(&self, ride: &Ride, deadline_rule: DeadlineRule) -> RideOutcome {
        let arrive_start = self.free_at.saturating_add(self.distance_to(ride.start()));
        let arrive_end = arrive_start.saturating_add(ride.length());

        RideOutcome {
            arrive_start,
            arrive_end,
            on_time: arrive_start <= ride.earliest_start(),
            finishable: deadline_rule.is_met(arrive_end, ride.latest_finish()),
        }
    }

    /// Points earned by taking `ride` next. The arrival at the destination
    /// is measured without waiting, and must be strictly before the deadline.
    pub fn score_for_ride(&self, ride: &Ride, bonus: u64) -> u64 {
        self.ride_outcome(ride, DeadlineRule::Strict).points(ride, bonus)
    }

    pub fn tier_for_ride(&self, ride: &Ride, deadline_rule: DeadlineRule) -> RideTier {
        let outcome = self.ride_outcome(ride, deadline_rule);

        if outcome.on_time {
            RideTier::OnTime
        } else if outcome.finishable {
            RideTier::Late
        } else {
            RideTier::Infeasible
        }
    }

    /// Commits `ride` unconditionally.
    pub fn assign_ride(&mut self, ride: &Ride) {
        self.free_at = self.compute_free_by(ride);
        self.position = ride.end();
        self.assigned.push(ride.index());
    }
}
