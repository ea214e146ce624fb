use std::{
    iter,
    ops::{Add, AddAssign},
};

use serde::Serialize;

/// Breakdown of a submission's score.
///
/// `total` is always `distance_points + bonus_points`. Rides that are
/// committed but earn nothing are counted in `rides_late` (window missed)
/// or `rides_past_horizon` (car free only after the last step).
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScoreAnalysis {
    pub total: u64,
    pub distance_points: u64,
    pub bonus_points: u64,
    pub rides_scored: usize,
    pub rides_on_time: usize,
    pub rides_late: usize,
    pub rides_past_horizon: usize,
    pub cars_used: usize,
}

impl ScoreAnalysis {
    pub const ZERO: ScoreAnalysis = ScoreAnalysis {
        total: 0,
        distance_points: 0,
        bonus_points: 0,
        rides_scored: 0,
        rides_on_time: 0,
        rides_late: 0,
        rides_past_horizon: 0,
        cars_used: 0,
    };

    pub fn rides_committed(&self) -> usize {
        self.rides_scored + self.rides_late + self.rides_past_horizon
    }

    pub(crate) fn record_scored(&mut self, distance_points: u64, bonus_points: u64, on_time: bool) {
        self.distance_points += distance_points;
        self.bonus_points += bonus_points;
        self.total += distance_points + bonus_points;
        self.rides_scored += 1;
        if on_time {
            self.rides_on_time += 1;
        }
    }

    pub(crate) fn record_late(&mut self) {
        self.rides_late += 1;
    }

    pub(crate) fn record_past_horizon(&mut self) {
        self.rides_past_horizon += 1;
    }
}

impl Add<ScoreAnalysis> for ScoreAnalysis {
    type Output = Self;

    fn add(mut self, other: Self) -> Self::Output {
        self += other;
        self
    }
}

impl AddAssign<ScoreAnalysis> for ScoreAnalysis {
    fn add_assign(&mut self, other: ScoreAnalysis) {
        self.total += other.total;
        self.distance_points += other.distance_points;
        self.bonus_points += other.bonus_points;
        self.rides_scored += other.rides_scored;
        self.rides_on_time += other.rides_on_time;
        self.rides_late += other.rides_late;
        self.rides_past_horizon += other.rides_past_horizon;
        self.cars_used += other.cars_used;
    }
}

impl iter::Sum for ScoreAnalysis {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, |acc, score| acc + score)
    }
}
