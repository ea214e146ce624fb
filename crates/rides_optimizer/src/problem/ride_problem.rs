use std::fmt::Display;

use serde::Serialize;

use super::{
    position::Position,
    ride::{Ride, RideIdx},
};

/// A parsed instance: the grid, the fleet, and every ride known upfront.
#[derive(Serialize, Debug, Clone)]
pub struct RideProblem {
    rows: u64,
    cols: u64,
    fleet_size: usize,
    bonus: u64,
    horizon: u64,
    rides: Vec<Ride>,
}

impl RideProblem {
    pub fn rows(&self) -> u64 {
        self.rows
    }

    pub fn cols(&self) -> u64 {
        self.cols
    }

    pub fn fleet_size(&self) -> usize {
        self.fleet_size
    }

    /// Points granted for a ride started exactly at (or before) its earliest start.
    pub fn bonus(&self) -> u64 {
        self.bonus
    }

    pub fn horizon(&self) -> u64 {
        self.horizon
    }

    pub fn rides(&self) -> &[Ride] {
        &self.rides
    }

    #[inline]
    pub fn ride(&self, ride_id: RideIdx) -> &Ride {
        &self.rides[ride_id]
    }

    pub fn ride_count(&self) -> usize {
        self.rides.len()
    }

    pub fn contains_ride(&self, ride_id: RideIdx) -> bool {
        ride_id.get() < self.rides.len()
    }

    /// Ride indices ordered by earliest start. Ties keep their input order.
    pub fn rides_by_earliest_start(&self) -> Vec<RideIdx> {
        let mut ride_ids: Vec<RideIdx> = self.rides.iter().map(Ride::index).collect();
        ride_ids.sort_by_key(|&ride_id| self.ride(ride_id).earliest_start());
        ride_ids
    }

    /// Upper bound on the score: every ride on time, no ride dropped.
    pub fn max_score(&self) -> u64 {
        self.rides
            .iter()
            .map(|ride| ride.length().saturating_add(self.bonus))
            .fold(0, u64::saturating_add)
    }
}

/// Writes the problem back in its input text format.
impl Display for RideProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{} {} {} {} {} {}",
            self.rows,
            self.cols,
            self.fleet_size,
            self.rides.len(),
            self.bonus,
            self.horizon
        )?;

        for ride in &self.rides {
            writeln!(
                f,
                "{} {} {} {} {} {}",
                ride.start().row(),
                ride.start().col(),
                ride.end().row(),
                ride.end().col(),
                ride.earliest_start(),
                ride.latest_finish()
            )?;
        }

        Ok(())
    }
}

#[derive(Default)]
pub struct RideProblemBuilder {
    rows: Option<u64>,
    cols: Option<u64>,
    fleet_size: Option<usize>,
    bonus: Option<u64>,
    horizon: Option<u64>,
    rides: Vec<Ride>,
}

impl RideProblemBuilder {
    pub fn set_grid(&mut self, rows: u64, cols: u64) -> &mut RideProblemBuilder {
        self.rows = Some(rows);
        self.cols = Some(cols);
        self
    }

    pub fn set_fleet_size(&mut self, fleet_size: usize) -> &mut RideProblemBuilder {
        self.fleet_size = Some(fleet_size);
        self
    }

    pub fn set_bonus(&mut self, bonus: u64) -> &mut RideProblemBuilder {
        self.bonus = Some(bonus);
        self
    }

    pub fn set_horizon(&mut self, horizon: u64) -> &mut RideProblemBuilder {
        self.horizon = Some(horizon);
        self
    }

    /// Appends a ride; its index is its position in insertion order.
    pub fn add_ride(
        &mut self,
        start: Position,
        end: Position,
        earliest_start: u64,
        latest_finish: u64,
    ) -> &mut RideProblemBuilder {
        let index = RideIdx::new(self.rides.len());
        self.rides
            .push(Ride::new(index, start, end, earliest_start, latest_finish));
        self
    }

    pub fn build(self) -> RideProblem {
        RideProblem {
            rows: self.rows.unwrap_or(1),
            cols: self.cols.unwrap_or(1),
            fleet_size: self.fleet_size.unwrap_or(0),
            bonus: self.bonus.unwrap_or(0),
            horizon: self.horizon.unwrap_or(0),
            rides: self.rides,
        }
    }
}
