use std::{fmt::Display, path::Path};

use serde::Serialize;

use crate::{problem::ride::RideIdx, utils::enumerate_idx::EnumerateIdx};

use super::car::{Car, CarIdx};

/// One itinerary per car, in car order, each listing rides in execution order.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    itineraries: Vec<Vec<RideIdx>>,
}

impl Submission {
    pub fn new(itineraries: Vec<Vec<RideIdx>>) -> Self {
        Submission { itineraries }
    }

    pub fn from_cars(cars: &[Car]) -> Self {
        Submission {
            itineraries: cars.iter().map(|car| car.assigned().to_vec()).collect(),
        }
    }

    pub fn itineraries(&self) -> &[Vec<RideIdx>] {
        &self.itineraries
    }

    pub fn itinerary(&self, car_id: CarIdx) -> &[RideIdx] {
        &self.itineraries[car_id.get()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (CarIdx, &[RideIdx])> {
        self.itineraries
            .iter()
            .enumerate_idx()
            .map(|(car_id, rides): (CarIdx, &Vec<RideIdx>)| (car_id, rides.as_slice()))
    }

    /// Number of entries, including empty itineraries.
    pub fn len(&self) -> usize {
        self.itineraries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.itineraries.is_empty()
    }

    /// Number of cars up to and including the last one with a ride.
    pub fn used_len(&self) -> usize {
        self.itineraries
            .iter()
            .rposition(|rides| !rides.is_empty())
            .map_or(0, |last| last + 1)
    }

    pub fn assigned_rides_count(&self) -> usize {
        self.itineraries.iter().map(Vec::len).sum()
    }

    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), std::io::Error> {
        std::fs::write(path, self.to_string())
    }
}

/// Writes `k i1 .. ik` per car, `0` for a car without rides.
impl Display for Submission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for rides in &self.itineraries {
            write!(f, "{}", rides.len())?;
            for ride_id in rides {
                write!(f, " {ride_id}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
