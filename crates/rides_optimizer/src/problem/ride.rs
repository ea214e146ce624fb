use serde::{Deserialize, Serialize};

use crate::define_index_newtype;

use super::position::Position;

define_index_newtype!(RideIdx, Ride);

/// A point-to-point trip that has to be started no earlier than
/// `earliest_start` and finished before `latest_finish`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Ride {
    index: RideIdx,
    start: Position,
    end: Position,
    earliest_start: u64,
    latest_finish: u64,
}

impl Ride {
    pub fn new(
        index: RideIdx,
        start: Position,
        end: Position,
        earliest_start: u64,
        latest_finish: u64,
    ) -> Self {
        Ride {
            index,
            start,
            end,
            earliest_start,
            latest_finish,
        }
    }

    pub fn index(&self) -> RideIdx {
        self.index
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn end(&self) -> Position {
        self.end
    }

    pub fn earliest_start(&self) -> u64 {
        self.earliest_start
    }

    pub fn latest_finish(&self) -> u64 {
        self.latest_finish
    }

    #[inline]
    pub fn length(&self) -> u64 {
        self.start.distance(&self.end)
    }
}
