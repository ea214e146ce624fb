use std::{fmt::Display, str::FromStr};

use serde::Serialize;

use crate::solver::car::Car;

use super::{
    assign_context::AssignContext, assign_rides::AssignRides, look_ahead::LookAhead,
    round_robin::RoundRobin, temporal_sweep::TemporalSweep,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum AssignStrategy {
    TemporalSweep,
    RoundRobin,
    #[default]
    LookAhead,
}

impl AssignStrategy {
    pub const ALL: [AssignStrategy; 3] = [
        AssignStrategy::TemporalSweep,
        AssignStrategy::RoundRobin,
        AssignStrategy::LookAhead,
    ];
}

impl Serialize for AssignStrategy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl Display for AssignStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TemporalSweep => write!(f, "temporal-sweep"),
            Self::RoundRobin => write!(f, "round-robin"),
            Self::LookAhead => write!(f, "look-ahead"),
        }
    }
}

impl FromStr for AssignStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "temporal-sweep" | "sweep" => Ok(Self::TemporalSweep),
            "round-robin" => Ok(Self::RoundRobin),
            "look-ahead" => Ok(Self::LookAhead),
            _ => Err(format!(
                "Unknown strategy '{s}', expected one of: temporal-sweep, round-robin, look-ahead"
            )),
        }
    }
}

impl AssignRides for AssignStrategy {
    fn assign_rides(&self, context: &AssignContext) -> Vec<Car> {
        match self {
            AssignStrategy::TemporalSweep => TemporalSweep.assign_rides(context),
            AssignStrategy::RoundRobin => RoundRobin.assign_rides(context),
            AssignStrategy::LookAhead => LookAhead.assign_rides(context),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_round_trips_display() {
        for strategy in AssignStrategy::ALL {
            assert_eq!(strategy.to_string().parse::<AssignStrategy>(), Ok(strategy));
        }
    }

    #[test]
    fn test_from_str_unknown() {
        assert!("best-insertion".parse::<AssignStrategy>().is_err());
    }
}
