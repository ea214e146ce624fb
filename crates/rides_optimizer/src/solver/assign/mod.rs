pub mod assign_context;
pub mod assign_params;
pub mod assign_rides;
pub mod assign_strategy;
pub mod assigner;
pub mod look_ahead;
pub mod round_robin;
pub mod temporal_sweep;
