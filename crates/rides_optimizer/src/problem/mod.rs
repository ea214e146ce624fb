pub mod position;
pub mod ride;
pub mod ride_problem;
