use crate::solver::car::Car;

use super::assign_context::AssignContext;

/// A greedy policy that hands the rides of a problem out to a fresh fleet.
///
/// Returned cars are in fleet order; a ride that no car takes is dropped.
pub trait AssignRides {
    fn assign_rides(&self, context: &AssignContext) -> Vec<Car>;
}
