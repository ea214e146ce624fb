use crate::{problem::ride_problem::RideProblem, solver::car::Car};

use super::assign_params::AssignParams;

pub struct AssignContext<'a> {
    pub problem: &'a RideProblem,
    pub params: &'a AssignParams,
    pub thread_pool: &'a rayon::ThreadPool,
}

impl<'a> AssignContext<'a> {
    /// One fresh car per fleet slot, all at the origin and free at step 0.
    pub fn build_fleet(&self) -> Vec<Car> {
        (0..self.problem.fleet_size()).map(|_| Car::new()).collect()
    }
}
