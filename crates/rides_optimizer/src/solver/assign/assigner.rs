use thiserror::Error;
use tracing::info;

use crate::{
    problem::ride_problem::RideProblem,
    solver::submission::Submission,
};

use super::{
    assign_context::AssignContext, assign_params::AssignParams, assign_rides::AssignRides,
};

#[derive(Debug, Error)]
pub enum AssignError {
    #[error("Failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Builds a submission from scratch with the configured strategy.
pub struct Assigner {
    params: AssignParams,
    thread_pool: rayon::ThreadPool,
}

impl Assigner {
    pub fn new(params: AssignParams) -> Result<Self, AssignError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(params.threads.number_of_threads())
            .build()?;

        Ok(Assigner {
            params,
            thread_pool,
        })
    }

    pub fn params(&self) -> &AssignParams {
        &self.params
    }

    pub fn assign(&self, problem: &RideProblem) -> Submission {
        let context = AssignContext {
            problem,
            params: &self.params,
            thread_pool: &self.thread_pool,
        };

        let cars = self.params.strategy.assign_rides(&context);
        let submission = Submission::from_cars(&cars);

        info!(
            strategy = %self.params.strategy,
            assigned = submission.assigned_rides_count(),
            rides = problem.ride_count(),
            "assignment finished"
        );

        submission
    }
}

pub fn assign(problem: &RideProblem, params: AssignParams) -> Result<Submission, AssignError> {
    Ok(Assigner::new(params)?.assign(problem))
}
