use crate::solver::car::DeadlineRule;

use super::assign_strategy::AssignStrategy;

#[derive(Clone, Debug)]
pub struct AssignParams {
    pub strategy: AssignStrategy,
    pub threads: Threads,
    /// Deadline comparison used when ranking cars. Does not affect scoring.
    pub tier_deadline_rule: DeadlineRule,
}

#[derive(Clone, Debug)]
pub enum Threads {
    Single,
    Auto,
    Multi(usize),
}

impl Threads {
    pub fn number_of_threads(&self) -> usize {
        match self {
            Threads::Single => 1,
            Threads::Multi(num) => (*num).max(1),
            Threads::Auto => std::thread::available_parallelism().map_or(1, |n| n.get()),
        }
    }
}

impl Default for AssignParams {
    fn default() -> Self {
        Self {
            strategy: AssignStrategy::LookAhead,
            threads: Threads::Single,
            tier_deadline_rule: DeadlineRule::Inclusive,
        }
    }
}
