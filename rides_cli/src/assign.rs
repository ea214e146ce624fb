use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use rides_optimizer::{
    parsers::{hashcode::HashCodeParser, parser::DatasetParser},
    solver::{
        assign::{
            assign_params::{AssignParams, Threads},
            assign_strategy::AssignStrategy,
        },
        car::DeadlineRule,
    },
};

#[derive(Args, Clone)]
pub struct StrategyArgs {
    /// temporal-sweep, round-robin or look-ahead
    #[arg(short, long, default_value = "look-ahead")]
    strategy: AssignStrategy,

    /// Threads used to rank cars (look-ahead only)
    #[arg(long, default_value_t = 1)]
    threads: u8,

    /// Rank cars with the scorer's strict deadline instead of accepting an
    /// arrival exactly at the latest finish
    #[arg(long)]
    strict_deadline: bool,
}

impl StrategyArgs {
    pub fn to_params(&self) -> AssignParams {
        AssignParams {
            strategy: self.strategy,
            threads: Threads::Multi(self.threads as usize),
            tier_deadline_rule: if self.strict_deadline {
                DeadlineRule::Strict
            } else {
                DeadlineRule::Inclusive
            },
        }
    }
}

#[derive(Args)]
pub struct AssignArgs {
    /// The problem file
    #[arg(short = 'i', long)]
    input: PathBuf,

    /// Submission file, defaults to the input with an `.out` extension
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    #[command(flatten)]
    strategy: StrategyArgs,
}

pub fn run(args: AssignArgs) -> anyhow::Result<()> {
    let out = args
        .output
        .unwrap_or_else(|| crate::file_utils::submission_path_for(&args.input));

    let problem = HashCodeParser
        .parse(&args.input)
        .with_context(|| format!("Invalid problem {}", args.input.display()))?;

    let assigner = crate::assign_dataset::create_assigner(&args.strategy)?;
    let score = crate::assign_dataset::assign_and_write(&assigner, &problem, &out)?;

    tracing::info!(
        "Finished: score = {}/{}, rides scored = {}/{}, written to {}",
        score.total,
        problem.max_score(),
        score.rides_scored,
        problem.ride_count(),
        out.display()
    );

    Ok(())
}
