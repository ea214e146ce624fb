use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context;
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use rides_optimizer::{
    parsers::{hashcode::HashCodeParser, parser::DatasetParser},
    problem::ride_problem::RideProblem,
    solver::{
        assign::assigner::Assigner,
        score::ScoreAnalysis,
        scorer::Scorer,
    },
};
use tracing::{error, info};

use crate::{
    assign::StrategyArgs,
    file_utils::{PROBLEM_EXTENSION, read_folder, submission_path_for},
};

#[derive(Args)]
pub struct AssignDatasetArgs {
    /// Folder of `*.in` problems, or a single problem file
    #[arg(long)]
    dir: PathBuf,

    #[command(flatten)]
    strategy: StrategyArgs,
}

pub fn create_assigner(args: &StrategyArgs) -> anyhow::Result<Assigner> {
    Assigner::new(args.to_params()).context("Cannot create assigner")
}

/// Assigns, writes the submission to `out` and scores it.
pub fn assign_and_write(
    assigner: &Assigner,
    problem: &RideProblem,
    out: &Path,
) -> anyhow::Result<ScoreAnalysis> {
    let submission = assigner.assign(problem);

    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)?;
    }
    submission
        .write_to(out)
        .with_context(|| format!("Cannot write submission {}", out.display()))?;

    Ok(Scorer::default().score(problem, &submission)?)
}

fn assign_file(assigner: &Assigner, path: &Path, out: &Path) -> anyhow::Result<ScoreAnalysis> {
    let problem = HashCodeParser
        .parse(path)
        .with_context(|| format!("Invalid problem {}", path.display()))?;

    assign_and_write(assigner, &problem, out)
}

pub fn run(args: AssignDatasetArgs) -> anyhow::Result<()> {
    info!("Assigning dataset {:?}", args.dir);
    let paths = if args.dir.is_file() {
        vec![args.dir.clone()]
    } else {
        read_folder(&args.dir, PROBLEM_EXTENSION)?
    };

    let assigner = create_assigner(&args.strategy)?;

    let bar = ProgressBar::new(paths.len() as u64);
    bar.enable_steady_tick(Duration::from_millis(250));
    bar.set_style(ProgressStyle::default_bar().template("[{bar:40}] {pos}/{len} {msg}")?);

    let mut total = ScoreAnalysis::default();
    let mut failures = 0;

    for path in &paths {
        let out = submission_path_for(path);
        bar.set_message(path.display().to_string());

        match assign_file(&assigner, path, &out) {
            Ok(score) => {
                info!("Score: {} for file: {}", score.total, path.display());
                total += score;
            }
            Err(err) => {
                error!("{}: {err:#}", path.display());
                failures += 1;
            }
        }

        bar.inc(1);
    }

    bar.finish_and_clear();
    info!(
        "Total score: {} ({} strategy, {} files)",
        total.total,
        assigner.params().strategy,
        paths.len()
    );

    if failures > 0 {
        anyhow::bail!("{failures} file(s) could not be assigned");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use rides_optimizer::parsers::hashcode::parse_submission;

    use super::*;

    #[test]
    fn test_assign_file_writes_a_valid_submission() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("a.in");
        fs::write(&input, "3 4 2 3 2 10\n0 0 1 3 2 9\n1 2 1 0 0 9\n2 0 2 2 2 9\n").unwrap();
        let out = dir.path().join("nested/a.out");

        let assigner = Assigner::new(Default::default()).unwrap();
        let score = assign_file(&assigner, &input, &out).unwrap();

        let submission = parse_submission(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(submission.len(), 2);
        assert!(score.total > 0);
    }
}
