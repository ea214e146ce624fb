use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use comfy_table::{Table, presets::UTF8_FULL};
use rides_optimizer::{
    parsers::{hashcode::HashCodeParser, parser::DatasetParser},
    solver::{
        score::ScoreAnalysis,
        scorer::{Scorer, ScorerParams},
    },
};
use serde::Serialize;
use tracing::{error, info, warn};

use crate::file_utils::{DatasetPair, find_dataset_pairs};

pub const DATASET_DIR_ENV: &str = "RIDES_DATASET_DIR";
pub const DEFAULT_DATASET_DIR: &str = "files";

#[derive(Args)]
pub struct ScoreArgs {
    /// Folder holding `*.in` problems and their `*.out` submissions
    #[arg(long, env = DATASET_DIR_ENV, default_value = DEFAULT_DATASET_DIR)]
    dir: PathBuf,

    /// Print the report as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Accept submissions that give the same ride to more than one car
    #[arg(long)]
    allow_shared_rides: bool,
}

#[derive(Serialize, Debug)]
pub struct FileReport {
    pub file: String,
    pub score: Option<ScoreAnalysis>,
    pub error: Option<String>,
}

#[derive(Serialize, Debug)]
pub struct DatasetReport {
    pub files: Vec<FileReport>,
    pub total: ScoreAnalysis,
}

impl DatasetReport {
    pub fn failures(&self) -> usize {
        self.files.iter().filter(|file| file.error.is_some()).count()
    }
}

fn score_pair(scorer: &Scorer, pair: &DatasetPair) -> anyhow::Result<ScoreAnalysis> {
    let problem = HashCodeParser
        .parse(&pair.problem)
        .with_context(|| format!("Invalid problem {}", pair.problem.display()))?;
    let submission = HashCodeParser
        .parse_submission(&pair.submission)
        .with_context(|| format!("Invalid submission {}", pair.submission.display()))?;

    scorer
        .score(&problem, &submission)
        .with_context(|| format!("Rejected submission {}", pair.submission.display()))
}

/// Scores every pair of the folder. A file that fails is reported and the
/// others are still scored.
pub fn score_dataset(dir: &Path, scorer: &Scorer) -> anyhow::Result<DatasetReport> {
    let pairs = find_dataset_pairs(dir)
        .with_context(|| format!("Cannot read dataset folder {}", dir.display()))?;

    if pairs.is_empty() {
        warn!("No problem/submission pairs found in {}", dir.display());
    }

    let mut total = ScoreAnalysis::default();
    let mut files = Vec::with_capacity(pairs.len());

    for pair in &pairs {
        let file = pair.name();
        match score_pair(scorer, pair) {
            Ok(score) => {
                info!("Score: {} for file: {}", score.total, file);
                total += score;
                files.push(FileReport {
                    file,
                    score: Some(score),
                    error: None,
                });
            }
            Err(err) => {
                error!("{file}: {err:#}");
                files.push(FileReport {
                    file,
                    score: None,
                    error: Some(format!("{err:#}")),
                });
            }
        }
    }

    Ok(DatasetReport { files, total })
}

pub fn render_table(report: &DatasetReport) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec![
        "File",
        "Score",
        "Bonus",
        "Committed",
        "Scored",
        "Late",
        "Past horizon",
    ]);

    for file in &report.files {
        match (&file.score, &file.error) {
            (Some(score), _) => table.add_row(vec![
                file.file.clone(),
                score.total.to_string(),
                score.bonus_points.to_string(),
                score.rides_committed().to_string(),
                score.rides_scored.to_string(),
                score.rides_late.to_string(),
                score.rides_past_horizon.to_string(),
            ]),
            (None, error) => table.add_row(vec![
                file.file.clone(),
                String::from("error"),
                error.clone().unwrap_or_default(),
            ]),
        };
    }

    table
}

pub fn run(args: ScoreArgs) -> anyhow::Result<()> {
    let scorer = Scorer::new(ScorerParams {
        exclusive_rides: !args.allow_shared_rides,
    });

    let report = score_dataset(&args.dir, &scorer)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", render_table(&report));
        println!("\nTotal score: {}", report.total.total);
    }

    let failures = report.failures();
    if failures > 0 {
        anyhow::bail!("{failures} file(s) could not be scored");
    }

    Ok(())
}
