use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;

use crate::{
    assign::AssignArgs, assign_dataset::AssignDatasetArgs, generate::GenerateArgs,
    score::ScoreArgs,
};

mod assign;
mod assign_dataset;
mod file_utils;
mod generate;
mod score;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    // `score` arguments, used when no subcommand is given
    #[command(flatten)]
    score: ScoreArgs,

    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Score every `*.in`/`*.out` pair of a folder (default command)
    Score {
        #[command(flatten)]
        args: ScoreArgs,
    },
    /// Build a submission for one problem
    Assign {
        #[command(flatten)]
        args: AssignArgs,
    },
    /// Build submissions for every problem of a folder
    AssignDataset {
        #[command(flatten)]
        args: AssignDatasetArgs,
    },
    /// Write a random problem
    #[command(visible_alias = "g")]
    Generate {
        #[command(flatten)]
        args: GenerateArgs,
    },
}

fn main() -> Result<(), anyhow::Error> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    match cli.command {
        Some(Commands::Score { args }) => score::run(args)?,
        Some(Commands::Assign { args }) => assign::run(args)?,
        Some(Commands::AssignDataset { args }) => assign_dataset::run(args)?,
        Some(Commands::Generate { args }) => generate::run(args)?,
        None => score::run(cli.score)?,
    }

    Ok(())
}
