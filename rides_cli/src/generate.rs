use std::path::PathBuf;

use clap::Args;
use rand::{SeedableRng, rngs::SmallRng};
use rides_optimizer::generator::{GeneratorParams, generate_problem};
use tracing::info;

#[derive(Args)]
pub struct GenerateArgs {
    /// Problem file to write
    #[arg(long, short = 'o')]
    out: PathBuf,

    /// Seed for a reproducible instance
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, default_value_t = 100)]
    rows: u64,

    #[arg(long, default_value_t = 100)]
    cols: u64,

    #[arg(long, default_value_t = 10)]
    fleet: usize,

    #[arg(long, default_value_t = 300)]
    rides: usize,

    #[arg(long, default_value_t = 25)]
    bonus: u64,

    #[arg(long, default_value_t = 10_000)]
    horizon: u64,
}

pub fn run(args: GenerateArgs) -> Result<(), anyhow::Error> {
    let params = GeneratorParams {
        rows: args.rows,
        cols: args.cols,
        fleet_size: args.fleet,
        ride_count: args.rides,
        bonus: args.bonus,
        horizon: args.horizon,
    };

    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };
    let problem = generate_problem(&params, &mut rng);

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(&args.out, problem.to_string())?;
    info!(
        "Generated {} rides for {} cars into {}",
        problem.ride_count(),
        problem.fleet_size(),
        args.out.display()
    );

    Ok(())
}
