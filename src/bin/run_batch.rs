//! Evaluate a CSV of profiles and write per-profile delay costs
//!
//! Rows that cannot be evaluated are written with the error instead of
//! stopping the run.

use anyhow::Result;
use clap::Parser;
use hospital_cover::batch::{evaluate_rows, write_rows_to_path};
use hospital_cover::profile::load_profiles;
use hospital_cover::{AdviceConfig, ScenarioRunner};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(name = "run_batch", about = "Batch delay-cost evaluation from CSV")]
struct Cli {
    /// Input CSV (Age,Income,Premium,DelayYears,IsFamily,NumChildren,IsImmigrant,MedicareAge)
    input: PathBuf,

    /// Output CSV path
    #[arg(long, short, default_value = "delay_cost_output.csv")]
    output: PathBuf,

    /// JSON advice config
    #[arg(long, env = "HOSPITAL_COVER_CONFIG")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let start = Instant::now();

    let config = AdviceConfig::load(cli.config.as_deref())?;
    let runner = ScenarioRunner::with_config(config);

    let inputs = load_profiles(&cli.input)?;
    log::info!(
        "loaded {} profiles from {} in {:?}",
        inputs.len(),
        cli.input.display(),
        start.elapsed()
    );

    let compute_start = Instant::now();
    let rows = evaluate_rows(&runner, &inputs);
    log::info!("evaluated {} profiles in {:?}", rows.len(), compute_start.elapsed());

    let failed = rows.iter().filter(|r| r.is_failed()).count();
    if failed > 0 {
        log::warn!("{} profile(s) could not be evaluated", failed);
    }

    write_rows_to_path(&rows, &cli.output)?;

    println!(
        "Wrote {} rows ({} failed) to {} in {:?}",
        rows.len(),
        failed,
        cli.output.display(),
        start.elapsed()
    );

    Ok(())
}
