//! wcq - World Cup 2026 qualification simulator
//!
//! Runs one detailed simulation plus N Monte Carlo iterations and prints
//! the qualified field and per-team qualification probabilities.

mod report;

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use wcq_core::{Aggregate, ReferenceData, SimConfig, Simulator};

#[derive(Parser, Debug)]
#[command(name = "wcq")]
#[command(version, about = "Monte Carlo simulation of FIFA World Cup 2026 qualification", long_about = None)]
struct Cli {
    /// RNG seed; drawn at random (and printed to stderr) when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// Number of Monte Carlo iterations (0 prints empty probability tables)
    #[arg(long, default_value_t = 1000)]
    simulations: u64,

    /// Print the single simulation round by round and enable debug logs
    #[arg(short, long)]
    verbose: bool,

    /// JSON file overriding the simulation config
    #[arg(long)]
    config: Option<PathBuf>,

    /// Spread iterations across all cores (same results as sequential)
    #[arg(long)]
    parallel: bool,

    /// Also print the per-path probability table
    #[arg(long)]
    paths: bool,

    /// Write probabilities and path counts as JSON
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "warn,wcq_core=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn progress_bar(total: u64, hidden: bool) -> ProgressBar {
    if hidden {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(total);
    match ProgressStyle::default_bar().template("[{bar:40}] {pos}/{len} simulations ({eta})") {
        Ok(style) => pb.set_style(style.progress_chars("=> ")),
        Err(e) => tracing::warn!(error = %e, "progress template rejected"),
    }
    pb
}

fn run_monte_carlo(sim: &Simulator<'_>, cli: &Cli, seed: u64) -> Aggregate {
    let pb = progress_bar(cli.simulations, cli.verbose);
    let aggregate = if cli.parallel {
        sim.run_parallel_with_progress(cli.simulations, seed, |n| pb.inc(n))
    } else {
        sim.run_with_progress(cli.simulations, seed, |done| pb.set_position(done))
    };
    pb.finish_and_clear();
    aggregate
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => SimConfig::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => SimConfig::default(),
    };
    let data = ReferenceData::embedded()
        .context("Failed to parse embedded reference data")?
        .with_default_rating(config.default_rating);

    let seed = match cli.seed {
        Some(seed) => seed,
        None => {
            let seed = rand::random::<u64>();
            eprintln!("Using random seed {} (pass --seed {} to reproduce)", seed, seed);
            seed
        }
    };

    let sim = Simulator::new(&data, &config);
    let single = sim.single(seed);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if cli.verbose {
        report::write_trace(&mut out, &single)?;
    }
    report::write_single_simulation(&mut out, &single.qualified)?;
    out.flush()?;

    let aggregate = run_monte_carlo(&sim, &cli, seed);

    report::write_probabilities(&mut out, &aggregate)?;
    report::write_breakdown(&mut out, &aggregate, &data.ratings)?;
    if cli.paths {
        report::write_paths(&mut out, &aggregate)?;
    }
    out.flush()?;

    if let Some(path) = &cli.json {
        let file = File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        report::write_json(&mut writer, seed, &aggregate)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        writer.flush()?;
        tracing::info!(path = %path.display(), "probabilities exported");
    }

    Ok(())
}
