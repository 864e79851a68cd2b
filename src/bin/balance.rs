//! One-shot balancing CLI.
//!
//! Reads a JSON roster, balances it and prints the text report or the full
//! result as JSON.
//!
//! Usage:
//!   balance --roster players.json [--seed 42] [--seeds 16] [--json]

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::builder::RangedU64ValueParser;
use clap::Parser;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use scrimbal::balance::{balance, score_with, sweep, MatchResult};
use scrimbal::catalog::summarize_ban_pick;
use scrimbal::config::{load_config, BalanceConfig, MAX_SWEEP_SEEDS};
use scrimbal::protocol::{load_roster, write_result};
use scrimbal::shuffle::Seed;

#[derive(Debug, Parser)]
#[command(name = "balance", about = "Split a roster into two balanced teams")]
struct Cli {
    /// JSON roster file.
    #[arg(long)]
    roster: PathBuf,

    /// Match seed; any integer. Random when omitted.
    #[arg(long, allow_negative_numbers = true)]
    seed: Option<i64>,

    /// JSON config file; defaults apply to anything it leaves out.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Sweep this many consecutive seeds and keep the best.
    #[arg(
        long,
        default_value_t = 1,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_SWEEP_SEEDS as u64)
    )]
    seeds: usize,

    /// Worker threads for the sweep (0 = one per core).
    #[arg(long, default_value_t = 0)]
    threads: usize,

    /// Skip the swap improver.
    #[arg(long)]
    no_improve: bool,

    /// Print the result as JSON instead of the text report.
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    seed: Seed,
    score: f64,
    result: &'a MatchResult,
}

fn main() -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("scrimbal=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let cli = Cli::parse();

    let roster = load_roster(&cli.roster)?;
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => BalanceConfig::default(),
    };
    if cli.no_improve {
        config.improve = false;
    }
    let seed = match cli.seed {
        Some(s) => Seed::new(s),
        None => Seed::from(SmallRng::from_entropy().gen::<u32>()),
    };

    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("failed to configure thread pool")?;
    }

    let (seed, result, score) = if cli.seeds > 1 {
        let outcome = sweep(&roster, seed, cli.seeds, &config);
        (outcome.seed, outcome.result, outcome.score)
    } else {
        let result = balance(&roster, seed, &config);
        let score = score_with(&result.team_a, &result.team_b, &config.scoring);
        (seed, result, score)
    };

    if !result.banned_heroes.is_empty() {
        let summary = summarize_ban_pick(result.banned_heroes.as_slice());
        info!(bans = summary.total_bans, by_role = ?summary.by_role, impact = ?summary.impact, "hero bans");
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if cli.json {
        let payload = JsonOutput {
            seed,
            score,
            result: &result,
        };
        serde_json::to_writer_pretty(&mut out, &payload).context("failed to write JSON")?;
        writeln!(out)?;
    } else {
        writeln!(out, "seed {}", seed)?;
        write_result(&mut out, &result, score)?;
    }
    out.flush()?;
    Ok(())
}
