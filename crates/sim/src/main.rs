// Copyright (C) 2025 Primerank Developers
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use clap::Parser;
use log::error;
use std::{io, num::NonZeroUsize, path::PathBuf, sync::Arc, thread};

use primerank_eval::{HandEvaluator, RankTable};
use primerank_sim::{Config, Matchup, Simulator, Street, report};

#[derive(Debug, Parser)]
struct Cli {
    /// Number of rounds to sample for each matchup.
    #[clap(long, short, default_value_t = 1_000_000)]
    rounds: usize,
    /// The street where hands are compared (flop, turn or river).
    #[clap(long, short, default_value_t = Street::River)]
    street: Street,
    /// Number of parallel tasks, defaults to the available parallelism.
    #[clap(long, short, value_parser = clap::value_parser!(u16).range(1..=256))]
    tasks: Option<u16>,
    /// Seed for reproducible sampling.
    #[clap(long)]
    seed: Option<u64>,
    /// Enumerate all the boards instead of sampling.
    #[clap(long)]
    exhaustive: bool,
    /// Print the results as JSON.
    #[clap(long)]
    json: bool,
    /// Hand categories reference table, defaults to the embedded one.
    #[clap(long)]
    ranks: Option<PathBuf>,
    /// Matchup to simulate, e.g. AdKh:JdTd (repeatable).
    #[clap(long = "matchup", short)]
    matchups: Vec<Matchup>,
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        error!("{e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let table = match &cli.ranks {
        Some(path) => RankTable::from_path(path)
            .with_context(|| format!("Loading ranks table {}", path.display()))?,
        None => RankTable::embedded()?,
    };

    let evaluator = HandEvaluator::new(Arc::new(table));
    let config = Config {
        rounds: cli.rounds,
        street: cli.street,
        tasks: cli.tasks.map(usize::from).unwrap_or_else(|| {
            thread::available_parallelism()
                .map(NonZeroUsize::get)
                .unwrap_or(1)
        }),
        seed: cli.seed,
        exhaustive: cli.exhaustive,
    };

    let matchups = if cli.matchups.is_empty() {
        Matchup::defaults()
    } else {
        cli.matchups
    };

    let simulator = Simulator::new(evaluator, config);
    let results = matchups
        .iter()
        .map(|m| -> Result<report::MatchupResult> {
            let tally = simulator.run(m)?;
            Ok(report::MatchupResult::new(m, simulator.config(), tally))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut stdout = io::stdout().lock();
    if cli.json {
        report::write_json(&mut stdout, &results)
    } else {
        report::write_text(&mut stdout, &results)
    }
}
