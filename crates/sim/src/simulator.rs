// Copyright (C) 2025 Primerank Developers
// SPDX-License-Identifier: Apache-2.0

//! Matchups simulation.
use anyhow::{Result, anyhow};
use log::{debug, info};
use rand::{SeedableRng, rngs::SmallRng};
use std::{thread, time::Instant};

use primerank_eval::{Card, Deck, HandEvaluator, Showdown};

use crate::{Matchup, Street, Tally};

/// Rounds between progress messages.
const PROGRESS_ROUNDS: usize = 100_000;

/// Simulation config.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of rounds to sample for each matchup.
    pub rounds: usize,
    /// The street where hands are compared.
    pub street: Street,
    /// Number of parallel sampling tasks.
    pub tasks: usize,
    /// Seed for reproducible sampling, tasks use `seed + task_id`.
    pub seed: Option<u64>,
    /// Enumerate all the boards instead of sampling.
    pub exhaustive: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rounds: 1_000_000,
            street: Street::River,
            tasks: 1,
            seed: None,
            exhaustive: false,
        }
    }
}

/// Plays matchups rounds and counts the results.
#[derive(Debug, Clone)]
pub struct Simulator {
    evaluator: HandEvaluator,
    config: Config,
}

impl Simulator {
    /// Creates a simulator.
    pub fn new(evaluator: HandEvaluator, config: Config) -> Self {
        Self { evaluator, config }
    }

    /// The simulator config.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Plays the matchup rounds.
    pub fn run(&self, matchup: &Matchup) -> Result<Tally> {
        let deck = matchup.deck();
        let now = Instant::now();

        let tally = if self.config.exhaustive {
            info!("Enumerating {matchup} {} boards", self.config.street);
            self.enumerate(matchup, &deck)?
        } else {
            info!(
                "Sampling {matchup} {} with {} rounds",
                self.config.street, self.config.rounds
            );
            self.sample(matchup, &deck)?
        };

        info!(
            "{matchup}: {} rounds in {:.3}s",
            tally.total(),
            now.elapsed().as_secs_f64()
        );

        Ok(tally)
    }

    /// Plays all the boards of the configured street.
    fn enumerate(&self, matchup: &Matchup, deck: &Deck) -> Result<Tally> {
        let mut tally = Tally::default();
        let mut res: Result<()> = Ok(());

        deck.for_each(self.config.street.board_size(), |board| {
            if res.is_err() {
                return;
            }

            match self.showdown(matchup, board) {
                Ok(showdown) => tally.record(showdown),
                Err(e) => res = Err(e),
            }

            if tally.total() % PROGRESS_ROUNDS as u64 == 0 {
                debug!("{matchup}: {} boards", tally.total());
            }
        });

        res.map(|_| tally)
    }

    /// Samples random boards from parallel tasks.
    fn sample(&self, matchup: &Matchup, deck: &Deck) -> Result<Tally> {
        let tasks = self.config.tasks.max(1);
        let rounds = self.config.rounds;

        thread::scope(|s| {
            let handles = (0..tasks)
                .map(|task_id| {
                    // The first tasks take the remainder rounds.
                    let task_rounds = rounds / tasks + usize::from(task_id < rounds % tasks);
                    s.spawn(move || self.sample_task(task_id, task_rounds, matchup, deck))
                })
                .collect::<Vec<_>>();

            handles.into_iter().try_fold(Tally::default(), |mut acc, handle| -> Result<Tally> {
                let tally = handle
                    .join()
                    .map_err(|_| anyhow!("Simulation task panicked"))??;
                acc.merge(&tally);
                Ok(acc)
            })
        })
    }

    fn sample_task(
        &self,
        task_id: usize,
        rounds: usize,
        matchup: &Matchup,
        deck: &Deck,
    ) -> Result<Tally> {
        let mut rng = match self.config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed.wrapping_add(task_id as u64)),
            None => SmallRng::from_os_rng(),
        };

        let mut tally = Tally::default();
        let mut res: Result<()> = Ok(());

        deck.sample(&mut rng, rounds, self.config.street.board_size(), |board| {
            if res.is_err() {
                return;
            }

            match self.showdown(matchup, board) {
                Ok(showdown) => tally.record(showdown),
                Err(e) => res = Err(e),
            }

            if tally.total() % PROGRESS_ROUNDS as u64 == 0 {
                debug!("Task {task_id} {matchup}: {} rounds", tally.total());
            }
        });

        res.map(|_| tally)
    }

    /// Compares the players best hands with the given board.
    fn showdown(&self, matchup: &Matchup, board: &[Card]) -> Result<Showdown> {
        let n = board.len() + 2;
        if n > 7 {
            return Err(anyhow!("Invalid board size {}", board.len()));
        }

        let first = matchup.first.cards();
        let second = matchup.second.cards();

        let mut h1 = [first[0]; 7];
        let mut h2 = [second[0]; 7];
        h1[..2].copy_from_slice(&first);
        h2[..2].copy_from_slice(&second);
        h1[2..n].copy_from_slice(board);
        h2[2..n].copy_from_slice(board);

        Ok(self.evaluator.showdown(&h1[..n], &h2[..n])?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simulator(config: Config) -> Simulator {
        Simulator::new(HandEvaluator::embedded().unwrap(), config)
    }

    #[test]
    fn flop_enumeration() {
        let sim = simulator(Config {
            street: Street::Flop,
            exhaustive: true,
            ..Config::default()
        });

        let m = "AdKh:JdTd".parse::<Matchup>().unwrap();
        let tally = sim.run(&m).unwrap();

        // 48 choose 3 flops.
        assert_eq!(tally.total(), 17_296);
        assert!(tally.first > tally.second);

        // Swapping the players swaps the counters.
        let swapped = sim.run(&Matchup::new(m.second, m.first)).unwrap();
        assert_eq!(swapped.first, tally.second);
        assert_eq!(swapped.second, tally.first);
        assert_eq!(swapped.ties, tally.ties);
    }

    #[test]
    fn same_ranks_tie_on_flop() {
        // No flush is possible with offsuit hole cards and three board cards.
        let sim = simulator(Config {
            street: Street::Flop,
            exhaustive: true,
            ..Config::default()
        });

        let m = "AdKh:AcKs".parse::<Matchup>().unwrap();
        let tally = sim.run(&m).unwrap();
        assert_eq!(tally.ties, 17_296);
        assert_eq!(tally.total(), 17_296);
    }

    #[test]
    fn seeded_sampling() {
        let config = Config {
            rounds: 1_001,
            tasks: 3,
            seed: Some(17),
            ..Config::default()
        };

        let sim = simulator(config);
        let m = Matchup::defaults()[1];

        let t1 = sim.run(&m).unwrap();
        let t2 = sim.run(&m).unwrap();
        assert_eq!(t1.total(), 1_001);
        assert_eq!(t1, t2);
    }

    #[test]
    fn overpair_is_favorite() {
        let sim = simulator(Config {
            rounds: 20_000,
            tasks: 2,
            seed: Some(3),
            ..Config::default()
        });

        let m = "AsAh:7d2c".parse::<Matchup>().unwrap();
        let tally = sim.run(&m).unwrap();
        assert_eq!(tally.total(), 20_000);
        assert!(tally.first_win_probability() > 0.8);
        assert!(tally.second_win_probability() < 0.2);
    }

    #[test]
    fn turn_sampling() {
        let sim = simulator(Config {
            rounds: 500,
            street: Street::Turn,
            seed: Some(5),
            ..Config::default()
        });

        let tally = sim.run(&Matchup::defaults()[2]).unwrap();
        assert_eq!(tally.total(), 500);
    }

    #[test]
    fn zero_rounds() {
        let sim = simulator(Config {
            rounds: 0,
            tasks: 4,
            ..Config::default()
        });

        let tally = sim.run(&Matchup::defaults()[0]).unwrap();
        assert_eq!(tally, Tally::default());
    }
}
