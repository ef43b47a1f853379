// Copyright (C) 2025 Primerank Developers
// SPDX-License-Identifier: Apache-2.0

//! Showdown counters.
use serde::Serialize;

use primerank_eval::Showdown;

/// Number of rounds won by each player and tied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Tally {
    /// Rounds won by the first player.
    pub first: u64,
    /// Rounds won by the second player.
    pub second: u64,
    /// Tied rounds.
    pub ties: u64,
}

impl Tally {
    /// Records a showdown result.
    pub fn record(&mut self, showdown: Showdown) {
        match showdown {
            Showdown::First => self.first += 1,
            Showdown::Second => self.second += 1,
            Showdown::Tie => self.ties += 1,
        }
    }

    /// Adds the other tally counters to this one.
    pub fn merge(&mut self, other: &Tally) {
        self.first += other.first;
        self.second += other.second;
        self.ties += other.ties;
    }

    /// Number of rounds played.
    pub fn total(&self) -> u64 {
        self.first + self.second + self.ties
    }

    /// Probability of the first player winning.
    pub fn first_win_probability(&self) -> f64 {
        self.ratio(self.first)
    }

    /// Probability of the second player winning.
    pub fn second_win_probability(&self) -> f64 {
        self.ratio(self.second)
    }

    /// Probability of a tie.
    pub fn tie_probability(&self) -> f64 {
        self.ratio(self.ties)
    }

    fn ratio(&self, count: u64) -> f64 {
        match self.total() {
            0 => 0.0,
            total => count as f64 / total as f64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_and_merge() {
        let mut t1 = Tally::default();
        t1.record(Showdown::First);
        t1.record(Showdown::First);
        t1.record(Showdown::Tie);

        let mut t2 = Tally::default();
        t2.record(Showdown::Second);

        t1.merge(&t2);
        assert_eq!(
            t1,
            Tally {
                first: 2,
                second: 1,
                ties: 1
            }
        );
        assert_eq!(t1.total(), 4);
        assert_eq!(t1.first_win_probability(), 0.5);
        assert_eq!(t1.second_win_probability(), 0.25);
        assert_eq!(t1.tie_probability(), 0.25);
    }

    #[test]
    fn empty_tally() {
        let t = Tally::default();
        assert_eq!(t.total(), 0);
        assert_eq!(t.first_win_probability(), 0.0);
        assert_eq!(t.tie_probability(), 0.0);
    }
}
