// Copyright (C) 2025 Primerank Developers
// SPDX-License-Identifier: Apache-2.0

//! Simulation results reporting.
use anyhow::Result;
use serde::Serialize;
use std::io::Write;

use crate::{Config, Matchup, Street, Tally};

/// The result of a matchup simulation.
#[derive(Debug, Clone, Serialize)]
pub struct MatchupResult {
    /// The first player hand name.
    pub first: String,
    /// The second player hand name.
    pub second: String,
    /// The street where hands are compared.
    pub street: Street,
    /// Whether all the boards have been enumerated.
    pub exhaustive: bool,
    /// The rounds counters.
    pub tally: Tally,
    /// Probability of the first player winning.
    pub first_wins: f64,
    /// Probability of the second player winning.
    pub second_wins: f64,
    /// Probability of a tie.
    pub ties: f64,
}

impl MatchupResult {
    /// Creates the result for a matchup tally.
    pub fn new(matchup: &Matchup, config: &Config, tally: Tally) -> Self {
        Self {
            first: matchup.first.name(),
            second: matchup.second.name(),
            street: config.street,
            exhaustive: config.exhaustive,
            tally,
            first_wins: tally.first_win_probability(),
            second_wins: tally.second_win_probability(),
            ties: tally.tie_probability(),
        }
    }

    /// The favorite of the matchup as `winner > loser`.
    pub fn favorite(&self) -> String {
        if self.first_wins > self.second_wins {
            format!("{} > {}", self.first, self.second)
        } else if self.second_wins > self.first_wins {
            format!("{} > {}", self.second, self.first)
        } else {
            format!("{} = {}", self.first, self.second)
        }
    }
}

/// Writes a human readable report.
pub fn write_text<W: Write>(w: &mut W, results: &[MatchupResult]) -> Result<()> {
    for r in results {
        let mode = if r.exhaustive { "exact" } else { "sampled" };
        writeln!(
            w,
            "{} vs {} on the {} ({} rounds, {mode}):",
            r.first,
            r.second,
            r.street,
            r.tally.total()
        )?;
        writeln!(
            w,
            "  Probability of {} winning over {} is {:.6}",
            r.first, r.second, r.first_wins
        )?;
        writeln!(
            w,
            "  Probability of {} winning over {} is {:.6}",
            r.second, r.first, r.second_wins
        )?;
        writeln!(w, "  Probability of a tie is {:.6}", r.ties)?;
    }

    if !results.is_empty() {
        let favorites = results
            .iter()
            .map(MatchupResult::favorite)
            .collect::<Vec<_>>();
        writeln!(w, "\nFavorites: {}", favorites.join(", "))?;
    }

    Ok(())
}

/// Writes the results as a JSON array.
pub fn write_json<W: Write>(w: &mut W, results: &[MatchupResult]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *w, results)?;
    writeln!(w)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn results() -> Vec<MatchupResult> {
        let config = Config::default();
        let matchups = Matchup::defaults();

        let t1 = Tally {
            first: 60,
            second: 39,
            ties: 1,
        };
        let t2 = Tally {
            first: 46,
            second: 53,
            ties: 1,
        };

        vec![
            MatchupResult::new(&matchups[0], &config, t1),
            MatchupResult::new(&matchups[1], &config, t2),
        ]
    }

    #[test]
    fn text_report() {
        let mut out = Vec::new();
        write_text(&mut out, &results()).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("AKo vs JTs on the river (100 rounds, sampled):"));
        assert!(text.contains("Probability of AKo winning over JTs is 0.600000"));
        assert!(text.contains("Probability of 22 winning over AKo is 0.530000"));
        assert!(text.contains("Favorites: AKo > JTs, 22 > AKo"));
    }

    #[test]
    fn json_report() {
        let mut out = Vec::new();
        write_json(&mut out, &results()).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["first"], "AKo");
        assert_eq!(value[0]["street"], "river");
        assert_eq!(value[1]["tally"]["second"], 53);
        assert_eq!(value[1]["second_wins"], 0.53);
    }

    #[test]
    fn empty_report() {
        let mut out = Vec::new();
        write_text(&mut out, &[]).unwrap();
        assert!(out.is_empty());
    }
}
