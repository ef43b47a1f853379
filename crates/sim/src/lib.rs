// Copyright (C) 2025 Primerank Developers
// SPDX-License-Identifier: Apache-2.0

//! Primerank heads up matchups simulator.
//!
//! Estimates how often a pair of hole cards beats another pair by dealing
//! random community cards, or by enumerating all of them, and comparing the
//! best five cards of each player.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod matchup;
pub use matchup::{Hole, Matchup, ParseMatchupError, Street};
pub mod report;
pub mod simulator;
pub use simulator::{Config, Simulator};
pub mod tally;
pub use tally::Tally;
