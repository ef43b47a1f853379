// Copyright (C) 2025 Primerank Developers
// SPDX-License-Identifier: Apache-2.0

//! Primerank poker hand ranking engine.
//!
//! Classifies 5, 6 and 7 cards hands into one of the 7462 distinct five cards
//! hand categories. The categories are loaded from a reference table sorted
//! from the royal flush (index 0) down to the 7-5-4-3-2 high card (index 7461)
//! and are looked up using the product of the hand rank primes, with separate
//! tables for flush and non flush hands. For 6 and 7 cards hands the best five
//! cards subset wins.
//!
//! To use the evaluator build a [RankTable] once and share it between
//! [HandEvaluator]s:
//!
//! ```
//! # use primerank_eval::*;
//! let evaluator = HandEvaluator::embedded()?;
//!
//! let cards = ["As", "Ks", "Qs", "Js", "Ts", "2d", "7h"]
//!     .map(|c| c.parse::<Card>().unwrap());
//!
//! let strength = evaluator.classify_best(&cards)?;
//! assert_eq!(strength.index(), 0);
//! assert_eq!(strength.rank(), HandRank::StraightFlush);
//! # Ok::<(), EvalError>(())
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod error;
pub use error::{EvalError, Result};

pub mod eval;
pub use eval::{HandEvaluator, HandRank, Showdown, Strength};

pub mod table;
pub use table::{Fingerprint, NUM_CATEGORIES, RankTable};

// Reexport cards types.
pub use primerank_cards::{Card, Deck, ParseCardError, Rank, Suit};
