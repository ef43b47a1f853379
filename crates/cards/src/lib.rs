// Copyright (C) 2025 Primerank Developers
// SPDX-License-Identifier: Apache-2.0

//! Primerank poker cards types.
//!
//! Each card packs a rank prime and a suit bit mask into a single integer so
//! that a hand evaluator can fingerprint a rank multiset with a product and
//! detect a flush with a bitwise and:
//!
//! ```
//! # use primerank_cards::{Card, Rank, Suit};
//! let ad = Card::new(Rank::Ace, Suit::Diamonds);
//! assert_eq!(ad.rank_factor(), 2);
//! assert_eq!(ad.suit_mask(), 1);
//! assert_eq!("Ad".parse::<Card>().unwrap(), ad);
//! ```
//!
//! The [Deck] type shuffles, deals, samples and iterates cards.
//!
//! To iterate through all 5 cards hands:
//!
//! ```no_run
//! # use primerank_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     assert_eq!(hand.len(), 5);
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
//!
//! to sample 10 random 7-cards hands:
//!
//! ```
//! # use primerank_cards::Deck;
//! let mut counter = 0;
//! Deck::default().sample(&mut rand::rng(), 10, 7, |hand| {
//!     assert_eq!(hand.len(), 7);
//!     counter += 1;
//! });
//! assert_eq!(counter, 10);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod card;
mod deck;

pub use card::{Card, ParseCardError, Rank, Suit};
pub use deck::Deck;
