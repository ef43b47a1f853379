// Copyright (C) 2025 Primerank Developers
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! A five cards hand is classified by multiplying the cards rank primes and
//! and-ing the cards suit masks, the product is looked up in the flush table
//! if the suits mask is not zero and in the non flush table otherwise. Six
//! and seven cards hands are classified by evaluating all their five cards
//! subsets and taking the strongest.
use serde::Serialize;
use std::{fmt, sync::Arc};

use primerank_cards::Card;

use crate::{EvalError, Fingerprint, NUM_CATEGORIES, RankTable, Result};

/// Builds all the 5 cards subsets of n cards as arrays of card positions.
const fn five_card_subsets<const C: usize>(n: u32) -> [[usize; 5]; C] {
    let mut subsets = [[0; 5]; C];
    let mut count = 0;
    let mut mask = 0u32;

    while mask < (1 << n) {
        if mask.count_ones() == 5 {
            let mut pos = 0;
            let mut bit = 0;
            while bit < n {
                if mask & (1 << bit) != 0 {
                    subsets[count][pos] = bit as usize;
                    pos += 1;
                }
                bit += 1;
            }
            count += 1;
        }
        mask += 1;
    }

    assert!(count == C);
    subsets
}

const SUBSETS_5: [[usize; 5]; 1] = five_card_subsets(5);
const SUBSETS_6: [[usize; 5]; 6] = five_card_subsets(6);
const SUBSETS_7: [[usize; 5]; 21] = five_card_subsets(7);

/// A hand category strength.
///
/// The strength is the index of the hand category in the reference table,
/// lower values are stronger hands: 0 is a royal flush and 7461 is 7-5-4-3-2
/// offsuit. Equal strengths are tied hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Strength(u16);

impl Strength {
    /// The strongest hand.
    pub const STRONGEST: Strength = Strength(0);

    /// The weakest hand.
    pub const WEAKEST: Strength = Strength(NUM_CATEGORIES as u16 - 1);

    pub(crate) const fn new(index: u16) -> Self {
        Self(index)
    }

    /// Creates a strength from an index, returns `None` if the index is not a
    /// valid category.
    pub fn from_index(index: usize) -> Option<Strength> {
        (index < NUM_CATEGORIES).then_some(Strength(index as u16))
    }

    /// The category index.
    pub fn index(&self) -> u16 {
        self.0
    }

    /// The hand rank for this strength.
    pub fn rank(&self) -> HandRank {
        HandRank::of_index(self.0 as usize)
    }

    /// Checks if this strength beats the other.
    pub fn beats(&self, other: Strength) -> bool {
        self.0 < other.0
    }
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.rank(), self.0)
    }
}

/// A poker hand rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum HandRank {
    /// High card.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pairs.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
}

impl HandRank {
    /// Returns all hand ranks from high card to straight flush.
    pub fn ranks() -> impl DoubleEndedIterator<Item = HandRank> {
        use HandRank::*;
        [
            HighCard,
            OnePair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
        ]
        .into_iter()
    }

    /// Returns the hand rank for a category index.
    ///
    /// Panics if the index is not less than [NUM_CATEGORIES].
    pub fn of_index(index: usize) -> HandRank {
        match index {
            0..10 => HandRank::StraightFlush,
            10..166 => HandRank::FourOfAKind,
            166..322 => HandRank::FullHouse,
            322..1599 => HandRank::Flush,
            1599..1609 => HandRank::Straight,
            1609..2467 => HandRank::ThreeOfAKind,
            2467..3325 => HandRank::TwoPair,
            3325..6185 => HandRank::OnePair,
            6185..NUM_CATEGORIES => HandRank::HighCard,
            _ => panic!("Invalid category index {index}"),
        }
    }

    /// The category indices for this hand rank.
    pub fn index_range(&self) -> std::ops::Range<usize> {
        match self {
            HandRank::StraightFlush => 0..10,
            HandRank::FourOfAKind => 10..166,
            HandRank::FullHouse => 166..322,
            HandRank::Flush => 322..1599,
            HandRank::Straight => 1599..1609,
            HandRank::ThreeOfAKind => 1609..2467,
            HandRank::TwoPair => 2467..3325,
            HandRank::OnePair => 3325..6185,
            HandRank::HighCard => 6185..NUM_CATEGORIES,
        }
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HandRank::HighCard => "High Card",
            HandRank::OnePair => "One Pair",
            HandRank::TwoPair => "Two Pairs",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::Straight => "Straight",
            HandRank::Flush => "Flush",
            HandRank::FullHouse => "Full House",
            HandRank::FourOfAKind => "Four of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        };

        write!(f, "{name}")
    }
}

/// The result of comparing two hands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Showdown {
    /// The first hand wins.
    First,
    /// The second hand wins.
    Second,
    /// The hands have the same strength.
    Tie,
}

/// Hands evaluator.
///
/// Clones share the same [RankTable].
#[derive(Debug, Clone)]
pub struct HandEvaluator {
    table: Arc<RankTable>,
}

impl HandEvaluator {
    /// Creates an evaluator for the given table.
    pub fn new(table: Arc<RankTable>) -> Self {
        Self { table }
    }

    /// Creates an evaluator with the table embedded in this crate.
    pub fn embedded() -> Result<Self> {
        Ok(Self::new(Arc::new(RankTable::embedded()?)))
    }

    /// The evaluator reference table.
    pub fn table(&self) -> &RankTable {
        &self.table
    }

    /// Classifies a five cards hand.
    #[inline]
    pub fn classify5(&self, cards: &[Card; 5]) -> Result<Strength> {
        let init: (Fingerprint, u8) = (1, 0xff);
        let (fingerprint, suits) = cards.iter().fold(init, |(product, suits), c| {
            (
                product * c.rank_factor() as Fingerprint,
                suits & c.suit_mask(),
            )
        });

        self.table.lookup(fingerprint, suits != 0)
    }

    /// Classifies the best five cards out of a 5, 6 or 7 cards hand.
    pub fn classify_best(&self, cards: &[Card]) -> Result<Strength> {
        self.classify_best_hand(cards).map(|(strength, _)| strength)
    }

    /// Classifies the best five cards out of a 5, 6 or 7 cards hand and
    /// returns them with their strength.
    ///
    /// When more than one subset has the best strength the first one in card
    /// positions order is returned.
    pub fn classify_best_hand(&self, cards: &[Card]) -> Result<(Strength, [Card; 5])> {
        let subsets: &[[usize; 5]] = match cards.len() {
            5 => &SUBSETS_5,
            6 => &SUBSETS_6,
            7 => &SUBSETS_7,
            n => return Err(EvalError::InvalidCardCount(n)),
        };

        let mut best_hand = subsets[0].map(|pos| cards[pos]);
        let mut best = self.classify5(&best_hand)?;

        for subset in &subsets[1..] {
            let hand = subset.map(|pos| cards[pos]);
            let strength = self.classify5(&hand)?;
            if strength.beats(best) {
                best = strength;
                best_hand = hand;
            }
        }

        Ok((best, best_hand))
    }

    /// Compares the best five cards of two hands.
    pub fn showdown(&self, first: &[Card], second: &[Card]) -> Result<Showdown> {
        let first = self.classify_best(first)?;
        let second = self.classify_best(second)?;

        let res = if first.beats(second) {
            Showdown::First
        } else if second.beats(first) {
            Showdown::Second
        } else {
            Showdown::Tie
        };

        Ok(res)
    }
}
