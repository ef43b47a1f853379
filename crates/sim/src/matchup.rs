// Copyright (C) 2025 Primerank Developers
// SPDX-License-Identifier: Apache-2.0

//! Hole cards matchups.
use serde::Serialize;
use std::{fmt, str::FromStr};
use thiserror::Error;

use primerank_eval::{Card, Deck, ParseCardError, Rank, Suit};

/// A player two hole cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hole([Card; 2]);

impl Hole {
    /// Creates hole cards.
    pub fn new(c1: Card, c2: Card) -> Self {
        Self([c1, c2])
    }

    /// The hole cards.
    pub fn cards(&self) -> [Card; 2] {
        self.0
    }

    /// The short hand name, e.g. `AKo`, `JTs` or `22`.
    pub fn name(&self) -> String {
        let [c1, c2] = self.0;
        let (Some(r1), Some(r2)) = (c1.rank(), c2.rank()) else {
            return self.to_string();
        };

        let (hi, lo) = if r1 >= r2 { (r1, r2) } else { (r2, r1) };
        if hi == lo {
            format!("{hi}{lo}")
        } else if c1.suit_mask() == c2.suit_mask() {
            format!("{hi}{lo}s")
        } else {
            format!("{hi}{lo}o")
        }
    }
}

impl fmt::Display for Hole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0[0], self.0[1])
    }
}

impl FromStr for Hole {
    type Err = ParseMatchupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if !s.is_ascii() || s.len() != 4 {
            return Err(ParseMatchupError::InvalidFormat(s.to_string()));
        }

        let c1 = s[0..2].parse::<Card>()?;
        let c2 = s[2..4].parse::<Card>()?;
        if c1 == c2 {
            return Err(ParseMatchupError::DuplicateCard(c1));
        }

        Ok(Hole::new(c1, c2))
    }
}

/// Error returned when parsing hole cards or a matchup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseMatchupError {
    /// The string is not two holes like `AdKh:JdTd`.
    #[error("invalid matchup {0:?}, expected hole cards like \"AdKh:JdTd\"")]
    InvalidFormat(String),
    /// A card could not be parsed.
    #[error(transparent)]
    Card(#[from] ParseCardError),
    /// A card is used more than once.
    #[error("card {0} is used more than once")]
    DuplicateCard(Card),
}

/// Two players hole cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Matchup {
    /// The first player hole cards.
    pub first: Hole,
    /// The second player hole cards.
    pub second: Hole,
}

impl Matchup {
    /// Creates a matchup.
    pub fn new(first: Hole, second: Hole) -> Self {
        Self { first, second }
    }

    /// The non transitive AKo, JTs and 22 matchups.
    ///
    /// On the river 22 is a favorite over AKo, AKo over JTs and JTs over 22.
    pub fn defaults() -> Vec<Matchup> {
        let ako = Hole::new(
            Card::new(Rank::Ace, Suit::Diamonds),
            Card::new(Rank::King, Suit::Hearts),
        );
        let jts = Hole::new(
            Card::new(Rank::Jack, Suit::Diamonds),
            Card::new(Rank::Ten, Suit::Diamonds),
        );
        let twos = Hole::new(
            Card::new(Rank::Deuce, Suit::Diamonds),
            Card::new(Rank::Deuce, Suit::Hearts),
        );

        vec![
            Matchup::new(ako, jts),
            Matchup::new(ako, twos),
            Matchup::new(jts, twos),
        ]
    }

    /// The deck without the players cards.
    pub fn deck(&self) -> Deck {
        let mut deck = Deck::default();
        for card in self.first.cards().into_iter().chain(self.second.cards()) {
            deck.remove(card);
        }
        deck
    }
}

impl fmt::Display for Matchup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} vs {}", self.first.name(), self.second.name())
    }
}

impl FromStr for Matchup {
    type Err = ParseMatchupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((first, second)) = s.split_once(':') else {
            return Err(ParseMatchupError::InvalidFormat(s.to_string()));
        };

        let first = first.parse::<Hole>()?;
        let second = second.parse::<Hole>()?;

        if let Some(card) = first
            .cards()
            .into_iter()
            .find(|c| second.cards().contains(c))
        {
            return Err(ParseMatchupError::DuplicateCard(card));
        }

        Ok(Matchup::new(first, second))
    }
}

/// The street where the players hands are compared.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Street {
    /// Three community cards.
    Flop,
    /// Four community cards.
    Turn,
    /// Five community cards.
    #[default]
    River,
}

impl Street {
    /// Number of community cards dealt on this street.
    pub fn board_size(&self) -> usize {
        match self {
            Street::Flop => 3,
            Street::Turn => 4,
            Street::River => 5,
        }
    }
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let street = match self {
            Street::Flop => "flop",
            Street::Turn => "turn",
            Street::River => "river",
        };

        write!(f, "{street}")
    }
}

/// Error returned when parsing a street.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid street {0:?}, expected flop, turn or river")]
pub struct ParseStreetError(String);

impl FromStr for Street {
    type Err = ParseStreetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "flop" => Ok(Street::Flop),
            "turn" => Ok(Street::Turn),
            "river" => Ok(Street::River),
            _ => Err(ParseStreetError(s.to_string())),
        }
    }
}
