// Copyright (C) 2025 Primerank Developers
// SPDX-License-Identifier: Apache-2.0

//! Poker card definitions.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Primes used to encode a card rank, indexed by [Rank] (deuce=41, ..., ace=2).
const PRIMES: [u32; 13] = [41, 37, 31, 29, 23, 19, 17, 13, 11, 7, 5, 3, 2];

/// A Poker card.
///
/// The card is a packed integer with the rank prime in the low byte and the
/// suit bit mask in the next byte:
///
/// ```text
///   +--------+--------+--------+--------+
///   |xxxxxxxx|xxxxxxxx|xxxxcdhs|pppppppp|
///   +--------+--------+--------+--------+
///   p = prime number of rank (ace=2,king=3,queen=5,...,deuce=41)
///   cdhs = suit bit (diamonds=1,hearts=2,clubs=4,spades=8)
/// ```
///
/// Multiplying the rank primes of a hand gives a value that depends only on
/// the hand rank multiset, and and-ing the suit masks of a hand gives a non
/// zero value only for a flush.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card(u32);

impl Card {
    /// Create a card given a rank and a suit.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Self(PRIMES[rank as usize] | ((suit as u32) << 8))
    }

    /// Create a card from an already encoded value.
    ///
    /// The value is not validated, an invalid encoding is detected only when
    /// the card is evaluated.
    pub const fn from_bits(bits: u32) -> Card {
        Self(bits)
    }

    /// The encoded card value.
    pub const fn bits(&self) -> u32 {
        self.0
    }

    /// The rank prime factor.
    #[inline]
    pub const fn rank_factor(&self) -> u32 {
        self.0 & 0xff
    }

    /// The suit bit mask.
    #[inline]
    pub const fn suit_mask(&self) -> u8 {
        ((self.0 >> 8) & 0xff) as u8
    }

    /// Returns the card rank, or `None` for an invalid encoding.
    pub fn rank(&self) -> Option<Rank> {
        let factor = self.rank_factor();
        Rank::ranks().find(|r| r.prime() == factor)
    }

    /// Returns the card suit, or `None` for an invalid encoding.
    pub fn suit(&self) -> Option<Suit> {
        Suit::from_mask(self.suit_mask())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.rank(), self.suit()) {
            (Some(rank), Some(suit)) => write!(f, "{rank}{suit}"),
            _ => write!(f, "0x{:x}", self.0),
        }
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({self})")
    }
}

/// Error returned when parsing a card from a string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The string is not a rank symbol followed by a suit symbol.
    #[error("invalid card {0:?}, expected a rank and a suit like \"Ad\"")]
    InvalidLength(String),
    /// Unknown rank symbol.
    #[error("invalid rank symbol {0:?}")]
    InvalidRank(char),
    /// Unknown suit symbol.
    #[error("invalid suit symbol {0:?}")]
    InvalidSuit(char),
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(r), Some(u), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ParseCardError::InvalidLength(s.to_string()));
        };

        let rank = Rank::from_symbol(r).ok_or(ParseCardError::InvalidRank(r))?;
        let suit = Suit::from_symbol(u).ok_or(ParseCardError::InvalidSuit(u))?;
        Ok(Card::new(rank, suit))
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks from deuce to ace.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The prime factor for this rank.
    pub const fn prime(&self) -> u32 {
        PRIMES[*self as usize]
    }

    /// The rank symbol, tens are `T`.
    pub fn symbol(&self) -> char {
        match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        }
    }

    /// Parses a rank symbol.
    pub fn from_symbol(c: char) -> Option<Rank> {
        let rank = match c {
            '2' => Rank::Deuce,
            '3' => Rank::Trey,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return None,
        };

        Some(rank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Card suit, the discriminant is the suit bit mask.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Diamonds suit.
    Diamonds = 1,
    /// Hearts suit.
    Hearts = 2,
    /// Clubs suit.
    Clubs = 4,
    /// Spades suit.
    Spades = 8,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Diamonds, Suit::Hearts, Suit::Clubs, Suit::Spades].into_iter()
    }

    /// The suit bit mask.
    pub const fn mask(&self) -> u8 {
        *self as u8
    }

    /// Returns the suit for a single bit mask.
    pub fn from_mask(mask: u8) -> Option<Suit> {
        Suit::suits().find(|s| s.mask() == mask)
    }

    /// Parses a suit symbol, case insensitive.
    pub fn from_symbol(c: char) -> Option<Suit> {
        match c.to_ascii_uppercase() {
            'D' => Some(Suit::Diamonds),
            'H' => Some(Suit::Hearts),
            'C' => Some(Suit::Clubs),
            'S' => Some(Suit::Spades),
            _ => None,
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Clubs => 'C',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Deck;
    use ahash::HashSet;

    #[test]
    fn card_encoding() {
        let mut cards = HashSet::default();
        let mut deck = Deck::new_and_shuffled(&mut rand::rng());

        while let Some(card) = deck.deal() {
            let rank = card.rank().unwrap();
            let suit = card.suit().unwrap();
            assert_eq!(card.bits() & 0xFF, rank.prime());
            assert_eq!((card.bits() >> 8) & 0xFF, suit as u32);
            assert_eq!(card.bits() >> 12, 0);
            cards.insert(card.bits());
        }

        // Check uniqueness.
        assert_eq!(cards.len(), Deck::SIZE);

        // Values used by the reference matchups.
        let values = [
            ("Ad", 258),
            ("Kh", 515),
            ("Jd", 263),
            ("Td", 267),
            ("2d", 297),
            ("2h", 553),
        ];

        for (s, bits) in values {
            assert_eq!(s.parse::<Card>().unwrap().bits(), bits, "{s}");
        }
    }

    #[test]
    fn prime_products_are_unique() {
        // Every rank multiset of at most 7 cards with at most 4 copies of a
        // rank must have a distinct prime product.
        fn visit(
            rank: usize,
            left: usize,
            product: u64,
            seen: &mut HashSet<u64>,
            count: &mut usize,
        ) {
            if rank == PRIMES.len() {
                *count += 1;
                assert!(seen.insert(product), "duplicated product {product}");
                return;
            }

            let mut p = product;
            for copies in 0..=left.min(4) {
                visit(rank + 1, left - copies, p, seen, count);
                p *= PRIMES[rank] as u64;
            }
        }

        let mut seen = HashSet::default();
        let mut count = 0;
        visit(0, 7, 1, &mut seen, &mut count);
        assert_eq!(seen.len(), count);

        // The primes themselves are distinct.
        let primes = Rank::ranks().map(|r| r.prime()).collect::<HashSet<_>>();
        assert_eq!(primes.len(), 13);
        assert_eq!(Rank::Ace.prime(), 2);
        assert_eq!(Rank::Deuce.prime(), 41);
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "KD");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5S");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "TH");

        // Two suit bits.
        let c = Card::from_bits(0x3ff);
        assert_eq!(c.to_string(), "0x3ff");
        assert_eq!(c.rank(), None);
        assert_eq!(c.suit(), None);

        // Valid suit with an invalid rank factor.
        let c = Card::from_bits(0x1ff);
        assert_eq!(c.to_string(), "0x1ff");
        assert_eq!(c.rank(), None);
        assert_eq!(c.suit(), Some(Suit::Diamonds));
    }

    #[test]
    fn parse_card() {
        assert_eq!("Ac".parse(), Ok(Card::new(Rank::Ace, Suit::Clubs)));
        assert_eq!("TS".parse(), Ok(Card::new(Rank::Ten, Suit::Spades)));
        assert_eq!("7h".parse(), Ok(Card::new(Rank::Seven, Suit::Hearts)));

        assert_eq!(
            "10h".parse::<Card>(),
            Err(ParseCardError::InvalidLength("10h".to_string()))
        );
        assert_eq!("A".parse::<Card>(), Err(ParseCardError::InvalidLength("A".to_string())));
        assert_eq!("1h".parse::<Card>(), Err(ParseCardError::InvalidRank('1')));
        assert_eq!("Ax".parse::<Card>(), Err(ParseCardError::InvalidSuit('x')));

        for card in Deck::default() {
            assert_eq!(card.to_string().parse(), Ok(card));
        }
    }
}
