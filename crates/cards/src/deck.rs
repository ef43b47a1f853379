// Copyright (C) 2025 Primerank Developers
// SPDX-License-Identifier: Apache-2.0

//! A deck of cards.
use rand::prelude::*;

use crate::{Card, Rank, Suit};

/// A cards Deck
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deals a card from the deck, returns `None` if the deck is empty.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn count(&self) -> usize {
        self.cards.len()
    }

    /// The cards left in the deck.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Removes a card from the deck.
    pub fn remove(&mut self, card: Card) {
        self.cards.retain(|c| c != &card);
    }

    /// Calls the `f` closure with `samples` random k-cards hands.
    ///
    /// The cards of a hand are drawn without replacement, the deck is not
    /// modified.
    ///
    /// Panics if k is not 1 <= k <= 7.
    pub fn sample<R, F>(&self, rng: &mut R, samples: usize, k: usize, mut f: F)
    where
        R: Rng + ?Sized,
        F: FnMut(&[Card]),
    {
        assert!((1..=7).contains(&k), "1 <= k <= 7");

        if k > self.cards.len() {
            return;
        }

        let mut h = Vec::with_capacity(k);
        for _ in 0..samples {
            h.clear();
            h.extend(self.cards.choose_multiple(rng, k).copied());
            f(&h);
        }
    }

    /// Calls the `f` closure for each k-cards hand.
    ///
    /// Hands are visited in lexicographic order of the cards positions in
    /// the deck.
    ///
    /// Panics if k is not 1 <= k <= 7.
    pub fn for_each<F>(&self, k: usize, mut f: F)
    where
        F: FnMut(&[Card]),
    {
        assert!((1..=7).contains(&k), "1 <= k <= 7");

        let n = self.cards.len();
        if k > n {
            return;
        }

        let mut pos = [0usize; 7];
        for (i, p) in pos.iter_mut().enumerate().take(k) {
            *p = i;
        }

        let mut h = [Card::new(Rank::Ace, Suit::Hearts); 7];
        loop {
            for i in 0..k {
                h[i] = self.cards[pos[i]];
            }

            f(&h[0..k]);

            // Move the rightmost position that has room and reset the ones after it.
            let Some(i) = (0..k).rev().find(|&i| pos[i] < n - k + i) else {
                break;
            };

            pos[i] += 1;
            for j in (i + 1)..k {
                pos[j] = pos[j - 1] + 1;
            }
        }
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;
    use rand::rngs::SmallRng;

    #[test]
    fn deck_deal() {
        let mut deck = Deck::new_and_shuffled(&mut SmallRng::seed_from_u64(7));
        assert_eq!(deck.count(), Deck::SIZE);

        let mut dealt = HashSet::default();
        while let Some(card) = deck.deal() {
            dealt.insert(card);
        }

        assert!(deck.is_empty());
        assert_eq!(deck.deal(), None);
        assert_eq!(dealt.len(), Deck::SIZE);
    }

    #[test]
    fn deck_for_each() {
        let deck = Deck::default();

        let mut hands = HashSet::default();
        deck.for_each(2, |cards| {
            assert_eq!(cards.len(), 2);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 1_326);

        hands.clear();
        deck.for_each(3, |cards| {
            assert_eq!(cards.len(), 3);
            hands.insert(cards.to_owned());
        });
        assert_eq!(hands.len(), 22_100);

        let mut count = 0;
        deck.for_each(5, |cards| {
            assert_eq!(cards.len(), 5);
            count += 1;
        });
        assert_eq!(count, 2_598_960);
    }

    #[test]
    fn deck_for_each_small() {
        let mut deck = Deck::default();
        let keep = deck.cards()[0..5].to_vec();
        for card in deck.cards().to_vec() {
            if !keep.contains(&card) {
                deck.remove(card);
            }
        }
        assert_eq!(deck.count(), 5);

        let mut hands = Vec::new();
        deck.for_each(5, |cards| hands.push(cards.to_owned()));
        assert_eq!(hands, vec![keep.clone()]);

        hands.clear();
        deck.for_each(4, |cards| hands.push(cards.to_owned()));
        assert_eq!(hands.len(), 5);
        assert_eq!(hands[0], keep[0..4]);

        // More cards than in the deck.
        let mut count = 0;
        deck.for_each(6, |_| count += 1);
        assert_eq!(count, 0);
    }

    // This takes a while to run in debug mode as it goes through 133M hands.
    #[test]
    #[ignore]
    fn deck_for_each_7cards() {
        let deck = Deck::default();

        let mut count = 0;
        deck.for_each(7, |cards| {
            assert_eq!(cards.len(), 7);
            count += 1;
        });
        assert_eq!(count, 133_784_560);
    }

    #[test]
    fn deck_remove() {
        let mut deck = Deck::default();
        deck.remove(Card::new(Rank::Ace, Suit::Diamonds));
        deck.remove(Card::new(Rank::King, Suit::Diamonds));
        deck.remove(Card::new(Rank::King, Suit::Diamonds));
        assert_eq!(deck.count(), 50);

        let mut count = 0;
        deck.for_each(3, |cards| {
            assert!(!cards.contains(&Card::new(Rank::Ace, Suit::Diamonds)));
            count += 1;
        });
        assert_eq!(count, 19_600);
    }

    #[test]
    fn deck_sample() {
        let mut rng = SmallRng::seed_from_u64(42);
        let deck = Deck::default();

        let mut count = 0;
        deck.sample(&mut rng, 100, 7, |hand| {
            assert_eq!(hand.len(), 7);
            let unique = hand.iter().collect::<HashSet<_>>();
            assert_eq!(unique.len(), 7);
            count += 1;
        });
        assert_eq!(count, 100);
        assert_eq!(deck.count(), Deck::SIZE);
    }
}
