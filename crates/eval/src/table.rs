// Copyright (C) 2025 Primerank Developers
// SPDX-License-Identifier: Apache-2.0

//! Hand categories reference table.
//!
//! The table lists the 7462 distinct five cards hand categories as five rank
//! symbols strings (e.g. `AATTT`), ordered from the strongest to the weakest,
//! so that the position of an entry is its [Strength] index:
//!
//! ```text
//!   [0, 10)       straight flush    flush
//!   [10, 166)     four of a kind    non flush
//!   [166, 322)    full house        non flush
//!   [322, 1599)   flush             flush
//!   [1599, 1609)  straight          non flush
//!   [1609, 2467)  three of a kind   non flush
//!   [2467, 3325)  two pair          non flush
//!   [3325, 6185)  one pair          non flush
//!   [6185, 7462)  high card         non flush
//! ```
//!
//! Each entry fingerprint is the product of its rank primes, the flush and
//! non flush entries are stored in separate maps keyed by fingerprint.
use ahash::{AHashMap, AHashSet};
use log::debug;
use std::{ops::Range, path::Path};

use primerank_cards::Rank;

use crate::{EvalError, Result, Strength};

/// Number of distinct five cards hand categories.
pub const NUM_CATEGORIES: usize = 7462;

/// Product of the rank primes of a hand.
pub type Fingerprint = u64;

/// Entries for hands with all cards of the same suit.
const FLUSH_RANGES: [Range<usize>; 2] = [0..10, 322..1599];

/// Entries for hands with mixed suits.
const NON_FLUSH_RANGES: [Range<usize>; 2] = [10..322, 1599..NUM_CATEGORIES];

/// The standard reference table.
const RANKS_CSV: &str = include_str!("../data/ranks.csv");

/// Lookup tables from a hand fingerprint to its strength.
///
/// The table is immutable once built and can be shared across threads.
#[derive(Debug)]
pub struct RankTable {
    entries: Vec<String>,
    flushes: AHashMap<Fingerprint, u16>,
    non_flushes: AHashMap<Fingerprint, u16>,
}

impl RankTable {
    /// Builds the table from the reference data embedded in this crate.
    pub fn embedded() -> Result<Self> {
        Self::parse(RANKS_CSV)
    }

    /// Builds the table from a reference file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Builds the table from comma separated entries, whitespace around the
    /// entries and a trailing comma are ignored.
    pub fn parse(text: &str) -> Result<Self> {
        let mut fields = text.split(',').map(str::trim).collect::<Vec<_>>();
        if fields.last().is_some_and(|f| f.is_empty()) {
            fields.pop();
        }

        if let Some(index) = fields.iter().position(|f| f.is_empty()) {
            return Err(EvalError::MalformedReferenceData {
                index,
                entry: String::new(),
            });
        }

        Self::from_entries(fields)
    }

    /// Builds the table from entries sorted from strongest to weakest.
    pub fn from_entries<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = entries.into_iter().map(Into::into).collect::<Vec<_>>();
        if entries.len() != NUM_CATEGORIES {
            return Err(EvalError::InvalidEntryCount {
                found: entries.len(),
                expected: NUM_CATEGORIES,
            });
        }

        let flushes = build_map(&entries, &FLUSH_RANGES, true)?;
        let non_flushes = build_map(&entries, &NON_FLUSH_RANGES, false)?;

        debug!(
            "Rank table built with {} flush and {} non flush categories",
            flushes.len(),
            non_flushes.len()
        );

        Ok(Self {
            entries,
            flushes,
            non_flushes,
        })
    }

    /// Returns the strength for a five cards hand fingerprint.
    #[inline]
    pub fn lookup(&self, fingerprint: Fingerprint, is_flush: bool) -> Result<Strength> {
        let map = if is_flush {
            &self.flushes
        } else {
            &self.non_flushes
        };

        map.get(&fingerprint)
            .map(|&index| Strength::new(index))
            .ok_or(EvalError::FingerprintNotFound {
                fingerprint,
                flush: is_flush,
            })
    }

    /// Returns the reference entry at the given index.
    pub fn entry(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    /// Number of flush categories.
    pub fn flush_len(&self) -> usize {
        self.flushes.len()
    }

    /// Number of non flush categories.
    pub fn non_flush_len(&self) -> usize {
        self.non_flushes.len()
    }
}

/// Maps the entries fingerprints to their index, flush entries must have five
/// distinct ranks.
fn build_map(
    entries: &[String],
    ranges: &[Range<usize>],
    flush: bool,
) -> Result<AHashMap<Fingerprint, u16>> {
    let mut map = AHashMap::with_capacity(ranges.iter().map(|r| r.len()).sum());

    for index in ranges.iter().cloned().flatten() {
        let entry = &entries[index];
        let fingerprint = fingerprint(entry)
            .filter(|_| !flush || has_distinct_ranks(entry))
            .ok_or_else(|| EvalError::MalformedReferenceData {
                index,
                entry: entry.clone(),
            })?;

        if let Some(previous) = map.insert(fingerprint, index as u16) {
            return Err(EvalError::DuplicateFingerprint {
                index,
                previous: previous as usize,
                fingerprint,
            });
        }
    }

    Ok(map)
}

fn has_distinct_ranks(entry: &str) -> bool {
    let ranks = entry.chars().collect::<AHashSet<_>>();
    ranks.len() == entry.chars().count()
}

/// Product of the rank primes of a five rank symbols entry.
fn fingerprint(entry: &str) -> Option<Fingerprint> {
    if entry.chars().count() != 5 {
        return None;
    }

    entry.chars().try_fold(1, |product: Fingerprint, c| {
        Rank::from_symbol(c).map(|r| product * r.prime() as Fingerprint)
    })
}
