// Copyright (C) 2025 Primerank Developers
// SPDX-License-Identifier: Apache-2.0

//! Evaluation errors.
use thiserror::Error;

/// Errors returned when building the reference table or evaluating hands.
#[derive(Debug, Error)]
pub enum EvalError {
    /// The reference table does not have one entry per hand category.
    #[error("reference table has {found} entries, expected {expected}")]
    InvalidEntryCount {
        /// Number of entries found.
        found: usize,
        /// Number of entries required.
        expected: usize,
    },
    /// A reference table entry is not five rank symbols.
    #[error("malformed reference table entry {index}: {entry:?}")]
    MalformedReferenceData {
        /// The entry position in the table.
        index: usize,
        /// The entry text.
        entry: String,
    },
    /// Two reference table entries of the same flush class share a fingerprint.
    #[error("reference table entries {previous} and {index} share fingerprint {fingerprint}")]
    DuplicateFingerprint {
        /// The entry position in the table.
        index: usize,
        /// The position of the entry with the same fingerprint.
        previous: usize,
        /// The shared fingerprint.
        fingerprint: u64,
    },
    /// A hand fingerprint is not in the reference table.
    #[error("fingerprint {fingerprint} not found (flush: {flush})")]
    FingerprintNotFound {
        /// The hand fingerprint.
        fingerprint: u64,
        /// Whether the flush table was searched.
        flush: bool,
    },
    /// A hand does not have 5, 6 or 7 cards.
    #[error("invalid number of cards {0}, expected 5 to 7")]
    InvalidCardCount(usize),
    /// The reference table could not be read.
    #[error("reference table read error: {0}")]
    Io(#[from] std::io::Error),
}

/// Evaluation result type.
pub type Result<T> = std::result::Result<T, EvalError>;
