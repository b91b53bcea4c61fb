// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core data types for catalog matching.
//!
//! A [`Record`] is one catalog row: an identifier plus the descriptor fields
//! exactly as they appeared in the source. The lower-cased word set used for
//! matching is derived once at construction and never touched again.
//!
//! [`ScoredResult`] and [`QueryOutcome`] borrow from the index. They live for
//! one query and are dropped once rendered.

use std::collections::BTreeSet;

use crate::utils::tokenize;

/// Record identifier, kept as the literal string from field 0 of the row.
pub type RecordId = String;

/// One catalog entry.
///
/// `words` is a `BTreeSet` so that greedy matching scans record words in
/// lexicographic order. That order is the tie-break whenever a query token
/// could match more than one word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub id: RecordId,
    /// Descriptor fields, verbatim. Never modified by matching.
    pub fields: Vec<String>,
    /// Unique lower-cased words drawn from all fields joined by a space.
    pub words: BTreeSet<String>,
}

impl Record {
    pub fn new(id: impl Into<RecordId>, fields: Vec<String>) -> Self {
        let words = tokenize(&fields.join(" ")).into_iter().collect();
        Self {
            id: id.into(),
            fields,
            words,
        }
    }

    /// Split a raw row into identifier and descriptors.
    ///
    /// Returns `None` for a row with no fields at all. A row with only an
    /// identifier is valid and yields a record with no words.
    pub fn from_row(mut row: Vec<String>) -> Option<Self> {
        if row.is_empty() {
            return None;
        }
        let fields = row.split_off(1);
        let id = row.pop()?;
        Some(Self::new(id, fields))
    }

    /// Number of unique words: the normalization denominator.
    #[inline]
    pub fn item_length(&self) -> usize {
        self.words.len()
    }
}

/// A record that scored above zero for one query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredResult<'a> {
    /// Accumulated match points divided by [`Record::item_length`].
    pub score: f64,
    pub record: &'a Record,
}

impl<'a> ScoredResult<'a> {
    pub fn id(&self) -> &'a str {
        &self.record.id
    }

    pub fn fields(&self) -> &'a [String] {
        &self.record.fields
    }
}

/// Everything the matcher produces for one query line.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryOutcome<'a> {
    /// The query text as received (newline already stripped).
    pub query: String,
    /// Matching records before truncation. Can exceed `results.len()`.
    pub count: usize,
    /// Top results, best first.
    pub results: Vec<ScoredResult<'a>>,
}

impl QueryOutcome<'_> {
    pub fn empty(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            count: 0,
            results: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}
