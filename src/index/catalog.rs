// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Catalog index: records by id plus a prefix-to-records map.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **LAST_WRITE_WINS**: a repeated identifier replaces the earlier record
//! 2. **BUCKETS_FROM_LIVE_RECORDS**: every id in a prefix bucket is a live
//!    record with at least one word under that prefix. Buckets are built after
//!    duplicates collapse, so a replaced row leaves nothing behind.
//! 3. **IMMUTABLE**: nothing mutates the index after `build` returns
//!
//! The index holds no interior mutability, so `&CatalogIndex` can be handed to
//! any number of threads.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::types::{Record, RecordId};
use crate::utils::{prefix_key, DEFAULT_PREFIX_LEN};

static NO_IDS: BTreeSet<RecordId> = BTreeSet::new();
static NO_WORDS: BTreeSet<String> = BTreeSet::new();

/// Immutable lookup structure built once per catalog.
#[derive(Debug, Clone)]
pub struct CatalogIndex {
    records: BTreeMap<RecordId, Record>,
    prefixes: HashMap<String, BTreeSet<RecordId>>,
    prefix_len: usize,
    skipped_rows: usize,
}

impl CatalogIndex {
    /// Build with the default 3-character prefix.
    pub fn build<I>(records: I) -> Self
    where
        I: IntoIterator<Item = Record>,
    {
        Self::build_with_prefix_len(records, DEFAULT_PREFIX_LEN)
    }

    /// Build with a custom prefix length. A length of zero is treated as one.
    pub fn build_with_prefix_len<I>(records: I, prefix_len: usize) -> Self
    where
        I: IntoIterator<Item = Record>,
    {
        let prefix_len = prefix_len.max(1);

        // INVARIANT: LAST_WRITE_WINS
        let mut by_id: BTreeMap<RecordId, Record> = BTreeMap::new();
        for record in records {
            by_id.insert(record.id.clone(), record);
        }

        // INVARIANT: BUCKETS_FROM_LIVE_RECORDS
        let mut prefixes: HashMap<String, BTreeSet<RecordId>> = HashMap::new();
        for record in by_id.values() {
            for word in &record.words {
                prefixes
                    .entry(prefix_key(word, prefix_len).to_owned())
                    .or_default()
                    .insert(record.id.clone());
            }
        }

        let index = Self {
            records: by_id,
            prefixes,
            prefix_len,
            skipped_rows: 0,
        };
        tracing::debug!(
            records = index.len(),
            prefixes = index.prefix_count(),
            prefix_len,
            "built catalog index"
        );
        index
    }

    /// Build from raw rows where field 0 is the identifier.
    ///
    /// Rows with no fields are skipped and counted in [`Self::skipped_rows`].
    pub fn from_rows<I>(rows: I, prefix_len: usize) -> Self
    where
        I: IntoIterator<Item = Vec<String>>,
    {
        let mut skipped = 0usize;
        let records: Vec<Record> = rows
            .into_iter()
            .filter_map(|row| {
                let record = Record::from_row(row);
                if record.is_none() {
                    skipped += 1;
                }
                record
            })
            .collect();

        if skipped > 0 {
            tracing::warn!(skipped, "skipped catalog rows without an identifier");
        }

        let mut index = Self::build_with_prefix_len(records, prefix_len);
        index.skipped_rows = skipped;
        index
    }

    /// Records having at least one word under `prefix`. Empty if unseen.
    pub fn candidates_for_prefix(&self, prefix: &str) -> &BTreeSet<RecordId> {
        self.prefixes.get(prefix).unwrap_or(&NO_IDS)
    }

    /// Lower-cased unique words of a record. Empty if the id is unknown.
    pub fn words_for(&self, id: &str) -> &BTreeSet<String> {
        self.records.get(id).map_or(&NO_WORDS, |r| &r.words)
    }

    /// Descriptor fields exactly as loaded. Empty if the id is unknown.
    pub fn original_fields_for(&self, id: &str) -> &[String] {
        self.records
            .get(id)
            .map(|r| r.fields.as_slice())
            .unwrap_or(&[])
    }

    pub fn record(&self, id: &str) -> Option<&Record> {
        self.records.get(id)
    }

    /// All records in identifier order.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }

    /// Prefix buckets with their sizes, largest first, then by key.
    pub fn largest_buckets(&self, n: usize) -> Vec<(&str, usize)> {
        let mut buckets: Vec<(&str, usize)> = self
            .prefixes
            .iter()
            .map(|(k, ids)| (k.as_str(), ids.len()))
            .collect();
        buckets.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        buckets.truncate(n);
        buckets
    }

    /// Bucket key for a token under this index's prefix length.
    #[inline]
    pub fn key_for<'t>(&self, token: &'t str) -> &'t str {
        prefix_key(token, self.prefix_len)
    }

    pub fn prefix_len(&self) -> usize {
        self.prefix_len
    }

    pub fn prefix_count(&self) -> usize {
        self.prefixes.len()
    }

    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
