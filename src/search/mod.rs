// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query matching against a built index.
//!
//! One query goes through four steps:
//!
//! ```text
//! tokenize ──▶ prefix lookup ──▶ two-round scoring ──▶ rank + truncate
//!  (utils)     (CatalogIndex)      (scoring::core)     (scoring::ranking)
//! ```
//!
//! The prefix lookup is a recall-oriented prune. A record only becomes a
//! candidate if one of its words shares a bucket key with a query token, so a
//! query for `shoe` never scores `sneaker`. When the token and the word are
//! both at least the key length, a mutual-prefix match implies a shared
//! bucket. The prune only drops pairs where one side is shorter than the
//! key: the token `shoe` never meets a catalog word `sh`. That loss is
//! accepted.

pub mod batch;

use std::collections::BTreeSet;

use crate::config::MatchConfig;
use crate::index::CatalogIndex;
use crate::scoring::ranking::rank_results;
use crate::scoring::score_record;
use crate::types::{QueryOutcome, ScoredResult};
use crate::utils::tokenize;

pub use batch::*;

/// Runs queries against one index with one config.
///
/// Holds only a shared borrow of the index, so it is `Sync` and can be used
/// from many threads at once.
#[derive(Debug, Clone)]
pub struct Matcher<'i> {
    index: &'i CatalogIndex,
    config: MatchConfig,
}

impl<'i> Matcher<'i> {
    pub fn new(index: &'i CatalogIndex, config: MatchConfig) -> Self {
        Self { index, config }
    }

    pub fn index(&self) -> &'i CatalogIndex {
        self.index
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Union of the prefix buckets of every token, in id order.
    pub fn candidates(&self, tokens: &[String]) -> BTreeSet<&'i str> {
        let mut ids = BTreeSet::new();
        for token in tokens {
            let bucket = self.index.candidates_for_prefix(self.index.key_for(token));
            ids.extend(bucket.iter().map(String::as_str));
        }
        ids
    }

    /// Score, rank and truncate for one query line.
    ///
    /// `count` in the outcome is the number of records scoring above zero,
    /// before the result limit is applied.
    pub fn match_query(&self, query: &str) -> QueryOutcome<'i> {
        let tokens = tokenize(query);
        if tokens.is_empty() {
            return QueryOutcome::empty(query);
        }

        let candidates = self.candidates(&tokens);
        let mut results: Vec<ScoredResult<'i>> = candidates
            .iter()
            .filter_map(|id| self.index.record(id))
            .filter_map(|record| {
                let score = score_record(&tokens, record, &self.config);
                (score > 0.0).then_some(ScoredResult { score, record })
            })
            .collect();

        let count = results.len();
        rank_results(&mut results, self.config.result_limit);

        tracing::trace!(
            query,
            tokens = tokens.len(),
            candidates = candidates.len(),
            count,
            "matched query"
        );

        QueryOutcome {
            query: query.to_owned(),
            count,
            results,
        }
    }
}

/// Match one query with the default config.
pub fn match_query<'i>(query: &str, index: &'i CatalogIndex) -> QueryOutcome<'i> {
    Matcher::new(index, MatchConfig::default()).match_query(query)
}
