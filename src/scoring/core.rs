// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind catalog matching.
//!
//! Two rounds, each a greedy first-fit pass that consumes what it matches:
//!
//! | Round | Strategy       | Rule                        | Points |
//! |-------|----------------|-----------------------------|--------|
//! | A     | `Exact`        | token == word               | 1.0    |
//! | B     | `MutualPrefix` | either is a prefix of other | 0.3    |
//!
//! Round B only sees what round A left over, and only runs if both sides
//! still have something left. A token is consumed by at most one match, so
//! it contributes at most `FULL_MATCH_POINTS` to the total.
//!
//! # Scan order
//!
//! Tokens are tried in query order. For each token, remaining words are
//! scanned in lexicographic order and the first hit wins. This is not an
//! optimal assignment: within round B, tokens `s shoe` against words
//! `{shoe, sun}` pair `s` with `shoe` and leave `shoe` unmatched, where the
//! other pairing would have matched both. The pairing depends on scan order,
//! so the order is fixed.
//!
//! # Normalization
//!
//! `score = points / item_length` where `item_length` is the full word count
//! before consumption. Zero points means no result, not a zero-score result.

use crate::config::MatchConfig;
use crate::types::Record;
use crate::utils::is_mutual_prefix;

/// Points for a round A (exact) match.
pub const FULL_MATCH_POINTS: f64 = 1.0;

/// Points for a round B (partial) match.
pub const PARTIAL_MATCH_POINTS: f64 = 0.3;

/// Comparison rule for one matching round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStrategy {
    /// Case-insensitive equality (inputs are already lower-cased).
    Exact,
    /// Either string is a prefix of the other.
    MutualPrefix,
}

impl MatchStrategy {
    #[inline]
    pub fn matches(self, token: &str, word: &str) -> bool {
        match self {
            MatchStrategy::Exact => token == word,
            MatchStrategy::MutualPrefix => is_mutual_prefix(token, word),
        }
    }

    pub fn points(self, config: &MatchConfig) -> f64 {
        match self {
            MatchStrategy::Exact => config.full_match_points,
            MatchStrategy::MutualPrefix => config.partial_match_points,
        }
    }
}

/// What a round consumed and what it left for the next one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundOutcome<'a> {
    pub matches: usize,
    pub remaining_tokens: Vec<&'a str>,
    pub remaining_words: Vec<&'a str>,
}

/// Run one greedy first-fit round over owned working lists.
///
/// Each token takes the first remaining word that `strategy` accepts. Both
/// are removed, so no word or token is used twice. `words` keeps its order as
/// items are removed, which keeps later scans in the same order.
pub fn run_round<'a>(
    strategy: MatchStrategy,
    tokens: Vec<&'a str>,
    mut words: Vec<&'a str>,
) -> RoundOutcome<'a> {
    let mut matches = 0;
    let mut remaining_tokens = Vec::with_capacity(tokens.len());

    for token in tokens {
        match words.iter().position(|word| strategy.matches(token, word)) {
            Some(pos) => {
                words.remove(pos);
                matches += 1;
            }
            None => remaining_tokens.push(token),
        }
    }

    RoundOutcome {
        matches,
        remaining_tokens,
        remaining_words: words,
    }
}

/// Per-round breakdown of one record's score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    pub full_matches: usize,
    pub partial_matches: usize,
    /// Points before normalization.
    pub points: f64,
    pub item_length: usize,
}

impl ScoreBreakdown {
    /// Normalized score, or 0 when nothing matched.
    pub fn score(&self) -> f64 {
        if self.points > 0.0 && self.item_length > 0 {
            self.points / self.item_length as f64
        } else {
            0.0
        }
    }
}

/// Run both rounds of `tokens` against `record`.
pub fn score_breakdown(tokens: &[String], record: &Record, config: &MatchConfig) -> ScoreBreakdown {
    let item_length = record.item_length();
    let tokens: Vec<&str> = tokens.iter().map(String::as_str).collect();
    let words: Vec<&str> = record.words.iter().map(String::as_str).collect();

    let full = run_round(MatchStrategy::Exact, tokens, words);

    let partial_matches = if full.remaining_tokens.is_empty() || full.remaining_words.is_empty() {
        0
    } else {
        run_round(
            MatchStrategy::MutualPrefix,
            full.remaining_tokens,
            full.remaining_words,
        )
        .matches
    };

    let points = full.matches as f64 * MatchStrategy::Exact.points(config)
        + partial_matches as f64 * MatchStrategy::MutualPrefix.points(config);

    ScoreBreakdown {
        full_matches: full.matches,
        partial_matches,
        points,
        item_length,
    }
}

/// Normalized score of `record` for an already tokenized query.
pub fn score_record(tokens: &[String], record: &Record, config: &MatchConfig) -> f64 {
    score_breakdown(tokens, record, config).score()
}
