// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored records get sorted.
//!
//! Score is the only signal. Ties are common (two records with the same word
//! count and the same matches score identically), so the record identifier
//! breaks them. That makes the order a total order and the top-N cut stable
//! across runs.

use crate::types::ScoredResult;
use std::cmp::Ordering;

/// Compare two results for ranking.
///
/// Sort order:
/// 1. **Score** - descending (higher wins)
/// 2. **Record id** - ascending, byte-wise string order
pub fn compare_results(a: &ScoredResult<'_>, b: &ScoredResult<'_>) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.record.id.cmp(&b.record.id))
}

/// Sort best first and keep at most `limit`.
pub fn rank_results(results: &mut Vec<ScoredResult<'_>>, limit: usize) {
    results.sort_by(compare_results);
    results.truncate(limit);
}
