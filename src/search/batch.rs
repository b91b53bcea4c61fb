// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Batch matching over many query lines.
//!
//! Queries are independent and the index is read-only, so with the
//! `parallel` feature the batch fans out over rayon. `collect` on an indexed
//! parallel iterator keeps input order, so the output is the same as the
//! sequential path line for line.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::Matcher;
use crate::types::QueryOutcome;

/// Match every query in order.
#[cfg(feature = "parallel")]
pub fn match_all<'i, Q>(matcher: &Matcher<'i>, queries: &[Q]) -> Vec<QueryOutcome<'i>>
where
    Q: AsRef<str> + Sync,
{
    queries
        .par_iter()
        .map(|q| matcher.match_query(q.as_ref()))
        .collect()
}

/// Match every query in order.
#[cfg(not(feature = "parallel"))]
pub fn match_all<'i, Q>(matcher: &Matcher<'i>, queries: &[Q]) -> Vec<QueryOutcome<'i>>
where
    Q: AsRef<str> + Sync,
{
    queries
        .iter()
        .map(|q| matcher.match_query(q.as_ref()))
        .collect()
}
