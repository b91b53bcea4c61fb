// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Batch runs: catalog file + query file in, one rendered block per query out.
//!
//! This is the only layer that touches the filesystem. It loads, hands plain
//! in-memory data to the index and matcher, and writes what comes back.

pub mod catalog;
pub mod output;
pub mod queries;

use std::io::Write;
use std::path::Path;

use crate::config::MatchConfig;
use crate::error::Result;
use crate::index::CatalogIndex;
use crate::search::{match_all, Matcher};

pub use catalog::*;
pub use output::*;
pub use queries::*;

/// Totals for one batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub queries: usize,
    /// Queries with at least one result.
    pub matched: usize,
}

/// Match `queries` against `index` and write one block per query, in order.
pub fn run_queries<Q>(
    index: &CatalogIndex,
    queries: &[Q],
    config: &MatchConfig,
    renderer: &dyn Renderer,
    out: &mut dyn Write,
) -> Result<RunSummary>
where
    Q: AsRef<str> + Sync,
{
    let matcher = Matcher::new(index, config.clone());
    let outcomes = match_all(&matcher, queries);

    let mut summary = RunSummary {
        queries: outcomes.len(),
        matched: 0,
    };
    for outcome in &outcomes {
        if !outcome.is_empty() {
            summary.matched += 1;
        }
        out.write_all(&render_to_vec(renderer, outcome)?)?;
    }
    out.flush()?;

    tracing::debug!(
        queries = summary.queries,
        matched = summary.matched,
        "finished batch"
    );
    Ok(summary)
}

/// Load both files, then [`run_queries`].
pub fn run_files(
    catalog_path: &Path,
    queries_path: &Path,
    config: &MatchConfig,
    renderer: &dyn Renderer,
    out: &mut dyn Write,
) -> Result<RunSummary> {
    config.validate()?;
    let index = load_catalog(catalog_path, config.prefix_len)?;
    let queries = load_queries(queries_path)?;
    run_queries(&index, &queries, config, renderer, out)
}
