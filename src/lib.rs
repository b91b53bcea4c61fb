// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keyword matching over small labeled catalogs.
//!
//! A catalog is a list of records, each an identifier plus a few descriptor
//! fields ("Red Running Shoe", "Acme"). A query is a line of free text. For
//! every query the crate reports how many records match and the ten best,
//! scored by how many query words they contain exactly or by prefix.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  types.rs   │────▶│  index/      │────▶│  search/     │
//! │ (Record,    │     │ (CatalogIndex│     │ (Matcher,    │
//! │ QueryOutcome│     │  buckets)    │     │  match_all)  │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!        │                                        │
//!        ▼                                        ▼
//! ┌─────────────┐                         ┌──────────────┐
//! │  utils.rs   │◀────────────────────────│  scoring/    │
//! │ (tokenize,  │                         │ (two rounds, │
//! │ prefix_key) │                         │  ranking)    │
//! └─────────────┘                         └──────────────┘
//! ```
//!
//! `runner/` sits on top: it loads CSV catalogs and query files, runs the
//! batch, and renders each outcome. Nothing below `runner/` does I/O or can
//! fail.
//!
//! # Usage
//!
//! ```
//! use catsearch::{match_query, CatalogIndex, Record};
//!
//! let index = CatalogIndex::build(vec![
//!     Record::new("1", vec!["red".into(), "shoes".into()]),
//!     Record::new("2", vec!["blue".into(), "hat".into()]),
//! ]);
//!
//! let outcome = match_query("red shoe", &index);
//! assert_eq!(outcome.count, 1);
//! assert_eq!(outcome.results[0].id(), "1");
//! assert!((outcome.results[0].score - 0.65).abs() < 1e-9);
//! ```

// Module declarations
pub mod config;
pub mod error;
mod index;
pub mod runner;
pub mod scoring;
mod search;
pub mod testing;
mod types;
pub mod utils;

// Re-exports for public API
pub use config::{MatchConfig, DEFAULT_RESULT_LIMIT};
pub use error::{Error, Result};
pub use index::CatalogIndex;
pub use scoring::ranking::{compare_results, rank_results};
pub use scoring::{
    run_round, score_breakdown, score_record, MatchStrategy, RoundOutcome, ScoreBreakdown,
    FULL_MATCH_POINTS, PARTIAL_MATCH_POINTS,
};
pub use search::{match_all, match_query, Matcher};
pub use types::{QueryOutcome, Record, RecordId, ScoredResult};
pub use utils::{format_score, prefix_key, tokenize, DEFAULT_PREFIX_LEN};
