// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the catsearch command-line interface.
//!
//! Three subcommands: `run` matches a query file against a catalog, `query`
//! matches one query given as arguments, and `inspect` prints index statistics.

pub mod display;

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "catsearch",
    about = "Match free-text queries against a labeled catalog",
    version
)]
pub struct Cli {
    /// Log index and batch statistics to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Match every line of a query file against a catalog
    Run {
        #[command(flatten)]
        catalog: CatalogArgs,

        /// Query file, one query per line
        #[arg(short, long)]
        queries: PathBuf,

        /// Write results here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        tuning: TuningArgs,
    },

    /// Match queries given on the command line
    Query {
        #[command(flatten)]
        catalog: CatalogArgs,

        /// Query words, joined with spaces into one query
        #[arg(required = true, value_name = "QUERY")]
        words: Vec<String>,

        #[command(flatten)]
        tuning: TuningArgs,
    },

    /// Show record and prefix bucket statistics for a catalog
    Inspect {
        #[command(flatten)]
        catalog: CatalogArgs,

        /// Number of largest buckets to list
        #[arg(long, default_value = "10")]
        top: usize,

        /// Prefix length to build the index with
        #[arg(long)]
        prefix_len: Option<usize>,
    },
}

#[derive(Args)]
pub struct CatalogArgs {
    /// Catalog CSV: id first, descriptor fields after, no header row
    #[arg(short, long)]
    pub catalog: PathBuf,
}

#[derive(Args)]
pub struct TuningArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: OutputFormat,

    /// JSON file with matching parameters
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Maximum results per query (overrides the config file)
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Prefix bucket length (overrides the config file)
    #[arg(long)]
    pub prefix_len: Option<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Query, count, then `score,field,...` lines and a blank line
    Plain,
    /// One JSON object per query
    Json,
    /// Boxed terminal layout
    Pretty,
}
