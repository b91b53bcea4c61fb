// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing_subscriber::EnvFilter;

use catsearch::runner::{load_catalog, load_queries, run_queries, JsonRenderer, PlainRenderer, Renderer};
use catsearch::MatchConfig;

mod cli;
use cli::display::{disable_colors, print_inspect, PrettyRenderer};
use cli::{Cli, Commands, OutputFormat, TuningArgs};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// stderr subscriber; `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "catsearch=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Run {
            catalog,
            queries,
            output,
            tuning,
        } => {
            let config = resolve_config(&tuning)?;
            let index = load_catalog(&catalog.catalog, config.prefix_len)?;
            let queries = load_queries(&queries)?;

            let mut out: Box<dyn Write> = match output {
                Some(path) => {
                    // Escapes only make sense on a terminal
                    disable_colors();
                    let file = File::create(&path)
                        .with_context(|| format!("failed to create {}", path.display()))?;
                    Box::new(BufWriter::new(file))
                }
                None => Box::new(BufWriter::new(io::stdout().lock())),
            };
            let summary = run_queries(&index, &queries, &config, renderer(tuning.format), &mut out)?;
            tracing::info!(
                queries = summary.queries,
                matched = summary.matched,
                "done"
            );
        }
        Commands::Query {
            catalog,
            words,
            tuning,
        } => {
            let config = resolve_config(&tuning)?;
            let index = load_catalog(&catalog.catalog, config.prefix_len)?;
            let query = words.join(" ");
            let mut out = BufWriter::new(io::stdout().lock());
            run_queries(&index, &[query], &config, renderer(tuning.format), &mut out)?;
        }
        Commands::Inspect {
            catalog,
            top,
            prefix_len,
        } => {
            let prefix_len = prefix_len.unwrap_or(MatchConfig::default().prefix_len);
            anyhow::ensure!(prefix_len > 0, "--prefix-len must be at least 1");
            let index = load_catalog(&catalog.catalog, prefix_len)?;
            let mut out = io::stdout().lock();
            print_inspect(&mut out, &index, top)?;
        }
    }
    Ok(())
}

/// Config file first, then command-line overrides, then validation.
fn resolve_config(tuning: &TuningArgs) -> Result<MatchConfig> {
    let mut config = match &tuning.config {
        Some(path) => load_config(path)?,
        None => MatchConfig::default(),
    };
    if let Some(limit) = tuning.limit {
        config.result_limit = limit;
    }
    if let Some(prefix_len) = tuning.prefix_len {
        config.prefix_len = prefix_len;
    }
    config.validate()?;
    Ok(config)
}

fn load_config(path: &Path) -> Result<MatchConfig> {
    MatchConfig::from_file(path).with_context(|| format!("loading config {}", path.display()))
}

fn renderer(format: OutputFormat) -> &'static dyn Renderer {
    match format {
        OutputFormat::Plain => &PlainRenderer,
        OutputFormat::Json => &JsonRenderer,
        OutputFormat::Pretty => &PrettyRenderer,
    }
}
