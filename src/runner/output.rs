// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Renderers for query outcomes.
//!
//! Each renderer writes one complete block per query. The runner renders a
//! block into a buffer first and writes it in one call, so blocks from
//! different queries never interleave.

use serde::Serialize;
use std::io::{self, Write};

use crate::types::QueryOutcome;
use crate::utils::format_score;

/// Writes one query's outcome.
pub trait Renderer: Sync {
    fn render(&self, out: &mut dyn Write, outcome: &QueryOutcome<'_>) -> io::Result<()>;
}

/// Line-oriented format:
///
/// ```text
/// red shoe
/// 2
/// 1.0,red,shoe
/// 0.65,red,shoes
///
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainRenderer;

impl Renderer for PlainRenderer {
    fn render(&self, out: &mut dyn Write, outcome: &QueryOutcome<'_>) -> io::Result<()> {
        writeln!(out, "{}", outcome.query)?;
        writeln!(out, "{}", outcome.count)?;
        for result in &outcome.results {
            write!(out, "{}", format_score(result.score))?;
            for field in result.fields() {
                write!(out, ",{}", field)?;
            }
            writeln!(out)?;
        }
        writeln!(out)
    }
}

/// One JSON object per line.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

#[derive(Serialize)]
struct JsonResult<'a> {
    score: f64,
    id: &'a str,
    fields: &'a [String],
}

#[derive(Serialize)]
struct JsonOutcome<'a> {
    query: &'a str,
    count: usize,
    results: Vec<JsonResult<'a>>,
}

impl Renderer for JsonRenderer {
    fn render(&self, out: &mut dyn Write, outcome: &QueryOutcome<'_>) -> io::Result<()> {
        let doc = JsonOutcome {
            query: &outcome.query,
            count: outcome.count,
            results: outcome
                .results
                .iter()
                .map(|r| JsonResult {
                    score: r.score,
                    id: r.id(),
                    fields: r.fields(),
                })
                .collect(),
        };
        serde_json::to_writer(&mut *out, &doc)?;
        writeln!(out)
    }
}

/// Render into an owned buffer.
pub fn render_to_vec(
    renderer: &dyn Renderer,
    outcome: &QueryOutcome<'_>,
) -> io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    renderer.render(&mut buf, outcome)?;
    Ok(buf)
}
