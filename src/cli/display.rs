// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the catsearch CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Detection tries
//! `CATSEARCH_THEME` first, then `COLORFGBG`, then defaults to dark. Respects
//! `NO_COLOR` and drops all escapes when stdout is not a TTY, so `--format
//! pretty` piped into a file is still readable.

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

use catsearch::runner::Renderer;
use catsearch::utils::format_score;
use catsearch::{CatalogIndex, QueryOutcome};

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 72;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Cached theme detection result
static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("CATSEARCH_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG is "fg;bg"; backgrounds 7 and up (except 8) are light
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// PALETTES
// ═══════════════════════════════════════════════════════════════════════════

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            rgb(match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            })
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Set once output goes somewhere other than stdout.
static COLORS_DISABLED: AtomicBool = AtomicBool::new(false);

/// Turn colors off for the rest of the process, whatever stdout is.
pub fn disable_colors() {
    COLORS_DISABLED.store(true, Ordering::Relaxed);
}

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if COLORS_DISABLED.load(Ordering::Relaxed) || std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

fn border() -> String {
    if use_colors() {
        GRAY()
    } else {
        String::new()
    }
}

fn reset() -> &'static str {
    if use_colors() {
        RESET
    } else {
        ""
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Cut to `max` visible characters, marking the cut with an ellipsis.
fn clip(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// │ content          │
pub fn row(out: &mut dyn Write, content: &str) -> io::Result<()> {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    writeln!(
        out,
        "{b}│{r}{}{}{b}│{r}",
        content,
        " ".repeat(pad),
        b = border(),
        r = reset()
    )
}

/// ┌─ LABEL ──────────┐
pub fn section_top(out: &mut dyn Write, label: &str) -> io::Result<()> {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    writeln!(
        out,
        "{b}┌{r}{}{b}{}┐{r}",
        label_part,
        "─".repeat(remaining),
        b = border(),
        r = reset()
    )
}

/// └──────────────────┘
pub fn section_bot(out: &mut dyn Write) -> io::Result<()> {
    writeln!(
        out,
        "{}└{}┘{}",
        border(),
        "─".repeat(BOX_WIDTH),
        reset()
    )
}

/// Score colored by strength: exact-heavy green, partial-heavy yellow.
pub fn score_badge(score: f64) -> String {
    let text = format!("{:>6}", format_score(score));
    let color: fn() -> String = if score >= 0.75 {
        GREEN
    } else if score >= 0.4 {
        YELLOW
    } else {
        RED
    };
    themed(color, &[BOLD], &text)
}

// ═══════════════════════════════════════════════════════════════════════════
// RENDERERS
// ═══════════════════════════════════════════════════════════════════════════

/// Boxed, colored layout for humans.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrettyRenderer;

impl Renderer for PrettyRenderer {
    fn render(&self, out: &mut dyn Write, outcome: &QueryOutcome<'_>) -> io::Result<()> {
        let label = format!("\"{}\"", clip(&outcome.query, BOX_WIDTH / 2));
        section_top(out, &label)?;

        let shown = outcome.results.len();
        let summary = if outcome.count > shown {
            format!(" {} matches, showing top {}", outcome.count, shown)
        } else {
            format!(" {} matches", outcome.count)
        };
        row(out, &themed(GRAY, &[], &summary))?;

        for result in &outcome.results {
            let prefix = format!(" {}  {:<8} ", score_badge(result.score), clip(result.id(), 8));
            let width = BOX_WIDTH.saturating_sub(visible_len(&prefix));
            let text = clip(&result.fields().join(" · "), width);
            row(out, &format!("{}{}", prefix, text))?;
        }

        section_bot(out)?;
        writeln!(out)
    }
}

/// Print index statistics for `inspect`.
pub fn print_inspect(out: &mut dyn Write, index: &CatalogIndex, top: usize) -> io::Result<()> {
    section_top(out, "CATALOG")?;
    row(out, &format!(" records       {}", index.len()))?;
    row(out, &format!(" prefix len    {}", index.prefix_len()))?;
    row(out, &format!(" buckets       {}", index.prefix_count()))?;
    row(out, &format!(" skipped rows  {}", index.skipped_rows()))?;
    section_bot(out)?;

    section_top(out, "LARGEST BUCKETS")?;
    for (key, size) in index.largest_buckets(top) {
        row(
            out,
            &format!(" {} {}", themed(CYAN, &[], &format!("{:<8}", key)), size),
        )?;
    }
    section_bot(out)
}
