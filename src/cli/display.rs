// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the docsift CLI.
//!
//! OneDark for dark terminals, One Light for light ones. `DOCSIFT_THEME`
//! picks explicitly, otherwise `COLORFGBG` is consulted, otherwise dark.
//! Respects `NO_COLOR` and non-TTY stdout, so piping results into a file
//! gives plain text.

use std::path::Path;
use std::sync::OnceLock;

use docsift::{BuildReport, IndexStats, Preview, SearchResult};

// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 80;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("DOCSIFT_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // "fg;bg", colors 0-6 (and 8) are dark backgrounds
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(Ok(bg)) = colorfgbg.split(';').next_back().map(str::parse::<u8>) {
            if bg >= 7 && bg != 8 {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const UNDERLINE: &str = "\x1b[4m";

mod onedark {
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const BLUE: (u8, u8, u8) = (97, 175, 239); // #61afef
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

mod onelight {
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const BLUE: (u8, u8, u8) = (64, 120, 242); // #4078f2
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

theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(BLUE);
theme_color!(CYAN);
theme_color!(GRAY);

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
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

/// Visible length, excluding ANSI codes
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

/// │ content          │
pub fn row(content: &str) {
    let border = themed(GRAY, &[], "│");
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("{}{}{}{}", border, content, " ".repeat(pad), border);
}

/// ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    println!(
        "{}{}{}",
        themed(GRAY, &[], "┌"),
        label_part,
        themed(GRAY, &[], &format!("{}┐", "─".repeat(remaining)))
    );
}

/// └──────────────────┘
pub fn section_bot() {
    println!("{}", themed(GRAY, &[], &format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

pub fn format_size(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / 1024.0 / 1024.0)
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}

/// Preview text with the match emphasized, on one line.
pub fn highlight(preview: &Preview) -> String {
    let flat = |s: &str| s.replace('\n', " ");
    match preview.highlighted() {
        Some(matched) => {
            // highlighted() guarantees both offsets are valid char boundaries
            let start = preview.match_start as usize;
            let end = preview.match_end as usize;
            let emphasized = if use_colors() {
                format!("{}{}{}{}", BOLD, YELLOW(), flat(matched), RESET)
            } else {
                format!("[{}]", flat(matched))
            };
            format!(
                "{}{}{}",
                flat(&preview.text[..start]),
                emphasized,
                flat(&preview.text[end..])
            )
        }
        None => flat(&preview.text),
    }
}

/// Title-match / content-match badge
pub fn match_label(result: &SearchResult) -> String {
    if result.is_title_match {
        themed(GREEN, &[], "title")
    } else {
        themed(GRAY, &[], "content")
    }
}

pub fn print_results(query: &str, results: &[SearchResult], elapsed_ms: f64) {
    if results.is_empty() {
        println!("No results for {:?}", query);
        return;
    }
    println!(
        "{} for {:?} {}",
        themed(CYAN, &[BOLD], &format!("{} results", results.len())),
        query,
        themed(GRAY, &[], &format!("({:.2} ms)", elapsed_ms))
    );
    println!();
    for (rank, result) in results.iter().enumerate() {
        let heading = match &result.page_title {
            Some(page) => format!("{} {} {}", page, themed(GRAY, &[], "›"), result.title),
            None => result.title.clone(),
        };
        println!(
            "{:>3}. {}  {}",
            rank + 1,
            themed(BLUE, &[BOLD], &heading),
            match_label(result)
        );
        println!("     {}", themed(GRAY, &[UNDERLINE], &result.url));
        if let Some(preview) = &result.preview {
            println!("     {}", highlight(preview));
        }
        println!();
    }
}

pub fn print_stats(path: &Path, stats: &IndexStats, bytes: usize) {
    section_top("INDEX");
    row(&format!(" file           {}", path.display()));
    row(&format!(" size           {}", format_size(bytes)));
    row(&format!(" pages          {}", stats.pages));
    row(&format!(
        " entries        {} ({} anchored)",
        stats.entries, stats.anchored
    ));
    row(&format!(" title terms    {}", stats.title_terms));
    row(&format!(" content terms  {}", stats.content_terms));
    row(&format!(" postings       {}", stats.postings));
    section_bot();
}

pub fn print_build_report(report: &BuildReport) {
    eprintln!();
    eprintln!("{}", themed(GREEN, &[BOLD], "Build complete"));
    eprintln!(
        "   {} documents │ {} entries │ {} │ cache {} hit / {} miss",
        report.documents,
        report.entries,
        format_size(report.files.bytes),
        report.cache_hits,
        report.cache_misses
    );
    eprintln!("   {}", themed(GRAY, &[DIM], &report.files.hashed.display().to_string()));
}
