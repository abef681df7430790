// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the shakesearch CLI.
//!
//! Snippets are printed one per block with the match highlighted. Colors use
//! the OneDark palette on dark terminals and One Light on light ones. The
//! detection tries `SHAKESEARCH_THEME` first, then `COLORFGBG`, then defaults
//! to dark. `NO_COLOR` and non-TTY stdout turn colors off entirely.

use std::sync::OnceLock;

use shakesearch::Snippet;

// Box drawing constants - width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 60;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn detect_theme() -> Theme {
    if let Ok(theme) = std::env::var("SHAKESEARCH_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // COLORFGBG (format: "fg;bg" where bg > 6 typically means light)
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

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// COLORS
// ═══════════════════════════════════════════════════════════════════════════

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

fn rgb((r, g, b): (u8, u8, u8)) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

/// Palette roles used by the CLI, as (dark, light) pairs.
#[derive(Debug, Clone, Copy)]
pub enum Role {
    Match,
    Label,
    Border,
    Value,
}

impl Role {
    fn rgb(self) -> (u8, u8, u8) {
        match (self, theme()) {
            (Role::Match, Theme::Dark) => (229, 192, 123),  // #e5c07b
            (Role::Match, Theme::Light) => (193, 132, 1),   // #c18401
            (Role::Label, Theme::Dark) => (86, 182, 194),   // #56b6c2
            (Role::Label, Theme::Light) => (1, 132, 188),   // #0184bc
            (Role::Border, Theme::Dark) => (92, 99, 112),   // #5c6370
            (Role::Border, Theme::Light) => (160, 161, 167), // #a0a1a7
            (Role::Value, Theme::Dark) => (152, 195, 121),  // #98c379
            (Role::Value, Theme::Light) => (80, 161, 79),   // #50a14f
        }
    }
}

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    // Respect NO_COLOR standard
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Wrap `text` in a role color (bold optional) when `colored` is set.
pub fn paint(colored: bool, role: Role, bold: bool, text: &str) -> String {
    if !colored {
        return text.to_string();
    }
    let weight = if bold { BOLD } else { "" };
    format!("{}{}{}{}", weight, rgb(role.rgb()), text, RESET)
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

// ═══════════════════════════════════════════════════════════════════════════
// SNIPPETS
// ═══════════════════════════════════════════════════════════════════════════

/// Snippet text with the match highlighted.
///
/// When the match falls outside the (possibly trimmed) window the text is
/// returned unchanged.
pub fn highlight(snippet: &Snippet, query_len: usize, colored: bool) -> String {
    let Some((start, end)) = snippet.match_range(query_len) else {
        return snippet.text.clone();
    };
    let text = &snippet.text;
    match (text.get(..start), text.get(start..end), text.get(end..)) {
        (Some(before), Some(hit), Some(after)) => {
            let hit = if colored {
                paint(true, Role::Match, true, hit)
            } else {
                format!("[{}]", hit)
            };
            format!("{}{}{}", before, hit, after)
        }
        _ => text.clone(),
    }
}

/// Render the result list for one query.
pub fn render_snippets(
    query: &str,
    snippets: &[Snippet],
    limit: Option<usize>,
    colored: bool,
) -> String {
    let shown = limit.unwrap_or(snippets.len()).min(snippets.len());
    let mut out = String::new();

    out.push_str(&format!(
        "{} {} ({} matches",
        paint(colored, Role::Label, true, "query"),
        query,
        snippets.len()
    ));
    if shown < snippets.len() {
        out.push_str(&format!(", showing {}", shown));
    }
    out.push_str(")\n");

    for (i, snippet) in snippets.iter().take(shown).enumerate() {
        let header = format!("── #{} @ {} [{}..{})", i + 1, snippet.offset, snippet.start, snippet.end);
        out.push_str(&paint(colored, Role::Border, false, &header));
        out.push('\n');
        out.push_str(&highlight(snippet, query.len(), colored));
        out.push('\n');
    }

    out
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Render a labeled box of `(key, value)` rows.
pub fn render_box(label: &str, rows: &[(&str, String)], colored: bool) -> String {
    let border = |s: &str| paint(colored, Role::Border, false, s);
    let mut out = String::new();

    // ┌─ LABEL ──────────┐
    let label_part = format!("─ {} ", paint(colored, Role::Label, true, label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    out.push_str(&format!(
        "{}{}{}\n",
        border("┌"),
        label_part,
        border(&format!("{}┐", "─".repeat(remaining)))
    ));

    // │ key    value     │
    for (key, value) in rows {
        let content = format!(" {:<18}{}", key, paint(colored, Role::Value, false, value));
        let pad = BOX_WIDTH.saturating_sub(visible_len(&content));
        out.push_str(&format!(
            "{}{}{}{}\n",
            border("│"),
            content,
            " ".repeat(pad),
            border("│")
        ));
    }

    // └──────────────────┘
    out.push_str(&format!("{}\n", border(&format!("└{}┘", "─".repeat(BOX_WIDTH)))));
    out
}

/// Format a byte count with binary units.
pub fn format_bytes(bytes: usize) -> String {
    const UNITS: [&str; 4] = ["B", "KiB", "MiB", "GiB"];
    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} B", bytes)
    } else {
        format!("{:.1} {}", value, UNITS[unit])
    }
}
