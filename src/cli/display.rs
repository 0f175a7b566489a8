// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the classcode CLI.
//!
//! Green check for accepted codes, red cross plus the gate that fired for
//! rejected ones. Colors adapt to the terminal: OneDark tones for dark
//! terminals, One Light for light ones. Detection tries `CLASSCODE_THEME`
//! first (for explicit control), then `COLORFGBG`, then defaults to dark
//! because most developers live there. Respects `NO_COLOR` and falls back
//! to plain output when stdout is not a TTY.

use std::sync::OnceLock;

use classcode::Outcome;

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Cached theme detection result
static THEME: OnceLock<Theme> = OnceLock::new();

/// Detect terminal theme from environment
fn detect_theme() -> Theme {
    // 1. Explicit override via CLASSCODE_THEME
    if let Ok(theme) = std::env::var("CLASSCODE_THEME") {
        match theme.to_lowercase().as_str() {
            "light" | "l" => return Theme::Light,
            "dark" | "d" => return Theme::Dark,
            _ => {}
        }
    }

    // 2. COLORFGBG (format: "fg;bg" where bg >= 7 typically means light)
    if let Ok(colorfgbg) = std::env::var("COLORFGBG") {
        if let Some(bg) = colorfgbg.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                if bg_num >= 7 && bg_num != 8 {
                    return Theme::Light;
                }
            }
        }
    }

    // 3. Default to dark (most developer terminals)
    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

/// True color escape sequence helper
fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";

/// Per-theme accent colors (OneDark / One Light)
fn green() -> String {
    match theme() {
        Theme::Dark => rgb(152, 195, 121),
        Theme::Light => rgb(80, 161, 79),
    }
}

fn red() -> String {
    match theme() {
        Theme::Dark => rgb(224, 108, 117),
        Theme::Light => rgb(228, 86, 73),
    }
}

fn gray() -> String {
    match theme() {
        Theme::Dark => rgb(92, 99, 112),
        Theme::Light => rgb(160, 161, 167),
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

/// Apply color if TTY, otherwise return plain text
fn color(c: &str, text: &str) -> String {
    if use_colors() {
        format!("{}{}{}", c, text, RESET)
    } else {
        text.to_string()
    }
}

/// One verdict line: `✓ AAA123` or `✗ RATS42  contains distracting word`
pub fn verdict_line(code: &str, outcome: Outcome) -> String {
    if outcome.is_valid() {
        format!("{} {}", color(&green(), "✓"), code)
    } else {
        format!(
            "{} {}  {}",
            color(&red(), "✗"),
            code,
            color(&gray(), &outcome.to_string())
        )
    }
}

/// Closing summary: `3 of 5 accepted`
pub fn summary_line(accepted: usize, total: usize) -> String {
    let text = format!("{} of {} accepted", accepted, total);
    if accepted == total {
        color(&green(), &text)
    } else {
        color(&gray(), &text)
    }
}

/// One group line: `rats  <- ra2ts, rat5s` or `egg` for a lone representative
pub fn group_line(representative: &str, members: &[&str]) -> String {
    if members.is_empty() {
        representative.to_string()
    } else {
        format!(
            "{}  {} {}",
            representative,
            color(&gray(), "<-"),
            members.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_verdicts_without_tty() {
        // Test binaries run without a TTY, so output is plain.
        let line = verdict_line("RATS42", Outcome::ContainsDistractingWord);
        assert!(line.contains("RATS42"));
        assert!(line.contains("contains distracting word"));
    }

    #[test]
    fn lone_representative_has_no_arrow() {
        assert_eq!(group_line("egg", &[]), "egg");
        assert!(group_line("ha", &["haha"]).contains("haha"));
    }
}
