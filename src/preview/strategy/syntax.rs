// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seer-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::path::Path;
use std::sync::OnceLock;

use syntect::easy::HighlightLines;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::{as_24_bit_terminal_escaped, LinesWithEndings};

use super::SGR_RESET;

pub const DEFAULT_THEME: &str = "base16-ocean.dark";

static SYNTAXES: OnceLock<SyntaxSet> = OnceLock::new();
static THEMES: OnceLock<ThemeSet> = OnceLock::new();

pub(crate) fn syntax_set() -> &'static SyntaxSet {
    SYNTAXES.get_or_init(SyntaxSet::load_defaults_newlines)
}

fn theme_set() -> &'static ThemeSet {
    THEMES.get_or_init(ThemeSet::load_defaults)
}

/// The named theme, else [`DEFAULT_THEME`], else any bundled theme.
pub(crate) fn resolve_theme(name: &str) -> Option<&'static Theme> {
    let themes = &theme_set().themes;
    themes.get(name).or_else(|| themes.get(DEFAULT_THEME)).or_else(|| themes.values().next())
}

/// Language detection: whole file name, then extension, then the first line.
pub(crate) fn find_syntax(path: &Path, text: &str) -> Option<&'static SyntaxReference> {
    let syntaxes = syntax_set();
    let by_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| syntaxes.find_syntax_by_extension(name));
    let by_extension = || {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(|ext| syntaxes.find_syntax_by_extension(ext))
    };
    let by_first_line = || {
        let first = text.lines().next().unwrap_or_default();
        syntaxes.find_syntax_by_first_line(first)
    };
    by_name.or_else(by_extension).or_else(by_first_line)
}

/// Highlights `text` as the language in `syntax` with 24-bit escapes.
pub(crate) fn highlight_with(
    syntax: &SyntaxReference,
    text: &str,
    theme: &Theme,
) -> Result<String, syntect::Error> {
    let syntaxes = syntax_set();
    let mut highlighter = HighlightLines::new(syntax, theme);
    let mut out = String::with_capacity(text.len() * 3);
    for line in LinesWithEndings::from(text) {
        let ranges = highlighter.highlight_line(line, syntaxes)?;
        out.push_str(&as_24_bit_terminal_escaped(&ranges, false));
    }
    out.push_str(SGR_RESET);
    Ok(out)
}

/// Language-aware highlighting of `text`, or `None` when no language matches or highlighting
/// fails.
pub fn highlight(path: &Path, text: &str, theme_name: &str) -> Option<String> {
    let syntax = find_syntax(path, text)?;
    let theme = resolve_theme(theme_name)?;
    match highlight_with(syntax, text, theme) {
        Ok(out) => Some(out),
        Err(err) => {
            tracing::debug!(path = %path.display(), error = %err, "highlighting failed");
            None
        }
    }
}

/// [`highlight`] with the unstyled text as fallback.
pub fn render_syntax_text(path: &Path, text: &str, theme_name: &str) -> String {
    highlight(path, text, theme_name).unwrap_or_else(|| text.to_owned())
}
