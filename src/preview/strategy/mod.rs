// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seer-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Renderer strategies, one per [`ContentKind`](super::ContentKind).
//!
//! Every strategy is a plain function of its inputs. Output is text that may carry SGR escape
//! sequences; the presentation layer converts those into styled spans.

use std::time::SystemTime;

pub mod directory;
pub mod image;
pub mod json;
pub mod markdown;
pub mod summary;
pub mod syntax;

pub(crate) const SGR_RESET: &str = "\x1b[0m";

const SIZE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Wraps `text` in an SGR sequence and a reset. An empty `sgr` leaves the text untouched.
pub(crate) fn paint(text: &str, sgr: &str) -> String {
    if sgr.is_empty() || text.is_empty() {
        return text.to_owned();
    }
    format!("\x1b[{sgr}m{text}{SGR_RESET}")
}

/// Base-1024 size with whole bytes and one decimal for larger units (`1.5 KB`).
pub fn human_size(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{bytes} {}", SIZE_UNITS[0]);
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{value:.1} {}", SIZE_UNITS[unit])
}

/// Local wall-clock rendering of a modification time.
pub fn format_modified(modified: Option<SystemTime>) -> String {
    match modified {
        Some(time) => {
            let local: chrono::DateTime<chrono::Local> = time.into();
            local.format("%Y-%m-%d %H:%M:%S").to_string()
        }
        None => "unknown".to_owned(),
    }
}

#[cfg(test)]
pub(crate) fn strip_sgr(text: &str) -> String {
    let sgr = regex::Regex::new("\x1b\\[[0-9;]*m").expect("sgr pattern");
    sgr.replace_all(text, "").into_owned()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{format_modified, human_size, paint};

    #[rstest]
    #[case(0, "0 B")]
    #[case(1023, "1023 B")]
    #[case(1024, "1.0 KB")]
    #[case(1536, "1.5 KB")]
    #[case(5 * 1024 * 1024, "5.0 MB")]
    #[case(3 * 1024 * 1024 * 1024, "3.0 GB")]
    #[case(2048 * 1024 * 1024 * 1024 * 1024, "2048.0 TB")]
    fn human_size_uses_base_1024(#[case] bytes: u64, #[case] expected: &str) {
        assert_eq!(human_size(bytes), expected);
    }

    #[test]
    fn paint_skips_empty_styles() {
        assert_eq!(paint("x", ""), "x");
        assert_eq!(paint("x", "1"), "\x1b[1mx\x1b[0m");
    }

    #[test]
    fn unknown_modification_time() {
        assert_eq!(format_modified(None), "unknown");
    }
}
