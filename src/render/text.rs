// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seer-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::Canvas;

pub(crate) fn text_len(text: &str) -> usize {
    text.chars().count()
}

/// Keeps at most `max_len` chars of `text`.
pub(crate) fn take_chars(text: &str, max_len: usize) -> &str {
    match text.char_indices().nth(max_len) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}

/// Emits every row with trailing spaces removed and drops trailing empty rows.
pub(crate) fn canvas_to_string_trimmed(canvas: &Canvas) -> String {
    let mut lines = (0..canvas.height())
        .filter_map(|y| canvas.row(y))
        .map(|line| line.trim_end_matches(' ').to_owned())
        .collect::<Vec<_>>();

    while matches!(lines.last(), Some(line) if line.is_empty()) {
        lines.pop();
    }

    lines.join("\n")
}
