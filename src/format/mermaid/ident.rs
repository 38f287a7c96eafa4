// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seer-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::MermaidNode;

const LABEL_DELIMITERS: [(char, char); 3] = [('[', ']'), ('(', ')'), ('{', '}')];

/// Normalizes free text: strips quote/backtick characters, turns `|` into spaces, and collapses
/// whitespace runs to single spaces.
pub(crate) fn clean_text(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for word in raw.split_whitespace() {
        let word = word
            .chars()
            .filter(|ch| !matches!(ch, '"' | '\'' | '`'))
            .map(|ch| if ch == '|' { ' ' } else { ch })
            .collect::<String>();
        for part in word.split_whitespace() {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(part);
        }
    }
    out
}

/// Normalizes an identifier to its first whitespace-delimited token with one layer of
/// bracket and quote characters removed.
pub(crate) fn clean_id(raw: &str) -> String {
    let mut id = raw.trim();
    for prefix in ['(', '[', '{'] {
        id = id.strip_prefix(prefix).unwrap_or(id);
    }
    for suffix in [')', ']', '}', ';'] {
        id = id.strip_suffix(suffix).unwrap_or(id);
    }

    let Some(token) = id.split_whitespace().next() else {
        return String::new();
    };
    token.trim_matches('"').to_owned()
}

/// Parses one side of an edge: `id`, `id[label]`, `id(label)`, or `id{label}`, with an optional
/// `:::class` suffix. Returns `None` when no identifier survives cleaning.
pub(crate) fn parse_node_ref(raw: &str) -> Option<MermaidNode> {
    let raw = raw.trim();
    let raw = raw.strip_suffix(';').unwrap_or(raw).trim();
    if raw.is_empty() {
        return None;
    }
    let raw = raw.split(":::").next().unwrap_or(raw);

    for (open, close) in LABEL_DELIMITERS {
        let Some(open_idx) = raw.find(open) else {
            continue;
        };
        if open_idx == 0 {
            continue;
        }
        let Some(close_idx) = raw.rfind(close) else {
            continue;
        };
        if close_idx <= open_idx {
            continue;
        }

        let id_part = raw[..open_idx].trim();
        let mut label = clean_text(&raw[open_idx + open.len_utf8()..close_idx]);
        if label.is_empty() {
            label = clean_text(id_part);
        }
        let id = clean_id(id_part);
        return (!id.is_empty()).then(|| MermaidNode::new(id, label));
    }

    let id = clean_id(raw);
    if id.is_empty() {
        return None;
    }
    let label = clean_text(&id);
    Some(MermaidNode::new(id, label))
}
