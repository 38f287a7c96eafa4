// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seer-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde_json::{Number, Value};

use super::paint;

/// Array elements rendered before the `+N more items` marker.
pub const MAX_ARRAY_ITEMS: usize = 100;
const INDENT: &str = "  ";

const KEY_STYLE: &str = "38;5;147";
const STRING_STYLE: &str = "38;5;114";
const NUMBER_STYLE: &str = "38;5;222";
const BOOL_STYLE: &str = "1;38;5;215";
const NULL_STYLE: &str = "1;38;5;240";
const BRACKET_STYLE: &str = "38;5;244";
const MUTED_STYLE: &str = "38;5;240";
const ERROR_STYLE: &str = "38;5;203";

/// Pretty-prints `text` with sorted keys, or shows the parse error followed by the raw text.
pub fn render_json(text: &str) -> String {
    match serde_json::from_str::<Value>(text.trim()) {
        Ok(value) => {
            let mut out = String::with_capacity(text.len() * 2);
            write_value(&mut out, &value, 0);
            out
        }
        Err(err) => format!("{}\n\n{text}", paint(&format!("invalid JSON: {err}"), ERROR_STYLE)),
    }
}

fn quoted(text: &str) -> String {
    serde_json::to_string(text).unwrap_or_else(|_| format!("\"{text}\""))
}

fn format_number(number: &Number) -> String {
    if number.is_i64() || number.is_u64() {
        return number.to_string();
    }
    match number.as_f64() {
        Some(value) if value.is_finite() && value.fract() == 0.0 => {
            if value >= i64::MIN as f64 && value < i64::MAX as f64 {
                format!("{}", value as i64)
            } else {
                format!("{value:.0}")
            }
        }
        Some(value) => format!("{value:?}"),
        None => number.to_string(),
    }
}

fn push_indent(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}

fn write_value(out: &mut String, value: &Value, depth: usize) {
    match value {
        Value::Null => out.push_str(&paint("null", NULL_STYLE)),
        Value::Bool(flag) => out.push_str(&paint(if *flag { "true" } else { "false" }, BOOL_STYLE)),
        Value::Number(number) => out.push_str(&paint(&format_number(number), NUMBER_STYLE)),
        Value::String(text) => out.push_str(&paint(&quoted(text), STRING_STYLE)),
        Value::Array(items) => write_array(out, items, depth),
        Value::Object(map) => {
            if map.is_empty() {
                out.push_str(&paint("{}", BRACKET_STYLE));
                return;
            }

            let mut keys: Vec<&String> = map.keys().collect();
            keys.sort();

            out.push_str(&paint("{", BRACKET_STYLE));
            out.push('\n');
            for (idx, key) in keys.iter().enumerate() {
                push_indent(out, depth + 1);
                out.push_str(&paint(&quoted(key), KEY_STYLE));
                out.push_str(&paint(": ", MUTED_STYLE));
                if let Some(child) = map.get(*key) {
                    write_value(out, child, depth + 1);
                }
                if idx + 1 < keys.len() {
                    out.push_str(&paint(",", MUTED_STYLE));
                }
                out.push('\n');
            }
            push_indent(out, depth);
            out.push_str(&paint("}", BRACKET_STYLE));
        }
    }
}

fn write_array(out: &mut String, items: &[Value], depth: usize) {
    if items.is_empty() {
        out.push_str(&paint("[]", BRACKET_STYLE));
        return;
    }

    out.push_str(&paint("[", BRACKET_STYLE));
    out.push('\n');
    for (idx, item) in items.iter().take(MAX_ARRAY_ITEMS).enumerate() {
        push_indent(out, depth + 1);
        write_value(out, item, depth + 1);
        if idx + 1 < items.len() {
            out.push_str(&paint(",", MUTED_STYLE));
        }
        out.push('\n');
    }
    if items.len() > MAX_ARRAY_ITEMS {
        push_indent(out, depth + 1);
        out.push_str(&paint(&format!("+{} more items", items.len() - MAX_ARRAY_ITEMS), MUTED_STYLE));
        out.push('\n');
    }
    push_indent(out, depth);
    out.push_str(&paint("]", BRACKET_STYLE));
}
