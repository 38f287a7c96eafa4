// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seer-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::path::Path;
use std::time::Instant;

use crate::model::{SelectedEntry, Viewport};
use crate::render::render_diagram_source;

use super::classify::{classify, is_image_path, ByteSample, ContentKind};
use super::strategy::{directory, image, json, markdown, summary, syntax};
use super::{PreviewError, PreviewOptions, TRUNCATION_NOTICE};

fn with_truncation_notice(mut text: String, truncated: bool) -> String {
    if truncated {
        text.push_str("\n\n");
        text.push_str(TRUNCATION_NOTICE);
    }
    text
}

fn render_text_kind(
    kind: ContentKind,
    path: &Path,
    text: &str,
    viewport: Viewport,
    options: &PreviewOptions,
) -> String {
    match kind {
        ContentKind::Markdown => {
            markdown::render_markdown(text, viewport.width(), options.syntax_theme())
        }
        ContentKind::Diagram => render_diagram_source(text),
        ContentKind::Json => json::render_json(text),
        _ => syntax::render_syntax_text(path, text, options.syntax_theme()),
    }
}

/// Classifies the entry at `path` and renders it for `viewport`.
///
/// The entry is stat'ed afresh; only I/O failures surface as errors.
pub fn render_entry(
    path: &Path,
    viewport: Viewport,
    options: &PreviewOptions,
) -> Result<String, PreviewError> {
    let started = Instant::now();
    let entry = SelectedEntry::stat(path)
        .map_err(|source| PreviewError::Stat { path: path.to_path_buf(), source })?;

    let (kind, text) = if entry.is_dir() {
        (ContentKind::Directory, directory::render_directory(path)?)
    } else if is_image_path(path) {
        let text = image::render_image(path, entry.size(), viewport, options.color());
        (ContentKind::Image, text)
    } else {
        let sample = ByteSample::read(path)?;
        let kind = classify(path, false, Some(&sample));
        let text = match kind {
            ContentKind::Binary => summary::render_binary_summary(&entry),
            kind if kind.is_text() => match sample.text() {
                Some(text) => with_truncation_notice(
                    render_text_kind(kind, path, &text, viewport, options),
                    sample.is_truncated(),
                ),
                None => summary::render_non_utf8_summary(&entry),
            },
            _ => summary::render_non_utf8_summary(&entry),
        };
        (kind, text)
    };

    tracing::debug!(
        path = %path.display(),
        kind = ?kind,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "preview rendered"
    );
    Ok(text)
}
