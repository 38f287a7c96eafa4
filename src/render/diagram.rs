// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seer-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use crate::format::mermaid::{parse_diagram, ParsedDiagram};
use crate::layout::{layout_flowchart, layout_sequence};

use super::flowchart::{render_flowchart, FlowchartRenderError};
use super::sequence::{render_sequence, SequenceRenderError};

/// Width cap for diagrams embedded in prose (Markdown fences).
pub const EMBEDDED_MAX_WIDTH: usize = 80;
/// Ceiling on full-pane canvas width; wider art is clipped at the right edge.
pub const MAX_CANVAS_WIDTH: usize = 512;
pub const NO_DIAGRAM_CONTENT: &str = "(no diagram content parsed)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagramRenderError {
    SequenceRender(SequenceRenderError),
    FlowchartRender(FlowchartRenderError),
}

impl fmt::Display for DiagramRenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SequenceRender(err) => write!(f, "sequence render error: {err}"),
            Self::FlowchartRender(err) => write!(f, "flowchart render error: {err}"),
        }
    }
}

impl std::error::Error for DiagramRenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::SequenceRender(err) => Some(err),
            Self::FlowchartRender(err) => Some(err),
        }
    }
}

impl From<SequenceRenderError> for DiagramRenderError {
    fn from(value: SequenceRenderError) -> Self {
        Self::SequenceRender(value)
    }
}

impl From<FlowchartRenderError> for DiagramRenderError {
    fn from(value: FlowchartRenderError) -> Self {
        Self::FlowchartRender(value)
    }
}

/// Parses and draws `source`. `Ok(None)` means nothing was parsed worth drawing.
pub fn render_diagram(
    source: &str,
    max_width: Option<usize>,
) -> Result<Option<String>, DiagramRenderError> {
    let parsed = parse_diagram(source);
    if !parsed.has_content() {
        return Ok(None);
    }

    let art = match &parsed {
        ParsedDiagram::Flow(graph) => {
            let layout = layout_flowchart(graph, max_width);
            render_flowchart(graph, &layout)?
        }
        ParsedDiagram::Sequence(diagram) => {
            let layout = layout_sequence(diagram, max_width);
            render_sequence(diagram, &layout)?
        }
    };
    Ok(Some(art))
}

/// Full-pane rendering, up to [`MAX_CANVAS_WIDTH`] columns; degenerate input yields a note
/// followed by the source.
pub fn render_diagram_source(source: &str) -> String {
    match render_diagram(source, Some(MAX_CANVAS_WIDTH)) {
        Ok(Some(art)) => art,
        Ok(None) => format!("{NO_DIAGRAM_CONTENT}\n\n{source}"),
        Err(err) => {
            tracing::warn!(error = %err, "diagram render failed");
            format!("{NO_DIAGRAM_CONTENT}: {err}\n\n{source}")
        }
    }
}

/// Rendering for a diagram embedded in a document, capped at [`EMBEDDED_MAX_WIDTH`].
pub fn render_diagram_embedded(source: &str) -> Option<String> {
    match render_diagram(source, Some(EMBEDDED_MAX_WIDTH)) {
        Ok(art) => art,
        Err(err) => {
            tracing::warn!(error = %err, "embedded diagram render failed");
            None
        }
    }
}
