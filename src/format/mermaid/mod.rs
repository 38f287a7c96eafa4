// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seer-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Lenient Mermaid-ish parsing for flow graphs and sequence diagrams.
//!
//! Parsing never fails: unsupported lines are skipped and the caller decides what an empty
//! result means.

pub mod flowchart;
mod ident;
pub mod sequence;

pub use flowchart::parse_flow_graph;
pub use sequence::parse_sequence_diagram;

pub use crate::model::flow::DEFAULT_CHART_TYPE;
use crate::model::{MermaidGraph, SequenceDiagram};

pub const COMMENT_MARKER: &str = "%%";
pub const SEQUENCE_CHART_TYPE: &str = "sequenceDiagram";

/// Trimmed lines that are neither blank nor comments.
pub(crate) fn significant_lines(source: &str) -> impl Iterator<Item = &str> {
    source
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with(COMMENT_MARKER))
}

/// First token of the first significant line, or [`DEFAULT_CHART_TYPE`].
pub fn chart_type(source: &str) -> &str {
    significant_lines(source)
        .find_map(|line| line.split_whitespace().next())
        .unwrap_or(DEFAULT_CHART_TYPE)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedDiagram {
    Flow(MermaidGraph),
    Sequence(SequenceDiagram),
}

impl ParsedDiagram {
    /// Whether the parse produced anything worth laying out.
    ///
    /// A flow graph needs at least one node; a sequence diagram needs at least one message.
    pub fn has_content(&self) -> bool {
        match self {
            Self::Flow(graph) => !graph.is_empty(),
            Self::Sequence(diagram) => !diagram.messages().is_empty(),
        }
    }
}

/// Picks the sub-grammar from the chart type and parses `source` with it.
pub fn parse_diagram(source: &str) -> ParsedDiagram {
    if chart_type(source) == SEQUENCE_CHART_TYPE {
        ParsedDiagram::Sequence(parse_sequence_diagram(source))
    } else {
        ParsedDiagram::Flow(parse_flow_graph(source))
    }
}

#[cfg(test)]
mod tests {
    use super::{chart_type, parse_diagram, ParsedDiagram};

    #[test]
    fn chart_type_skips_blank_and_comment_lines() {
        assert_eq!(chart_type("\n  %% hi\n   flowchart TD\nA-->B"), "flowchart");
        assert_eq!(chart_type("%% nothing"), "diagram");
        assert_eq!(chart_type(""), "diagram");
    }

    #[test]
    fn parse_diagram_dispatches_on_chart_type() {
        assert!(matches!(parse_diagram("sequenceDiagram\nA->>B: x"), ParsedDiagram::Sequence(_)));
        assert!(matches!(parse_diagram("graph LR\nA-->B"), ParsedDiagram::Flow(_)));
        // Chart type matching is case-sensitive.
        assert!(matches!(parse_diagram("sequencediagram\nA->>B: x"), ParsedDiagram::Flow(_)));
    }

    #[test]
    fn has_content_requires_nodes_or_messages() {
        assert!(!parse_diagram("graph TD").has_content());
        assert!(!parse_diagram("sequenceDiagram\nparticipant A").has_content());
        assert!(parse_diagram("sequenceDiagram\nA->>A: think").has_content());
    }
}
