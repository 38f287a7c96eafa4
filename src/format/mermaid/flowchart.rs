// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seer-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{MermaidEdge, MermaidGraph};

use super::ident::parse_node_ref;
use super::{significant_lines, DEFAULT_CHART_TYPE};

const EDGE_OPERATORS: [&str; 3] = ["-->", "==>", "-.->"];

/// Parses a flow graph leniently.
///
/// Every significant line is scanned for an edge; lines without one (headers, `style`,
/// `classDef`, subgraph markers, ...) are skipped. Never fails.
pub fn parse_flow_graph(source: &str) -> MermaidGraph {
    let mut chart_type = None;
    let mut edges = Vec::new();

    for line in significant_lines(source) {
        if chart_type.is_none() {
            chart_type = line.split_whitespace().next();
        }
        if let Some(edge) = parse_edge_line(line) {
            edges.push(edge);
        }
    }

    let mut graph = MermaidGraph::new(chart_type.unwrap_or(DEFAULT_CHART_TYPE));
    for edge in edges {
        graph.push_edge(edge);
    }
    graph
}

/// Returns the leftmost edge operator in `line` with its byte offset.
fn find_edge_operator(line: &str) -> Option<(usize, &'static str)> {
    EDGE_OPERATORS
        .iter()
        .filter_map(|op| line.find(op).map(|idx| (idx, *op)))
        .min_by_key(|(idx, _)| *idx)
}

/// Parses `left OP [|label|] right` into an edge.
pub(crate) fn parse_edge_line(line: &str) -> Option<MermaidEdge> {
    let (idx, op) = find_edge_operator(line)?;
    let left = line[..idx].trim();
    let mut right = line[idx + op.len()..].trim();

    let mut label = None;
    if let Some(after_pipe) = right.strip_prefix('|') {
        if let Some(end) = after_pipe.find('|') {
            let text = after_pipe[..end].trim();
            if !text.is_empty() {
                label = Some(text.to_owned());
            }
            right = after_pipe[end + 1..].trim();
        }
    }

    let from = parse_node_ref(left)?;
    let to = parse_node_ref(right)?;
    Some(MermaidEdge::new(from, to, label))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{find_edge_operator, parse_edge_line, parse_flow_graph};

    #[rstest]
    #[case("A --> B", Some((2, "-->")))]
    #[case("A ==> B --> C", Some((2, "==>")))]
    #[case("A -.-> B --> C", Some((2, "-.->")))]
    #[case("A --- B", None)]
    fn leftmost_operator_wins(#[case] line: &str, #[case] expected: Option<(usize, &str)>) {
        assert_eq!(find_edge_operator(line), expected);
    }

    #[test]
    fn parses_edge_labels_and_node_labels() {
        let edge = parse_edge_line("A[Start] -->|yes| B(Done);").expect("edge");
        assert_eq!(edge.from().id(), "A");
        assert_eq!(edge.from().label(), "Start");
        assert_eq!(edge.to().id(), "B");
        assert_eq!(edge.to().label(), "Done");
        assert_eq!(edge.label(), Some("yes"));
    }

    #[test]
    fn edge_requires_both_endpoints() {
        assert!(parse_edge_line("--> B").is_none());
        assert!(parse_edge_line("A -->").is_none());
    }

    #[test]
    fn parse_flow_graph_collects_nodes_in_first_seen_order() {
        let graph = parse_flow_graph(
            "%% comment\n\ngraph TD\n  A[Alpha] --> B\n  B --> C\n  A --> C[Charlie]\n  C --> A\n",
        );

        assert_eq!(graph.chart_type(), "graph");
        let order = graph.node_order().iter().map(|id| id.as_str()).collect::<Vec<_>>();
        assert_eq!(order, vec!["A", "B", "C"]);
        assert_eq!(graph.edges().len(), 4);
        assert_eq!(graph.label_of("A"), "Alpha");
        // The first mention of `C` had no bracket label.
        assert_eq!(graph.label_of("C"), "C");
    }

    #[test]
    fn chained_edges_only_keep_the_first_hop() {
        let graph = parse_flow_graph("flowchart LR\nA --> B --> C\n");
        assert_eq!(graph.edges().len(), 1);
        assert_eq!(graph.edges()[0].to().id(), "B");
    }

    #[test]
    fn empty_source_defaults_chart_type() {
        let graph = parse_flow_graph("\n%% only a comment\n");
        assert_eq!(graph.chart_type(), "diagram");
        assert!(graph.is_empty());
    }
}
