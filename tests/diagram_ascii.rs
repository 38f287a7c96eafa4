// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seer-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fs;
use std::path::{Path, PathBuf};

use seer::format::mermaid::{parse_flow_graph, parse_sequence_diagram};
use seer::layout::flowchart::rank_nodes;
use seer::model::Viewport;
use seer::preview::{render_entry, PreviewOptions};
use seer::render::{render_diagram, render_diagram_source};

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join("diagrams")
}

fn strip_sgr(text: &str) -> String {
    let sgr = regex::Regex::new("\x1b\\[[0-9;]*m").expect("sgr pattern");
    sgr.replace_all(text, "").into_owned()
}

fn read_fixture(name: &str) -> String {
    let path = fixtures_dir().join(name);
    fs::read_to_string(&path).unwrap_or_else(|err| panic!("failed to read {path:?}: {err}"))
}

#[test]
fn request_response_sequence_parses_and_renders() {
    let source = read_fixture("request_response.mmd");
    let diagram = parse_sequence_diagram(&source);
    assert_eq!(diagram.participants(), ["Alice", "Bob"]);

    let [hello, hi] = diagram.messages() else {
        panic!("expected two messages, got {:?}", diagram.messages());
    };
    let column = |name: &str| diagram.participant_index(name).expect("participant");
    assert!(!hello.is_dashed());
    assert!(column(hello.from()) < column(hello.to()));
    assert!(hi.is_dashed());
    assert!(column(hi.from()) > column(hi.to()));

    let rendered = render_diagram_source(&source);
    let lines = rendered.lines().collect::<Vec<_>>();
    assert!(lines[0].contains("Alice") && lines[0].contains("Bob"), "{rendered}");
    let connectors = lines
        .iter()
        .filter(|line| line.contains('►') || line.contains('◄'))
        .collect::<Vec<_>>();
    assert_eq!(connectors.len(), 2, "{rendered}");
    assert_ne!(connectors[0], connectors[1]);
    assert!(connectors[0].contains("Hello") && connectors[0].ends_with('►'), "{rendered}");
    assert!(connectors[1].contains("Hi") && connectors[1].contains('╌'), "{rendered}");
}

#[test]
fn rank_skipping_edges_are_left_out_of_the_drawing() {
    let source = read_fixture("rank_skip.mmd");
    let graph = parse_flow_graph(&source);
    let order = graph.node_order().iter().map(|id| id.as_str()).collect::<Vec<_>>();
    assert_eq!(order, ["A", "B", "C"]);
    assert_eq!(graph.edges().len(), 3);
    assert_eq!(rank_nodes(&graph), [0, 1, 2]);

    let rendered = render_diagram(&source, None).expect("render").expect("content");
    assert_eq!(rendered.matches('▼').count(), 2, "{rendered}");
    assert!(!rendered.contains('┴'), "no branching connector expected:\n{rendered}");
    for label in ["│ A │", "│ B │", "│ C │"] {
        assert!(rendered.contains(label), "{label} missing:\n{rendered}");
    }
}

#[test]
fn diagram_files_preview_as_art() {
    let options = PreviewOptions::default();
    let path = fixtures_dir().join("rank_skip.mmd");
    let preview = render_entry(&path, Viewport::new(80, 24), &options).expect("preview");
    assert_eq!(preview, render_diagram_source(&read_fixture("rank_skip.mmd")));
}

#[test]
fn markdown_documents_embed_rendered_diagrams() {
    let options = PreviewOptions::default();
    let path = fixtures_dir().join("embedded.md");
    let styled = render_entry(&path, Viewport::new(80, 24), &options).expect("preview");
    let preview = strip_sgr(&styled);

    assert!(styled.contains("Release flow"), "heading is one styled run: {styled:?}");
    assert!(preview.contains("# Release flow"), "{preview}");
    assert!(preview.contains("┌───┴───┐"), "{preview}");
    assert!(!preview.contains("```"), "{preview}");
    assert!(!preview.contains("A-->B"), "{preview}");
    assert!(preview.contains("Done."), "{preview}");
}

#[test]
fn unrecognised_text_is_a_degenerate_diagram() {
    let source = "graph TD\n%% just a comment\n";
    assert_eq!(render_diagram(source, None).expect("render"), None);
    assert!(render_diagram_source(source).ends_with(source));
}
