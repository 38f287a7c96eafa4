// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seer-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt::Write as _;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use seer::format::mermaid::{parse_flow_graph, parse_sequence_diagram};
use seer::layout::{layout_flowchart, layout_sequence};
use seer::render::{render_diagram, render_flowchart, render_sequence, EMBEDDED_MAX_WIDTH};

mod profiler;

/// `depth` levels, each node fanning out to `fan` children.
fn flow_tree(depth: usize, fan: usize) -> String {
    let mut source = String::from("graph TD\n");
    let mut level = vec![String::from("n0")];
    let mut next_id = 1;
    for _ in 0..depth {
        let mut next_level = Vec::new();
        for parent in &level {
            for _ in 0..fan {
                let child = format!("n{next_id}");
                next_id += 1;
                let _ = writeln!(source, "{parent}[Step {parent}] --> {child}[Step {child}]");
                next_level.push(child);
            }
        }
        level = next_level;
    }
    source
}

fn flow_chain(len: usize) -> String {
    let mut source = String::from("flowchart TD\n");
    for idx in 0..len {
        let _ = writeln!(source, "s{idx}[stage number {idx}] --> s{}", idx + 1);
    }
    source
}

fn sequence_chatter(participants: usize, messages: usize) -> String {
    let mut source = String::from("sequenceDiagram\n");
    for idx in 0..participants {
        let _ = writeln!(source, "participant P{idx} as Service {idx}");
    }
    for idx in 0..messages {
        let from = idx % participants;
        let to = (idx * 7 + 3) % participants;
        let arrow = if idx % 2 == 0 { "->>" } else { "-->>" };
        let _ = writeln!(source, "P{from}{arrow}P{to}: request {idx}");
    }
    source
}

// Group and case names stay stable so results remain comparable across refactors.
fn benches_diagram(c: &mut Criterion) {
    let mut group = c.benchmark_group("diagram.flow");
    for (id, source) in
        [("chain_40", flow_chain(40)), ("tree_3x3", flow_tree(3, 3)), ("tree_2x6", flow_tree(2, 6))]
    {
        let graph = parse_flow_graph(&source);
        group.bench_function(format!("parse/{id}"), |b| {
            b.iter(|| black_box(parse_flow_graph(black_box(&source))).edges().len())
        });
        group.bench_function(format!("layout_render/{id}"), |b| {
            b.iter(|| {
                let layout = layout_flowchart(black_box(&graph), None);
                let rendered =
                    render_flowchart(black_box(&graph), black_box(&layout)).expect("render");
                black_box(rendered.len())
            })
        });
    }
    group.finish();

    let mut group = c.benchmark_group("diagram.sequence");
    for (id, source) in
        [("small_4x20", sequence_chatter(4, 20)), ("wide_12x200", sequence_chatter(12, 200))]
    {
        let diagram = parse_sequence_diagram(&source);
        group.bench_function(format!("parse/{id}"), |b| {
            b.iter(|| black_box(parse_sequence_diagram(black_box(&source))).messages().len())
        });
        group.bench_function(format!("layout_render/{id}"), |b| {
            b.iter(|| {
                let layout = layout_sequence(black_box(&diagram), None);
                let rendered =
                    render_sequence(black_box(&diagram), black_box(&layout)).expect("render");
                black_box(rendered.len())
            })
        });
    }
    group.finish();

    let mut group = c.benchmark_group("diagram.embedded");
    let source = flow_tree(2, 6);
    group.bench_function("tree_2x6_capped", |b| {
        b.iter(|| {
            let art = render_diagram(black_box(&source), Some(EMBEDDED_MAX_WIDTH)).expect("render");
            black_box(art.map(|art| art.len()))
        })
    });
    group.finish();
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_diagram
}
criterion_main!(benches);
