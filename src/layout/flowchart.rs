// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seer-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::{HashMap, VecDeque};

use smallvec::SmallVec;

use crate::model::MermaidGraph;

/// Rows occupied by a node box (top border, label, bottom border).
pub const BOX_HEIGHT: usize = 3;
/// Connector rows between two consecutive levels.
pub const LEVEL_GAP: usize = 2;
/// Columns between two boxes on the same level.
pub const H_GAP: usize = 3;
/// Columns added around a label: two borders plus one space of padding on each side.
pub const BOX_MARGIN: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowchartLayout {
    ranks: Vec<usize>,
    levels: Vec<Vec<usize>>,
    placements: Vec<FlowNodePlacement>,
    connectors: Vec<FlowConnector>,
    width: usize,
    height: usize,
}

impl FlowchartLayout {
    /// Rank per node, indexed like [`MermaidGraph::node_order`].
    pub fn ranks(&self) -> &[usize] {
        &self.ranks
    }

    /// Node indices per level, in first-appearance order.
    pub fn levels(&self) -> &[Vec<usize>] {
        &self.levels
    }

    pub fn placements(&self) -> &[FlowNodePlacement] {
        &self.placements
    }

    /// Edges that are drawn: source and target on adjacent ranks, in edge order.
    pub fn connectors(&self) -> &[FlowConnector] {
        &self.connectors
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowNodePlacement {
    x: usize,
    y: usize,
    width: usize,
}

impl FlowNodePlacement {
    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Column of the box's horizontal midpoint; connectors attach here.
    pub fn center_x(&self) -> usize {
        self.x + self.width / 2
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlowConnector {
    from: usize,
    to: usize,
}

impl FlowConnector {
    pub fn from(&self) -> usize {
        self.from
    }

    pub fn to(&self) -> usize {
        self.to
    }
}

pub fn node_box_width(label: &str) -> usize {
    label.chars().count() + BOX_MARGIN
}

/// Longest-path ranking over non-self edges (Kahn relaxation).
///
/// Nodes on a cycle never reach in-degree zero; they keep whatever rank relaxation from
/// already-processed predecessors produced, or 0.
pub fn rank_nodes(graph: &MermaidGraph) -> Vec<usize> {
    let order = graph.node_order();
    let index_of = order
        .iter()
        .enumerate()
        .map(|(idx, id)| (id.as_str(), idx))
        .collect::<HashMap<_, _>>();

    let mut successors = vec![SmallVec::<[usize; 4]>::new(); order.len()];
    let mut in_degree = vec![0usize; order.len()];
    for edge in graph.edges() {
        if edge.is_self_loop() {
            continue;
        }
        let (Some(&from), Some(&to)) = (index_of.get(edge.from().id()), index_of.get(edge.to().id()))
        else {
            continue;
        };
        successors[from].push(to);
        in_degree[to] += 1;
    }

    let mut ranks = vec![0usize; order.len()];
    let mut queue =
        (0..order.len()).filter(|&idx| in_degree[idx] == 0).collect::<VecDeque<usize>>();
    while let Some(current) = queue.pop_front() {
        for &next in &successors[current] {
            ranks[next] = ranks[next].max(ranks[current] + 1);
            in_degree[next] -= 1;
            if in_degree[next] == 0 {
                queue.push_back(next);
            }
        }
    }

    ranks
}

/// Places every node of `graph` on a character grid.
///
/// Levels are stacked top to bottom by rank and each level is centered within the widest one.
/// With `max_width`, the grid width is clamped; boxes past the edge are clipped at render time.
pub fn layout_flowchart(graph: &MermaidGraph, max_width: Option<usize>) -> FlowchartLayout {
    let order = graph.node_order();
    let ranks = rank_nodes(graph);
    let level_count = ranks.iter().copied().max().map_or(0, |max_rank| max_rank + 1);

    let mut levels = vec![Vec::<usize>::new(); level_count];
    for (idx, rank) in ranks.iter().enumerate() {
        levels[*rank].push(idx);
    }

    let widths = order.iter().map(|id| node_box_width(graph.label_of(id))).collect::<Vec<_>>();
    let mut placements = vec![FlowNodePlacement { x: 0, y: 0, width: 0 }; order.len()];
    let mut level_widths = Vec::with_capacity(level_count);
    for (level_idx, level) in levels.iter().enumerate() {
        let y = level_idx * (BOX_HEIGHT + LEVEL_GAP);
        let mut x = 0;
        for (pos, &node) in level.iter().enumerate() {
            if pos > 0 {
                x += H_GAP;
            }
            placements[node] = FlowNodePlacement { x, y, width: widths[node] };
            x += widths[node];
        }
        level_widths.push(x);
    }

    let mut width = level_widths.iter().copied().max().unwrap_or(0).max(1);
    if let Some(max_width) = max_width.filter(|max_width| *max_width > 0) {
        width = width.min(max_width);
    }

    for (level, level_width) in levels.iter().zip(&level_widths) {
        let offset = width.saturating_sub(*level_width) / 2;
        for &node in level {
            placements[node].x += offset;
        }
    }

    let height = match level_count {
        0 => 0,
        n => n * BOX_HEIGHT + (n - 1) * LEVEL_GAP,
    };

    let index_of = order
        .iter()
        .enumerate()
        .map(|(idx, id)| (id.as_str(), idx))
        .collect::<HashMap<_, _>>();
    let connectors = graph
        .edges()
        .iter()
        .filter_map(|edge| {
            let from = *index_of.get(edge.from().id())?;
            let to = *index_of.get(edge.to().id())?;
            (from != to && ranks[to] == ranks[from] + 1).then_some(FlowConnector { from, to })
        })
        .collect();

    FlowchartLayout { ranks, levels, placements, connectors, width, height }
}
