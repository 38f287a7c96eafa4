// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seer-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use smol_str::SmolStr;

pub const DEFAULT_CHART_TYPE: &str = "diagram";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MermaidNode {
    id: SmolStr,
    label: String,
}

impl MermaidNode {
    pub fn new(id: impl Into<SmolStr>, label: impl Into<String>) -> Self {
        Self { id: id.into(), label: label.into() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MermaidEdge {
    from: MermaidNode,
    to: MermaidNode,
    label: Option<String>,
}

impl MermaidEdge {
    pub fn new(from: MermaidNode, to: MermaidNode, label: Option<String>) -> Self {
        Self { from, to, label }
    }

    pub fn from(&self) -> &MermaidNode {
        &self.from
    }

    pub fn to(&self) -> &MermaidNode {
        &self.to
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn is_self_loop(&self) -> bool {
        self.from.id == self.to.id
    }
}

/// A parsed flow graph.
///
/// `nodes` is keyed by id for lookup; `node_order` keeps first-appearance order so nothing
/// downstream depends on map iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MermaidGraph {
    chart_type: SmolStr,
    node_order: Vec<SmolStr>,
    nodes: BTreeMap<SmolStr, String>,
    edges: Vec<MermaidEdge>,
}

impl Default for MermaidGraph {
    fn default() -> Self {
        Self::new(DEFAULT_CHART_TYPE)
    }
}

impl MermaidGraph {
    pub fn new(chart_type: impl Into<SmolStr>) -> Self {
        Self {
            chart_type: chart_type.into(),
            node_order: Vec::new(),
            nodes: BTreeMap::new(),
            edges: Vec::new(),
        }
    }

    pub fn chart_type(&self) -> &str {
        &self.chart_type
    }

    pub fn node_order(&self) -> &[SmolStr] {
        &self.node_order
    }

    pub fn nodes(&self) -> &BTreeMap<SmolStr, String> {
        &self.nodes
    }

    pub fn edges(&self) -> &[MermaidEdge] {
        &self.edges
    }

    pub fn is_empty(&self) -> bool {
        self.node_order.is_empty()
    }

    /// Registers `node` unless its id is already known; the first label seen wins.
    pub fn register_node(&mut self, node: &MermaidNode) {
        if node.id.is_empty() || self.nodes.contains_key(&node.id) {
            return;
        }
        self.nodes.insert(node.id.clone(), node.label.clone());
        self.node_order.push(node.id.clone());
    }

    /// Appends `edge` and registers both endpoints, `from` first.
    pub fn push_edge(&mut self, edge: MermaidEdge) {
        self.register_node(&edge.from);
        self.register_node(&edge.to);
        self.edges.push(edge);
    }

    /// Display text for `id`: its label, or the id itself when the label is empty.
    pub fn label_of<'a>(&'a self, id: &'a str) -> &'a str {
        match self.nodes.get(id) {
            Some(label) if !label.is_empty() => label,
            _ => id,
        }
    }
}
