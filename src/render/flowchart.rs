// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seer-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use crate::layout::flowchart::{FlowchartLayout, BOX_HEIGHT};
use crate::model::MermaidGraph;

use super::text::canvas_to_string_trimmed;
use super::{
    Canvas, CanvasError, UNICODE_BOX_BOTTOM_LEFT, UNICODE_BOX_BOTTOM_RIGHT,
    UNICODE_BOX_HORIZONTAL, UNICODE_BOX_TOP_LEFT, UNICODE_BOX_TOP_RIGHT, UNICODE_BOX_VERTICAL,
};

pub const ARROW_DOWN: char = '▼';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowchartRenderError {
    Canvas(CanvasError),
}

impl fmt::Display for FlowchartRenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Canvas(err) => write!(f, "canvas error: {err}"),
        }
    }
}

impl std::error::Error for FlowchartRenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Canvas(err) => Some(err),
        }
    }
}

impl From<CanvasError> for FlowchartRenderError {
    fn from(value: CanvasError) -> Self {
        Self::Canvas(value)
    }
}

/// Draws `graph` as boxes stacked by rank, with connectors between adjacent ranks.
pub fn render_flowchart(
    graph: &MermaidGraph,
    layout: &FlowchartLayout,
) -> Result<String, FlowchartRenderError> {
    let mut canvas = Canvas::new(layout.width(), layout.height())?;

    for (id, placement) in graph.node_order().iter().zip(layout.placements()) {
        let (x, y) = (placement.x(), placement.y());
        canvas.draw_box(x, y, placement.width(), BOX_HEIGHT);
        canvas.write_str(x + 2, y + 1, graph.label_of(id));
    }

    let placements = layout.placements();
    for connector in layout.connectors() {
        let from = placements[connector.from()];
        let to = placements[connector.to()];
        let (from_x, to_x) = (from.center_x(), to.center_x());
        let row = from.y() + BOX_HEIGHT;

        if from_x == to_x {
            canvas.merge(from_x, row, UNICODE_BOX_VERTICAL);
        } else if from_x < to_x {
            canvas.merge(from_x, row, UNICODE_BOX_BOTTOM_LEFT);
            canvas.merge_hline(from_x + 1, to_x, row, UNICODE_BOX_HORIZONTAL);
            canvas.merge(to_x, row, UNICODE_BOX_TOP_RIGHT);
        } else {
            canvas.merge(to_x, row, UNICODE_BOX_TOP_LEFT);
            canvas.merge_hline(to_x + 1, from_x, row, UNICODE_BOX_HORIZONTAL);
            canvas.merge(from_x, row, UNICODE_BOX_BOTTOM_RIGHT);
        }
        canvas.put(to_x, row + 1, ARROW_DOWN);
    }

    Ok(canvas_to_string_trimmed(&canvas))
}
