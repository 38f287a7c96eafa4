// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seer-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Text rendering for diagrams.
//!
//! Renderers draw laid-out diagrams onto a [`Canvas`] and emit it as plain Unicode text with
//! trailing blanks trimmed.

use std::fmt;

pub mod diagram;
pub mod flowchart;
pub mod sequence;
pub(crate) mod text;

pub use diagram::{
    render_diagram, render_diagram_embedded, render_diagram_source, DiagramRenderError,
    EMBEDDED_MAX_WIDTH, MAX_CANVAS_WIDTH, NO_DIAGRAM_CONTENT,
};
pub use flowchart::{render_flowchart, FlowchartRenderError};
pub use sequence::{render_sequence, SequenceRenderError};

pub const UNICODE_BOX_HORIZONTAL: char = '─';
pub const UNICODE_BOX_VERTICAL: char = '│';
pub const UNICODE_BOX_TOP_LEFT: char = '┌';
pub const UNICODE_BOX_TOP_RIGHT: char = '┐';
pub const UNICODE_BOX_BOTTOM_LEFT: char = '└';
pub const UNICODE_BOX_BOTTOM_RIGHT: char = '┘';
pub const UNICODE_BOX_TEE_RIGHT: char = '├';
pub const UNICODE_BOX_TEE_LEFT: char = '┤';
pub const UNICODE_BOX_TEE_DOWN: char = '┬';
pub const UNICODE_BOX_TEE_UP: char = '┴';
pub const UNICODE_BOX_CROSS: char = '┼';
pub const UNICODE_BOX_HALF_EAST: char = '╶';
pub const UNICODE_BOX_HALF_WEST: char = '╴';
pub const UNICODE_BOX_HALF_NORTH: char = '╵';
pub const UNICODE_BOX_HALF_SOUTH: char = '╷';

/// 4-bit connectivity mask (N=8, E=4, S=2, W=1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BoxEdges(u8);

impl BoxEdges {
    const WEST: Self = Self(1);
    const SOUTH: Self = Self(2);
    const EAST: Self = Self(4);
    const NORTH: Self = Self(8);

    const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

fn box_edges_from_char(ch: char) -> Option<BoxEdges> {
    let edges = match ch {
        UNICODE_BOX_VERTICAL => BoxEdges::NORTH.union(BoxEdges::SOUTH),
        UNICODE_BOX_HORIZONTAL => BoxEdges::EAST.union(BoxEdges::WEST),
        UNICODE_BOX_TOP_LEFT => BoxEdges::EAST.union(BoxEdges::SOUTH),
        UNICODE_BOX_TOP_RIGHT => BoxEdges::WEST.union(BoxEdges::SOUTH),
        UNICODE_BOX_BOTTOM_LEFT => BoxEdges::NORTH.union(BoxEdges::EAST),
        UNICODE_BOX_BOTTOM_RIGHT => BoxEdges::NORTH.union(BoxEdges::WEST),
        UNICODE_BOX_TEE_RIGHT => BoxEdges::NORTH.union(BoxEdges::EAST).union(BoxEdges::SOUTH),
        UNICODE_BOX_TEE_LEFT => BoxEdges::NORTH.union(BoxEdges::WEST).union(BoxEdges::SOUTH),
        UNICODE_BOX_TEE_DOWN => BoxEdges::EAST.union(BoxEdges::WEST).union(BoxEdges::SOUTH),
        UNICODE_BOX_TEE_UP => BoxEdges::NORTH.union(BoxEdges::EAST).union(BoxEdges::WEST),
        UNICODE_BOX_CROSS => BoxEdges(15),
        _ => return None,
    };
    Some(edges)
}

fn box_char_from_edges(edges: BoxEdges) -> Option<char> {
    let ch = match edges.0 {
        6 => UNICODE_BOX_TOP_LEFT,
        3 => UNICODE_BOX_TOP_RIGHT,
        12 => UNICODE_BOX_BOTTOM_LEFT,
        9 => UNICODE_BOX_BOTTOM_RIGHT,
        5 => UNICODE_BOX_HORIZONTAL,
        10 => UNICODE_BOX_VERTICAL,
        14 => UNICODE_BOX_TEE_RIGHT,
        11 => UNICODE_BOX_TEE_LEFT,
        7 => UNICODE_BOX_TEE_DOWN,
        13 => UNICODE_BOX_TEE_UP,
        15 => UNICODE_BOX_CROSS,
        4 => UNICODE_BOX_HALF_EAST,
        1 => UNICODE_BOX_HALF_WEST,
        8 => UNICODE_BOX_HALF_NORTH,
        2 => UNICODE_BOX_HALF_SOUTH,
        _ => return None,
    };
    Some(ch)
}

/// A fixed-size character grid.
///
/// Writes come in two flavours:
/// - [`Canvas::set`] / [`Canvas::put`] overwrite (last writer wins)
/// - [`Canvas::merge`] unions box-drawing connectivity with what is already there, so crossing
///   and branching connectors render as junctions (`┴`, `┼`, ...)
///
/// `put`, `merge`, and `write_str` clip silently at the grid edge; `set`/`get` are bounds-checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl Canvas {
    /// Creates a new canvas filled with spaces (`' '`).
    pub fn new(width: usize, height: usize) -> Result<Self, CanvasError> {
        Self::new_filled(width, height, ' ')
    }

    pub fn new_filled(width: usize, height: usize, fill: char) -> Result<Self, CanvasError> {
        let len = width
            .checked_mul(height)
            .ok_or(CanvasError::AreaOverflow { width, height })?;

        Ok(Self { width, height, cells: vec![fill; len] })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    pub fn get(&self, x: usize, y: usize) -> Result<char, CanvasError> {
        let idx = self.index_of(x, y)?;
        Ok(self.cells[idx])
    }

    pub fn set(&mut self, x: usize, y: usize, ch: char) -> Result<(), CanvasError> {
        let idx = self.index_of(x, y)?;
        self.cells[idx] = ch;
        Ok(())
    }

    /// Overwrites `(x, y)` if it is on the grid; returns whether anything was written.
    pub fn put(&mut self, x: usize, y: usize, ch: char) -> bool {
        match self.index_of(x, y) {
            Ok(idx) => {
                self.cells[idx] = ch;
                true
            }
            Err(_) => false,
        }
    }

    /// Writes a box-drawing glyph, joining it with an existing one.
    ///
    /// Blank cells take `ch` as is. When both the existing and the incoming glyph are
    /// box-drawing glyphs, their connectivity masks are combined. Anything else is overwritten.
    pub fn merge(&mut self, x: usize, y: usize, ch: char) -> bool {
        let Ok(idx) = self.index_of(x, y) else {
            return false;
        };

        let existing = self.cells[idx];
        let merged = match (box_edges_from_char(existing), box_edges_from_char(ch)) {
            _ if existing == ' ' => ch,
            (Some(old), Some(new)) => box_char_from_edges(old.union(new)).unwrap_or(ch),
            _ => ch,
        };
        self.cells[idx] = merged;
        true
    }

    /// Writes `text` left-to-right starting at `(x, y)`, clipping at the grid edge.
    pub fn write_str(&mut self, x: usize, y: usize, text: &str) {
        if y >= self.height {
            return;
        }
        for (offset, ch) in text.chars().enumerate() {
            if !self.put(x + offset, y, ch) {
                break;
            }
        }
    }

    /// Merges a horizontal run of `ch` over `x0..x1` (exclusive) at `y`.
    pub fn merge_hline(&mut self, x0: usize, x1: usize, y: usize, ch: char) {
        for x in x0..x1 {
            self.merge(x, y, ch);
        }
    }

    /// Draws a single-line box with raw writes, top-left corner at `(x, y)`.
    ///
    /// Parts outside the grid are clipped. Boxes narrower than 2 or shorter than 2 are skipped.
    pub fn draw_box(&mut self, x: usize, y: usize, width: usize, height: usize) {
        if width < 2 || height < 2 {
            return;
        }
        let right = x + width - 1;
        let bottom = y + height - 1;

        for col in (x + 1)..right {
            self.put(col, y, UNICODE_BOX_HORIZONTAL);
            self.put(col, bottom, UNICODE_BOX_HORIZONTAL);
        }
        for row in (y + 1)..bottom {
            self.put(x, row, UNICODE_BOX_VERTICAL);
            self.put(right, row, UNICODE_BOX_VERTICAL);
        }
        self.put(x, y, UNICODE_BOX_TOP_LEFT);
        self.put(right, y, UNICODE_BOX_TOP_RIGHT);
        self.put(x, bottom, UNICODE_BOX_BOTTOM_LEFT);
        self.put(right, bottom, UNICODE_BOX_BOTTOM_RIGHT);
    }

    /// One grid row as a string, without trimming.
    pub fn row(&self, y: usize) -> Option<String> {
        if y >= self.height {
            return None;
        }
        let start = y * self.width;
        Some(self.cells[start..start + self.width].iter().collect())
    }

    fn index_of(&self, x: usize, y: usize) -> Result<usize, CanvasError> {
        if !self.in_bounds(x, y) {
            return Err(CanvasError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }

        Ok((y * self.width) + x)
    }
}

impl fmt::Display for Canvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use std::fmt::Write as _;

        for (y, row) in self.cells.chunks(self.width.max(1)).enumerate() {
            if y > 0 {
                f.write_char('\n')?;
            }
            for ch in row {
                f.write_char(*ch)?;
            }
        }

        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanvasError {
    AreaOverflow { width: usize, height: usize },
    OutOfBounds { x: usize, y: usize, width: usize, height: usize },
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AreaOverflow { width, height } => {
                write!(f, "canvas area overflow: {width}*{height}")
            }
            Self::OutOfBounds { x, y, width, height } => {
                write!(f, "out of bounds: ({x},{y}) for {width}x{height} canvas")
            }
        }
    }
}

impl std::error::Error for CanvasError {}
