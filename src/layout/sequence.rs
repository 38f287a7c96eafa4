// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seer-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::SequenceDiagram;

pub const MIN_COLUMN_WIDTH: usize = 14;
/// Columns added around the longest participant name.
pub const COLUMN_MARGIN: usize = 4;

/// Column geometry for a sequence diagram.
///
/// Rows: 0 is the header, 1 the first lifeline row, then each message takes a message row
/// followed by a lifeline row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceLayout {
    column_width: usize,
    width: usize,
    participant_count: usize,
    messages: Vec<SequenceMessageLayout>,
}

impl SequenceLayout {
    pub fn column_width(&self) -> usize {
        self.column_width
    }

    /// Grid width after the optional clamp.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        2 + self.messages.len() * 2
    }

    pub fn participant_count(&self) -> usize {
        self.participant_count
    }

    pub fn center_of(&self, column: usize) -> usize {
        column * self.column_width + self.column_width / 2
    }

    pub fn messages(&self) -> &[SequenceMessageLayout] {
        &self.messages
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceMessageLayout {
    message: usize,
    from_col: usize,
    to_col: usize,
    row: usize,
}

impl SequenceMessageLayout {
    /// Index into [`SequenceDiagram::messages`].
    pub fn message(&self) -> usize {
        self.message
    }

    pub fn from_col(&self) -> usize {
        self.from_col
    }

    pub fn to_col(&self) -> usize {
        self.to_col
    }

    pub fn row(&self) -> usize {
        self.row
    }
}

/// Column width shared by every participant: longest name plus margin, at least
/// [`MIN_COLUMN_WIDTH`], rounded up to even.
pub fn column_width(diagram: &SequenceDiagram) -> usize {
    let widest = diagram
        .participants()
        .iter()
        .map(|name| name.chars().count() + COLUMN_MARGIN)
        .max()
        .unwrap_or(0);
    let width = widest.max(MIN_COLUMN_WIDTH);
    width + width % 2
}

pub fn layout_sequence(diagram: &SequenceDiagram, max_width: Option<usize>) -> SequenceLayout {
    let column_width = column_width(diagram);
    let participant_count = diagram.participants().len();

    let mut width = participant_count * column_width;
    if let Some(max_width) = max_width.filter(|max_width| *max_width > 0) {
        width = width.min(max_width);
    }

    let messages = diagram
        .messages()
        .iter()
        .enumerate()
        .filter_map(|(idx, msg)| {
            let from_col = diagram.participant_index(msg.from())?;
            let to_col = diagram.participant_index(msg.to())?;
            Some((idx, from_col, to_col))
        })
        .enumerate()
        .map(|(pos, (message, from_col, to_col))| SequenceMessageLayout {
            message,
            from_col,
            to_col,
            row: 2 + pos * 2,
        })
        .collect();

    SequenceLayout { column_width, width, participant_count, messages }
}

#[cfg(test)]
mod tests {
    use super::{column_width, layout_sequence};
    use crate::format::mermaid::parse_sequence_diagram;

    #[test]
    fn column_width_has_a_floor_and_is_even() {
        let short = parse_sequence_diagram("sequenceDiagram\nA->>B: x");
        assert_eq!(column_width(&short), 14);

        // 13 chars + 4 = 17, rounded up to 18.
        let long = parse_sequence_diagram("sequenceDiagram\nAuthenticator->>B: x");
        assert_eq!(column_width(&long), 18);
    }

    #[test]
    fn messages_get_alternating_rows() {
        let diagram =
            parse_sequence_diagram("sequenceDiagram\nAlice->>Bob: Hello\nBob-->>Alice: Hi\n");
        let layout = layout_sequence(&diagram, None);

        assert_eq!(layout.width(), 28);
        assert_eq!(layout.height(), 6);
        assert_eq!((layout.center_of(0), layout.center_of(1)), (7, 21));

        let rows = layout
            .messages()
            .iter()
            .map(|msg| (msg.from_col(), msg.to_col(), msg.row()))
            .collect::<Vec<_>>();
        assert_eq!(rows, vec![(0, 1, 2), (1, 0, 4)]);
    }

    #[test]
    fn max_width_clamps() {
        let diagram = parse_sequence_diagram("sequenceDiagram\nA->>B: x\nB->>C: y");
        assert_eq!(layout_sequence(&diagram, Some(30)).width(), 30);
        assert_eq!(layout_sequence(&diagram, Some(80)).width(), 42);
    }
}
