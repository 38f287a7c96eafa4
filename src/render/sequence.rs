// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seer-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use crate::layout::sequence::SequenceLayout;
use crate::model::SequenceDiagram;

use super::text::{canvas_to_string_trimmed, take_chars, text_len};
use super::{Canvas, CanvasError, UNICODE_BOX_HORIZONTAL, UNICODE_BOX_VERTICAL};

pub const DASHED_HORIZONTAL: char = '╌';
pub const ARROW_RIGHT: char = '►';
pub const ARROW_LEFT: char = '◄';
pub const SELF_MESSAGE: char = '↩';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceRenderError {
    Canvas(CanvasError),
}

impl fmt::Display for SequenceRenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Canvas(err) => write!(f, "canvas error: {err}"),
        }
    }
}

impl std::error::Error for SequenceRenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Canvas(err) => Some(err),
        }
    }
}

impl From<CanvasError> for SequenceRenderError {
    fn from(value: CanvasError) -> Self {
        Self::Canvas(value)
    }
}

pub fn render_sequence(
    diagram: &SequenceDiagram,
    layout: &SequenceLayout,
) -> Result<String, SequenceRenderError> {
    let mut canvas = Canvas::new(layout.width(), layout.height())?;
    let column_width = layout.column_width();

    for (col, name) in diagram.participants().iter().enumerate() {
        let name = take_chars(name, column_width.saturating_sub(2));
        let pad = (column_width - text_len(name)) / 2;
        canvas.write_str(col * column_width + pad, 0, name);
    }
    draw_lifelines(&mut canvas, layout, 1);

    let messages = diagram.messages();
    for placed in layout.messages() {
        let message = &messages[placed.message()];
        let row = placed.row();
        draw_lifelines(&mut canvas, layout, row);
        draw_lifelines(&mut canvas, layout, row + 1);

        let from_x = layout.center_of(placed.from_col());
        let to_x = layout.center_of(placed.to_col());

        if from_x == to_x {
            let mut text = SELF_MESSAGE.to_string();
            if !message.label().is_empty() {
                text.push(' ');
                text.push_str(message.label());
            }
            canvas.write_str(from_x + 1, row, &text);
            continue;
        }

        let (left, right) = (from_x.min(to_x), from_x.max(to_x));
        let run = if message.is_dashed() { DASHED_HORIZONTAL } else { UNICODE_BOX_HORIZONTAL };
        for x in (left + 1)..right {
            canvas.put(x, row, run);
        }
        if from_x < to_x {
            canvas.put(right, row, ARROW_RIGHT);
        } else {
            canvas.put(left, row, ARROW_LEFT);
        }

        if !message.label().is_empty() {
            draw_label(&mut canvas, left, right, row, message.label());
        }
    }

    Ok(canvas_to_string_trimmed(&canvas))
}

fn draw_lifelines(canvas: &mut Canvas, layout: &SequenceLayout, row: usize) {
    for col in 0..layout.participant_count() {
        canvas.put(layout.center_of(col), row, UNICODE_BOX_VERTICAL);
    }
}

/// Centers ` label ` on the run strictly between `left` and `right`; chars that would land on
/// an endpoint or beyond are dropped.
fn draw_label(canvas: &mut Canvas, left: usize, right: usize, row: usize, label: &str) {
    let padded = format!(" {label} ");
    let label_len = text_len(&padded) as isize;
    let span = right as isize - left as isize - label_len;
    let start = (left as isize + span / 2 + 1).max(left as isize + 1);

    for (offset, ch) in padded.chars().enumerate() {
        let x = start + offset as isize;
        if x > left as isize && x < right as isize {
            canvas.put(x as usize, row, ch);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::render_sequence;
    use crate::format::mermaid::parse_sequence_diagram;
    use crate::layout::layout_sequence;

    fn render(source: &str, max_width: Option<usize>) -> String {
        let diagram = parse_sequence_diagram(source);
        let layout = layout_sequence(&diagram, max_width);
        render_sequence(&diagram, &layout).expect("render")
    }

    #[test]
    fn snapshot_request_response() {
        let rendered =
            render("sequenceDiagram\nAlice->>Bob: Hello\nBob-->>Alice: Hi\n", None);
        assert_eq!(
            rendered,
            [
                "    Alice          Bob",
                "       │             │",
                "       │─── Hello ───►",
                "       │             │",
                "       ◄╌╌╌╌╌ Hi ╌╌╌╌│",
                "       │             │",
            ]
            .join("\n")
        );
    }

    #[test]
    fn self_message_prints_loop_glyph_and_label() {
        let rendered = render("sequenceDiagram\nA->>A: hm\nA->>A: thinking hard\n", None);
        let lines = rendered.lines().collect::<Vec<_>>();
        assert_eq!(lines[0], "      A");
        assert_eq!(lines[2], "       │↩ hm");
        // Clipped at the single column's width.
        assert_eq!(lines[4], "       │↩ thin");
    }

    #[test]
    fn long_labels_never_overwrite_endpoints() {
        let rendered =
            render("sequenceDiagram\nA->>B: a label that is far too long to fit\n", None);
        let arrow_row = rendered.lines().nth(2).expect("arrow row");
        assert!(arrow_row.starts_with("       │ a label"), "{arrow_row}");
        assert!(arrow_row.ends_with('►'), "{arrow_row}");
        assert_eq!(arrow_row.chars().count(), 22);
    }

    #[test]
    fn crossing_messages_overwrite_middle_lifelines() {
        let rendered = render("sequenceDiagram\nA->>B: x\nB->>C: y\nA->>C\n", None);
        let last_arrow = rendered.lines().nth(6).expect("arrow row");
        assert_eq!(last_arrow.chars().nth(21), Some('─'), "{last_arrow}");
        assert!(last_arrow.ends_with('►'));
    }

    #[test]
    fn max_width_clips_everything() {
        let rendered = render("sequenceDiagram\nA->>B: x\nB->>C: y\n", Some(30));
        assert!(rendered.lines().all(|line| line.chars().count() <= 30), "{rendered}");
    }
}
