// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seer-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{SequenceDiagram, SequenceMessage};

use super::significant_lines;

/// Arrow forms in matching order. The first form found anywhere in the line wins, so longer forms
/// sharing a prefix with shorter ones come first.
const ARROWS: [(&str, bool); 8] = [
    ("-->>", true),
    ("-->", true),
    ("->>", false),
    ("->", false),
    ("--x", true),
    ("-x", false),
    ("--)", true),
    ("-)", false),
];

/// Block and annotation keywords that carry no message; their lines are skipped.
const IGNORED_KEYWORDS: [&str; 16] = [
    "note",
    "loop",
    "alt",
    "else",
    "opt",
    "par",
    "and",
    "end",
    "rect",
    "critical",
    "break",
    "activate",
    "deactivate",
    "autonumber",
    "title",
    "box",
];

/// Parses a sequence diagram leniently. Unrecognized lines are skipped; never fails.
pub fn parse_sequence_diagram(source: &str) -> SequenceDiagram {
    let mut diagram = SequenceDiagram::default();

    for line in significant_lines(source) {
        let mut fields = line.split_whitespace();
        let Some(keyword) = fields.next() else {
            continue;
        };

        if keyword.eq_ignore_ascii_case("participant") || keyword.eq_ignore_ascii_case("actor") {
            declare_participant(&mut diagram, line);
            continue;
        }
        if keyword.eq_ignore_ascii_case("sequencediagram") {
            continue;
        }
        if IGNORED_KEYWORDS.iter().any(|ignored| keyword_matches(keyword, ignored)) {
            continue;
        }

        if let Some(message) = parse_message_line(line) {
            diagram.push_message(message);
        }
    }

    diagram
}

/// `keyword` may carry trailing punctuation (`else:`, `and,`).
fn keyword_matches(keyword: &str, ignored: &str) -> bool {
    keyword.trim_end_matches([':', ',']).eq_ignore_ascii_case(ignored)
}

fn declare_participant(diagram: &mut SequenceDiagram, line: &str) {
    let fields = line.split_whitespace().collect::<Vec<_>>();
    let Some(id) = fields.get(1).copied() else {
        return;
    };

    let alias_at = fields.iter().position(|field| field.eq_ignore_ascii_case("as"));
    match alias_at {
        Some(idx) if idx + 1 < fields.len() => {
            let display = fields[idx + 1..].join(" ");
            diagram.declare_alias(id, display);
        }
        _ => diagram.add_participant(id),
    }
}

pub(crate) fn parse_message_line(line: &str) -> Option<SequenceMessage> {
    let (idx, arrow, dashed) = ARROWS
        .iter()
        .find_map(|(arrow, dashed)| line.find(arrow).map(|idx| (idx, *arrow, *dashed)))?;

    let from = line[..idx].trim();
    let rest = line[idx + arrow.len()..].trim();
    let (to, label) = match rest.split_once(':') {
        Some((to, label)) => (to.trim(), label.trim()),
        None => (rest, ""),
    };
    let to = to.trim_start_matches(['+', '-']).trim();

    if from.is_empty() || to.is_empty() {
        return None;
    }
    Some(SequenceMessage::new(from, to, label, dashed))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{parse_message_line, parse_sequence_diagram};

    #[test]
    fn parses_the_basic_request_response() {
        let diagram =
            parse_sequence_diagram("sequenceDiagram\nAlice->>Bob: Hello\nBob-->>Alice: Hi\n");

        assert_eq!(diagram.participants(), ["Alice".to_owned(), "Bob".to_owned()]);
        let messages = diagram.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!((messages[0].from(), messages[0].to()), ("Alice", "Bob"));
        assert!(!messages[0].is_dashed());
        assert_eq!(messages[0].label(), "Hello");
        assert_eq!((messages[1].from(), messages[1].to()), ("Bob", "Alice"));
        assert!(messages[1].is_dashed());
    }

    #[rstest]
    #[case("A-->>B: x", "A", "B", true)]
    #[case("A-->B: x", "A", "B", true)]
    #[case("A->>B: x", "A", "B", false)]
    #[case("A->B: x", "A", "B", false)]
    #[case("A--xB: x", "A", "B", true)]
    #[case("A-xB: x", "A", "B", false)]
    #[case("A--)B: x", "A", "B", true)]
    #[case("A-)B: x", "A", "B", false)]
    #[case("A->>+B: x", "A", "B", false)]
    fn recognizes_every_arrow_form(
        #[case] line: &str,
        #[case] from: &str,
        #[case] to: &str,
        #[case] dashed: bool,
    ) {
        let message = parse_message_line(line).expect("message");
        assert_eq!(message.from(), from);
        assert_eq!(message.to(), to);
        assert_eq!(message.label(), "x");
        assert_eq!(message.is_dashed(), dashed);
    }

    #[test]
    fn message_without_label_or_endpoint() {
        let message = parse_message_line("A->>B").expect("message");
        assert_eq!(message.label(), "");
        assert!(parse_message_line("->>B: hi").is_none());
        assert!(parse_message_line("A->>: hi").is_none());
    }

    #[test]
    fn participant_declarations_fix_column_order_and_aliases() {
        let diagram = parse_sequence_diagram(
            "sequenceDiagram\n  participant B as Bob the Builder\n  actor A\n  A->>B: build\n  B-->>A: done\n",
        );

        assert_eq!(diagram.participants(), ["Bob the Builder".to_owned(), "A".to_owned()]);
        assert_eq!(diagram.messages()[0].to(), "Bob the Builder");
    }

    #[test]
    fn block_keywords_are_ignored() {
        let diagram = parse_sequence_diagram(
            "sequenceDiagram\nautonumber\nloop Every minute\nA->>B: ping\nend\nNote over A,B: hi\nactivate B\n",
        );
        assert_eq!(diagram.participants(), ["A".to_owned(), "B".to_owned()]);
        assert_eq!(diagram.messages().len(), 1);
    }
}
