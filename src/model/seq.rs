// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seer-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceMessage {
    from: String,
    to: String,
    label: String,
    dashed: bool,
}

impl SequenceMessage {
    pub fn new(
        from: impl Into<String>,
        to: impl Into<String>,
        label: impl Into<String>,
        dashed: bool,
    ) -> Self {
        Self { from: from.into(), to: to.into(), label: label.into(), dashed }
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_dashed(&self) -> bool {
        self.dashed
    }

    pub fn is_self_message(&self) -> bool {
        self.from == self.to
    }
}

/// Participants in first-seen order plus messages in source order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SequenceDiagram {
    participants: Vec<String>,
    aliases: BTreeMap<String, String>,
    messages: Vec<SequenceMessage>,
}

impl SequenceDiagram {
    pub fn participants(&self) -> &[String] {
        &self.participants
    }

    pub fn messages(&self) -> &[SequenceMessage] {
        &self.messages
    }

    pub fn participant_index(&self, name: &str) -> Option<usize> {
        self.participants.iter().position(|participant| participant == name)
    }

    /// Maps a source identifier to the name it was declared under (`participant A as Alice`).
    pub fn resolve<'a>(&'a self, name: &'a str) -> &'a str {
        self.aliases.get(name).map(String::as_str).unwrap_or(name)
    }

    pub fn declare_alias(&mut self, id: impl Into<String>, display: impl Into<String>) {
        let display = display.into();
        self.add_participant(&display);
        self.aliases.insert(id.into(), display);
    }

    pub fn add_participant(&mut self, name: &str) {
        if name.is_empty() || self.participant_index(name).is_some() {
            return;
        }
        self.participants.push(name.to_owned());
    }

    /// Appends `message` after resolving aliases and registering both endpoints.
    pub fn push_message(&mut self, message: SequenceMessage) {
        let from = self.resolve(&message.from).to_owned();
        let to = self.resolve(&message.to).to_owned();
        self.add_participant(&from);
        self.add_participant(&to);
        self.messages.push(SequenceMessage { from, to, ..message });
    }
}

#[cfg(test)]
mod tests {
    use super::{SequenceDiagram, SequenceMessage};

    #[test]
    fn aliases_resolve_to_display_names() {
        let mut diagram = SequenceDiagram::default();
        diagram.declare_alias("A", "Alice Smith");
        diagram.push_message(SequenceMessage::new("A", "Bob", "hi", false));

        assert_eq!(diagram.participants(), ["Alice Smith".to_owned(), "Bob".to_owned()]);
        assert_eq!(diagram.messages()[0].from(), "Alice Smith");
    }

    #[test]
    fn duplicate_participants_are_suppressed() {
        let mut diagram = SequenceDiagram::default();
        diagram.add_participant("Bob");
        diagram.push_message(SequenceMessage::new("Alice", "Bob", "", true));
        diagram.push_message(SequenceMessage::new("Bob", "Bob", "think", false));

        assert_eq!(diagram.participants(), ["Bob".to_owned(), "Alice".to_owned()]);
        assert!(diagram.messages()[1].is_self_message());
    }
}
