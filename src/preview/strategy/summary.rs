// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seer-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::SelectedEntry;

use super::{format_modified, human_size};

fn describe(kind: &str, entry: &SelectedEntry) -> String {
    format!(
        "{kind}: {}\nsize: {}\nmodified: {}",
        entry.file_name(),
        human_size(entry.size()),
        format_modified(entry.modified())
    )
}

/// Name, size and modification time; never the raw bytes.
pub fn render_binary_summary(entry: &SelectedEntry) -> String {
    describe("binary file", entry)
}

pub fn render_non_utf8_summary(entry: &SelectedEntry) -> String {
    describe("non-utf8 text file", entry)
}

#[cfg(test)]
mod tests {
    use super::{render_binary_summary, render_non_utf8_summary};
    use crate::model::SelectedEntry;

    #[test]
    fn binary_summary_lines() {
        let entry = SelectedEntry::new("/data/blob.bin", false, 2048, None);
        assert_eq!(
            render_binary_summary(&entry),
            "binary file: blob.bin\nsize: 2.0 KB\nmodified: unknown"
        );
    }

    #[test]
    fn non_utf8_summary_lines() {
        let entry = SelectedEntry::new("latin1.txt", false, 10, None);
        let text = render_non_utf8_summary(&entry);
        assert!(text.starts_with("non-utf8 text file: latin1.txt\nsize: 10 B\n"), "{text}");
    }
}
