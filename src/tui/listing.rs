// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seer-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::cmp::Ordering;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::model::SelectedEntry;

/// One row of the file list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    name: String,
    entry: SelectedEntry,
}

impl ListEntry {
    pub fn new(name: impl Into<String>, entry: SelectedEntry) -> Self {
        Self { name: name.into(), entry }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entry(&self) -> &SelectedEntry {
        &self.entry
    }

    pub fn is_dir(&self) -> bool {
        self.entry.is_dir()
    }

    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }
}

/// Directories first, then case-insensitive name order.
fn listing_order(a: &ListEntry, b: &ListEntry) -> Ordering {
    b.is_dir()
        .cmp(&a.is_dir())
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        .then_with(|| a.name.cmp(&b.name))
}

/// Immediate children of a directory, sorted for display.
#[derive(Debug, Clone, Default)]
pub struct Listing {
    dir: PathBuf,
    entries: Vec<ListEntry>,
}

impl Listing {
    /// Reads `dir`. Children that vanish or cannot be stat'ed mid-read are skipped.
    pub fn read(dir: &Path) -> io::Result<Self> {
        let mut entries = Vec::new();
        for item in fs::read_dir(dir)? {
            let item = item?;
            let path = item.path();
            let metadata = match fs::metadata(&path).or_else(|_| fs::symlink_metadata(&path)) {
                Ok(metadata) => metadata,
                Err(err) => {
                    tracing::debug!(path = %path.display(), error = %err, "skipping entry");
                    continue;
                }
            };
            let name = item.file_name().to_string_lossy().into_owned();
            entries.push(ListEntry::new(name, SelectedEntry::from_metadata(path, &metadata)));
        }
        entries.sort_by(listing_order);
        Ok(Self { dir: dir.to_path_buf(), entries })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn entries(&self) -> &[ListEntry] {
        &self.entries
    }

    /// Indices of entries shown for the hidden-file setting and a case-insensitive filter.
    pub fn visible(&self, show_hidden: bool, filter: &str) -> Vec<usize> {
        let needle = filter.to_lowercase();
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| show_hidden || !entry.is_hidden())
            .filter(|(_, entry)| needle.is_empty() || entry.name.to_lowercase().contains(&needle))
            .map(|(idx, _)| idx)
            .collect()
    }
}
