// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seer-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fs::Metadata;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// The file system entry the preview pane is asked to show.
///
/// Identity for caching is `(path, modified, size)`; the preview pipeline never re-stats the
/// entry before deciding whether a cached rendering still applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedEntry {
    path: PathBuf,
    is_dir: bool,
    size: u64,
    modified: Option<SystemTime>,
}

impl SelectedEntry {
    pub fn new(
        path: impl Into<PathBuf>,
        is_dir: bool,
        size: u64,
        modified: Option<SystemTime>,
    ) -> Self {
        Self { path: path.into(), is_dir, size, modified }
    }

    pub fn from_metadata(path: impl Into<PathBuf>, metadata: &Metadata) -> Self {
        Self::new(path, metadata.is_dir(), metadata.len(), metadata.modified().ok())
    }

    /// Stats `path`, following symlinks.
    pub fn stat(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        let metadata = std::fs::metadata(&path)?;
        Ok(Self::from_metadata(path, &metadata))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_dir(&self) -> bool {
        self.is_dir
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn modified(&self) -> Option<SystemTime> {
        self.modified
    }

    /// Modification time as nanoseconds since the Unix epoch; `0` when unknown or pre-epoch.
    pub fn modified_nanos(&self) -> u128 {
        self.modified
            .and_then(|time| time.duration_since(UNIX_EPOCH).ok())
            .map(|elapsed| elapsed.as_nanos())
            .unwrap_or(0)
    }

    /// The last path component, or the whole path when there is none (e.g. `/`).
    pub fn file_name(&self) -> String {
        display_name(&self.path)
    }
}

pub(crate) fn display_name(path: &Path) -> String {
    match path.file_name() {
        Some(name) => name.to_string_lossy().into_owned(),
        None => path.to_string_lossy().into_owned(),
    }
}

/// Character-cell dimensions available to the preview pane.
///
/// Both dimensions are clamped to at least 1 so downstream layout math never divides by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Viewport {
    width: u16,
    height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width: width.max(1), height: height.max(1) }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, UNIX_EPOCH};

    use super::{SelectedEntry, Viewport};

    #[test]
    fn viewport_clamps_zero_dimensions() {
        let viewport = Viewport::new(0, 0);
        assert_eq!((viewport.width(), viewport.height()), (1, 1));

        let viewport = Viewport::new(80, 24);
        assert_eq!((viewport.width(), viewport.height()), (80, 24));
    }

    #[test]
    fn modified_nanos_defaults_to_zero_when_unknown() {
        let entry = SelectedEntry::new("a.txt", false, 3, None);
        assert_eq!(entry.modified_nanos(), 0);

        let entry =
            SelectedEntry::new("a.txt", false, 3, Some(UNIX_EPOCH + Duration::from_nanos(42)));
        assert_eq!(entry.modified_nanos(), 42);
    }

    #[test]
    fn file_name_falls_back_to_whole_path() {
        assert_eq!(SelectedEntry::new("/tmp/notes.md", false, 0, None).file_name(), "notes.md");
        assert_eq!(SelectedEntry::new("/", true, 0, None).file_name(), "/");
    }
}
