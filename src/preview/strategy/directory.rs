// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seer-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fs;
use std::path::Path;

use crate::model::entry::display_name;
use crate::preview::PreviewError;

use super::paint;

/// Children listed before the `+N more` marker.
pub const MAX_DIRECTORY_ENTRIES: usize = 40;
const DIVIDER_WIDTH: usize = 30;

const DIR_STYLE: &str = "1;34";
const MUTED_STYLE: &str = "90";

#[derive(Debug, Clone, PartialEq, Eq)]
struct Child {
    name: String,
    is_dir: bool,
}

fn list_children(path: &Path) -> Result<Vec<Child>, PreviewError> {
    let list_err = |source| PreviewError::ListDir { path: path.to_path_buf(), source };

    let mut children = Vec::new();
    for item in fs::read_dir(path).map_err(list_err)? {
        let item = item.map_err(list_err)?;
        let is_dir = match item.file_type() {
            Ok(kind) if kind.is_symlink() => item.path().is_dir(),
            Ok(kind) => kind.is_dir(),
            Err(_) => false,
        };
        children.push(Child { name: item.file_name().to_string_lossy().into_owned(), is_dir });
    }
    children.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(children)
}

/// Header, item count, divider, then up to [`MAX_DIRECTORY_ENTRIES`] children sorted by name.
pub fn render_directory(path: &Path) -> Result<String, PreviewError> {
    let children = list_children(path)?;

    let mut lines = Vec::with_capacity(children.len().min(MAX_DIRECTORY_ENTRIES) + 6);
    lines.push(paint(&format!("{}/", display_name(path)), DIR_STYLE));
    lines.push(paint(&format!("  {} items", children.len()), MUTED_STYLE));
    lines.push(paint(&format!("  {}", "─".repeat(DIVIDER_WIDTH)), MUTED_STYLE));
    lines.push(String::new());

    for child in children.iter().take(MAX_DIRECTORY_ENTRIES) {
        if child.is_dir {
            lines.push(paint(&format!("  {}/", child.name), DIR_STYLE));
        } else {
            lines.push(format!("  {}", child.name));
        }
    }

    let hidden = children.len().saturating_sub(MAX_DIRECTORY_ENTRIES);
    if hidden > 0 {
        lines.push(String::new());
        lines.push(paint(&format!("  +{hidden} more"), MUTED_STYLE));
    }

    Ok(lines.join("\n"))
}
