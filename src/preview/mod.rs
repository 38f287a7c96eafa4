// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seer-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The preview subsystem.
//!
//! A selected entry flows through [`PreviewPipeline::request`], which either answers from the
//! bounded cache or hands back a [`PreviewJob`]. Jobs classify and render the entry off the
//! control loop (see [`PreviewWorker`]); their results come back through
//! [`PreviewPipeline::deliver`], which drops anything superseded in the meantime.

use std::io;
use std::path::PathBuf;

pub mod cache;
pub mod classify;
pub mod pipeline;
mod render;
pub mod strategy;
pub mod worker;

pub use cache::{BoundedCache, Fingerprint, DEFAULT_CACHE_CAPACITY};
pub use classify::{classify, ByteSample, ContentKind};
pub use pipeline::{
    Delivery, PreviewJob, PreviewPipeline, PreviewResult, PreviewState, RequestId,
};
pub use render::render_entry;
pub use strategy::image::ColorSupport;
pub use worker::PreviewWorker;

/// Maximum number of bytes read from a file for previewing.
pub const PREVIEW_CAP: usize = 256 * 1024;
/// Leading bytes scanned for a NUL when sniffing binary content.
pub const BINARY_SNIFF_LEN: usize = 8 * 1024;
pub const TRUNCATION_NOTICE: &str = "... preview truncated ...";
/// Prefix of the text published in place of a failed preview.
pub const ERROR_PREFIX: &str = "preview error: ";

/// I/O failure while previewing a single entry.
///
/// Decode problems (images, JSON) never surface here; those render fallback text instead.
#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    #[error("cannot stat {}: {source}", path.display())]
    Stat { path: PathBuf, source: io::Error },
    #[error("cannot open {}: {source}", path.display())]
    Open { path: PathBuf, source: io::Error },
    #[error("cannot read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("cannot list {}: {source}", path.display())]
    ListDir { path: PathBuf, source: io::Error },
}

/// Rendering knobs that are not part of the entry itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewOptions {
    syntax_theme: String,
    color: Option<ColorSupport>,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self { syntax_theme: strategy::syntax::DEFAULT_THEME.to_owned(), color: None }
    }
}

impl PreviewOptions {
    pub fn new(syntax_theme: impl Into<String>) -> Self {
        Self { syntax_theme: syntax_theme.into(), color: None }
    }

    /// Pins image color handling instead of reading the environment on every render.
    pub fn with_color(mut self, color: ColorSupport) -> Self {
        self.color = Some(color);
        self
    }

    pub fn syntax_theme(&self) -> &str {
        &self.syntax_theme
    }

    pub fn color(&self) -> ColorSupport {
        self.color.unwrap_or_else(ColorSupport::detect)
    }
}
