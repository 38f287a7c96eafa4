// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seer-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Seer: a terminal file browser with rich previews.
//!
//! The preview pipeline classifies the selected entry, renders it off the control loop and
//! caches the result per entry and viewport. Mermaid flowcharts and sequence diagrams are
//! drawn as box-drawing character art, both standalone and inside Markdown.

pub mod config;
pub mod format;
pub mod layout;
pub mod logging;
pub mod model;
pub mod preview;
pub mod render;
pub mod tui;
