// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seer-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! The selected entry and viewport handed to the preview pipeline, plus the per-render
//! diagram models (flow graphs and sequence diagrams).

pub mod entry;
pub mod flow;
pub mod seq;

pub use entry::{SelectedEntry, Viewport};
pub use flow::{MermaidEdge, MermaidGraph, MermaidNode};
pub use seq::{SequenceDiagram, SequenceMessage};
