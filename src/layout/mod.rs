// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seer-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Layout algorithms for diagrams.
//!
//! Layouts are pure geometry on a character grid; drawing happens in [`crate::render`].

pub mod flowchart;
pub mod sequence;

pub use flowchart::{
    layout_flowchart, rank_nodes, FlowConnector, FlowNodePlacement, FlowchartLayout,
};
pub use sequence::{layout_sequence, SequenceLayout, SequenceMessageLayout};
