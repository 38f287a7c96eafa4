// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seer-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Diagram source parsing.
//!
//! Currently this module covers a pragmatic subset of Mermaid: flow graphs and sequence diagrams.

pub mod mermaid;
