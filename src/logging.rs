// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seer-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! File-backed structured logging.
//!
//! The TUI owns stdout and stderr, so a subscriber is only installed when a log file is
//! configured. Without one every `tracing` macro is a no-op.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directives.
pub const LOG_ENV: &str = "SEER_LOG";
pub const DEFAULT_FILTER: &str = "info";

pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber writing to `log_file`.
///
/// Returns `Ok(false)` when no file is configured or a subscriber is already installed.
pub fn init(log_file: Option<&Path>) -> io::Result<bool> {
    let Some(path) = log_file else {
        return Ok(false);
    };
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let installed = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .is_ok();
    if installed {
        tracing::info!(version = env!("CARGO_PKG_VERSION"), "seer logging started");
    }
    Ok(installed)
}

#[cfg(test)]
mod tests {
    use super::init;

    #[test]
    fn no_log_file_installs_nothing() {
        assert!(!init(None).expect("no-op"));
    }

    #[test]
    fn unwritable_log_file_is_an_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("missing").join("seer.log");
        assert!(init(Some(&path)).is_err());
    }
}
