// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seer-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Seer CLI entrypoint.
//!
//! Opens the interactive browser on `[DIR]` (default: the current directory). Preview renders
//! run on the blocking pool of a current-thread tokio runtime.

use anyhow::Context as _;
use clap::Parser as _;

use seer::config::{Cli, Settings};
use seer::preview::PreviewWorker;

fn run() -> anyhow::Result<()> {
    let settings = Settings::load(Cli::parse())?;

    let log_file = settings.log_file.as_deref();
    seer::logging::init(log_file).with_context(|| match log_file {
        Some(path) => format!("cannot open log file {}", path.display()),
        None => "cannot initialise logging".to_owned(),
    })?;
    tracing::info!(root = %settings.root.display(), "starting");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .context("cannot start the preview runtime")?;

    runtime.block_on(async move {
        let worker = PreviewWorker::current();
        tokio::task::spawn_blocking(move || seer::tui::run(&settings, worker))
            .await
            .context("terminal UI task panicked")?
            .context("terminal UI failed")
    })
}

fn main() {
    if let Err(err) = run() {
        eprintln!("seer: {err:#}");
        std::process::exit(1);
    }
}
