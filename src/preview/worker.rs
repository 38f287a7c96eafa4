// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seer-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, error::TryRecvError, UnboundedReceiver, UnboundedSender};

use super::pipeline::{PreviewJob, PreviewResult};

/// Runs [`PreviewJob`]s on the runtime's blocking pool and queues their results.
///
/// Superseded jobs are not cancelled; they run to completion and the pipeline discards their
/// results on delivery.
#[derive(Debug)]
pub struct PreviewWorker {
    handle: Handle,
    results_tx: UnboundedSender<PreviewResult>,
    results_rx: UnboundedReceiver<PreviewResult>,
}

impl PreviewWorker {
    pub fn new(handle: Handle) -> Self {
        let (results_tx, results_rx) = mpsc::unbounded_channel();
        Self { handle, results_tx, results_rx }
    }

    /// Must be called from within a tokio runtime.
    pub fn current() -> Self {
        Self::new(Handle::current())
    }

    pub fn dispatch(&self, job: PreviewJob) {
        let tx = self.results_tx.clone();
        let request = job.request_id();
        tracing::debug!(request = %request, fingerprint = %job.fingerprint(), "preview dispatched");
        self.handle.spawn_blocking(move || {
            if tx.send(job.run()).is_err() {
                tracing::debug!(request = %request, "preview receiver gone");
            }
        });
    }

    /// Next finished result without blocking.
    pub fn try_recv(&mut self) -> Option<PreviewResult> {
        match self.results_rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => None,
        }
    }

    /// Waits for the next finished result.
    pub async fn recv(&mut self) -> Option<PreviewResult> {
        self.results_rx.recv().await
    }
}
