// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seer-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use crate::model::{SelectedEntry, Viewport};

use super::cache::{BoundedCache, Fingerprint};
use super::render::render_entry;
use super::{PreviewError, PreviewOptions, ERROR_PREFIX};

/// Monotonic id of a dispatched render. Only cache misses advance it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl RequestId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn get(self) -> u64 {
        self.0
    }

    fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// What the presentation layer draws.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewState {
    content: String,
    loading: bool,
    error: Option<String>,
}

impl PreviewState {
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn publish(&mut self, content: String) {
        self.content = content;
        self.loading = false;
        self.error = None;
    }

    fn fail(&mut self, message: String) {
        self.content = format!("{ERROR_PREFIX}{message}");
        self.loading = false;
        self.error = Some(message);
    }
}

/// A render to run off the control loop. Owns every input it needs.
#[derive(Debug, Clone)]
pub struct PreviewJob {
    request_id: RequestId,
    fingerprint: Fingerprint,
    entry: SelectedEntry,
    viewport: Viewport,
    options: PreviewOptions,
}

impl PreviewJob {
    pub fn request_id(&self) -> RequestId {
        self.request_id
    }

    pub fn fingerprint(&self) -> &Fingerprint {
        &self.fingerprint
    }

    pub fn entry(&self) -> &SelectedEntry {
        &self.entry
    }

    /// Blocking: reads, decodes and lays out the entry.
    pub fn run(self) -> PreviewResult {
        let outcome = render_entry(self.entry.path(), self.viewport, &self.options);
        PreviewResult { request_id: self.request_id, fingerprint: self.fingerprint, outcome }
    }
}

#[derive(Debug)]
pub struct PreviewResult {
    request_id: RequestId,
    fingerprint: Fingerprint,
    outcome: Result<String, PreviewError>,
}

impl PreviewResult {
    pub fn new(
        request_id: RequestId,
        fingerprint: Fingerprint,
        outcome: Result<String, PreviewError>,
    ) -> Self {
        Self { request_id, fingerprint, outcome }
    }

    pub fn request_id(&self) -> RequestId {
        self.request_id
    }

    pub fn fingerprint(&self) -> &Fingerprint {
        &self.fingerprint
    }

    pub fn outcome(&self) -> &Result<String, PreviewError> {
        &self.outcome
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// The result was current and is now the live preview.
    Applied,
    /// A newer request (or a cache hit) superseded it; the live preview is untouched.
    Stale,
}

/// Control-loop side of previewing: cache, request counter and live state.
///
/// Everything here is mutated only from the control loop. Background work reaches it solely
/// through [`PreviewPipeline::deliver`].
#[derive(Debug)]
pub struct PreviewPipeline {
    cache: BoundedCache<String>,
    latest: RequestId,
    in_flight: Option<RequestId>,
    state: PreviewState,
    options: PreviewOptions,
}

impl PreviewPipeline {
    pub fn new(cache_capacity: usize, options: PreviewOptions) -> Self {
        Self {
            cache: BoundedCache::new(cache_capacity),
            latest: RequestId::default(),
            in_flight: None,
            state: PreviewState::default(),
            options,
        }
    }

    pub fn state(&self) -> &PreviewState {
        &self.state
    }

    pub fn cache(&self) -> &BoundedCache<String> {
        &self.cache
    }

    pub fn latest_request_id(&self) -> RequestId {
        self.latest
    }

    pub fn options(&self) -> &PreviewOptions {
        &self.options
    }

    /// Answers from the cache or hands back a job for the worker.
    ///
    /// `None` for the entry clears the preview. Both a cleared selection and a cache hit
    /// retire whatever render is still in flight.
    pub fn request(
        &mut self,
        entry: Option<&SelectedEntry>,
        viewport: Viewport,
    ) -> Option<PreviewJob> {
        let Some(entry) = entry else {
            self.in_flight = None;
            self.state = PreviewState::default();
            return None;
        };

        let fingerprint = Fingerprint::new(entry, viewport);
        if let Some(cached) = self.cache.get(&fingerprint) {
            tracing::debug!(fingerprint = %fingerprint, "preview cache hit");
            let cached = cached.clone();
            self.in_flight = None;
            self.state.publish(cached);
            return None;
        }

        self.latest = self.latest.next();
        self.in_flight = Some(self.latest);
        self.state.loading = true;
        tracing::debug!(request = %self.latest, fingerprint = %fingerprint, "preview cache miss");

        Some(PreviewJob {
            request_id: self.latest,
            fingerprint,
            entry: entry.clone(),
            viewport,
            options: self.options.clone(),
        })
    }

    fn is_current(&self, id: RequestId) -> bool {
        id == self.latest && self.in_flight == Some(id)
    }

    fn remember(&mut self, fingerprint: Fingerprint, content: String) {
        for evicted in self.cache.insert(fingerprint, content) {
            tracing::debug!(fingerprint = %evicted, "preview cache eviction");
        }
    }

    /// Applies a finished render if it is still current.
    ///
    /// Successful stale renders are still cached under their own fingerprint. Errors are
    /// never cached.
    pub fn deliver(&mut self, result: PreviewResult) -> Delivery {
        let PreviewResult { request_id, fingerprint, outcome } = result;

        if !self.is_current(request_id) {
            tracing::debug!(request = %request_id, latest = %self.latest, "stale preview dropped");
            if let Ok(content) = outcome {
                self.remember(fingerprint, content);
            }
            return Delivery::Stale;
        }

        self.in_flight = None;
        match outcome {
            Ok(content) => {
                self.remember(fingerprint, content.clone());
                self.state.publish(content);
            }
            Err(err) => {
                tracing::warn!(request = %request_id, error = %err, "preview failed");
                self.state.fail(err.to_string());
            }
        }
        Delivery::Applied
    }
}

impl Default for PreviewPipeline {
    fn default() -> Self {
        Self::new(super::DEFAULT_CACHE_CAPACITY, PreviewOptions::default())
    }
}
