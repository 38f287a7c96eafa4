// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seer-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::str::FromStr;
use std::time::Duration;

use criterion::Criterion;
use pprof::criterion::{Output, PProfProfiler};

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    std::env::var(name).ok().and_then(|raw| raw.trim().parse().ok()).unwrap_or(default)
}

/// Criterion tuned via `SEER_BENCH_*`; flamegraphs are written when run with `--profile-time`.
pub fn criterion() -> Criterion {
    let frequency: i32 = env_or("SEER_PROFILE_FREQ", 100).clamp(1, 1000);
    let sample_size: usize = env_or("SEER_BENCH_SAMPLE_SIZE", 50).clamp(10, 200);
    let warmup: u64 = env_or("SEER_BENCH_WARMUP_SECS", 2).clamp(1, 60);
    let measurement: u64 = env_or("SEER_BENCH_MEASUREMENT_SECS", 5).clamp(1, 120);

    Criterion::default()
        .sample_size(sample_size)
        .warm_up_time(Duration::from_secs(warmup))
        .measurement_time(Duration::from_secs(measurement))
        .with_profiler(PProfProfiler::new(frequency, Output::Flamegraph(None)))
}
