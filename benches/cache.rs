// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seer-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::time::{Duration, UNIX_EPOCH};

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use seer::model::{SelectedEntry, Viewport};
use seer::preview::{BoundedCache, Fingerprint, PreviewPipeline, DEFAULT_CACHE_CAPACITY};

mod profiler;

fn entries(count: usize) -> Vec<SelectedEntry> {
    (0..count)
        .map(|idx| {
            let modified = UNIX_EPOCH + Duration::from_secs(1_700_000_000 + idx as u64);
            let path = format!("/bench/dir/file_{idx:04}.rs");
            SelectedEntry::new(path, false, idx as u64, Some(modified))
        })
        .collect()
}

fn benches_cache(c: &mut Criterion) {
    let viewport = Viewport::new(120, 40);
    let entries = entries(DEFAULT_CACHE_CAPACITY * 4);
    let fingerprints =
        entries.iter().map(|entry| Fingerprint::new(entry, viewport)).collect::<Vec<_>>();

    let mut group = c.benchmark_group("cache");
    group.bench_function("fingerprint", |b| {
        b.iter(|| black_box(Fingerprint::new(black_box(&entries[7]), viewport)))
    });
    group.bench_function("insert_with_eviction/200", |b| {
        b.iter_batched(
            || BoundedCache::<String>::new(DEFAULT_CACHE_CAPACITY),
            |mut cache| {
                for key in &fingerprints {
                    black_box(cache.insert(key.clone(), String::new()));
                }
                cache
            },
            BatchSize::SmallInput,
        )
    });

    let mut warm = BoundedCache::new(DEFAULT_CACHE_CAPACITY);
    for key in &fingerprints[..DEFAULT_CACHE_CAPACITY] {
        warm.insert(key.clone(), key.to_string());
    }
    group.bench_function("lookup_hit", |b| {
        b.iter(|| black_box(warm.get(black_box(&fingerprints[DEFAULT_CACHE_CAPACITY / 2]))))
    });
    group.bench_function("lookup_miss", |b| {
        b.iter(|| black_box(warm.get(black_box(&fingerprints[DEFAULT_CACHE_CAPACITY * 3]))))
    });
    group.finish();

    let mut group = c.benchmark_group("pipeline");
    group.bench_function("request_miss", |b| {
        b.iter_batched(
            PreviewPipeline::default,
            |mut pipeline| black_box(pipeline.request(Some(&entries[0]), viewport)).is_some(),
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_cache
}
criterion_main!(benches);
