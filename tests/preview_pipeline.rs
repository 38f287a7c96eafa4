// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Seer-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Seer and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fs;
use std::path::Path;

use seer::model::{SelectedEntry, Viewport};
use seer::preview::{
    render_entry, Delivery, PreviewOptions, PreviewPipeline, PreviewWorker, PREVIEW_CAP,
    TRUNCATION_NOTICE,
};

fn write(dir: &Path, name: &str, contents: impl AsRef<[u8]>) -> SelectedEntry {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write fixture");
    SelectedEntry::stat(&path).expect("stat fixture")
}

fn preview(entry: &SelectedEntry) -> String {
    render_entry(entry.path(), Viewport::new(80, 24), &PreviewOptions::default()).expect("preview")
}

#[test]
fn late_result_for_an_older_request_never_wins() {
    let dir = tempfile::tempdir().expect("tempdir");
    let first = write(dir.path(), "first.txt", "first file\n");
    let second = write(dir.path(), "second.txt", "second file\n");
    let viewport = Viewport::new(80, 24);

    let mut pipeline = PreviewPipeline::default();
    let job_a = pipeline.request(Some(&first), viewport).expect("miss");
    let job_b = pipeline.request(Some(&second), viewport).expect("miss");
    let (result_a, result_b) = (job_a.run(), job_b.run());

    assert_eq!(pipeline.deliver(result_b), Delivery::Applied);
    assert_eq!(pipeline.deliver(result_a), Delivery::Stale);
    assert!(pipeline.state().content().contains("second file"));
    assert!(!pipeline.state().is_loading());

    // The stale render was still worth keeping.
    assert!(pipeline.request(Some(&first), viewport).is_none());
    assert!(pipeline.state().content().contains("first file"));
}

#[tokio::test]
async fn worker_results_arriving_out_of_order_are_filtered() {
    let dir = tempfile::tempdir().expect("tempdir");
    let first = write(dir.path(), "first.json", r#"{"name":"first"}"#);
    let second = write(dir.path(), "second.json", r#"{"name":"second"}"#);
    let viewport = Viewport::new(80, 24);

    let mut pipeline = PreviewPipeline::default();
    let mut worker = PreviewWorker::current();
    worker.dispatch(pipeline.request(Some(&first), viewport).expect("miss"));
    worker.dispatch(pipeline.request(Some(&second), viewport).expect("miss"));

    let mut results = vec![
        worker.recv().await.expect("result"),
        worker.recv().await.expect("result"),
    ];
    results.sort_by_key(|result| std::cmp::Reverse(result.request_id()));
    for result in results {
        pipeline.deliver(result);
    }

    assert!(pipeline.state().content().contains("second"));
    assert!(!pipeline.state().content().contains("first"));
}

#[test]
fn truncation_notice_starts_exactly_at_the_cap() {
    let dir = tempfile::tempdir().expect("tempdir");
    let line = "0123456789abcde\n";
    let body = line.repeat(PREVIEW_CAP / line.len());
    assert_eq!(body.len(), PREVIEW_CAP);

    let at_cap = write(dir.path(), "at_cap.txt", &body);
    assert!(preview(&at_cap).ends_with(TRUNCATION_NOTICE));

    let under_cap = write(dir.path(), "under_cap.txt", &body[..PREVIEW_CAP - 1]);
    assert!(!preview(&under_cap).contains(TRUNCATION_NOTICE));
}

#[test]
fn null_bytes_short_circuit_to_a_summary() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut bytes = b"# SECRET heading\n\nplain words".to_vec();
    bytes.insert(10, 0);
    let entry = write(dir.path(), "notes.md", &bytes);

    let rendered = preview(&entry);
    assert!(rendered.contains("binary file: notes.md"), "{rendered}");
    assert!(!rendered.contains("SECRET"), "{rendered}");
    assert!(!rendered.contains("plain words"), "{rendered}");
}

#[test]
fn json_key_order_does_not_change_the_preview() {
    let dir = tempfile::tempdir().expect("tempdir");
    let one = write(dir.path(), "one.json", r#"{"b": [1, 2.5], "a": {"y": null, "x": true}}"#);
    let two = write(dir.path(), "two.json", r#"{"a": {"x": true, "y": null}, "b": [1, 2.5]}"#);

    let (one, two) = (preview(&one), preview(&two));
    assert_eq!(one, two);
    assert!(one.find("\"a\"") < one.find("\"b\""), "{one}");
}

#[test]
fn errors_are_published_but_not_cached() {
    let dir = tempfile::tempdir().expect("tempdir");
    let entry = write(dir.path(), "gone.txt", "soon deleted\n");
    fs::remove_file(entry.path()).expect("remove");
    let viewport = Viewport::new(80, 24);

    let mut pipeline = PreviewPipeline::default();
    let job = pipeline.request(Some(&entry), viewport).expect("miss");
    assert_eq!(pipeline.deliver(job.run()), Delivery::Applied);
    assert!(pipeline.state().content().starts_with("preview error: "));
    assert!(pipeline.state().error().is_some());
    assert!(pipeline.cache().is_empty());
    assert!(pipeline.request(Some(&entry), viewport).is_some());
}
