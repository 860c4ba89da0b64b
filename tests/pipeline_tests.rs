//! End-to-end tests for the pipeline.
//!
//! A local server serves a small fixture archive; the pipeline downloads it
//! into a base directory and extracts it, exactly as the binary would.

use libriprep::fetch::FetchStatus;
use libriprep::pipeline::PipelineBuilder;

use reqwest::Url;

mod common;
use common::helpers::*;

#[tokio::test]
async fn test_pipeline_end_to_end() {
    let dir = create_temp_dir();

    // Fixture: the 3-member archive a.txt, b/, b/c.txt.
    let fixture = dir.path().join("fixture.tar.gz");
    build_tar_gz(
        &fixture,
        &[
            ("a.txt", Some(b"alpha".as_slice())),
            ("b/", None),
            ("b/c.txt", Some(b"charlie".as_slice())),
        ],
    );
    let archive_bytes = std::fs::read(&fixture).unwrap();

    let base = spawn_http_server(200, archive_bytes.clone(), true).await;
    let url = Url::parse(&format!("{base}/dev-clean.tar.gz")).unwrap();
    let base_dir = dir.path().join("data");

    let pipeline = PipelineBuilder::hidden()
        .source_url(url.clone())
        .base_dir(base_dir.clone())
        .extract_subdir("librispeech")
        .build();

    let report = pipeline.run().await.unwrap();

    // The archive is left on disk with the full downloaded byte length.
    assert_eq!(report.archive_path(), base_dir.join("dev-clean.tar.gz"));
    assert_eq!(report.bytes_fetched(), archive_bytes.len() as u64);
    assert_eq!(report.fetch_status(), &FetchStatus::Downloaded);
    assert_file_size(report.archive_path(), archive_bytes.len() as u64);

    // The extracted tree mirrors the archive's internal structure.
    assert_eq!(report.members_extracted(), 3);
    assert_eq!(report.extract_dir(), base_dir.join("librispeech"));
    assert_eq!(
        std::fs::read(base_dir.join("librispeech/a.txt")).unwrap(),
        b"alpha"
    );
    assert!(base_dir.join("librispeech/b").is_dir());
    assert_eq!(
        std::fs::read(base_dir.join("librispeech/b/c.txt")).unwrap(),
        b"charlie"
    );

    // A second run skips the transfer and still succeeds.
    let report = pipeline.run().await.unwrap();
    assert_eq!(report.fetch_status(), &FetchStatus::SkippedExisting);
    assert_eq!(report.bytes_fetched(), archive_bytes.len() as u64);
}

#[tokio::test]
async fn test_pipeline_propagates_http_failure() {
    let dir = create_temp_dir();
    let base = spawn_http_server(404, Vec::new(), true).await;
    let url = Url::parse(&format!("{base}/missing.tar.gz")).unwrap();
    let base_dir = dir.path().join("data");

    let pipeline = PipelineBuilder::hidden()
        .source_url(url)
        .base_dir(base_dir.clone())
        .build();

    assert!(pipeline.run().await.is_err());
    assert!(!base_dir.join("missing.tar.gz").exists());
}
