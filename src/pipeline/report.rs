//! Run report.
//!
//! This module contains the [`Report`] struct summarizing a completed run:
//! where the archive ended up, how many bytes were fetched (or found on
//! disk), and how many members were extracted.

use crate::extract::ExtractSummary;
use crate::fetch::{FetchStatus, FetchSummary};

use std::path::Path;

/// Represents the outcome of a [`Pipeline`](crate::pipeline::Pipeline) run.
#[derive(Debug, Clone)]
pub struct Report {
    /// Fetch phase outcome.
    fetch: FetchSummary,
    /// Extraction phase outcome.
    extract: ExtractSummary,
}

impl Report {
    /// Create a new [`Report`].
    pub fn new(fetch: FetchSummary, extract: ExtractSummary) -> Self {
        Self { fetch, extract }
    }

    /// Path of the downloaded archive on disk.
    pub fn archive_path(&self) -> &Path {
        &self.fetch.path
    }

    /// Directory the archive was extracted into.
    pub fn extract_dir(&self) -> &Path {
        &self.extract.path
    }

    /// Bytes written by the fetch phase, or the pre-existing file size when
    /// the download was skipped.
    pub fn bytes_fetched(&self) -> u64 {
        self.fetch.bytes
    }

    /// Whether the archive was downloaded or found on disk.
    pub fn fetch_status(&self) -> &FetchStatus {
        &self.fetch.status
    }

    /// Number of archive members extracted.
    pub fn members_extracted(&self) -> usize {
        self.extract.members
    }
}
