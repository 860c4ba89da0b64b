//! Core pipeline implementation.
//!
//! This module contains the [`Pipeline`] struct that runs the fixed sequence:
//! derive the destination layout, fetch the archive, extract its members, and
//! print the three user-facing status lines. There is no branching beyond the
//! fetcher's own skip-if-exists short-circuit, and no step is retried; any
//! fatal error propagates unmodified to the caller.
//!
//! # Examples
//!
//! ```rust,no_run
//! use libriprep::pipeline::PipelineBuilder;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pipeline = PipelineBuilder::new().build();
//! let report = pipeline.run().await?;
//! println!(
//!     "{} members under {:?}",
//!     report.members_extracted(),
//!     report.extract_dir()
//! );
//! # Ok(())
//! # }
//! ```

use super::config::PipelineConfig;
use super::report::Report;
use crate::error::Result;
use crate::extract::extract;
use crate::fetch::{fetch, Source};
use crate::http::{create_http_client, HttpClientConfig};
use crate::progress::display::ProgressDisplay;

use reqwest::Url;
use std::convert::TryFrom;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Represents the fetch-and-extract pipeline.
///
/// A pipeline can be created via its builder:
///
/// ```rust
/// # fn main()  {
/// use libriprep::pipeline::PipelineBuilder;
///
/// let p = PipelineBuilder::new().build();
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Creates a new Pipeline with the given configuration.
    pub(crate) fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    /// Gets the URL of the archive to fetch.
    pub fn source_url(&self) -> &Url {
        &self.config.source_url
    }

    /// Gets the base directory.
    pub fn base_dir(&self) -> &Path {
        &self.config.base_dir
    }

    /// Gets the extraction directory.
    pub fn extract_dir(&self) -> PathBuf {
        self.config.base_dir.join(&self.config.extract_subdir)
    }

    /// Runs the pipeline to completion.
    ///
    /// Fetches the archive to `<base_dir>/<filename>` (skipping the transfer
    /// if the file already exists), then extracts every member beneath the
    /// extraction directory. Returns a [`Report`] describing both phases.
    pub async fn run(&self) -> Result<Report> {
        let source = Source::try_from(&self.config.source_url)?;
        let archive_path = self.config.base_dir.join(&source.filename);
        let extract_dir = self.extract_dir();
        debug!(
            "Preparing {:?} and {:?} from {}",
            archive_path, extract_dir, source.url
        );

        let client = create_http_client(HttpClientConfig {
            headers: self.config.headers.clone(),
        })?;
        let display = ProgressDisplay::new(self.config.style_options.clone());

        println!("Downloading {} from {}...", source.filename, source.url);
        let fetch_summary = fetch(&client, &source, &archive_path, &display).await?;

        println!("Extracting to {}...", extract_dir.display());
        let extract_summary = extract(&archive_path, &extract_dir, &display).await?;

        println!("Download and extraction complete!");
        Ok(Report::new(fetch_summary, extract_summary))
    }
}
