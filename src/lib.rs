//! Libriprep fetches a remote compressed archive over HTTP and unpacks it to
//! a local directory, with a progress bar for each phase. Out of the box it
//! prepares the LibriSpeech dev-clean corpus under `data/`.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::path::PathBuf;
//! use libriprep::{pipeline::PipelineBuilder, Error};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! let pipeline = PipelineBuilder::new()
//!     .base_dir(PathBuf::from("data"))
//!     .build();
//! let report = pipeline.run().await?;
//! println!("Extracted {} members", report.members_extracted());
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`fetch`] - The `Source` descriptor and streaming download
//! - [`extract`] - Tar.gz extraction and member-path validation
//! - [`pipeline`] - The `Pipeline` and `PipelineBuilder` orchestrating a run
//! - [`error`] - Centralized error handling with the `Error` enum
//! - [`http`] - HTTP client construction
//! - [`progress`] - Progress bar styling and display management

pub mod error;
pub mod extract;
pub mod fetch;
pub mod http;
pub mod pipeline;
pub mod progress;

pub use error::{Error, Result};
pub use extract::ExtractSummary;
pub use fetch::{FetchStatus, FetchSummary, Source};
pub use http::{create_http_client, HttpClientConfig};
pub use pipeline::{Pipeline, PipelineBuilder, Report};
pub use progress::{ProgressBarOpts, StyleOptions};
