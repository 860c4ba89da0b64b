//! Pipeline module containing the run orchestration, builder pattern, and
//! configuration.
//!
//! This module provides the main [`Pipeline`] struct and its associated
//! builder for configuring and executing a fetch-and-extract run.
//!
//! # Overview
//!
//! The pipeline module is organized into four components:
//!
//! - `pipeline` - Core Pipeline struct with the run orchestration logic
//! - `builder` - PipelineBuilder for flexible configuration
//! - `config` - Configuration structure and defaults
//! - `report` - Run outcome reporting
//!
//! # Examples
//!
//! ```rust,no_run
//! use libriprep::pipeline::PipelineBuilder;
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let pipeline = PipelineBuilder::new()
//!     .base_dir(PathBuf::from("data"))
//!     .build();
//! let report = pipeline.run().await?;
//! # Ok(())
//! # }
//! ```

pub(crate) mod builder;
pub(crate) mod config;
#[allow(clippy::module_inception)]
pub(crate) mod pipeline;
pub(crate) mod report;

pub use builder::PipelineBuilder;
pub use config::{
    PipelineConfig, DEFAULT_BASE_DIR, DEFAULT_EXTRACT_SUBDIR, DEFAULT_SOURCE_URL,
};
pub use pipeline::Pipeline;
pub use report::Report;
