//! Builder pattern implementation for creating Pipeline instances.
//!
//! This module provides the [`PipelineBuilder`] struct for configuring and
//! creating [`Pipeline`] instances: source URL, destination layout, HTTP
//! headers, and progress styling.
//!
//! # Examples
//!
//! ## Basic Builder Usage
//!
//! ```rust
//! use libriprep::pipeline::PipelineBuilder;
//! use std::path::PathBuf;
//!
//! let pipeline = PipelineBuilder::new()
//!     .base_dir(PathBuf::from("./data"))
//!     .extract_subdir("librispeech")
//!     .build();
//! ```
//!
//! ## Hidden Progress Bars
//!
//! ```rust
//! use libriprep::pipeline::PipelineBuilder;
//!
//! // Create a pipeline with no visible progress bars
//! let pipeline = PipelineBuilder::hidden().build();
//! ```

use super::{config::PipelineConfig, pipeline::Pipeline};
use crate::{ProgressBarOpts, StyleOptions};

use reqwest::header::{HeaderMap, HeaderValue, IntoHeaderName};
use reqwest::Url;
use std::path::PathBuf;

/// A builder used to create a [`Pipeline`].
///
/// ```rust
/// # fn main()  {
/// use libriprep::pipeline::PipelineBuilder;
///
/// let p = PipelineBuilder::new().base_dir("data".into()).build();
/// # }
/// ```
#[derive(Default)]
pub struct PipelineBuilder {
    config: PipelineConfig,
}

impl PipelineBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        PipelineBuilder::default()
    }

    /// Convenience function to hide the progress bars.
    pub fn hidden() -> Self {
        let mut builder = PipelineBuilder::default();
        builder.config.style_options =
            StyleOptions::new(ProgressBarOpts::hidden(), ProgressBarOpts::hidden());
        builder
    }

    /// Sets the URL of the archive to fetch.
    pub fn source_url(mut self, source_url: Url) -> Self {
        self.config.source_url = source_url;
        self
    }

    /// Sets the base directory holding the archive and the extraction target.
    pub fn base_dir(mut self, base_dir: PathBuf) -> Self {
        self.config.base_dir = base_dir;
        self
    }

    /// Sets the name of the extraction directory beneath the base directory.
    pub fn extract_subdir(mut self, extract_subdir: impl Into<String>) -> Self {
        self.config.extract_subdir = extract_subdir.into();
        self
    }

    /// Set the pipeline style options.
    pub fn style_options(mut self, style_options: StyleOptions) -> Self {
        self.config.style_options = style_options;
        self
    }

    /// Helper method to get or create a new HeaderMap.
    fn new_header(&self) -> HeaderMap {
        match self.config.headers {
            Some(ref h) => h.to_owned(),
            _ => HeaderMap::new(),
        }
    }

    /// Add the http headers.
    ///
    /// You need to pass in a `HeaderMap`, not a `HeaderName`.
    /// `HeaderMap` is a set of http headers.
    ///
    /// You can call `.headers()` multiple times and all `HeaderMap` will be
    /// merged into a single one.
    ///
    /// # Example
    ///
    /// ```
    /// use reqwest::header::{self, HeaderValue, HeaderMap};
    /// use libriprep::pipeline::PipelineBuilder;
    ///
    /// let ua = HeaderValue::from_str("curl/7.87").expect("Invalid UA");
    ///
    /// let builder = PipelineBuilder::new()
    ///     .headers(HeaderMap::from_iter([(header::USER_AGENT, ua)]))
    ///     .build();
    /// ```
    ///
    /// See also [`header()`].
    ///
    /// [`header()`]: PipelineBuilder::header
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        let mut new = self.new_header();
        new.extend(headers);

        self.config.headers = Some(new);
        self
    }

    /// Add the http header
    ///
    /// # Example
    ///
    /// You can use the `.header()` chain to add multiple headers
    ///
    /// ```
    /// use reqwest::header::{self, HeaderValue};
    /// use libriprep::pipeline::PipelineBuilder;
    ///
    /// let ua = HeaderValue::from_str("curl/7.87").expect("Invalid UA");
    /// let auth = HeaderValue::from_str("Basic aGk6MTIzNDU2Cg==").expect("Invalid auth");
    ///
    /// let builder = PipelineBuilder::new()
    ///     .header(header::USER_AGENT, ua)
    ///     .header(header::AUTHORIZATION, auth)
    ///     .build();
    /// ```
    ///
    /// If you need to pass in a `HeaderMap`, instead of calling `.header()`
    /// multiple times, see also [`headers()`].
    ///
    /// [`headers()`]: PipelineBuilder::headers
    pub fn header<K: IntoHeaderName>(mut self, name: K, value: HeaderValue) -> Self {
        let mut new = self.new_header();

        new.insert(name, value);

        self.config.headers = Some(new);
        self
    }

    /// Create the [`Pipeline`] with the specified options.
    pub fn build(self) -> Pipeline {
        Pipeline::new(self.config)
    }
}
