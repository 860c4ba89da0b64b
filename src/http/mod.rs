//! HTTP module containing HTTP client functionality.
//!
//! This module handles client creation with tracing middleware and default
//! headers. The pipeline builds one client per run and hands it to the
//! fetcher.

pub mod client;

pub use client::{create_http_client, HttpClientConfig};
