//! Error handling for the libriprep library.
//!
//! This module provides centralized error handling for everything that can go
//! wrong while fetching and unpacking an archive. All errors implement the
//! standard Error trait and chain to their underlying source where one exists.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can happen when using libriprep.
#[derive(Error, Debug)]
pub enum Error {
    /// Error from an underlying system.
    ///
    /// This variant captures internal errors that don't fit into other
    /// categories, such as a panicked blocking task.
    #[error("Internal error: {0}")]
    Internal(String),

    /// Error from the underlying URL parser or the expected URL format.
    ///
    /// Returned when a source URL cannot be parsed or carries no usable
    /// filename in its path.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// I/O Error.
    ///
    /// Wraps standard I/O errors raised while creating directories, writing
    /// the downloaded archive, or reading/unpacking its members.
    #[error("I/O error")]
    IOError {
        #[from]
        source: io::Error,
    },

    /// Error from the Reqwest library.
    ///
    /// Wraps HTTP client errors, including connection failures and non-success
    /// response statuses surfaced via `error_for_status`.
    #[error("Reqwest Error")]
    Reqwest {
        #[from]
        source: reqwest::Error,
    },

    /// Error from the HTTP middleware stack.
    #[error("HTTP middleware error")]
    Middleware {
        #[from]
        source: reqwest_middleware::Error,
    },

    /// An archive member path that would escape the extraction directory.
    ///
    /// Raised for absolute member paths and for paths containing
    /// parent-directory segments, before anything is written to disk.
    #[error("Unsafe archive member path: {path:?}")]
    UnsafePath { path: PathBuf },
}

/// Result type alias for operations that can fail with a libriprep error.
pub type Result<T> = std::result::Result<T, Error>;
