//! Fetch module containing download-related functionality.
//!
//! This module provides the [`Source`] descriptor for the remote archive and
//! the streaming [`fetch`] operation that writes it to disk with a byte-based
//! progress bar.
//!
//! # Examples
//!
//! ```rust
//! use libriprep::fetch::Source;
//! use std::convert::TryFrom;
//!
//! let source = Source::try_from("https://example.com/corpus.tar.gz")?;
//! println!("Fetching: {}", source.filename);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub(crate) mod fetcher;
pub(crate) mod source;

pub use fetcher::{fetch, FetchStatus, FetchSummary};
pub use source::Source;
