//! Archive extraction functionality.
//!
//! This module provides tar.gz extraction with per-member progress reporting,
//! plus the member-path validation that keeps extraction inside its
//! destination directory.

pub(crate) mod sanitize;
pub(crate) mod tar;

pub use sanitize::ensure_relative;
pub use tar::{extract, list_members, ExtractSummary};
