//! Progress module containing progress bar functionality.
//!
//! This module provides progress bar styling and display management for the
//! two phases of a run: downloading the archive (byte-based progress) and
//! extracting its members (count-based progress).
//!
//! # Examples
//!
//! ## Custom Progress Bar Styling
//!
//! ```rust
//! use libriprep::progress::{StyleOptions, ProgressBarOpts};
//!
//! let style_options = StyleOptions::new(
//!     ProgressBarOpts::with_pip_style(),
//!     ProgressBarOpts::new(
//!         Some("[{bar:40.cyan/blue}] {pos}/{len} {msg}".to_string()),
//!         Some("█▉▊▋▌▍▎▏  ".to_string()),
//!         true,
//!         false,
//!     ),
//! );
//! ```
//!
//! ## Hidden Progress Bars
//!
//! ```rust
//! use libriprep::progress::{StyleOptions, ProgressBarOpts};
//!
//! let hidden_style = StyleOptions::new(
//!     ProgressBarOpts::hidden(),
//!     ProgressBarOpts::hidden(),
//! );
//! ```

pub(crate) mod display;
pub(crate) mod style;

pub use display::ProgressDisplay;
pub use style::{ProgressBarOpts, StyleOptions};
