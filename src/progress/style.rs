//! Progress bar styling and configuration options.
//!
//! This module provides styling and configuration options for the two progress
//! bars shown during a run: a byte-based bar for the download phase and a
//! position-based bar for the extraction phase.
//!
//! # Examples
//!
//! ## Default Styling
//!
//! ```rust
//! use libriprep::progress::StyleOptions;
//!
//! // Both bars stay visible upon completion.
//! let style_options = StyleOptions::default();
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

use indicatif::{ProgressBar, ProgressStyle};

/// Define the pipeline style options.
///
/// By default both the download bar and the extraction bar stay on the screen
/// upon completion.
#[derive(Debug, Clone)]
pub struct StyleOptions {
    /// Style options for the download progress bar.
    pub(crate) download: ProgressBarOpts,
    /// Style options for the extraction progress bar.
    pub(crate) extract: ProgressBarOpts,
}

impl Default for StyleOptions {
    fn default() -> Self {
        Self {
            download: ProgressBarOpts {
                template: Some(ProgressBarOpts::TEMPLATE_PIP.into()),
                progress_chars: Some(ProgressBarOpts::CHARS_LINE.into()),
                enabled: true,
                clear: false,
            },
            extract: ProgressBarOpts {
                template: Some(ProgressBarOpts::TEMPLATE_BAR_WITH_POSITION.into()),
                progress_chars: Some(ProgressBarOpts::CHARS_FINE.into()),
                enabled: true,
                clear: false,
            },
        }
    }
}

impl StyleOptions {
    /// Create new [`StyleOptions`].
    pub fn new(download: ProgressBarOpts, extract: ProgressBarOpts) -> Self {
        Self { download, extract }
    }

    /// Set the options for the download progress bar.
    pub fn set_download(&mut self, download: ProgressBarOpts) {
        self.download = download;
    }

    /// Set the options for the extraction progress bar.
    pub fn set_extract(&mut self, extract: ProgressBarOpts) {
        self.extract = extract;
    }

    /// Return `false` if neither bar is enabled.
    pub fn is_enabled(&self) -> bool {
        self.download.enabled || self.extract.enabled
    }

    /// Get a reference to the download progress bar options.
    pub fn download(&self) -> &ProgressBarOpts {
        &self.download
    }

    /// Get a reference to the extraction progress bar options.
    pub fn extract(&self) -> &ProgressBarOpts {
        &self.extract
    }
}

/// Define the options for a progress bar.
#[derive(Debug, Clone)]
pub struct ProgressBarOpts {
    /// Progress bar template string.
    template: Option<String>,
    /// Progression characters set.
    ///
    /// There must be at least 3 characters for the following states:
    /// "filled", "current", and "to do".
    progress_chars: Option<String>,
    /// Enable or disable the progress bar.
    pub(crate) enabled: bool,
    /// Clear the progress bar once completed.
    pub(crate) clear: bool,
}

impl Default for ProgressBarOpts {
    fn default() -> Self {
        Self {
            template: None,
            progress_chars: None,
            enabled: true,
            clear: true,
        }
    }
}

impl ProgressBarOpts {
    /// Template representing the bar and its position.
    ///
    ///`███████████████████████████████████████ 11/12 (99%) eta 00:00:02`
    pub const TEMPLATE_BAR_WITH_POSITION: &'static str =
        "{bar:40.blue} {pos:>}/{len} ({percent}%) eta {eta_precise:.blue}";
    /// Template which looks like the Python package installer pip.
    ///
    /// `━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━ 211.23 KiB/211.23 KiB 1008.31 KiB/s eta 0s`
    pub const TEMPLATE_PIP: &'static str =
        "{bar:40.green/black} {bytes:>11.green}/{total_bytes:<11.green} {bytes_per_sec:>13.red} eta {eta:.blue}";
    /// Template for byte counts when the total size is unknown.
    ///
    /// `⠒     1.21 MiB  814.00 KiB/s`
    pub const TEMPLATE_BYTES_UNKNOWN: &'static str =
        "{spinner:.green} {bytes:>11.green} {bytes_per_sec:>13.red}";
    /// Use fine blocks as progress characters: `"█▉▊▋▌▍▎▏  "`.
    pub const CHARS_FINE: &'static str = "█▉▊▋▌▍▎▏  ";
    /// Use a line as progress characters: `"━╾─"`.
    pub const CHARS_LINE: &'static str = "━╾╴─";
    /// Use rough blocks as progress characters: `"█  "`.
    pub const CHARS_ROUGH: &'static str = "█  ";

    /// Create a new [`ProgressBarOpts`].
    pub fn new(
        template: Option<String>,
        progress_chars: Option<String>,
        enabled: bool,
        clear: bool,
    ) -> Self {
        Self {
            template,
            progress_chars,
            enabled,
            clear,
        }
    }

    /// Create a [`ProgressStyle`] based on the provided options.
    pub fn to_progress_style(self) -> ProgressStyle {
        let mut style = ProgressStyle::default_bar();
        if let Some(template) = self.template {
            style = style.template(&template).unwrap();
        }
        if let Some(progress_chars) = self.progress_chars {
            style = style.progress_chars(&progress_chars);
        }
        style
    }

    /// Create a [`ProgressBar`] based on the provided options.
    pub fn to_progress_bar(self, len: u64) -> ProgressBar {
        // Return a hidden Progress bar if we disabled it.
        if !self.enabled {
            return ProgressBar::hidden();
        }

        // Otherwise returns a ProgressBar with the style.
        let style = self.to_progress_style();
        ProgressBar::new(len).with_style(style)
    }

    /// Create a counting-only [`ProgressBar`] for streams of unknown length.
    ///
    /// The configured template is replaced with [`Self::TEMPLATE_BYTES_UNKNOWN`]
    /// since bar and eta placeholders cannot render without a total.
    pub fn to_counting_bar(self) -> ProgressBar {
        if !self.enabled {
            return ProgressBar::hidden();
        }

        let style = ProgressStyle::default_bar()
            .template(Self::TEMPLATE_BYTES_UNKNOWN)
            .unwrap();
        ProgressBar::no_length().with_style(style)
    }

    /// Create a new [`ProgressBarOpts`] which looks like Python pip.
    pub fn with_pip_style() -> Self {
        Self {
            template: Some(ProgressBarOpts::TEMPLATE_PIP.into()),
            progress_chars: Some(ProgressBarOpts::CHARS_LINE.into()),
            enabled: true,
            clear: true,
        }
    }

    /// Set to `true` to clear the progress bar upon completion.
    pub fn set_clear(&mut self, clear: bool) {
        self.clear = clear;
    }

    /// Create a new [`ProgressBarOpts`] which hides the progress bars.
    pub fn hidden() -> Self {
        Self {
            enabled: false,
            ..ProgressBarOpts::default()
        }
    }
}
