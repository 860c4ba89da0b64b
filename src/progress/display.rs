//! Progress bar display management.
//!
//! This module provides the [`ProgressDisplay`] struct that hands out the two
//! progress bars a run needs: a byte-based bar while the archive streams in,
//! and a count-based bar while its members are unpacked. Both are attached to
//! a shared [`MultiProgress`] so terminal rendering stays coherent.

use crate::progress::StyleOptions;
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget};
use std::sync::Arc;

/// Progress display manager for the fetch and extract phases.
pub struct ProgressDisplay {
    /// The multi-progress instance the bars are attached to.
    multi: Arc<MultiProgress>,
    /// Style options for both bars.
    style_options: StyleOptions,
}

impl ProgressDisplay {
    /// Create a new progress display manager.
    pub fn new(style_options: StyleOptions) -> Self {
        let multi = match style_options.is_enabled() {
            true => Arc::new(MultiProgress::new()),
            false => Arc::new(MultiProgress::with_draw_target(ProgressDrawTarget::hidden())),
        };

        Self {
            multi,
            style_options,
        }
    }

    /// Print a line above any live bars.
    ///
    /// Falls back to plain stdout when the bars are disabled, since a hidden
    /// draw target swallows the message.
    pub fn println(&self, msg: impl AsRef<str>) {
        if self.style_options.is_enabled() {
            let _ = self.multi.println(msg.as_ref());
        } else {
            println!("{}", msg.as_ref());
        }
    }

    /// Create the byte-based bar for the download phase.
    ///
    /// A `None` total means the response did not report its size; the bar
    /// degrades to a counting-only display.
    pub fn bytes_bar(&self, total: Option<u64>) -> ProgressBar {
        let opts = self.style_options.download().clone();
        let pb = match total {
            Some(len) => opts.to_progress_bar(len),
            None => opts.to_counting_bar(),
        };
        self.multi.add(pb)
    }

    /// Create the count-based bar for the extraction phase.
    pub fn count_bar(&self, len: u64) -> ProgressBar {
        self.multi
            .add(self.style_options.extract().clone().to_progress_bar(len))
    }

    /// Finish the download bar, clearing or keeping it based on configuration.
    pub fn finish_download(&self, pb: ProgressBar) {
        Self::finish_bar(pb, self.style_options.download().clear);
    }

    /// Finish the extraction bar, clearing or keeping it based on configuration.
    pub fn finish_extract(&self, pb: ProgressBar) {
        Self::finish_bar(pb, self.style_options.extract().clear);
    }

    fn finish_bar(pb: ProgressBar, clear: bool) {
        if clear {
            pb.finish_and_clear();
        } else {
            pb.finish();
        }
    }
}
