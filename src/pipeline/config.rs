//! Configuration structure and defaults for the pipeline.
//!
//! The defaults reproduce the stock run: the LibriSpeech dev-clean corpus
//! downloaded into `data/` and extracted under `data/librispeech/`.

use crate::progress::StyleOptions;

use reqwest::header::HeaderMap;
use reqwest::Url;
use std::path::PathBuf;

/// Default source URL: the LibriSpeech dev-clean corpus mirror.
pub const DEFAULT_SOURCE_URL: &str = "https://us.openslr.org/resources/12/dev-clean.tar.gz";
/// Default base directory holding the archive and the extraction target.
pub const DEFAULT_BASE_DIR: &str = "data";
/// Default extraction subdirectory beneath the base directory.
pub const DEFAULT_EXTRACT_SUBDIR: &str = "librispeech";

/// Configuration structure for the pipeline.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// URL of the archive to fetch.
    pub source_url: Url,
    /// Base directory; the archive file and the extraction directory both
    /// live beneath it.
    pub base_dir: PathBuf,
    /// Name of the extraction directory beneath `base_dir`.
    pub extract_subdir: String,
    /// Custom HTTP headers.
    pub headers: Option<HeaderMap>,
    /// Progress bar style options.
    pub style_options: StyleOptions,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            source_url: Url::parse(DEFAULT_SOURCE_URL).expect("default source URL is valid"),
            base_dir: PathBuf::from(DEFAULT_BASE_DIR),
            extract_subdir: DEFAULT_EXTRACT_SUBDIR.to_string(),
            headers: None,
            style_options: StyleOptions::default(),
        }
    }
}
