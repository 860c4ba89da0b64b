//! Remote archive descriptor.
//!
//! This module contains the [`Source`] struct describing the archive to fetch.
//! It provides URL parsing and filename extraction.
//!
//! # Examples
//!
//! ```rust
//! use libriprep::fetch::Source;
//! use std::convert::TryFrom;
//!
//! // Create from URL string (filename extracted automatically)
//! let source = Source::try_from("https://us.openslr.org/resources/12/dev-clean.tar.gz")?;
//! assert_eq!(source.filename, "dev-clean.tar.gz");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::error::Error;

use reqwest::Url;
use std::convert::TryFrom;

/// Represents a remote archive to be fetched.
#[derive(Debug, Clone)]
pub struct Source {
    /// URL of the archive to download.
    pub url: Url,
    /// File name used to save the archive on disk.
    pub filename: String,
}

impl Source {
    /// Creates a new [`Source`].
    ///
    /// When using the [`Source::try_from`] methods, the file name is
    /// automatically extracted from the URL.
    ///
    /// ## Example
    ///
    /// The following calls are equivalent, minus some extra URL validations
    /// performed by `try_from`:
    ///
    /// ```rust
    /// use libriprep::fetch::Source;
    /// use reqwest::Url;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// Source::try_from("https://example.com/corpus-0.1.2.tar.gz")?;
    /// Source::new(&Url::parse("https://example.com/corpus-0.1.2.tar.gz")?, "corpus-0.1.2.tar.gz");
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(url: &Url, filename: &str) -> Self {
        Self {
            url: url.clone(),
            filename: String::from(filename),
        }
    }
}

impl TryFrom<&Url> for Source {
    type Error = crate::error::Error;

    fn try_from(value: &Url) -> Result<Self, Self::Error> {
        value
            .path_segments()
            .ok_or_else(|| {
                Error::InvalidUrl(format!(
                    "The url \"{}\" does not contain a valid path",
                    value
                ))
            })?
            .next_back()
            .filter(|filename| !filename.is_empty())
            .map(String::from)
            .map(|filename| Source {
                url: value.clone(),
                filename: form_urlencoded::parse(filename.as_bytes())
                    .map(|(key, val)| [key, val].concat())
                    .collect(),
            })
            .ok_or_else(|| {
                Error::InvalidUrl(format!("The url \"{}\" does not contain a filename", value))
            })
    }
}

impl TryFrom<&str> for Source {
    type Error = crate::error::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Url::parse(value)
            .map_err(|e| {
                Error::InvalidUrl(format!("The url \"{}\" cannot be parsed: {}", value, e))
            })
            .and_then(|u| Source::try_from(&u))
    }
}
