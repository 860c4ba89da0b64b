//! Streaming fetch logic.
//!
//! This module downloads a [`Source`] to a local file, chunk by chunk, while
//! advancing a byte-based progress bar. A file already present at the
//! destination short-circuits the transfer entirely: no request is made and
//! the existing file is returned as-is, without any integrity validation.

use crate::error::Result;
use crate::fetch::Source;
use crate::progress::display::ProgressDisplay;

use futures::stream::StreamExt;
use reqwest_middleware::ClientWithMiddleware;
use std::path::{Path, PathBuf};
use tokio::{fs, fs::OpenOptions, io::AsyncWriteExt};
use tracing::debug;

/// How the fetch concluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchStatus {
    /// The archive was transferred from the remote.
    Downloaded,
    /// A file already existed at the destination; no request was made.
    SkippedExisting,
}

/// Outcome of a [`fetch`] call.
#[derive(Debug, Clone)]
pub struct FetchSummary {
    /// Where the archive lives on disk.
    pub path: PathBuf,
    /// Bytes written (or the size of the pre-existing file when skipped).
    pub bytes: u64,
    /// Whether the transfer happened or was skipped.
    pub status: FetchStatus,
}

/// Streams `source` to `destination`, reporting progress after each chunk.
///
/// The destination's parent directory is created if absent. If a file already
/// exists at `destination`, the transfer is skipped and the existing path is
/// returned immediately. A non-success HTTP status is fatal and surfaced to
/// the caller; no retry is attempted and no partial file is cleaned up.
///
/// The progress bar total comes from the response's `Content-Length` header.
/// A missing or zero value degrades the bar to a counting-only display.
pub async fn fetch(
    client: &ClientWithMiddleware,
    source: &Source,
    destination: &Path,
    display: &ProgressDisplay,
) -> Result<FetchSummary> {
    // Prepare the destination directory.
    let parent = destination.parent().unwrap_or(destination);
    debug!("Creating destination directory {:?}", parent);
    fs::create_dir_all(parent).await?;

    // Short-circuit if the file is already on disk. The pre-existing file is
    // trusted as-is; completeness is never checked.
    if destination.exists() {
        let bytes = fs::metadata(destination).await?.len();
        display.println(format!("File already exists at {}", destination.display()));
        return Ok(FetchSummary {
            path: destination.to_path_buf(),
            bytes,
            status: FetchStatus::SkippedExisting,
        });
    }

    // Request the file and fail fast on a non-success status.
    debug!("Fetching {}", &source.url);
    let res = client.get(source.url.as_str()).send().await?;
    let res = res.error_for_status()?;

    // Zero or absent content-length means the total is unknown.
    let total = res.content_length().filter(|&len| len > 0);
    let pb = display.bytes_bar(total);

    debug!("Creating destination file {:?}", destination);
    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(destination)
        .await?;

    // Download the file chunk by chunk.
    debug!("Retrieving chunks...");
    let mut bytes: u64 = 0;
    let mut stream = res.bytes_stream();
    while let Some(item) = stream.next().await {
        let mut chunk = item?;
        let chunk_size = chunk.len() as u64;
        file.write_all_buf(&mut chunk).await?;
        bytes += chunk_size;
        pb.inc(chunk_size);
    }
    file.flush().await?;

    display.finish_download(pb);

    Ok(FetchSummary {
        path: destination.to_path_buf(),
        bytes,
        status: FetchStatus::Downloaded,
    })
}
