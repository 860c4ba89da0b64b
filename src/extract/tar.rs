//! Tar.gz extraction with per-member progress.
//!
//! Extraction happens in two passes over the archive: a first pass eagerly
//! enumerates the member list so the progress bar can show a known total, and
//! a second pass unpacks each member in the archive's native order. Both
//! passes run on a blocking thread since the tar and gzip work is synchronous.
//!
//! Permissions and timestamps are whatever [`tar::Entry::unpack_in`] applies
//! by default; they are not independently controlled. A failing member stops
//! extraction at that member, leaving already-extracted files on disk.

use crate::error::{Error, Result};
use crate::extract::sanitize;
use crate::progress::display::ProgressDisplay;

use flate2::read::GzDecoder;
use indicatif::ProgressBar;
use std::fs::File;
use std::path::{Path, PathBuf};
use tar::Archive;
use tokio::{fs, task};
use tracing::debug;

/// Outcome of an [`extract`] call.
#[derive(Debug, Clone)]
pub struct ExtractSummary {
    /// Directory the members were unpacked into.
    pub path: PathBuf,
    /// Number of members written beneath it.
    pub members: usize,
}

fn open_archive(path: &Path) -> Result<Archive<GzDecoder<File>>> {
    let file = File::open(path)?;
    Ok(Archive::new(GzDecoder::new(file)))
}

/// Enumerates the member paths of a gzip-compressed tar archive, in order.
pub fn list_members(path: &Path) -> Result<Vec<PathBuf>> {
    let mut archive = open_archive(path)?;
    let mut members = Vec::new();
    for entry in archive.entries()? {
        let entry = entry?;
        members.push(entry.path()?.into_owned());
    }
    Ok(members)
}

fn unpack_all(path: &Path, destination: &Path, pb: &ProgressBar) -> Result<usize> {
    let mut archive = open_archive(path)?;
    let mut members = 0;
    for entry in archive.entries()? {
        let mut entry = entry?;
        let member_path = entry.path()?.into_owned();
        sanitize::ensure_relative(&member_path)?;
        entry.unpack_in(destination)?;
        members += 1;
        pb.inc(1);
    }
    Ok(members)
}

/// Unpacks `archive_path` beneath `destination`, one member at a time.
///
/// The destination directory is created if absent. The progress bar total
/// equals the member count gathered by the enumeration pass, and the bar
/// advances by one per member extracted.
pub async fn extract(
    archive_path: &Path,
    destination: &Path,
    display: &ProgressDisplay,
) -> Result<ExtractSummary> {
    debug!("Creating extraction directory {:?}", destination);
    fs::create_dir_all(destination).await?;

    let path = archive_path.to_path_buf();
    let members = task::spawn_blocking(move || list_members(&path))
        .await
        .map_err(|e| Error::Internal(e.to_string()))??;
    debug!("Archive holds {} members", members.len());

    let pb = display.count_bar(members.len() as u64);
    let path = archive_path.to_path_buf();
    let dest = destination.to_path_buf();
    let bar = pb.clone();
    let extracted = task::spawn_blocking(move || unpack_all(&path, &dest, &bar))
        .await
        .map_err(|e| Error::Internal(e.to_string()))??;

    display.finish_extract(pb);

    Ok(ExtractSummary {
        path: destination.to_path_buf(),
        members: extracted,
    })
}
