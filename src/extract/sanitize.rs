//! Archive member path validation.
//!
//! The tar primitive already refuses to unpack outside its destination, but
//! member paths are rejected here first so an escaping entry fails loudly with
//! [`Error::UnsafePath`] instead of being silently skipped.

use crate::error::{Error, Result};

use std::path::{Component, Path};

/// Ensures a member path stays beneath the extraction directory.
///
/// Rejects absolute paths, Windows path prefixes, and any path containing a
/// parent-directory segment.
pub fn ensure_relative(path: &Path) -> Result<()> {
    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir | Component::ParentDir => {
                return Err(Error::UnsafePath {
                    path: path.to_path_buf(),
                })
            }
            Component::CurDir | Component::Normal(_) => (),
        }
    }
    Ok(())
}
