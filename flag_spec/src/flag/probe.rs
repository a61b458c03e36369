//! Read-only filesystem checks for path-typed values.
//!
//! Probes follow symlinks, so a link to a regular file counts as a regular
//! file.

use std::fs::{self, Metadata};
use std::io;

use camino::Utf8Path;
use serde::de::IgnoredAny;

use crate::error::{PathKind, ValidationError};

/// Error kinds meaning no entry exists at the path, including a file used
/// as a directory component.
const fn is_missing(kind: io::ErrorKind) -> bool {
    matches!(
        kind,
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory | io::ErrorKind::InvalidFilename
    )
}

fn stat(path: &Utf8Path, kind: PathKind, label: &str) -> Result<Metadata, ValidationError> {
    fs::metadata(path).map_err(|source| {
        if is_missing(source.kind()) {
            ValidationError::PathNotFound {
                kind,
                path: path.to_owned(),
                label: label.to_owned(),
            }
        } else {
            ValidationError::FileUnreadable {
                path: path.to_owned(),
                label: label.to_owned(),
                source,
            }
        }
    })
}

/// The path names an existing entry of any kind.
pub(super) fn ensure_exists(path: &Utf8Path, label: &str) -> Result<(), ValidationError> {
    stat(path, PathKind::File, label).map(drop)
}

/// The path names an existing regular file.
pub(super) fn ensure_regular_file(path: &Utf8Path, label: &str) -> Result<(), ValidationError> {
    if stat(path, PathKind::File, label)?.is_file() {
        Ok(())
    } else {
        Err(ValidationError::NotARegularFile {
            path: path.to_owned(),
            label: label.to_owned(),
        })
    }
}

/// The path names an existing directory.
pub(super) fn ensure_directory(path: &Utf8Path, label: &str) -> Result<(), ValidationError> {
    if stat(path, PathKind::Directory, label)?.is_dir() {
        Ok(())
    } else {
        Err(ValidationError::NotADirectory {
            path: path.to_owned(),
            label: label.to_owned(),
        })
    }
}

/// The file contents parse as a single JSON document.
pub(super) fn ensure_json(path: &Utf8Path, label: &str) -> Result<(), ValidationError> {
    let data = fs::read(path).map_err(|source| ValidationError::FileUnreadable {
        path: path.to_owned(),
        label: label.to_owned(),
        source,
    })?;
    serde_json::from_slice::<IgnoredAny>(&data)
        .map(drop)
        .map_err(|source| ValidationError::InvalidJson {
            path: path.to_owned(),
            label: label.to_owned(),
            source,
        })
}
