//! Filesystem path helpers
//!
//! Stateless free functions resolving recording paths against the platform's
//! well-known directories. Paths are recomputed per call; only the two
//! `create_directories*` functions mutate the filesystem, and both are
//! idempotent (an already-existing directory is success, not an error).

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::domain::error::FileSystemError;

/// Platform user-documents directory.
///
/// Falls back to `$HOME/Documents`, then to the current directory, when the
/// platform does not report one.
pub fn documents_dir() -> PathBuf {
    dirs::document_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Documents")))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Documents directory joined with a relative sub-path.
pub fn documents_dir_with(path: impl AsRef<Path>) -> PathBuf {
    documents_dir().join(path)
}

/// Platform temporary directory.
pub fn temporary_dir() -> PathBuf {
    env::temp_dir()
}

/// Temporary directory joined with a relative sub-path.
pub fn temporary_dir_with(path: impl AsRef<Path>) -> PathBuf {
    temporary_dir().join(path)
}

/// Resolve a possibly-relative path to an absolute one.
///
/// Absolute input is returned unchanged, so the function is idempotent.
/// Relative input is resolved against the documents directory, which keeps
/// scripting-side paths like `recordings/take1.mp4` in persistent storage.
pub fn absolute_path(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        documents_dir_with(path)
    }
}

/// Directory component of the resolved absolute path.
///
/// A path with no parent (the filesystem root) resolves to itself.
pub fn absolute_directory_for(path: impl AsRef<Path>) -> PathBuf {
    let resolved = absolute_path(path);
    match resolved.parent() {
        Some(parent) => parent.to_path_buf(),
        None => resolved,
    }
}

/// Recursively create all missing directory components of `path`.
///
/// Relative input is resolved with [`absolute_path`] first. Succeeds without
/// touching anything when the directory already exists.
pub fn create_directories(path: impl AsRef<Path>) -> Result<(), FileSystemError> {
    let resolved = absolute_path(path);
    debug!("Creating directories at {}", resolved.display());

    if let Err(source) = fs::create_dir_all(&resolved) {
        warn!(
            "Failed to create directories at {}: {}",
            resolved.display(),
            source
        );
        return Err(FileSystemError {
            path: resolved,
            source,
        });
    }
    Ok(())
}

/// Create the directory chain needed to contain a file at `path`.
///
/// Only the parent directories are created, never `path` itself. A path with
/// no parent needs nothing created and succeeds.
pub fn create_directories_for_file(path: impl AsRef<Path>) -> Result<(), FileSystemError> {
    let resolved = absolute_path(path);
    match resolved.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => create_directories(parent),
        _ => Ok(()),
    }
}
