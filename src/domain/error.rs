//! Domain error types

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error when creating directories on the filesystem fails
#[derive(Debug, Error)]
#[error("Failed to create directories at \"{}\": {source}", path.display())]
pub struct FileSystemError {
    /// The resolved absolute path the operation was working on
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}
