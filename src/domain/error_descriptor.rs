//! Error descriptor value object

use serde::Serialize;

use crate::domain::error::FileSystemError;

/// Structured code + message pair describing a failure.
///
/// This is the shape handed back across the plugin boundary. The bridge
/// forwards it to the scripting layer in its native representation; the
/// serialized form has exactly the keys `code` and `message`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorDescriptor {
    code: String,
    message: String,
}

impl ErrorDescriptor {
    /// Package an error code and human-readable message as a descriptor.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Get the error code identifier
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Get the human-readable message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<&FileSystemError> for ErrorDescriptor {
    fn from(err: &FileSystemError) -> Self {
        Self::new("fs_error", err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn fields_are_kept_unchanged() {
        let descriptor = ErrorDescriptor::new("invalidpath", "Invalid path: foo");
        assert_eq!(descriptor.code(), "invalidpath");
        assert_eq!(descriptor.message(), "Invalid path: foo");
    }

    #[test]
    fn empty_strings_are_allowed() {
        let descriptor = ErrorDescriptor::new("", "");
        assert_eq!(descriptor.code(), "");
        assert_eq!(descriptor.message(), "");
    }

    #[test]
    fn serializes_with_code_and_message_keys_only() {
        let descriptor = ErrorDescriptor::new("startfail", "Recorder busy");
        let value = serde_json::to_value(&descriptor).unwrap();

        let map = value.as_object().unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["code"], "startfail");
        assert_eq!(map["message"], "Recorder busy");
    }

    #[test]
    fn from_file_system_error_carries_detail() {
        let err = FileSystemError {
            path: PathBuf::from("/no/permission/here"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        };

        let descriptor = ErrorDescriptor::from(&err);
        assert_eq!(descriptor.code(), "fs_error");
        assert!(descriptor.message().contains("/no/permission/here"));
        assert!(descriptor.message().contains("permission denied"));
    }
}
