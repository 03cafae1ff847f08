//! Error kinds surfaced by the store, resolver and command layer.
//!
//! Command modules wrap these in `anyhow::Error`; `main` downcasts back to
//! `JumperError` to choose the process exit status.

use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum JumperError {
    /// File open / read / write / create failure.
    Io {
        action: &'static str,
        path: PathBuf,
        source: io::Error,
    },
    /// Token did not match any bookmark.
    NotFound(String),
    /// Missing or malformed invocation.
    Usage(String),
}

impl JumperError {
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) => 2,
            Self::Io { .. } | Self::NotFound(_) => 1,
        }
    }
}

impl fmt::Display for JumperError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { action, path, source } => {
                write!(f, "failed to {action} {}: {source}", path.display())
            }
            Self::NotFound(token) => write!(f, "Folder not found: {token}"),
            Self::Usage(msg) => write!(f, "Usage: {msg}"),
        }
    }
}

impl std::error::Error for JumperError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, JumperError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_token_verbatim() {
        let err = JumperError::NotFound("my dir".into());
        assert_eq!(err.to_string(), "Folder not found: my dir");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn io_error_carries_path_and_source() {
        let err = JumperError::io(
            "read",
            "/tmp/folders",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("read /tmp/folders"));
        assert!(msg.contains("denied"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn usage_maps_to_exit_two() {
        assert_eq!(JumperError::Usage("jumper <command>".into()).exit_code(), 2);
    }
}
