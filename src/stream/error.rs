//! Error types for capture stream processing

use std::fmt;
use std::io;

/// Result type alias for stream operations
pub type StreamResult<T> = Result<T, StreamError>;

/// Errors that can occur while demuxing or consuming a capture stream
#[derive(Debug)]
pub enum StreamError {
    /// Size prefix or payload read returned fewer bytes than declared
    StreamTruncated {
        expected: u64,
        actual: u64,
        path: String,
    },
    /// Metadata line failed to parse as JSON
    MalformedMetadata {
        line: String,
        source: serde_json::Error,
    },
    /// I/O error on the underlying stream or output channel
    Io(io::Error),
    /// Directory creation or file write failure during export
    Filesystem { path: String, source: io::Error },
}

impl fmt::Display for StreamError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StreamError::StreamTruncated {
                expected,
                actual,
                path,
            } => write!(
                f,
                "stream truncated: expected {} bytes, read {} on '{}'",
                expected, actual, path
            ),
            StreamError::MalformedMetadata { line, source } => {
                write!(f, "malformed metadata line ({}): {}", source, line)
            }
            StreamError::Io(e) => write!(f, "I/O error: {}", e),
            StreamError::Filesystem { path, source } => {
                write!(f, "filesystem error on '{}': {}", path, source)
            }
        }
    }
}

impl std::error::Error for StreamError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StreamError::MalformedMetadata { source, .. } => Some(source),
            StreamError::Io(e) => Some(e),
            StreamError::Filesystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for StreamError {
    fn from(err: io::Error) -> Self {
        StreamError::Io(err)
    }
}
