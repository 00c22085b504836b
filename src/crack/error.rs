// Centralized error handling module
// Context-rich error types for registry lookup, validation and cracking

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Main error type for the cracking engine and its CLI
#[derive(Debug)]
pub enum CrackError {
    /// Selector matched neither an in-range index nor a known name
    UnknownAlgorithm { selector: String },

    /// Target hash is empty or contains non-hex characters
    InvalidHashFormat { hash: String },

    /// Target hash length does not match the algorithm's digest length
    HashLengthMismatch {
        algorithm: String,
        expected: usize,
        actual: usize,
    },

    /// File system errors with context
    FileNotFound { path: PathBuf },
    PermissionDenied { path: PathBuf, operation: String },
    Io {
        path: Option<PathBuf>,
        operation: String,
        source: io::Error,
    },
}

impl fmt::Display for CrackError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CrackError::UnknownAlgorithm { selector } => {
                writeln!(f, "Invalid or unsupported algorithm: '{}'", selector)?;
                write!(f, "Suggestion: Use the 'list' command to see all supported algorithms")
            }
            CrackError::InvalidHashFormat { hash } => {
                writeln!(f, "Invalid hash format: '{}'", hash)?;
                write!(
                    f,
                    "Suggestion: The hash must be non-empty hexadecimal (e.g. '5f4dcc3b5aa765d61d8327deb882cf99')"
                )
            }
            CrackError::HashLengthMismatch {
                algorithm,
                expected,
                actual,
            } => {
                writeln!(
                    f,
                    "Hash length mismatch for algorithm '{}': expected {} characters, got {}",
                    algorithm, expected, actual
                )?;
                write!(f, "Suggestion: Check that the hash was produced by the selected algorithm")
            }
            CrackError::FileNotFound { path } => {
                writeln!(f, "File not found: {}", path.display())?;
                write!(f, "Suggestion: Check that the file path is correct and the file exists")
            }
            CrackError::PermissionDenied { path, operation } => {
                writeln!(
                    f,
                    "Permission denied while {} file: {}",
                    operation,
                    path.display()
                )?;
                write!(f, "Suggestion: Check file permissions or run with appropriate privileges")
            }
            CrackError::Io {
                path,
                operation,
                source,
            } => {
                if let Some(p) = path {
                    writeln!(f, "I/O error while {} file {}: {}", operation, p.display(), source)?;
                } else {
                    writeln!(f, "I/O error while {}: {}", operation, source)?;
                }
                write!(f, "Suggestion: Check file permissions and disk space")
            }
        }
    }
}

impl std::error::Error for CrackError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CrackError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl CrackError {
    /// Create an I/O error with context about the operation and optional
    /// path, mapping the common kinds to dedicated variants
    pub fn from_io_error(err: io::Error, operation: &str, path: Option<PathBuf>) -> Self {
        match (err.kind(), path) {
            (io::ErrorKind::NotFound, Some(p)) => CrackError::FileNotFound { path: p },
            (io::ErrorKind::PermissionDenied, Some(p)) => CrackError::PermissionDenied {
                path: p,
                operation: operation.to_string(),
            },
            (_, path) => CrackError::Io {
                path,
                operation: operation.to_string(),
                source: err,
            },
        }
    }
}
