// Error types for certchecker
//
// Per-file errors (Io, InvalidPem, Parse) are recovered by the scan coordinator.
// Pattern and Config errors are fatal to the request or startup that hit them.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for certchecker operations
#[derive(Debug, Error)]
pub enum CheckerError {
    /// Watch pattern has invalid glob syntax
    #[error("Invalid glob pattern {pattern:?}: {source}")]
    Pattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// Certificate file could not be read
    #[error("I/O error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// No PEM block could be decoded from the file
    #[error("invalid PEM file: {}", .path.display())]
    InvalidPem { path: PathBuf },

    /// The PEM payload is not a valid X.509 certificate
    #[error("Certificate parsing error in {}: {details}", .path.display())]
    Parse { path: PathBuf, details: String },

    /// Invalid configuration or parameters
    #[error("Invalid configuration: {message}")]
    Config { message: String },
}

impl CheckerError {
    /// Whether the error only affects a single certificate file
    pub fn is_per_file(&self) -> bool {
        matches!(
            self,
            CheckerError::Io { .. } | CheckerError::InvalidPem { .. } | CheckerError::Parse { .. }
        )
    }
}
