// certchecker - Expiry status of TLS certificates on disk, served over HTTP
// Copyright (C) 2025 Marc Rivero (@seifreed)
// Licensed under GPL-3.0

//! certchecker answers, per HTTP request, what the expiry status of every
//! certificate file matching a glob pattern is. Each request locates the
//! files, reads and classifies them concurrently, and returns the
//! successful reports as JSON. Files that fail to load are logged and left
//! out; they never fail the request.

pub mod api;
pub mod certificates;
pub mod cli;
pub mod config;
pub mod error;
pub mod scanner;

// Re-export commonly used types
pub use crate::certificates::{CertStatus, CertificateRecord};
pub use crate::cli::Args;
pub use crate::config::CheckerConfig;
pub use crate::error::CheckerError;
pub use crate::scanner::{ScanCoordinator, ScanResult};

/// Result type for certchecker operations
pub type Result<T> = std::result::Result<T, CheckerError>;
