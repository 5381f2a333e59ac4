// Certificate Locator - Expand the watch pattern into candidate certificate paths

use crate::Result;
use crate::error::CheckerError;
use std::path::PathBuf;
use tracing::debug;

/// Expand a glob pattern into the list of matching paths.
///
/// `**` segments match any number of directories, so `./**/cert.pem` finds
/// `cert.pem` at every depth below the current directory. Only path
/// enumeration happens here; no file is opened.
///
/// Entries that cannot be inspected during traversal are skipped. A
/// malformed pattern is the only error.
pub fn locate(pattern: &str) -> Result<Vec<PathBuf>> {
    let entries = glob::glob(pattern).map_err(|source| CheckerError::Pattern {
        pattern: pattern.to_string(),
        source,
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) => paths.push(path),
            Err(e) => debug!("Skipping unreadable entry {}: {}", e.path().display(), e.error()),
        }
    }

    debug!("Pattern {} matched {} path(s)", pattern, paths.len());
    Ok(paths)
}
