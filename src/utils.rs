//! Shared path helpers used across the scanner and catalog.

use directories::BaseDirs;
use std::path::PathBuf;

/// The operator's home directory.
///
/// Falls back to `/` when the home directory cannot be determined, which
/// makes every `~/` catalog entry resolve to a path that simply won't exist.
pub fn home_dir() -> PathBuf {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/"))
}

/// Expand a catalog path entry, resolving a leading `~/` against the home
/// directory at call time.
pub fn expand(entry: &str) -> PathBuf {
    match entry.strip_prefix("~/") {
        Some(rest) => home_dir().join(rest),
        None => PathBuf::from(entry),
    }
}
