//! Filesystem size measurement and dependency-directory discovery.

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Measure the total size and regular-file count under a path.
///
/// - Missing paths contribute `(0, 0)` and are not an error.
/// - A regular file contributes its own size and a count of 1.
/// - Directories are walked without following symlinks, so a symlinked
///   subdirectory is excluded from the totals entirely.
/// - Unreadable files and unenumerable directories are skipped silently;
///   partial totals are acceptable.
pub fn walk_path(path: &Path) -> (u64, u64) {
    let meta = match fs::metadata(path) {
        Ok(meta) => meta,
        Err(_) => return (0, 0),
    };

    if meta.is_file() {
        return (meta.len(), 1);
    }

    let mut total_size = 0u64;
    let mut file_count = 0u64;

    for entry in WalkDir::new(path).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(_) => continue,
        };
        if !entry.file_type().is_file() {
            continue;
        }
        match entry.metadata() {
            Ok(meta) => {
                total_size += meta.len();
                file_count += 1;
            }
            Err(_) => continue,
        }
    }

    (total_size, file_count)
}

/// Locate directories named `target` under each search root.
///
/// A match is recorded as an opaque leaf: the walk never descends into it,
/// even though it is itself a tree. Descent stops `max_depth` levels below
/// each root; sibling branches at shallower depth are unaffected.
/// Unreadable directories terminate their own branch only.
pub fn find_dependency_dirs(
    search_roots: &[PathBuf],
    target: &str,
    max_depth: usize,
) -> Vec<PathBuf> {
    let mut found = Vec::new();

    for root in search_roots {
        if !root.is_dir() {
            continue;
        }

        // Explicit stack of (directory, depth below root)
        let mut stack: Vec<(PathBuf, usize)> = vec![(root.clone(), 0)];

        while let Some((dir, depth)) = stack.pop() {
            let entries = match fs::read_dir(&dir) {
                Ok(entries) => entries,
                Err(_) => continue,
            };

            for entry in entries.flatten() {
                let path = entry.path();
                let meta = match fs::symlink_metadata(&path) {
                    Ok(meta) => meta,
                    Err(_) => continue,
                };
                if !meta.is_dir() {
                    continue;
                }
                if entry.file_name() == target {
                    found.push(path);
                    continue;
                }
                if depth + 1 <= max_depth {
                    stack.push((path, depth + 1));
                }
            }
        }
    }

    found
}
