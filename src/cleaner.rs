//! Deletion engine: guarded removal of selected items.
//!
//! Each attempt is isolated. A permission problem, a protected path, or a
//! dead docker daemon produces a per-item notice and the batch moves on;
//! nothing short of process termination stops the queue.

use crate::catalog::{self, ScanTarget};
use crate::docker;
use crate::scanner::PathItem;
use crate::theme::Theme;
use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::Path;

/// What happened to a single item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The path was already gone
    SkippedMissing,
    /// Reserved-vendor prefix; never deleted regardless of category
    SkippedProtected,
    /// Plain permission denial (EACCES)
    SkippedPermission,
    /// The OS refused the removal despite nominal permission (EPERM, SIP)
    SkippedSystem,
    /// Docker daemon went away between scan and deletion
    SkippedEngineDown,
}

/// Tally of one deletion batch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchReport {
    pub deleted: usize,
    pub skipped: usize,
    pub errors: usize,
}

// EACCES on macOS/Linux
const PERMISSION_DENIED: i32 = 13;
// EPERM: the platform actively refuses (System Integrity Protection)
const OPERATION_NOT_PERMITTED: i32 = 1;

fn classify_io_error(err: &io::Error) -> Option<DeleteOutcome> {
    match err.raw_os_error() {
        Some(PERMISSION_DENIED) => Some(DeleteOutcome::SkippedPermission),
        Some(OPERATION_NOT_PERMITTED) => Some(DeleteOutcome::SkippedSystem),
        _ if err.kind() == io::ErrorKind::PermissionDenied => {
            Some(DeleteOutcome::SkippedPermission)
        }
        _ => None,
    }
}

/// Delete one real filesystem path.
///
/// Directories (that are not symlinks) are removed with their contents;
/// files and symlinks are unlinked, tolerating a path that is already gone.
/// Recoverable refusals come back as outcomes; anything else is an error
/// for the caller to report.
pub fn delete_path(path: &Path) -> Result<DeleteOutcome> {
    if catalog::is_protected(path) {
        return Ok(DeleteOutcome::SkippedProtected);
    }

    let meta = match fs::symlink_metadata(path) {
        Ok(meta) => meta,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            return Ok(DeleteOutcome::SkippedMissing)
        }
        Err(err) => {
            return match classify_io_error(&err) {
                Some(outcome) => Ok(outcome),
                None => Err(err).with_context(|| format!("failed to stat {}", path.display())),
            }
        }
    };

    // symlink_metadata never follows links, so a symlinked directory is
    // unlinked rather than recursed into
    let result = if meta.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };

    match result {
        Ok(()) => Ok(DeleteOutcome::Deleted),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(DeleteOutcome::SkippedMissing),
        Err(err) => match classify_io_error(&err) {
            Some(outcome) => Ok(outcome),
            None => Err(err).with_context(|| format!("failed to delete {}", path.display())),
        },
    }
}

/// Prune the docker storage pool, re-checking the daemon first.
///
/// State may have changed since the scan; a daemon that went away is a
/// skip, not an error.
fn delete_docker_store() -> Result<DeleteOutcome> {
    if !docker::engine_running() {
        return Ok(DeleteOutcome::SkippedEngineDown);
    }
    println!(
        "{}",
        Theme::warning("Running docker system prune -af --volumes...")
    );
    docker::prune()?;
    Ok(DeleteOutcome::Deleted)
}

/// Process the selected items in order, printing one line per item.
pub fn clean_items(items: &[PathItem]) -> BatchReport {
    let mut report = BatchReport::default();

    for item in items {
        let outcome = match &item.target {
            ScanTarget::DockerStore => delete_docker_store(),
            ScanTarget::Path(path) => delete_path(path),
        };
        record_outcome(&item.target, outcome, &mut report);
    }

    report
}

fn record_outcome(target: &ScanTarget, outcome: Result<DeleteOutcome>, report: &mut BatchReport) {
    match outcome {
        Ok(DeleteOutcome::Deleted) => {
            report.deleted += 1;
            match target {
                ScanTarget::DockerStore => {
                    println!("{}", Theme::success("Docker storage pruned."))
                }
                ScanTarget::Path(_) => {
                    println!("{}", Theme::success(&format!("Deleted: {}", target)))
                }
            }
        }
        Ok(DeleteOutcome::SkippedMissing) => {
            report.skipped += 1;
            println!(
                "{}",
                Theme::muted(&format!("[SKIPPED] Already gone: {}", target))
            );
        }
        Ok(DeleteOutcome::SkippedProtected) => {
            report.skipped += 1;
            println!(
                "{}",
                Theme::muted(&format!("[SKIPPED] Protected path: {}", target))
            );
        }
        Ok(DeleteOutcome::SkippedPermission) => {
            report.skipped += 1;
            println!(
                "{}",
                Theme::warning(&format!("[SKIPPED] Permission denied: {}", target))
            );
        }
        Ok(DeleteOutcome::SkippedSystem) => {
            report.skipped += 1;
            println!(
                "{}",
                Theme::muted(&format!("[SKIPPED] Blocked by macOS: {}", target))
            );
        }
        Ok(DeleteOutcome::SkippedEngineDown) => {
            report.skipped += 1;
            println!(
                "{}",
                Theme::warning("[SKIPPED] Docker is not running; skipping docker system prune.")
            );
        }
        Err(err) => {
            report.errors += 1;
            println!("{}", Theme::error(&format!("[ERROR] {}: {:#}", target, err)));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ScanTarget;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn create_test_dir() -> TempDir {
        tempfile::tempdir().unwrap()
    }

    fn item(path: PathBuf) -> PathItem {
        PathItem {
            target: ScanTarget::Path(path),
            size_bytes: 0,
            file_count: 0,
        }
    }

    #[test]
    fn test_delete_directory_tree() {
        let temp_dir = create_test_dir();
        let victim = temp_dir.path().join("cache");
        fs::create_dir_all(victim.join("nested")).unwrap();
        fs::write(victim.join("nested").join("blob"), "data").unwrap();

        assert_eq!(delete_path(&victim).unwrap(), DeleteOutcome::Deleted);
        assert!(!victim.exists());
    }

    #[test]
    fn test_delete_regular_file() {
        let temp_dir = create_test_dir();
        let file = temp_dir.path().join("stale.log");
        fs::write(&file, "x").unwrap();

        assert_eq!(delete_path(&file).unwrap(), DeleteOutcome::Deleted);
        assert!(!file.exists());
    }

    #[test]
    fn test_delete_missing_path_is_skip() {
        let temp_dir = create_test_dir();
        let missing = temp_dir.path().join("gone");
        assert_eq!(delete_path(&missing).unwrap(), DeleteOutcome::SkippedMissing);
    }

    #[test]
    fn test_protected_path_never_deleted() {
        let temp_dir = create_test_dir();
        let vendor = temp_dir.path().join("com.apple.Preview");
        fs::create_dir(&vendor).unwrap();
        fs::write(vendor.join("cache"), "x").unwrap();

        assert_eq!(
            delete_path(&vendor).unwrap(),
            DeleteOutcome::SkippedProtected
        );
        assert!(vendor.exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_delete_symlink_unlinks_without_touching_target() {
        let temp_dir = create_test_dir();
        let target = temp_dir.path().join("real");
        fs::create_dir(&target).unwrap();
        fs::write(target.join("keep.txt"), "keep").unwrap();

        let link = temp_dir.path().join("link");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        assert_eq!(delete_path(&link).unwrap(), DeleteOutcome::Deleted);
        assert!(!link.exists());
        assert!(target.join("keep.txt").exists());
    }

    #[test]
    fn test_batch_continues_past_skips() {
        let temp_dir = create_test_dir();
        let vendor = temp_dir.path().join("com.apple.Music");
        fs::create_dir(&vendor).unwrap();

        let real = temp_dir.path().join("junk");
        fs::create_dir(&real).unwrap();
        fs::write(real.join("blob"), "data").unwrap();

        let items = vec![
            item(vendor.clone()),
            item(temp_dir.path().join("missing")),
            item(real.clone()),
        ];

        let report = clean_items(&items);
        assert_eq!(report.deleted, 1);
        assert_eq!(report.skipped, 2);
        assert_eq!(report.errors, 0);
        assert!(vendor.exists());
        assert!(!real.exists());
    }
}
