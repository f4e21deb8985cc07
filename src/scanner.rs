//! Scan engine: runs the catalog against the size walker and docker probe,
//! producing populated categories with aggregated statistics.

use crate::catalog::{self, CategorySpec, ScanTarget, Source};
use crate::docker;
use crate::theme::Theme;
use crate::walker;
use std::fs;
use std::path::{Path, PathBuf};

/// One measured location contributing to a category. Built once per scan,
/// immutable thereafter.
#[derive(Debug, Clone)]
pub struct PathItem {
    pub target: ScanTarget,
    pub size_bytes: u64,
    pub file_count: u64,
}

/// Named group of items representing one class of reclaimable data.
#[derive(Debug, Clone)]
pub struct Category {
    pub name: &'static str,
    pub description: &'static str,
    pub items: Vec<PathItem>,
}

impl Category {
    pub fn total_size(&self) -> u64 {
        self.items.iter().map(|item| item.size_bytes).sum()
    }

    pub fn total_files(&self) -> u64 {
        self.items.iter().map(|item| item.file_count).sum()
    }
}

/// Scan every catalog category in order, invoking `progress` with
/// `(completed, total)` after each one finishes.
///
/// Categories that found nothing are filtered out, preserving order.
/// Docker Data is exempt: it always carries its single item, even at zero
/// bytes, so the operator can still see the engine once it was probed.
pub fn scan_all<F: FnMut(usize, usize)>(mut progress: F) -> Vec<Category> {
    let specs = catalog::catalog();
    let total = specs.len();
    let mut categories = Vec::with_capacity(total);

    for (step, spec) in specs.iter().enumerate() {
        categories.push(Category {
            name: spec.name,
            description: spec.description,
            items: populate(spec),
        });
        progress(step + 1, total);
    }

    categories
        .into_iter()
        .filter(|category| !category.items.is_empty())
        .collect()
}

fn populate(spec: &CategorySpec) -> Vec<PathItem> {
    match spec.source {
        Source::Fixed(entries) => {
            let paths: Vec<PathBuf> = entries.iter().map(|entry| catalog::expand(entry)).collect();
            measure_existing(&paths)
        }
        Source::Discovery { roots } => {
            let roots: Vec<PathBuf> = roots.iter().map(|root| catalog::expand(root)).collect();
            let dirs = walker::find_dependency_dirs(
                &roots,
                catalog::DEPENDENCY_DIR,
                catalog::DISCOVERY_MAX_DEPTH,
            );
            measure_existing(&dirs)
        }
        Source::CacheChildren { root } => cache_children(&catalog::expand(root)),
        Source::Docker => vec![docker_item()],
    }
}

/// Measure each existing candidate path. Paths holding no counted files are
/// dropped unless they are regular files themselves.
fn measure_existing(paths: &[PathBuf]) -> Vec<PathItem> {
    let mut items = Vec::new();

    for path in paths {
        if !path.exists() {
            continue;
        }
        let (size_bytes, file_count) = walker::walk_path(path);
        if file_count > 0 || path.is_file() {
            items.push(PathItem {
                target: ScanTarget::Path(path.clone()),
                size_bytes,
                file_count,
            });
        }
    }

    items
}

/// List the immediate children of a cache root, excluding protected names
/// and entries whose measured size is zero.
fn cache_children(root: &Path) -> Vec<PathItem> {
    let mut items = Vec::new();

    let entries = match fs::read_dir(root) {
        Ok(entries) => entries,
        Err(_) => return items,
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if catalog::is_protected(&path) {
            continue;
        }
        let (size_bytes, file_count) = walker::walk_path(&path);
        if size_bytes > 0 {
            items.push(PathItem {
                target: ScanTarget::Path(path),
                size_bytes,
                file_count,
            });
        }
    }

    items
}

/// Probe the docker daemon for its reclaimable byte count.
///
/// Unavailability degrades to a zero-byte item with a printed warning; the
/// item is kept so the category still surfaces the engine.
fn docker_item() -> PathItem {
    let size_bytes = if docker::client_path().is_none() {
        println!(
            "{}",
            Theme::warning("[WARNING] docker client not found; reclaimable space not computed")
        );
        0
    } else if !docker::engine_running() {
        println!(
            "{}",
            Theme::warning("[WARNING] Docker is not running; reclaimable space not computed")
        );
        0
    } else {
        docker::reclaimable_bytes()
    };

    PathItem {
        target: ScanTarget::DockerStore,
        size_bytes,
        file_count: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_dir() -> TempDir {
        tempfile::tempdir().unwrap()
    }

    #[test]
    fn test_measure_existing_skips_missing_and_empty() {
        let temp_dir = create_test_dir();
        let full = temp_dir.path().join("full");
        fs::create_dir(&full).unwrap();
        fs::write(full.join("data.bin"), vec![0u8; 300]).unwrap();

        let empty = temp_dir.path().join("empty");
        fs::create_dir(&empty).unwrap();

        let missing = temp_dir.path().join("missing");

        let items = measure_existing(&[full.clone(), empty, missing]);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].target, ScanTarget::Path(full));
        assert_eq!(items[0].size_bytes, 300);
        assert_eq!(items[0].file_count, 1);
    }

    #[test]
    fn test_measure_existing_keeps_regular_file() {
        let temp_dir = create_test_dir();
        let file = temp_dir.path().join("leftover.log");
        fs::write(&file, "x").unwrap();

        let items = measure_existing(&[file.clone()]);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].size_bytes, 1);
    }

    #[test]
    fn test_cache_children_excludes_protected_and_empty() {
        let temp_dir = create_test_dir();
        let vendor = temp_dir.path().join("com.apple.Safari");
        fs::create_dir(&vendor).unwrap();
        fs::write(vendor.join("cache.db"), vec![0u8; 50]).unwrap();

        let third_party = temp_dir.path().join("com.spotify.client");
        fs::create_dir(&third_party).unwrap();
        fs::write(third_party.join("blob"), vec![0u8; 80]).unwrap();

        let empty = temp_dir.path().join("org.empty.app");
        fs::create_dir(&empty).unwrap();

        let items = cache_children(temp_dir.path());
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].target, ScanTarget::Path(third_party));
        assert_eq!(items[0].size_bytes, 80);
    }

    #[test]
    fn test_cache_children_missing_root() {
        let temp_dir = create_test_dir();
        assert!(cache_children(&temp_dir.path().join("nope")).is_empty());
    }

    #[test]
    fn test_category_totals() {
        let category = Category {
            name: "Test",
            description: "totals",
            items: vec![
                PathItem {
                    target: ScanTarget::Path(PathBuf::from("/a")),
                    size_bytes: 100,
                    file_count: 2,
                },
                PathItem {
                    target: ScanTarget::Path(PathBuf::from("/b")),
                    size_bytes: 400,
                    file_count: 3,
                },
            ],
        };
        assert_eq!(category.total_size(), 500);
        assert_eq!(category.total_files(), 5);
    }
}
