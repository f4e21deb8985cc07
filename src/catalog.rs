//! Static registry of cleanable categories.
//!
//! Each category maps to a list of candidate locations: fixed paths
//! (`~/` entries expand against the operator's home at scan time), a
//! bounded-depth discovery walk for `node_modules` directories, a listing
//! of user cache children, or the docker storage pool.

use crate::utils;
use std::fmt;
use std::path::{Path, PathBuf};

/// Final path component prefix for first-party macOS data. Paths matching
/// this prefix are excluded from scanning and must never be deleted.
pub const PROTECTED_PREFIX: &str = "com.apple.";

/// Directory name located by the discovery walk.
pub const DEPENDENCY_DIR: &str = "node_modules";

/// Levels below each search root the discovery walk may descend.
pub const DISCOVERY_MAX_DEPTH: usize = 5;

/// One measurable location: a real filesystem path, or the docker storage
/// pool whose reclaimable size comes from the daemon rather than a walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanTarget {
    Path(PathBuf),
    DockerStore,
}

impl ScanTarget {
    pub fn as_path(&self) -> Option<&Path> {
        match self {
            ScanTarget::Path(path) => Some(path),
            ScanTarget::DockerStore => None,
        }
    }
}

impl fmt::Display for ScanTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanTarget::Path(path) => write!(f, "{}", path.display()),
            ScanTarget::DockerStore => f.write_str("[Docker]"),
        }
    }
}

/// How a category's items are found.
#[derive(Debug, Clone, Copy)]
pub enum Source {
    /// Fixed candidate paths, kept when they exist and hold counted files.
    Fixed(&'static [&'static str]),
    /// Bounded-depth walk for [`DEPENDENCY_DIR`] under project roots.
    Discovery { roots: &'static [&'static str] },
    /// Immediate children of one root, excluding [`PROTECTED_PREFIX`] names
    /// and zero-size entries.
    CacheChildren { root: &'static str },
    /// Reclaimable space reported by the docker daemon.
    Docker,
}

/// One catalog entry.
#[derive(Debug, Clone, Copy)]
pub struct CategorySpec {
    pub name: &'static str,
    pub description: &'static str,
    pub source: Source,
}

/// The full scan catalog, in scan order. Docker is always last.
pub fn catalog() -> Vec<CategorySpec> {
    vec![
        CategorySpec {
            name: "Temporary Files",
            description: "System and application temp files",
            source: Source::Fixed(&[
                "/tmp",
                "/var/tmp",
                "/private/var/tmp",
                "/private/var/folders",
            ]),
        },
        CategorySpec {
            name: "System Log Files",
            description: "System and application logs",
            source: Source::Fixed(&["~/Library/Logs", "/var/log", "/Library/Logs"]),
        },
        CategorySpec {
            name: "Homebrew Cache",
            description: "Homebrew caches and downloads",
            source: Source::Fixed(&[
                "~/Library/Caches/Homebrew",
                "/Library/Caches/Homebrew",
                "/opt/homebrew/var/homebrew",
            ]),
        },
        CategorySpec {
            name: "Browser Cache",
            description: "Per-browser cache directories",
            source: Source::Fixed(&[
                "~/Library/Caches/com.apple.Safari",
                "~/Library/Caches/Google/Chrome",
                "~/Library/Caches/Firefox",
                "~/Library/Caches/Mozilla",
                "~/Library/Caches/BraveSoftware",
                "~/Library/Caches/Microsoft Edge",
            ]),
        },
        CategorySpec {
            name: "Node Modules",
            description: "node_modules directories found in projects",
            source: Source::Discovery {
                roots: &["~/Projects", "~/Documents", "~/workspace", "~/Work"],
            },
        },
        CategorySpec {
            name: "User Cache Files",
            description: "User caches (excluding com.apple.*)",
            source: Source::CacheChildren {
                root: "~/Library/Caches",
            },
        },
        CategorySpec {
            name: "Development Cache",
            description: "Xcode, npm, pip, yarn, and CocoaPods caches",
            source: Source::Fixed(&[
                "~/Library/Developer/Xcode/DerivedData",
                "~/Library/Developer/Xcode/Archives",
                "~/Library/Developer/Xcode/iOS DeviceSupport",
                "~/Library/Caches/CocoaPods",
                "~/.npm",
                "~/.cache/yarn",
                "~/.cache/pip",
                "~/.pnpm-store",
            ]),
        },
        CategorySpec {
            name: "Docker Data",
            description: "Unused Docker images, containers, and volumes",
            source: Source::Docker,
        },
    ]
}

/// Expand a catalog path entry against the current home directory.
pub fn expand(entry: &str) -> PathBuf {
    utils::expand(entry)
}

/// True if the path's final name component carries the protected prefix.
pub fn is_protected(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().starts_with(PROTECTED_PREFIX))
        .unwrap_or(false)
}
