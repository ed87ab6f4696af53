//! Path resolution for user-supplied archive paths
//!
//! Joins a raw path onto a base directory and folds `.`/`..` segments
//! lexically, so a path can be resolved before anything on disk is checked.

use normpath::PathExt;
use std::path::{Component, Path, PathBuf};

/// Resolves raw paths against a fixed base directory
pub struct PathNormalizer {
    base: PathBuf,
}

impl PathNormalizer {
    /// Create a normalizer rooted at `base` (typically the current directory)
    ///
    /// The base itself is normalized through the filesystem when it exists, so
    /// symlinked temp roots (e.g. /var -> /private/var on macOS) and Windows
    /// verbatim prefixes resolve consistently.
    pub fn new(base: &Path) -> Self {
        let base = base
            .normalize()
            .map(|norm| dunce::simplified(norm.as_path()).to_path_buf())
            .unwrap_or_else(|_| base.to_path_buf());
        Self { base }
    }

    /// Resolve `raw` to an absolute, lexically normalized path
    ///
    /// Returns `None` when the input is empty, contains a NUL byte, or climbs
    /// above the filesystem root with `..`.
    pub fn resolve(&self, raw: &str) -> Option<PathBuf> {
        if raw.is_empty() || raw.contains('\0') {
            return None;
        }

        let raw = Path::new(raw);
        let joined = if raw.is_absolute() {
            raw.to_path_buf()
        } else {
            self.base.join(raw)
        };

        fold_components(&joined)
    }
}

/// Fold `.` and `..` components without touching the filesystem
fn fold_components(path: &Path) -> Option<PathBuf> {
    let mut prefix = PathBuf::new();
    let mut parts: Vec<&std::ffi::OsStr> = Vec::new();

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => prefix.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                parts.pop()?;
            }
            Component::Normal(part) => parts.push(part),
        }
    }

    let mut result = prefix;
    for part in parts {
        result.push(part);
    }
    Some(result)
}
