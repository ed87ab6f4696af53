//! Validated archive path
//!
//! An [`ArchivePath`] can only be built through [`ArchivePath::validate`], so
//! holding one means the path is absolute, normalized, names an existing file
//! and carries the `.ipa` extension.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::common::path_normalizer::PathNormalizer;
use crate::error::{Result, input};

/// Extension required on every analyzed archive (case-sensitive)
pub const ARCHIVE_EXTENSION: &str = "ipa";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchivePath(PathBuf);

impl ArchivePath {
    /// Resolve `raw` against `cwd` and validate the result
    ///
    /// Fails with an invalid input error when the path cannot be resolved or
    /// the final component does not end in `.ipa`, and with a not found error
    /// when nothing exists at the resolved location.
    pub fn validate(raw: &str, cwd: &Path) -> Result<Self> {
        let resolved = PathNormalizer::new(cwd)
            .resolve(raw)
            .ok_or_else(input::not_an_ipa)?;

        if extension_of(&resolved) != Some(ARCHIVE_EXTENSION) {
            return Err(input::not_an_ipa());
        }

        if !resolved.is_file() {
            return Err(input::archive_not_found(resolved.display().to_string()));
        }

        Ok(Self(resolved))
    }

    /// Validate `raw` against the process's current directory
    pub fn from_current_dir(raw: &str) -> Result<Self> {
        let cwd = std::env::current_dir()
            .map_err(|e| input::working_directory_unavailable(e.to_string()))?;
        Self::validate(raw, &cwd)
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// File name without the `.ipa` suffix
    pub fn stem(&self) -> String {
        self.0
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

impl fmt::Display for ArchivePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Substring after the final `.` of the final path component
fn extension_of(path: &Path) -> Option<&str> {
    path.file_name()?.to_str()?.rsplit_once('.').map(|(_, ext)| ext)
}
