//! Analysis engine boundary
//!
//! Rendering only depends on [`AnalysisEngine`], so any source of a complete
//! [`BundleReport`] can be plugged in. [`ZipCatalogEngine`] is the engine the
//! CLI ships with.

pub mod zip_catalog;

pub use zip_catalog::ZipCatalogEngine;

use crate::domain::{ArchivePath, BundleReport};
use crate::error::Result;

/// Produces a size report for a validated archive
///
/// Implementations either return a complete report or fail; failures are
/// surfaced to the user unchanged.
pub trait AnalysisEngine {
    fn analyze(&self, path: &ArchivePath) -> Result<BundleReport>;
}
