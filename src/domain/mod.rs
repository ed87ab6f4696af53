//! Domain models for ipa-report
//!
//! This module contains the validated archive path and the size report
//! produced by an analysis engine. These types carry no rendering logic.

pub mod archive_path;
pub mod report;

pub use archive_path::ArchivePath;
pub use report::{ArtifactNode, BundleReport};
