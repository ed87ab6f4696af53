//! Error types and handling for ipa-report
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`input`]: Path validation errors raised before any analysis runs
//! - [`analysis`]: Failures reported by the analysis engine

pub mod analysis;
pub mod input;

use miette::Diagnostic;
use thiserror::Error;

/// Broad classification of a failure, independent of its message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The user-supplied path was rejected
    InvalidInput,
    /// The analysis engine could not produce a report
    AnalysisFailure,
    /// Writing the report or reading process state failed
    Io,
}

/// Main error type for ipa-report operations
#[derive(Error, Diagnostic, Debug)]
pub enum IpaReportError {
    // Input errors
    #[error("{message}")]
    #[diagnostic(
        code(ipa_report::input::invalid),
        help("Pass the path of an .ipa archive, e.g. --path ./App.ipa")
    )]
    InvalidInput { message: String },

    #[error("Archive not found: {path}")]
    #[diagnostic(
        code(ipa_report::input::not_found),
        help("Check that the path is correct relative to the current directory")
    )]
    ArchiveNotFound { path: String },

    #[error("Failed to read current directory: {reason}")]
    #[diagnostic(code(ipa_report::input::working_directory))]
    WorkingDirectoryUnavailable { reason: String },

    // Analysis errors
    #[error("Failed to analyze {path}: {reason}")]
    #[diagnostic(code(ipa_report::analysis::failed))]
    AnalysisFailed { path: String, reason: String },

    // I/O errors
    #[error("IO error: {message}")]
    #[diagnostic(code(ipa_report::io::error))]
    IoError { message: String },
}

impl IpaReportError {
    #[allow(dead_code)]
    pub fn kind(&self) -> ErrorKind {
        match self {
            IpaReportError::InvalidInput { .. }
            | IpaReportError::ArchiveNotFound { .. }
            | IpaReportError::WorkingDirectoryUnavailable { .. } => ErrorKind::InvalidInput,
            IpaReportError::AnalysisFailed { .. } => ErrorKind::AnalysisFailure,
            IpaReportError::IoError { .. } => ErrorKind::Io,
        }
    }
}

impl From<std::io::Error> for IpaReportError {
    fn from(err: std::io::Error) -> Self {
        IpaReportError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, IpaReportError>;
