//! Path validation errors

use super::IpaReportError;

/// Creates the error for a path that is not an `.ipa` archive
pub fn not_an_ipa() -> IpaReportError {
    invalid("The provided path is not an IPA file.")
}

/// Creates an invalid input error with a custom message
pub fn invalid(message: impl Into<String>) -> IpaReportError {
    IpaReportError::InvalidInput {
        message: message.into(),
    }
}

/// Creates an archive not found error
pub fn archive_not_found(path: impl Into<String>) -> IpaReportError {
    IpaReportError::ArchiveNotFound { path: path.into() }
}

/// Creates a working directory error
pub fn working_directory_unavailable(reason: impl Into<String>) -> IpaReportError {
    IpaReportError::WorkingDirectoryUnavailable {
        reason: reason.into(),
    }
}
