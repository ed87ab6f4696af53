//! Analysis engine errors

use super::IpaReportError;

/// Creates an analysis failed error, keeping the engine's reason verbatim
pub fn failed(path: impl Into<String>, reason: impl Into<String>) -> IpaReportError {
    IpaReportError::AnalysisFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
