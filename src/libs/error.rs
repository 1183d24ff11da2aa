//! Typed failure conditions of the worklog pipeline.
//!
//! Everything below the command layer returns [`WorklogError`] so callers can
//! tell "the project does not exist" apart from "the tracker rejected us".
//! Nothing in the aggregation or layout code swallows these; they travel up
//! unchanged and the commands translate them into user-facing messages.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorklogError {
    /// Transport, authentication or decoding failure while talking to the tracker.
    #[error("tracker request failed: {0}")]
    FetchFailed(String),

    /// A project, board or sprint that does not resolve.
    #[error("not found: {0}")]
    NotFound(String),

    #[error("unsupported export format: {0}")]
    UnsupportedFormat(String),

    /// A worklog or sprint date that cannot be parsed. Aborts the whole run.
    #[error("malformed timestamp in {field}: {value:?}")]
    MalformedTimestamp { field: String, value: String },

    #[error("invalid date window: {0}")]
    InvalidWindow(String),

    /// The serializer backend failed while producing the document.
    #[error("export failed: {0}")]
    ExportFailed(String),
}

impl From<reqwest::Error> for WorklogError {
    fn from(err: reqwest::Error) -> Self {
        WorklogError::FetchFailed(err.to_string())
    }
}

impl From<csv::Error> for WorklogError {
    fn from(err: csv::Error) -> Self {
        WorklogError::ExportFailed(err.to_string())
    }
}

impl From<rust_xlsxwriter::XlsxError> for WorklogError {
    fn from(err: rust_xlsxwriter::XlsxError) -> Self {
        WorklogError::ExportFailed(err.to_string())
    }
}

impl From<std::io::Error> for WorklogError {
    fn from(err: std::io::Error) -> Self {
        WorklogError::ExportFailed(err.to_string())
    }
}
