//! Error types for the summary module.

use a11y_report::ReportError;
use thiserror::Error;

/// Result type alias for summary operations.
pub type SummaryResult<T> = Result<T, SummaryError>;

/// Errors that abort a summary run or a comment post.
#[derive(Error, Debug)]
pub enum SummaryError {
    #[error("{0}")]
    NotConfigured(String),

    #[error("Error calling completion API: {0}")]
    Request(String),

    #[error("Completion API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Failed to parse completion response: {0}")]
    InvalidResponse(String),

    #[error("Failed to get a valid summary from the completion service. Response was empty or malformed.")]
    EmptyCompletion,

    #[error("Error making request to GitHub API: {0}")]
    CommentRequest(String),

    #[error("Failed to post PR comment. Status: {status}, Response: {body}")]
    CommentRejected { status: u16, body: String },

    #[error("Report error: {0}")]
    Report(#[from] ReportError),
}

impl SummaryError {
    /// Create a configuration error.
    pub fn not_configured(message: impl Into<String>) -> Self {
        Self::NotConfigured(message.into())
    }

    /// Create an API error from a status code and message.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }
}
