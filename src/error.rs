use thiserror::Error;

/// Errors that can occur while talking to the recipe API or preparing a
/// request for it.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never completed (DNS, connect, timeout, body read).
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server responded with a non-success status.
    #[error("Server rejected the request with status {status}")]
    Rejected { status: reqwest::StatusCode },

    /// A search got a non-success response. The API reports "not found" and
    /// generic failure the same way for searches, so no finer distinction
    /// is made here.
    #[error("Recipe not found")]
    NotFound,

    /// A partial update was about to be sent with no fields at all. Raised
    /// locally, before any request is made.
    #[error("No data provided for partial update")]
    NoData,

    /// An update or patch was requested without a recipe id.
    #[error("No recipe id provided")]
    MissingId,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Failed to read an image file from disk
    #[error("Failed to read image file: {0}")]
    Io(#[from] std::io::Error),
}
