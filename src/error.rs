//! Error types for ZeroBounce API operations.

use reqwest::StatusCode;

/// Errors returned by [`Client`](crate::Client) operations.
///
/// The first two variants are raised locally before any network I/O;
/// the rest classify transport and vendor responses. Soft vendor
/// failures (an unknown `file_id` on the bulk endpoints) are *not*
/// errors — they come back as regular results with `success == false`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No API key configured; checked before any request is made.
    #[error("API key must be assigned before making requests")]
    MissingApiKey,

    /// A required argument was missing or malformed; checked before any
    /// request is made.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The vendor rejected the request with HTTP 401 or 403.
    #[error("unauthorized (HTTP {status}): {body}")]
    Unauthorized { status: StatusCode, body: String },

    /// A 2xx response whose body carries the vendor's invalid-key /
    /// out-of-credits message.
    #[error("{0}")]
    InvalidApiKey(String),

    /// Any other vendor-reported error embedded in a 2xx response.
    #[error("ZeroBounce API error: {0}")]
    Api(String),

    /// An HTTP status outside 2xx that is not an auth failure.
    #[error("unexpected HTTP status {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// Transport-level failure from the underlying HTTP client.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The response body was not the JSON shape the endpoint promises.
    #[error("failed to decode response: {0}")]
    Json(#[from] serde_json::Error),

    /// Local file read failed while preparing an upload.
    #[error("file error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Classify a vendor error message from a 2xx body.
    ///
    /// Both the single-validation endpoints ("Invalid API key or your
    /// account ran out of credits.") and the batch endpoint ("Invalid
    /// API Key or your account ran out of credits.") spell the message
    /// differently, so matching is case-insensitive.
    pub(crate) fn from_api_message(message: String) -> Self {
        if message.to_ascii_lowercase().contains("invalid api key") {
            Error::InvalidApiKey(message)
        } else {
            Error::Api(message)
        }
    }
}
