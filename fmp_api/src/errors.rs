//! Error types for the API client.

use std::path::PathBuf;

/// Errors that can occur when building or making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A caller-supplied enumerated parameter is outside its allow-list.
    #[error("invalid {field} '{value}', expected one of: {}", .allowed.join(", "))]
    Validation {
        field: &'static str,
        value: String,
        allowed: &'static [&'static str],
    },
    /// The resource path was empty.
    #[error("resource path must not be empty")]
    InvalidPath,
    /// The base URL and path did not form a valid URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// An HTTP request failed (network error, timeout, or unreadable body).
    #[error("request failed: {0}")]
    RequestFailed(String),
    /// The API returned a non-success status with a body snippet.
    #[error("request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The response body was not valid JSON.
    #[error("failed to decode response: {reason}")]
    Decode { reason: String, body: String },
    /// Writing a downloaded file failed.
    #[error("failed to write {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// True for failures of the network round trip itself, which the quiet
    /// error policy absorbs into [`crate::Outcome::Failed`].
    pub fn is_request(&self) -> bool {
        matches!(
            self,
            Error::RequestFailed(_) | Error::HttpStatus { .. } | Error::Decode { .. }
        )
    }
}
