use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong between issuing the page query and holding a
/// validated `PageResponse`.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection refused, DNS failure, timeout or a broken body stream.
    #[error("events service unreachable: {0}")]
    Network(#[from] reqwest::Error),

    #[error("events service answered {status}: {body}")]
    Status { status: StatusCode, body: String },

    /// The body is not JSON at all.
    #[error("events payload is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// The body is JSON but not a page of events.
    #[error("events payload has unexpected shape: {0}")]
    Shape(String),

    /// The service reported its own failure envelope.
    #[error("events service error {code}: {message}")]
    Service { code: String, message: String },
}

impl FetchError {
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Network(_) => "network",
            FetchError::Status { .. } => "status",
            FetchError::Decode(_) => "decode",
            FetchError::Shape(_) => "shape",
            FetchError::Service { .. } => "service",
        }
    }
}
