use crate::errors::BeetleError;

/// A failed fetch of one remote collection.
///
/// The refresh loop treats every variant the same way ("fetch failed");
/// the variants exist for logs and for one-shot callers.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Failed to build HTTP client: {message}")]
    ClientBuild { message: String },

    #[error("Request to '{url}' failed: {message}")]
    Request { url: String, message: String },

    #[error("Server returned HTTP {status} for '{url}'")]
    Status { url: String, status: u16 },

    #[error("Invalid JSON from '{url}': {message}")]
    Decode { url: String, message: String },

    #[error("Collection at '{url}' is empty")]
    EmptyCollection { url: String },
}

impl BeetleError for FetchError {
    fn error_code(&self) -> &'static str {
        match self {
            FetchError::ClientBuild { .. } => "FETCH_CLIENT_BUILD_FAILED",
            FetchError::Request { .. } => "FETCH_REQUEST_FAILED",
            FetchError::Status { .. } => "FETCH_BAD_STATUS",
            FetchError::Decode { .. } => "FETCH_DECODE_FAILED",
            FetchError::EmptyCollection { .. } => "FETCH_EMPTY_COLLECTION",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_display() {
        let error = FetchError::Status {
            url: "http://localhost:8000/LightStrip".to_string(),
            status: 503,
        };
        assert_eq!(
            error.to_string(),
            "Server returned HTTP 503 for 'http://localhost:8000/LightStrip'"
        );
        assert_eq!(error.error_code(), "FETCH_BAD_STATUS");
        assert!(!error.is_user_error());
    }
}
