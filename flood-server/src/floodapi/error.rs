//! Flood API client error types.

/// Errors from the flood-monitoring HTTP client.
#[derive(Debug, thiserror::Error)]
pub enum FloodError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Station not found (unknown identifier)
    #[error("station not found")]
    StationNotFound,

    /// Rate limited by the API
    #[error("rate limited by flood-monitoring API")]
    RateLimited,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = FloodError::StationNotFound;
        assert_eq!(err.to_string(), "station not found");

        let err = FloodError::Api {
            status: 500,
            message: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "API error 500: Internal Server Error");

        let err = FloodError::Json {
            message: "expected value".into(),
            body: Some("<html>".into()),
        };
        assert!(err.to_string().contains("JSON parse error"));
        assert!(err.to_string().contains("expected value"));
    }
}
