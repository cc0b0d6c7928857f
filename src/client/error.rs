//! Error types for the model client.

use thiserror::Error;

/// Errors that can occur while asking the model for text.
///
/// The pipeline treats every variant the same way (it falls back to the
/// template plan); the variants exist for logging.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Required configuration was not found in the environment.
    #[error("{0} environment variable not set")]
    MissingApiKey(&'static str),

    /// The request could not be sent or timed out.
    #[error("Inference request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("Inference API returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body did not carry generated text.
    #[error("Invalid response from inference API: {0}")]
    MalformedResponse(String),
}

impl ClientError {
    /// Whether the failure was the request timeout firing.
    pub fn is_timeout(&self) -> bool {
        matches!(self, ClientError::Request(err) if err.is_timeout())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_error_message() {
        let err = ClientError::Status {
            status: 503,
            body: "Model is loading".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Inference API returned status 503: Model is loading"
        );
        assert!(!err.is_timeout());
    }

    #[test]
    fn test_missing_api_key_message() {
        let err = ClientError::MissingApiKey("HUGGINGFACE_API_KEY");
        assert_eq!(
            err.to_string(),
            "HUGGINGFACE_API_KEY environment variable not set"
        );
    }
}
