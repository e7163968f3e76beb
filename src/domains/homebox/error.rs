//! Homebox client error types.

use thiserror::Error;

/// Errors that can occur while talking to the Homebox API.
///
/// Every variant is terminal for the single tool invocation that produced
/// it: nothing is retried, nothing is fatal to the process. The error is
/// surfaced verbatim to the MCP caller.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Required connection configuration is absent. No request is issued.
    #[error("missing Homebox configuration: {missing}")]
    MissingCredentials { missing: String },

    /// The outbound request could not be constructed locally
    /// (body serialization or multipart encoding failed).
    #[error("failed to build request: {0}")]
    RequestConstruction(String),

    /// The outbound call itself could not be completed
    /// (connection refused, DNS failure, timeout, ...).
    #[error("request to Homebox failed: {0}")]
    Transport(String),

    /// The API responded with a status other than the one this
    /// operation expects. Carries the raw body for diagnostics.
    #[error("unexpected status {status} from Homebox: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// The response body (or a base64 input) could not be decoded
    /// into the expected shape.
    #[error("failed to decode: {0}")]
    DecodeFailed(String),
}

impl ClientError {
    /// Create a request construction error.
    pub fn request(msg: impl Into<String>) -> Self {
        Self::RequestConstruction(msg.into())
    }

    /// Create a transport error.
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create a decode error.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::DecodeFailed(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_status_carries_body() {
        let err = ClientError::UnexpectedStatus {
            status: 500,
            body: "internal server error".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("500"));
        assert!(msg.contains("internal server error"));
    }

    #[test]
    fn test_missing_credentials_names_variables() {
        let err = ClientError::MissingCredentials {
            missing: "HOMEBOX_URL, HOMEBOX_TOKEN".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("HOMEBOX_URL"));
        assert!(msg.contains("HOMEBOX_TOKEN"));
    }
}
