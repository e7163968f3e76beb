//! Tool-specific error types.

use thiserror::Error;

use crate::domains::homebox::ClientError;

/// Errors that can occur during tool operations.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The upstream Homebox call failed.
    #[error(transparent)]
    Upstream(#[from] ClientError),
}

impl ToolError {
    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_arguments_message() {
        let err = ToolError::invalid_arguments("missing field `id`");
        assert_eq!(err.to_string(), "Invalid arguments: missing field `id`");
    }

    #[test]
    fn test_upstream_message_passes_through() {
        let err = ToolError::from(ClientError::UnexpectedStatus {
            status: 404,
            body: "item not found".to_string(),
        });
        let msg = err.to_string();
        assert!(msg.contains("404"));
        assert!(msg.contains("item not found"));
    }
}
