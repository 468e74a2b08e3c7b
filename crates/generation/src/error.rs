use thiserror::Error;

/// Shown when a non-2xx response carries no usable `error` field.
pub const DEFAULT_ERROR_MESSAGE: &str = "An error occurred.";

/// Shown for any request that could not complete.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error.";

/// Outcome of a failed generation attempt. Both kinds are terminal; nothing
/// retries.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GenerateError {
    /// Service answered with a non-2xx status.
    #[error("{message}")]
    Application { status: u16, message: String },

    /// Request never completed or the body was unreadable.
    #[error("network error: {0}")]
    Network(String),
}

impl GenerateError {
    pub fn network(msg: impl Into<String>) -> Self {
        GenerateError::Network(msg.into())
    }

    /// Text for the error line in the UI.
    pub fn user_message(&self) -> String {
        match self {
            GenerateError::Application { message, .. } => message.clone(),
            GenerateError::Network(_) => NETWORK_ERROR_MESSAGE.to_string(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct ParseChoiceError {
    pub kind: &'static str,
    pub value: String,
    pub expected: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message() {
        let app = GenerateError::Application {
            status: 400,
            message: "Invalid YouTube URL".to_string(),
        };
        assert_eq!(app.user_message(), "Invalid YouTube URL");
        assert_eq!(app.to_string(), "Invalid YouTube URL");

        let net = GenerateError::network("connection refused");
        assert_eq!(net.user_message(), "Network error.");
        assert!(net.to_string().contains("connection refused"));
    }
}
