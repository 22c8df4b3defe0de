//! Error types for REST API operations

use bittrex_auth::AuthError;

/// Boxed error from the underlying transport
pub type TransportError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur during REST API operations
///
/// Every error belongs to the call that produced it; the client stays usable.
#[derive(Debug, thiserror::Error)]
pub enum RestError {
    /// Network or connection failure
    #[error("Transport error: {0}")]
    Transport(#[source] TransportError),

    /// Response did not match the expected shape
    #[error("Decode error in {context}: {source}")]
    Decode {
        /// Which layer failed: the envelope or its result
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The exchange reported `success: false`
    #[error("API error: {message}")]
    Api {
        /// Error message as reported by the exchange
        message: String,
    },

    /// Missing API credentials for private endpoint
    #[error("Authentication required for this endpoint")]
    AuthRequired,

    /// Credentials could not be loaded
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Invalid request parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

impl RestError {
    /// Wrap any transport failure
    pub fn transport(err: impl Into<TransportError>) -> Self {
        Self::Transport(err.into())
    }

    /// Message reported by the exchange, if this is an API error
    pub fn api_message(&self) -> Option<&str> {
        match self {
            Self::Api { message } => Some(message),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for RestError {
    fn from(err: reqwest::Error) -> Self {
        Self::transport(err)
    }
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_message() {
        let err = RestError::Api {
            message: "INSUFFICIENT_FUNDS".to_string(),
        };
        assert_eq!(err.api_message(), Some("INSUFFICIENT_FUNDS"));
        assert_eq!(err.to_string(), "API error: INSUFFICIENT_FUNDS");
        assert_eq!(RestError::AuthRequired.api_message(), None);
    }

    #[test]
    fn test_transport_keeps_source() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = RestError::transport(io);
        assert!(err.to_string().contains("refused"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
