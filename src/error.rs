// File: ./src/error.rs
//! Failure taxonomy surfaced to callers of the query pipeline.
//!
//! Every failure is returned unchanged to the caller. Nothing here retries, and
//! a failed live query never falls back to the sample dataset.
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinderError {
    /// The call itself was invalid (empty credential on the live path, empty
    /// region set, malformed endpoint or relay URL, TLS setup failure).
    Configuration(String),
    /// Transport failure (`status == None`) or a non-success HTTP status.
    Network {
        status: Option<u16>,
        message: String,
    },
    /// The relay answered with something that is not a JSON document.
    Parse(String),
}

impl FinderError {
    pub fn status(&self) -> Option<u16> {
        match self {
            FinderError::Network { status, .. } => *status,
            _ => None,
        }
    }
}

impl fmt::Display for FinderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FinderError::Configuration(msg) => write!(f, "Configuration error: {}", msg),
            FinderError::Network {
                status: Some(code),
                message,
            } => write!(f, "Network error ({}): {}", code, message),
            FinderError::Network {
                status: None,
                message,
            } => write!(f, "Network error: {}", message),
            FinderError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for FinderError {}

impl From<serde_json::Error> for FinderError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

impl From<url::ParseError> for FinderError {
    fn from(e: url::ParseError) -> Self {
        Self::Configuration(format!("invalid URL: {}", e))
    }
}
