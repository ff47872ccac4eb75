//! Error type shared by the resource binding, the transport and the search client

use thiserror::Error;

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, SearchError>;

/// Everything that can make a search call fail
#[derive(Debug, Error)]
pub enum SearchError {
    /// Network, timeout or body read failure, as produced by reqwest
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status
    #[error("HTTP error {status}: {body}")]
    Status { status: u16, body: String },

    /// The body was not JSON, or a record did not fit the requested type
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// An action configured for one JSON shape received another
    #[error("action `{action}` expected {expected} but received {found}")]
    UnexpectedShape {
        action: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("invalid resource template: {0}")]
    InvalidTemplate(String),
}

impl SearchError {
    /// HTTP status carried by the error, if the server produced one
    pub fn status(&self) -> Option<u16> {
        match self {
            SearchError::Status { status, .. } => Some(*status),
            SearchError::Transport(err) => err.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether the request never produced an HTTP response
    pub fn is_transport(&self) -> bool {
        matches!(self, SearchError::Transport(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_accessor() {
        let err = SearchError::Status {
            status: 500,
            body: "boom".to_string(),
        };
        assert_eq!(err.status(), Some(500));
        assert!(!err.is_transport());
        assert_eq!(err.to_string(), "HTTP error 500: boom");
    }

    #[test]
    fn test_shape_message() {
        let err = SearchError::UnexpectedShape {
            action: "query",
            expected: "an array",
            found: "an object",
        };
        assert_eq!(
            err.to_string(),
            "action `query` expected an array but received an object"
        );
        assert_eq!(err.status(), None);
    }
}
