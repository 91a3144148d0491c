use std::fmt;

/// Errors returned by the proxy service clients
#[derive(Debug)]
pub enum ProxyError {
    /// Transport failure or non-success status from a remote service
    Http(reqwest::Error),
    /// Remote service answered with a body we could not decode
    InvalidResponse(String),
}

impl fmt::Display for ProxyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProxyError::Http(e) => write!(f, "HTTP error: {}", e),
            ProxyError::InvalidResponse(msg) => write!(f, "Invalid response: {}", msg),
        }
    }
}

impl std::error::Error for ProxyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProxyError::Http(e) => Some(e),
            ProxyError::InvalidResponse(_) => None,
        }
    }
}

impl From<reqwest::Error> for ProxyError {
    fn from(err: reqwest::Error) -> Self {
        ProxyError::Http(err)
    }
}

/// Result type alias for proxy service operations
pub type Result<T> = std::result::Result<T, ProxyError>;
