//! Error types for the request pipeline.
//!
//! One enum covers request construction, filter execution and transport
//! failures so callers can match on a single type.

use thiserror::Error;

/// Errors that can occur while building or sending a request.
#[derive(Debug, Error)]
pub enum RestError {
    /// The request URL could not be parsed.
    #[error("invalid URL: {url}")]
    InvalidUrl {
        /// The rejected URL string.
        url: String,
        /// The underlying parse error.
        #[source]
        source: url::ParseError,
    },

    /// A header name or value is not legal HTTP.
    #[error("invalid header {name}: {reason}")]
    InvalidHeader {
        /// Header name as supplied.
        name: String,
        /// Why the header was rejected.
        reason: String,
    },

    /// The request has no target URL.
    #[error("request has no URL")]
    MissingUrl,

    /// Network-level error (DNS resolution, connection refused, TLS errors, etc.)
    #[error("network error requesting {url}: {source}")]
    Network {
        /// The URL that failed.
        url: String,
        /// The underlying network error.
        #[source]
        source: reqwest::Error,
    },

    /// Request timed out before completion.
    #[error("timeout requesting {url}")]
    Timeout {
        /// The URL that timed out.
        url: String,
    },

    /// A filter rejected the request or response.
    #[error("filter {filter} failed: {message}")]
    Filter {
        /// Name of the failing filter.
        filter: String,
        /// Failure description.
        message: String,
    },
}

impl RestError {
    /// Creates an [`RestError::InvalidHeader`] error.
    #[must_use]
    pub fn invalid_header(name: &str, reason: impl std::fmt::Display) -> Self {
        Self::InvalidHeader {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Maps a transport error, separating timeouts from other failures.
    #[must_use]
    pub fn from_transport(url: &str, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            Self::Timeout {
                url: url.to_string(),
            }
        } else {
            Self::Network {
                url: url.to_string(),
                source,
            }
        }
    }
}
