//! Crate-level error types.
//!
//! Construction-time failures are reported as [`ConfigError`] so a broken
//! client is never handed out. Resource methods return [`Error`], which
//! wraps the transport-level [`HttpError`](crate::clients::HttpError)
//! alongside local parameter-validation failures.

use thiserror::Error;

use crate::clients::HttpError;

/// Errors that can occur while constructing a client.
///
/// All configuration newtypes validate on construction and fail fast;
/// a client is never usable in a broken state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Store hash cannot be empty.
    #[error("Store hash cannot be empty. Please provide the hash from your store's API path.")]
    EmptyStoreHash,

    /// Store hash contains characters that cannot appear in a URL path segment.
    #[error("Invalid store hash '{hash}'. Expected an alphanumeric store hash.")]
    InvalidStoreHash {
        /// The invalid hash that was provided.
        hash: String,
    },

    /// Access token cannot be empty.
    #[error("Access token cannot be empty. Please provide a valid API account token.")]
    EmptyAccessToken,

    /// The API base address could not be constructed.
    #[error("Invalid API base address '{url}'.")]
    InvalidBaseUrl {
        /// The address that failed to parse.
        url: String,
    },
}

/// Unified error type returned by resource methods.
#[derive(Debug, Error)]
pub enum Error {
    /// Transport-level failure (network, retries exhausted, terminal
    /// response, serialization or decoding).
    #[error(transparent)]
    Http(#[from] HttpError),

    /// Request parameters failed local validation; nothing was sent.
    #[error("validation failed: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_hash_message() {
        let error = ConfigError::EmptyStoreHash;
        assert!(error.to_string().contains("Store hash cannot be empty"));
    }

    #[test]
    fn test_invalid_store_hash_includes_value() {
        let error = ConfigError::InvalidStoreHash {
            hash: "bad hash!".to_string(),
        };
        assert!(error.to_string().contains("bad hash!"));
    }

    #[test]
    fn test_validation_error_message() {
        let error = Error::Validation("name is required".to_string());
        assert_eq!(error.to_string(), "validation failed: name is required");
    }

    #[test]
    fn test_errors_implement_std_error() {
        let _: &dyn std::error::Error = &ConfigError::EmptyAccessToken;
        let _: &dyn std::error::Error = &Error::Validation(String::new());
    }
}
