//! Transport-level error types.
//!
//! Every failure mode of the request path gets its own variant so
//! callers can distinguish "the network is broken" from "the store said
//! no" from "the response did not match the schema".

use thiserror::Error;

/// Errors produced while executing a request against the API.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The request could not be delivered at all, even after retrying.
    #[error("request failed after {tries} attempts: {source}")]
    Network {
        /// How many attempts were made before giving up.
        tries: u32,
        /// The underlying transport error from the final attempt.
        source: reqwest::Error,
    },

    /// A retryable status (429 or 5xx) was still being returned when the
    /// attempt budget ran out.
    #[error(transparent)]
    MaxRetries(#[from] MaxRetriesExceededError),

    /// The store answered with a terminal (non-429) 4xx status.
    #[error(transparent)]
    Response(#[from] ApiResponseError),

    /// Request parameters could not be serialized to JSON. Nothing was
    /// sent over the wire.
    #[error("failed to serialize request parameters: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The response body could not be read from the connection.
    #[error("failed to read response body: {0}")]
    Body(#[source] reqwest::Error),

    /// The response body was read successfully but did not match the
    /// expected schema.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),
}

/// A retryable status was returned on every attempt.
#[derive(Debug, Error)]
#[error("received status {code} after {tries} attempts for {method} request to {url}")]
pub struct MaxRetriesExceededError {
    /// The status code of the final attempt.
    pub code: u16,
    /// How many attempts were made.
    pub tries: u32,
    /// The HTTP method of the request.
    pub method: String,
    /// The request URL.
    pub url: String,
}

/// A terminal client-error response from the API.
///
/// These are never retried. The raw body is preserved so callers can
/// inspect the store's error payload.
#[derive(Debug, Error)]
#[error("BigCommerce responded with status {code}: {message}")]
pub struct ApiResponseError {
    /// The HTTP status code.
    pub code: u16,
    /// The canonical reason phrase for the status.
    pub message: String,
    /// The unparsed response body.
    pub raw_body: Vec<u8>,
}

impl ApiResponseError {
    /// Returns the response body as UTF-8 text, replacing invalid
    /// sequences.
    #[must_use]
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.raw_body).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_retries_message_includes_code_and_tries() {
        let error = MaxRetriesExceededError {
            code: 503,
            tries: 3,
            method: "GET".to_string(),
            url: "https://api.bigcommerce.com/stores/abc123/v3/catalog/products".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("503"));
        assert!(message.contains("3 attempts"));
    }

    #[test]
    fn test_api_response_error_preserves_body() {
        let error = ApiResponseError {
            code: 404,
            message: "Not Found".to_string(),
            raw_body: br#"{"status":404,"title":"Resource not found"}"#.to_vec(),
        };
        assert!(error.body_text().contains("Resource not found"));
        assert!(error.to_string().contains("404"));
    }

    #[test]
    fn test_http_error_is_std_error() {
        let error: HttpError = ApiResponseError {
            code: 400,
            message: "Bad Request".to_string(),
            raw_body: Vec::new(),
        }
        .into();
        let _: &dyn std::error::Error = &error;
    }
}
