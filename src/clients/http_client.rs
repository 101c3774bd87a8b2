//! Request execution with rate-limit awareness and retries.
//!
//! [`HttpClient`] owns one `reqwest::Client`, the store's access token,
//! and a [`RateLimitTracker`]. Every request flows through
//! [`HttpClient::execute`], which handles backoff before the send,
//! retries on retryable failures, and feeds each response's headers back
//! into the tracker. The typed verb methods layer JSON serialization and
//! decoding on top.

use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Method, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::clients::errors::{ApiResponseError, HttpError, MaxRetriesExceededError};
use crate::clients::rate_limit::RateLimitTracker;
use crate::config::{AccessToken, RateLimitConfig};

/// Total attempts per request, counting the first one.
pub const MAX_TRIES: u32 = 3;

/// Base delay for retries; doubled on each subsequent attempt.
pub const RETRY_BASE_DELAY: Duration = Duration::from_secs(1);

const AUTH_HEADER: &str = "X-Auth-Token";

/// Executes requests against one API base, tracking its quota window.
///
/// Each versioned client owns its own `HttpClient`, so the V2 and V3
/// APIs keep independent rate-limit snapshots.
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    token: AccessToken,
    rate_limit: RateLimitTracker,
}

impl HttpClient {
    /// Creates a client that authenticates with `token` and applies the
    /// given rate-limit policy.
    ///
    /// # Panics
    ///
    /// Panics if the underlying TLS backend cannot be initialized.
    #[must_use]
    pub fn new(token: AccessToken, config: RateLimitConfig) -> Self {
        // Redirects are returned to the caller, not followed; the
        // X-Auth-Token header must never be replayed to another origin.
        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            token,
            rate_limit: RateLimitTracker::new(config),
        }
    }

    /// Returns this client's rate-limit tracker.
    #[must_use]
    pub const fn rate_limit(&self) -> &RateLimitTracker {
        &self.rate_limit
    }

    /// Sends a request and returns the raw response.
    ///
    /// Before each attempt the tracker is consulted and any requested
    /// backoff is awaited. After each attempt the response headers are
    /// fed back into the tracker, whatever the status was. Success (2xx)
    /// and redirect (3xx) responses are returned to the caller; 429 and
    /// 5xx responses are retried until the attempt budget runs out; any
    /// other 4xx is terminal and its body is preserved in the error.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] when the request could not be
    /// delivered after [`MAX_TRIES`] attempts, [`HttpError::MaxRetries`]
    /// when a retryable status persisted across all attempts, and
    /// [`HttpError::Response`] for a terminal client error.
    pub async fn execute(
        &self,
        method: Method,
        url: Url,
        payload: Option<Vec<u8>>,
    ) -> Result<Response, HttpError> {
        let mut tries: u32 = 0;
        loop {
            tries += 1;

            if let Some(wait) = self.rate_limit.should_wait() {
                tracing::debug!(
                    wait_ms = u64::try_from(wait.as_millis()).unwrap_or(u64::MAX),
                    %url,
                    "request quota low, waiting for window reset"
                );
                tokio::time::sleep(wait).await;
            }

            tracing::debug!(%method, %url, attempt = tries, "sending request");

            let mut builder = self
                .client
                .request(method.clone(), url.clone())
                .header(AUTH_HEADER, self.token.as_ref())
                .header(ACCEPT, "application/json")
                .header(CONTENT_TYPE, "application/json");
            if let Some(body) = &payload {
                builder = builder.body(body.clone());
            }

            let response = match builder.send().await {
                Ok(response) => response,
                Err(source) => {
                    if tries >= MAX_TRIES {
                        return Err(HttpError::Network { tries, source });
                    }
                    let delay = retry_delay(tries);
                    tracing::warn!(
                        %method,
                        %url,
                        attempt = tries,
                        error = %source,
                        delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                        "request failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    continue;
                }
            };

            // The quota headers arrive on every response, including the
            // ones we are about to treat as errors.
            self.rate_limit.update(response.headers());

            let status = response.status();

            if status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error() {
                if tries >= MAX_TRIES {
                    return Err(MaxRetriesExceededError {
                        code: status.as_u16(),
                        tries,
                        method: method.to_string(),
                        url: url.to_string(),
                    }
                    .into());
                }
                let delay = if status == StatusCode::TOO_MANY_REQUESTS {
                    self.rate_limit
                        .reset_delay()
                        .unwrap_or_else(|| retry_delay(tries))
                } else {
                    retry_delay(tries)
                };
                tracing::warn!(
                    %method,
                    %url,
                    code = status.as_u16(),
                    attempt = tries,
                    delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                    "retryable response, backing off"
                );
                tokio::time::sleep(delay).await;
                continue;
            }

            if status.is_client_error() {
                let message = status
                    .canonical_reason()
                    .unwrap_or("client error")
                    .to_string();
                let raw_body = match response.bytes().await {
                    Ok(bytes) => bytes.to_vec(),
                    Err(_) => Vec::new(),
                };
                tracing::warn!(
                    %method,
                    %url,
                    code = status.as_u16(),
                    body = %String::from_utf8_lossy(&raw_body),
                    "terminal client error"
                );
                return Err(ApiResponseError {
                    code: status.as_u16(),
                    message,
                    raw_body,
                }
                .into());
            }

            // 2xx, and 3xx passed through for the caller to interpret.
            return Ok(response);
        }
    }

    /// Serializes `params`, sends the request, and decodes the response
    /// body into `D`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Serialize`] if `params` cannot be encoded
    /// (nothing is sent in that case), any [`execute`](Self::execute)
    /// error, or [`HttpError::Decode`] when the body does not match the
    /// expected schema.
    pub async fn send<P, D>(
        &self,
        method: Method,
        url: Url,
        params: Option<&P>,
    ) -> Result<D, HttpError>
    where
        P: Serialize + ?Sized,
        D: DeserializeOwned,
    {
        let payload = params
            .map(serde_json::to_vec)
            .transpose()
            .map_err(HttpError::Serialize)?;

        let response = self.execute(method, url, payload).await?;
        let body = response.bytes().await.map_err(HttpError::Body)?;
        serde_json::from_slice(&body).map_err(HttpError::Decode)
    }

    /// Sends a GET request and decodes the response body.
    ///
    /// # Errors
    ///
    /// See [`send`](Self::send).
    pub async fn get<D: DeserializeOwned>(&self, url: Url) -> Result<D, HttpError> {
        self.send::<(), D>(Method::GET, url, None).await
    }

    /// Sends a PUT request with a JSON payload and decodes the response
    /// body.
    ///
    /// # Errors
    ///
    /// See [`send`](Self::send).
    pub async fn put<P, D>(&self, url: Url, params: &P) -> Result<D, HttpError>
    where
        P: Serialize + ?Sized,
        D: DeserializeOwned,
    {
        self.send(Method::PUT, url, Some(params)).await
    }

    /// Sends a POST request with a JSON payload and decodes the response
    /// body.
    ///
    /// # Errors
    ///
    /// See [`send`](Self::send).
    pub async fn post<P, D>(&self, url: Url, params: &P) -> Result<D, HttpError>
    where
        P: Serialize + ?Sized,
        D: DeserializeOwned,
    {
        self.send(Method::POST, url, Some(params)).await
    }

    /// Sends a DELETE request, discarding any response body.
    ///
    /// # Errors
    ///
    /// See [`execute`](Self::execute).
    pub async fn delete(&self, url: Url) -> Result<(), HttpError> {
        let response = self.execute(Method::DELETE, url, None).await?;
        // Drain the body so the connection can be reused.
        response.bytes().await.map_err(HttpError::Body)?;
        Ok(())
    }
}

fn retry_delay(attempt: u32) -> Duration {
    RETRY_BASE_DELAY * 2_u32.saturating_pow(attempt.saturating_sub(1))
}
