//! The versioned client façade.
//!
//! BigCommerce splits its REST surface across two API versions that
//! share an access token but count rate limits separately. [`Client`]
//! holds one [`VersionClient`] per version; each owns an independent
//! transport and tracker.

use std::fmt;

use reqwest::Url;

use crate::clients::http_client::HttpClient;
use crate::clients::rate_limit::RateLimitTracker;
use crate::config::{AccessToken, RateLimitConfig, StoreHash};
use crate::error::ConfigError;

/// Default API origin. Overridable through
/// [`Client::with_api_host`].
pub const DEFAULT_API_HOST: &str = "https://api.bigcommerce.com";

/// The REST API versions the platform exposes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApiVersion {
    /// The legacy V2 API (orders, coupons, banners, blog posts).
    V2,
    /// The V3 API (catalog, content, storefront).
    V3,
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V2 => f.write_str("v2"),
            Self::V3 => f.write_str("v3"),
        }
    }
}

/// A client bound to one API version.
///
/// Resource methods live on this type; endpoints that only exist on one
/// version document which instance to call them on. Calling a V2-only
/// endpoint through `client.v3` will simply get a 404 from the store.
#[derive(Debug)]
pub struct VersionClient {
    base_url: Url,
    version: ApiVersion,
    http: HttpClient,
}

impl VersionClient {
    fn new(
        host: &str,
        store_hash: &StoreHash,
        version: ApiVersion,
        token: AccessToken,
        config: RateLimitConfig,
    ) -> Result<Self, ConfigError> {
        let raw = format!("{host}/stores/{store_hash}/{version}");
        let base_url = Url::parse(&raw).map_err(|_| ConfigError::InvalidBaseUrl { url: raw })?;

        Ok(Self {
            base_url,
            version,
            http: HttpClient::new(token, config),
        })
    }

    /// Returns which API version this client talks to.
    #[must_use]
    pub const fn version(&self) -> ApiVersion {
        self.version
    }

    /// Returns the base address all requests are rooted at.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns this version's rate-limit tracker.
    #[must_use]
    pub const fn rate_limit(&self) -> &RateLimitTracker {
        self.http.rate_limit()
    }

    pub(crate) const fn http(&self) -> &HttpClient {
        &self.http
    }

    /// Joins path segments onto the base address.
    ///
    /// Segments may themselves contain slashes (`"catalog/products"`);
    /// empty pieces are dropped so leading or doubled slashes do not
    /// produce empty path segments.
    #[must_use]
    pub fn url(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty();
            for segment in segments {
                path.extend(segment.split('/').filter(|piece| !piece.is_empty()));
            }
        }
        url
    }
}

/// Entry point for the BigCommerce REST APIs.
///
/// Both versioned clients share the store hash, token, and rate-limit
/// policy, but keep separate quota snapshots since the platform rates
/// the versions independently.
///
/// # Example
///
/// ```rust,no_run
/// use bigcommerce_api::{AccessToken, Client, StoreHash};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Client::new(
///     StoreHash::new("abc123")?,
///     AccessToken::new("my-token")?,
///     None,
/// )?;
///
/// let products = client.v3.get_products(Default::default()).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Client {
    /// Client for the legacy V2 API.
    pub v2: VersionClient,
    /// Client for the V3 API.
    pub v3: VersionClient,
}

impl Client {
    /// Creates a client for `https://api.bigcommerce.com`.
    ///
    /// Passing `None` for `config` uses the default policy of waiting
    /// for the window reset once two or fewer requests remain.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if a base address cannot
    /// be built from the store hash.
    pub fn new(
        store_hash: StoreHash,
        token: AccessToken,
        config: Option<RateLimitConfig>,
    ) -> Result<Self, ConfigError> {
        Self::with_api_host(DEFAULT_API_HOST, store_hash, token, config)
    }

    /// Creates a client against a different API origin.
    ///
    /// Useful for proxies and for pointing the client at a local test
    /// server.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if `host` does not parse
    /// as an absolute URL origin.
    pub fn with_api_host(
        host: &str,
        store_hash: StoreHash,
        token: AccessToken,
        config: Option<RateLimitConfig>,
    ) -> Result<Self, ConfigError> {
        let config = config.unwrap_or_default();
        let host = host.trim_end_matches('/');

        Ok(Self {
            v2: VersionClient::new(host, &store_hash, ApiVersion::V2, token.clone(), config)?,
            v3: VersionClient::new(host, &store_hash, ApiVersion::V3, token, config)?,
        })
    }
}
