//! # BigCommerce API Rust client
//!
//! An async Rust client for the BigCommerce V2 and V3 REST APIs,
//! providing typed resource wrappers over a rate-limit-aware HTTP
//! transport.
//!
//! ## Overview
//!
//! This crate provides:
//! - Validated newtypes for the store hash and access token
//! - A [`Client`] holding one façade per API version, each with its own
//!   rate-limit tracker
//! - Automatic backoff when the store's request quota runs low, driven
//!   by the `X-Rate-Limit-*` response headers
//! - Retry with exponential backoff for 429, 5xx, and network failures
//! - Typed resources: products, variants, images, categories, brands,
//!   coupons, orders, pages, scripts, redirects, banners, and blog posts
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bigcommerce_api::{AccessToken, Client, StoreHash};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new(
//!     StoreHash::new("abc123")?,
//!     AccessToken::new("your-access-token")?,
//!     None, // default rate-limit policy
//! )?;
//!
//! // V3 catalog
//! let (products, meta) = client.v3.get_products(Default::default()).await?;
//! println!(
//!     "page {} of {}",
//!     meta.pagination.current_page, meta.pagination.total_pages
//! );
//!
//! // V2 orders
//! let order = client.v2.get_order(100).await?;
//! println!("order total: {}", order.total_inc_tax);
//! # Ok(())
//! # }
//! ```
//!
//! ## Rate limiting
//!
//! Every response updates the owning version client's
//! [`RateLimitTracker`]. When the remaining-request count drops to the
//! configured threshold, the next request waits for the window to reset
//! before being sent. Pass a [`RateLimitConfig`] with
//! `enable_wait: false` to never wait and instead rely on 429 retries.
//!
//! Diagnostics are emitted through [`tracing`]; install a subscriber to
//! see request attempts, backoff waits, and terminal errors.

pub mod clients;
pub mod config;
pub mod error;
pub mod rest;

pub use clients::{
    ApiResponseError, ApiVersion, Client, HttpClient, HttpError, MaxRetriesExceededError,
    RateLimitStatus, RateLimitTracker, VersionClient, DEFAULT_API_HOST,
};
pub use config::{AccessToken, RateLimitConfig, StoreHash};
pub use error::{ConfigError, Error};
pub use rest::{CustomUrl, Links, MetaData, Pagination};
