//! Client construction configuration.
//!
//! Provides validated newtypes for the store hash and access token, and
//! the rate-limit policy shared by every request on a client.

mod newtypes;
mod rate_limit;

pub use newtypes::{AccessToken, StoreHash};
pub use rate_limit::RateLimitConfig;
