//! Transport layer: error taxonomy, rate-limit tracking, the request
//! executor, and the versioned client façade.

mod errors;
mod http_client;
mod rate_limit;
mod version;

pub use errors::{ApiResponseError, HttpError, MaxRetriesExceededError};
pub use http_client::{HttpClient, MAX_TRIES, RETRY_BASE_DELAY};
pub use rate_limit::{
    RateLimitStatus, RateLimitTracker, HEADER_REQUESTS_LEFT, HEADER_REQUESTS_QUOTA,
    HEADER_TIME_RESET_MS, HEADER_TIME_WINDOW_MS,
};
pub use version::{ApiVersion, Client, VersionClient, DEFAULT_API_HOST};
