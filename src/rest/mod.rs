//! Typed wrappers over the REST endpoints.
//!
//! Each resource module adds methods to
//! [`VersionClient`](crate::VersionClient) for one endpoint family,
//! plus the entity and parameter types it exchanges. Collection
//! endpoints return their [`MetaData`] so callers can paginate by hand;
//! the `get_all_*` helpers do it for them.

pub mod common;
pub(crate) mod query;
pub mod resources;

pub use common::{CustomUrl, Links, MetaData, Pagination};
