//! Shared response types for the REST resources.

use serde::{Deserialize, Serialize};

/// A resource's storefront URL with its customization flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomUrl {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_customized: Option<bool>,
}

/// Metadata block returned alongside collection responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MetaData {
    pub pagination: Pagination,
}

/// Pagination state for a collection response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pagination {
    pub total: u64,
    pub count: u64,
    pub per_page: u64,
    pub current_page: u64,
    pub total_pages: u64,
    pub links: Links,
}

/// Navigation links inside a pagination block.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Links {
    pub current: String,
}

/// The `{ "data": ..., "meta": ... }` envelope most endpoints wrap
/// their payloads in.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct Envelope<T> {
    pub data: T,
    #[serde(default)]
    pub meta: MetaData,
}

/// Page size used by the `get_all_*` helpers.
pub(crate) const PAGE_LIMIT: u64 = 250;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_decodes_data_and_meta() {
        let body = r#"{
            "data": [1, 2, 3],
            "meta": {
                "pagination": {
                    "total": 3,
                    "count": 3,
                    "per_page": 250,
                    "current_page": 1,
                    "total_pages": 1,
                    "links": { "current": "?page=1&limit=250" }
                }
            }
        }"#;
        let envelope: Envelope<Vec<u32>> = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.data, vec![1, 2, 3]);
        assert_eq!(envelope.meta.pagination.total_pages, 1);
    }

    #[test]
    fn test_envelope_tolerates_missing_meta() {
        let envelope: Envelope<Vec<u32>> = serde_json::from_str(r#"{"data": []}"#).unwrap();
        assert!(envelope.data.is_empty());
        assert_eq!(envelope.meta.pagination.total, 0);
    }
}
