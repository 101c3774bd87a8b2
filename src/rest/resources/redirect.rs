//! Storefront URL redirects (V3).

use serde::{Deserialize, Serialize};

use crate::clients::VersionClient;
use crate::error::Error;
use crate::rest::common::{Envelope, PAGE_LIMIT};
use crate::rest::query::url_with_query;

const REDIRECT_TARGET_TYPES: &[&str] = &["product", "brand", "category", "page", "post", "url"];
const MAX_TARGET_URL_LENGTH: usize = 2048;

/// A storefront redirect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Redirect {
    pub id: i64,
    pub site_id: i64,
    pub from_path: String,
    pub to: RedirectTarget,
    pub to_url: String,
}

/// Where a redirect points: an entity by type and ID, or a raw URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedirectTarget {
    #[serde(rename = "type")]
    pub target_type: String,
    pub entity_id: i64,
    pub url: String,
}

/// Collects the `from_path` of every redirect in a slice.
#[must_use]
pub fn from_paths(redirects: &[Redirect]) -> Vec<String> {
    redirects
        .iter()
        .map(|redirect| redirect.from_path.clone())
        .collect()
}

/// Query parameters for redirect collection reads.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RedirectQueryParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_id: Option<i64>,
    #[serde(rename = "id", skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
}

/// One redirect in an upsert payload.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RedirectUpsert {
    pub from_path: String,
    pub site_id: i64,
    pub to: RedirectTarget,
}

/// Query parameters selecting which redirects to delete.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DeleteRedirectsParams {
    #[serde(rename = "id:in", skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site_id: Option<i64>,
}

fn validate_redirect_upsert(redirect: &RedirectUpsert) -> Result<(), Error> {
    if redirect.from_path.is_empty() {
        return Err(Error::Validation("from_path is required".to_string()));
    }
    if redirect.site_id <= 0 {
        return Err(Error::Validation(
            "site_id must be a positive integer".to_string(),
        ));
    }
    if redirect.to.target_type.is_empty() {
        return Err(Error::Validation("to.type is required".to_string()));
    }
    if !REDIRECT_TARGET_TYPES.contains(&redirect.to.target_type.as_str()) {
        return Err(Error::Validation("to.type has an invalid value".to_string()));
    }
    if redirect.to.target_type != "url" && redirect.to.entity_id <= 0 {
        return Err(Error::Validation(
            "to.entity_id must be a positive integer".to_string(),
        ));
    }
    if redirect.to.target_type == "url" && redirect.to.url.len() > MAX_TARGET_URL_LENGTH {
        return Err(Error::Validation(
            "to.url must be 2048 characters or less".to_string(),
        ));
    }
    Ok(())
}

impl VersionClient {
    /// Fetches one page of redirects (V3).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on any transport or decoding failure.
    pub async fn get_redirects(&self, params: &RedirectQueryParams) -> Result<Vec<Redirect>, Error> {
        let url = url_with_query(self.url(&["storefront/redirects"]), params)?;
        let envelope: Envelope<Vec<Redirect>> = self.http().get(url).await?;
        Ok(envelope.data)
    }

    /// Fetches every redirect matching `params`, paging through the
    /// collection (V3). The `page` and `limit` fields are overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on any transport or decoding failure.
    pub async fn get_all_redirects(
        &self,
        mut params: RedirectQueryParams,
    ) -> Result<Vec<Redirect>, Error> {
        let mut redirects = Vec::new();
        let mut page = 1;
        params.limit = Some(PAGE_LIMIT);

        loop {
            params.page = Some(page);
            let batch = self.get_redirects(&params).await?;
            let batch_len = batch.len() as u64;
            redirects.extend(batch);

            if batch_len < PAGE_LIMIT {
                return Ok(redirects);
            }
            page += 1;
        }
    }

    /// Creates or updates redirects in bulk (V3).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when any entry fails the precheck
    /// (nothing is sent), and [`Error::Http`] on transport failures.
    pub async fn upsert_redirects(
        &self,
        redirects: &[RedirectUpsert],
    ) -> Result<Vec<Redirect>, Error> {
        for redirect in redirects {
            validate_redirect_upsert(redirect)?;
        }
        let url = self.url(&["storefront/redirects"]);
        let envelope: Envelope<Vec<Redirect>> = self.http().put(url, redirects).await?;
        Ok(envelope.data)
    }

    /// Deletes the selected redirects (V3).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on any transport failure.
    pub async fn delete_redirects(&self, params: &DeleteRedirectsParams) -> Result<(), Error> {
        let url = url_with_query(self.url(&["storefront/redirects"]), params)?;
        self.http().delete(url).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_upsert() -> RedirectUpsert {
        RedirectUpsert {
            from_path: "/old-product/".to_string(),
            site_id: 1,
            to: RedirectTarget {
                target_type: "product".to_string(),
                entity_id: 42,
                url: String::new(),
            },
        }
    }

    #[test]
    fn test_valid_upsert_passes() {
        assert!(validate_redirect_upsert(&valid_upsert()).is_ok());
    }

    #[test]
    fn test_entity_target_requires_entity_id() {
        let mut upsert = valid_upsert();
        upsert.to.entity_id = 0;
        assert!(validate_redirect_upsert(&upsert).is_err());
    }

    #[test]
    fn test_url_target_skips_entity_id_check() {
        let mut upsert = valid_upsert();
        upsert.to.target_type = "url".to_string();
        upsert.to.entity_id = 0;
        upsert.to.url = "https://example.com/new".to_string();
        assert!(validate_redirect_upsert(&upsert).is_ok());
    }

    #[test]
    fn test_overlong_target_url_rejected() {
        let mut upsert = valid_upsert();
        upsert.to.target_type = "url".to_string();
        upsert.to.url = "x".repeat(2049);
        assert!(validate_redirect_upsert(&upsert).is_err());
    }

    #[test]
    fn test_unknown_target_type_rejected() {
        let mut upsert = valid_upsert();
        upsert.to.target_type = "collection".to_string();
        assert!(validate_redirect_upsert(&upsert).is_err());
    }

    #[test]
    fn test_from_paths_collects_in_order() {
        let redirects = vec![
            Redirect {
                from_path: "/a/".to_string(),
                ..Redirect::default()
            },
            Redirect {
                from_path: "/b/".to_string(),
                ..Redirect::default()
            },
        ];
        assert_eq!(from_paths(&redirects), vec!["/a/", "/b/"]);
    }
}
