//! Catalog brands (V3).

use serde::{Deserialize, Serialize};

use crate::clients::VersionClient;
use crate::error::Error;
use crate::rest::common::{CustomUrl, Envelope, MetaData, PAGE_LIMIT};
use crate::rest::query::url_with_query;

/// A catalog brand.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Brand {
    pub id: i64,
    pub name: String,
    pub meta_keywords: Vec<String>,
    pub meta_description: String,
    pub image_url: String,
    pub search_keywords: String,
    pub custom_url: CustomUrl,
}

/// Query parameters for brand collection reads.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BrandQueryParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "id:in", skip_serializing_if = "Option::is_none")]
    pub id_in: Option<Vec<i64>>,
    #[serde(rename = "id:not_in", skip_serializing_if = "Option::is_none")]
    pub id_not_in: Option<Vec<i64>>,
    #[serde(rename = "id:min", skip_serializing_if = "Option::is_none")]
    pub id_min: Option<Vec<i64>>,
    #[serde(rename = "id:max", skip_serializing_if = "Option::is_none")]
    pub id_max: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_fields: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_fields: Option<String>,
}

impl VersionClient {
    /// Fetches a single brand by ID (V3).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on any transport or decoding failure.
    pub async fn get_brand(&self, id: i64) -> Result<Brand, Error> {
        let url = self.url(&["catalog/brands", &id.to_string()]);
        let envelope: Envelope<Brand> = self.http().get(url).await?;
        Ok(envelope.data)
    }

    /// Fetches one page of brands (V3).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on any transport or decoding failure.
    pub async fn get_brands(
        &self,
        params: &BrandQueryParams,
    ) -> Result<(Vec<Brand>, MetaData), Error> {
        let url = url_with_query(self.url(&["catalog/brands"]), params)?;
        let envelope: Envelope<Vec<Brand>> = self.http().get(url).await?;
        Ok((envelope.data, envelope.meta))
    }

    /// Fetches every brand matching `params`, paging through the
    /// collection (V3). The `page` and `limit` fields are overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on any transport or decoding failure.
    pub async fn get_all_brands(&self, mut params: BrandQueryParams) -> Result<Vec<Brand>, Error> {
        let mut brands = Vec::new();
        let mut page = 1;
        params.limit = Some(PAGE_LIMIT);

        loop {
            params.page = Some(page);
            let (batch, _) = self.get_brands(&params).await?;
            let batch_len = batch.len() as u64;
            brands.extend(batch);

            if batch_len < PAGE_LIMIT {
                return Ok(brands);
            }
            page += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brand_query_params_serialize_sparsely() {
        let params = BrandQueryParams {
            name: Some("Acme".to_string()),
            page: Some(2),
            ..BrandQueryParams::default()
        };
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value.as_object().unwrap().len(), 2);
    }
}
