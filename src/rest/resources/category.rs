//! Catalog categories (V3).

use serde::{Deserialize, Serialize};

use crate::clients::VersionClient;
use crate::error::Error;
use crate::rest::common::{CustomUrl, Envelope, MetaData, PAGE_LIMIT};
use crate::rest::query::url_with_query;
use crate::rest::resources::product::{ProductQueryParams, UpdateProductParams};

/// A catalog category.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    pub id: i64,
    pub parent_id: i64,
    pub name: String,
    pub description: String,
    pub views: i64,
    pub sort_order: i64,
    pub page_title: String,
    pub search_keywords: String,
    pub meta_keywords: Vec<String>,
    pub meta_description: String,
    pub layout_file: String,
    pub is_visible: bool,
    pub default_product_sort: String,
    pub image_url: String,
    pub custom_url: CustomUrl,
}

/// Query parameters for category collection reads.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CategoryQueryParams {
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
    #[serde(rename = "name:like", skip_serializing_if = "Option::is_none")]
    pub name_like: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
    #[serde(rename = "parent_id:in", skip_serializing_if = "Option::is_none")]
    pub parent_id_in: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_title: Option<String>,
    #[serde(rename = "page_title:like", skip_serializing_if = "Option::is_none")]
    pub page_title_like: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_visible: Option<bool>,
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
    /// Fetches a single category by ID (V3).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on any transport or decoding failure.
    pub async fn get_category(&self, id: i64) -> Result<Category, Error> {
        let url = self.url(&["catalog/categories", &id.to_string()]);
        let envelope: Envelope<Category> = self.http().get(url).await?;
        Ok(envelope.data)
    }

    /// Fetches one page of categories (V3).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on any transport or decoding failure.
    pub async fn get_categories(
        &self,
        params: &CategoryQueryParams,
    ) -> Result<(Vec<Category>, MetaData), Error> {
        let url = url_with_query(self.url(&["catalog/categories"]), params)?;
        let envelope: Envelope<Vec<Category>> = self.http().get(url).await?;
        Ok((envelope.data, envelope.meta))
    }

    /// Fetches every category matching `params`, paging through the
    /// collection (V3). The `page` and `limit` fields are overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on any transport or decoding failure.
    pub async fn get_all_categories(
        &self,
        mut params: CategoryQueryParams,
    ) -> Result<Vec<Category>, Error> {
        let mut categories = Vec::new();
        let mut page = 1;
        params.limit = Some(PAGE_LIMIT);

        loop {
            params.page = Some(page);
            let (batch, _) = self.get_categories(&params).await?;
            let batch_len = batch.len() as u64;
            categories.extend(batch);

            if batch_len < PAGE_LIMIT {
                return Ok(categories);
            }
            page += 1;
        }
    }

    /// Removes the category from every product assigned to it (V3).
    ///
    /// Each affected product is updated individually; the first failure
    /// aborts the sweep.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on any transport or decoding failure.
    pub async fn empty_category(&self, id: i64) -> Result<(), Error> {
        let (products, _) = self
            .get_products(ProductQueryParams {
                categories_in: Some(vec![id]),
                ..ProductQueryParams::default()
            })
            .await?;

        for product in products {
            let remaining: Vec<i64> = product
                .categories
                .iter()
                .copied()
                .filter(|&category_id| category_id != id)
                .collect();
            self.update_product(
                product.id,
                &UpdateProductParams {
                    categories: Some(remaining),
                    ..UpdateProductParams::default()
                },
            )
            .await?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_decodes_defaults() {
        let category: Category =
            serde_json::from_str(r#"{"id": 5, "name": "Shoes", "parent_id": 0}"#).unwrap();
        assert_eq!(category.name, "Shoes");
        assert!(category.meta_keywords.is_empty());
        assert!(category.custom_url.url.is_none());
    }
}
