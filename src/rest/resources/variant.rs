//! Catalog product variants (V3).

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::VersionClient;
use crate::error::Error;
use crate::rest::common::{Envelope, MetaData, PAGE_LIMIT};
use crate::rest::query::url_with_query;

/// A purchasable variant of a product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductVariant {
    pub id: i64,
    pub product_id: i64,
    pub sku: String,
    pub sku_id: i64,
    pub price: f64,
    pub calculated_price: f64,
    pub sale_price: f64,
    pub retail_price: f64,
    // Null for variants without a MAP override.
    pub map_price: Value,
    pub weight: f64,
    pub calculated_weight: f64,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub is_free_shipping: bool,
    pub fixed_cost_shipping_price: f64,
    pub purchasing_disabled: bool,
    pub purchasing_disabled_message: String,
    pub image_url: String,
    pub cost_price: f64,
    pub upc: String,
    pub mpn: String,
    pub gtin: String,
    pub inventory_level: i64,
    pub inventory_warning_level: i64,
    pub bin_picking_number: String,
    pub option_values: Vec<VariantOption>,
}

/// One option value a variant is composed of.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariantOption {
    pub id: i64,
    pub label: String,
    pub option_id: i64,
    pub option_display_name: String,
}

/// Query parameters for the store-wide `/catalog/variants` listing.
#[derive(Debug, Clone, Default, Serialize)]
pub struct VariantQueryParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_fields: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_fields: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,
}

/// Query parameters for listing one product's variants.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProductVariantQueryParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_fields: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_fields: Option<String>,
}

/// Payload for creating a variant on a product.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateVariantParams {
    pub cost_price: f64,
    pub price: f64,
    pub sale_price: f64,
    pub retail_price: f64,
    pub weight: f64,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub is_free_shipping: bool,
    pub fixed_cost_shipping_price: f64,
    pub purchasing_disabled: bool,
    pub purchasing_disabled_message: String,
    pub upc: String,
    pub inventory_level: i64,
    pub inventory_warning_level: i64,
    pub bin_picking_number: String,
    pub image_url: String,
    pub gtin: String,
    pub mpn: String,
    pub product_id: i64,
    pub sku: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option_values: Option<Vec<VariantOption>>,
}

impl VersionClient {
    /// Fetches one page of variants across the whole catalog (V3).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on any transport or decoding failure.
    pub async fn get_variants(
        &self,
        params: &VariantQueryParams,
    ) -> Result<(Vec<ProductVariant>, MetaData), Error> {
        let url = url_with_query(self.url(&["catalog/variants"]), params)?;
        let envelope: Envelope<Vec<ProductVariant>> = self.http().get(url).await?;
        Ok((envelope.data, envelope.meta))
    }

    /// Fetches every variant matching `params`, paging through the
    /// collection (V3). The `page` field is overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on any transport or decoding failure.
    pub async fn get_all_variants(
        &self,
        mut params: VariantQueryParams,
    ) -> Result<Vec<ProductVariant>, Error> {
        let limit = params.limit.unwrap_or(PAGE_LIMIT);
        params.limit = Some(limit);

        let mut variants = Vec::new();
        let mut page = 1;
        loop {
            params.page = Some(page);
            let (batch, _) = self.get_variants(&params).await?;
            let batch_len = batch.len() as u64;
            variants.extend(batch);

            if batch_len < limit {
                return Ok(variants);
            }
            page += 1;
        }
    }

    /// Fetches one page of a product's variants (V3).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on any transport or decoding failure.
    pub async fn get_product_variants(
        &self,
        product_id: i64,
        params: &ProductVariantQueryParams,
    ) -> Result<(Vec<ProductVariant>, MetaData), Error> {
        let url = url_with_query(
            self.url(&["catalog/products", &product_id.to_string(), "variants"]),
            params,
        )?;
        let envelope: Envelope<Vec<ProductVariant>> = self.http().get(url).await?;
        Ok((envelope.data, envelope.meta))
    }

    /// Creates a variant on a product (V3).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on any transport or decoding failure.
    pub async fn create_product_variant(
        &self,
        product_id: i64,
        params: &CreateVariantParams,
    ) -> Result<ProductVariant, Error> {
        let url = self.url(&["catalog/products", &product_id.to_string(), "variants"]);
        let envelope: Envelope<ProductVariant> = self.http().post(url, params).await?;
        Ok(envelope.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_decodes_with_null_map_price() {
        let body = r#"{
            "id": 7,
            "product_id": 42,
            "sku": "WID-1-RED",
            "price": 9.99,
            "map_price": null,
            "option_values": [
                { "id": 1, "label": "Red", "option_id": 3, "option_display_name": "Color" }
            ]
        }"#;
        let variant: ProductVariant = serde_json::from_str(body).unwrap();
        assert_eq!(variant.product_id, 42);
        assert!(variant.map_price.is_null());
        assert_eq!(variant.option_values[0].label, "Red");
    }
}
