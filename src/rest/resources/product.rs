//! Catalog products (V3).
//!
//! Product entities are large; the API returns every field on each
//! read, so the entity mirrors the full catalog schema. Create and
//! update parameters are separate types where every optional field is
//! omitted from the payload when unset.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::VersionClient;
use crate::error::Error;
use crate::rest::common::{CustomUrl, Envelope, MetaData, PAGE_LIMIT};
use crate::rest::query::url_with_query;
use crate::rest::resources::product_image::ProductImage;
use crate::rest::resources::variant::{ProductVariant, VariantQueryParams};

/// A catalog product.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub product_type: String,
    pub sku: String,
    pub description: String,
    pub weight: f64,
    pub width: f64,
    pub depth: f64,
    pub height: f64,
    pub price: f64,
    pub cost_price: f64,
    pub retail_price: f64,
    pub sale_price: f64,
    pub map_price: f64,
    pub tax_class_id: i64,
    pub product_tax_code: String,
    pub calculated_price: f64,
    pub categories: Vec<i64>,
    pub brand_id: i64,
    pub option_set_id: i64,
    pub option_set_display: String,
    pub inventory_level: i64,
    pub inventory_warning_level: i64,
    pub inventory_tracking: String,
    pub reviews_rating_sum: i64,
    pub reviews_count: i64,
    pub total_sold: i64,
    pub fixed_cost_shipping_price: f64,
    pub is_free_shipping: bool,
    pub is_visible: bool,
    pub is_featured: bool,
    pub related_products: Vec<i64>,
    pub warranty: String,
    pub bin_picking_number: String,
    pub layout_file: String,
    pub upc: String,
    pub mpn: String,
    pub gtin: String,
    pub search_keywords: String,
    pub availability: String,
    pub availability_description: String,
    pub gift_wrapping_options_type: String,
    pub gift_wrapping_options_list: Vec<i64>,
    pub sort_order: i64,
    pub condition: String,
    pub is_condition_shown: bool,
    pub order_quantity_minimum: i64,
    pub order_quantity_maximum: i64,
    pub page_title: String,
    pub meta_keywords: Vec<String>,
    pub meta_description: String,
    pub date_created: String,
    pub date_modified: String,
    pub view_count: i64,
    pub preorder_release_date: String,
    pub preorder_message: String,
    pub is_preorder_only: bool,
    pub is_price_hidden: bool,
    pub price_hidden_label: String,
    pub custom_url: CustomUrl,
    pub base_variant_id: i64,
    pub open_graph_type: String,
    pub open_graph_title: String,
    pub open_graph_description: String,
    pub open_graph_use_meta_description: bool,
    pub open_graph_use_product_name: bool,
    pub open_graph_use_image: bool,
    pub variants: Vec<ProductVariant>,
    pub images: Vec<ProductImage>,
    pub custom_fields: Vec<ProductCustomField>,
    pub bulk_pricing_rules: Vec<ProductBulkPricingRule>,
    // Shapes vary per store configuration; left as raw JSON.
    pub primary_image: Value,
    pub modifiers: Value,
    pub options: Value,
    #[serde(rename = "video")]
    pub videos: Vec<ProductVideo>,
}

impl Product {
    /// Appends a category ID to the product's category list.
    pub fn add_category(&mut self, category_id: i64) -> &[i64] {
        self.categories.push(category_id);
        &self.categories
    }

    /// Returns whether the product is assigned to the given category.
    #[must_use]
    pub fn contains_category(&self, category_id: i64) -> bool {
        self.categories.contains(&category_id)
    }

    /// Removes a category ID from the product's category list.
    pub fn remove_category(&mut self, category_id: i64) -> &[i64] {
        self.categories.retain(|&id| id != category_id);
        &self.categories
    }
}

/// A name/value custom field attached to a product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductCustomField {
    pub id: i64,
    pub name: String,
    pub value: String,
}

/// A quantity-based pricing rule on a product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductBulkPricingRule {
    pub id: i64,
    pub quantity_min: i64,
    pub quantity_max: i64,
    #[serde(rename = "type")]
    pub rule_type: String,
    pub amount: String,
}

/// A video attached to a product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductVideo {
    pub title: String,
    pub description: String,
    pub sort_order: i64,
    #[serde(rename = "type")]
    pub video_type: String,
    pub video_id: String,
    pub id: i64,
    pub product_id: i64,
    pub length: String,
}

/// Query parameters accepted by single-product reads.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LimitedProductQueryParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_fields: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_fields: Option<Vec<String>>,
}

/// Query parameters for product collection reads.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProductQueryParams {
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
    #[serde(rename = "id:greater", skip_serializing_if = "Option::is_none")]
    pub id_greater: Option<Vec<i64>>,
    #[serde(rename = "id:less", skip_serializing_if = "Option::is_none")]
    pub id_less: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<String>,
    #[serde(rename = "date_modified:max", skip_serializing_if = "Option::is_none")]
    pub date_modified_max: Option<String>,
    #[serde(rename = "date_modified:min", skip_serializing_if = "Option::is_none")]
    pub date_modified_min: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_free_shipping: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_level: Option<i64>,
    #[serde(rename = "inventory_level:in", skip_serializing_if = "Option::is_none")]
    pub inventory_level_in: Option<Vec<i64>>,
    #[serde(
        rename = "inventory_level:not_in",
        skip_serializing_if = "Option::is_none"
    )]
    pub inventory_level_not_in: Option<Vec<i64>>,
    #[serde(
        rename = "inventory_level:min",
        skip_serializing_if = "Option::is_none"
    )]
    pub inventory_level_min: Option<Vec<i64>>,
    #[serde(
        rename = "inventory_level:max",
        skip_serializing_if = "Option::is_none"
    )]
    pub inventory_level_max: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_low: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub out_of_stock: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_sold: Option<i64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<i64>,
    #[serde(rename = "categories:in", skip_serializing_if = "Option::is_none")]
    pub categories_in: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword_context: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_fields: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_fields: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(rename = "sku:in", skip_serializing_if = "Option::is_none")]
    pub sku_in: Option<Vec<String>>,
}

/// Payload for creating a product. `name`, `product_type`, `weight`,
/// and `price` are required by the API.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateProductParams {
    pub name: String,
    #[serde(rename = "type")]
    pub product_type: String,
    pub weight: f64,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retail_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_class_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_tax_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_level: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_warning_level: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_tracking: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_cost_shipping_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_free_shipping: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_products: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warranty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bin_picking_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_keywords: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gift_wrapping_options_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gift_wrapping_options_list: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_condition_shown: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_quantity_minimum: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_quantity_maximum: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_keywords: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preorder_release_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preorder_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_preorder_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_price_hidden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_hidden_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_url: Option<CustomUrl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_graph_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_graph_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_graph_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_graph_use_meta_description: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_graph_use_product_name: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_graph_use_image: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gtin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mpn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_last_imported: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviews_rating_sum: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviews_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_sold: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Vec<ProductCustomField>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bulk_pricing_rules: Option<Vec<ProductBulkPricingRule>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<ProductImage>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub videos: Option<Vec<ProductVideo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<ProductVariant>>,
}

/// Payload for updating a product; only set fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateProductParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depth: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cost_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub retail_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sale_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_class_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_tax_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_level: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_warning_level: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inventory_tracking: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fixed_cost_shipping_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_free_shipping: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_featured: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_products: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warranty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bin_picking_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_keywords: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gift_wrapping_options_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gift_wrapping_options_list: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_condition_shown: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_quantity_minimum: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_quantity_maximum: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_keywords: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preorder_release_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preorder_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_preorder_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_price_hidden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_hidden_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_url: Option<CustomUrl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_graph_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_graph_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_graph_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_graph_use_meta_description: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_graph_use_product_name: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_graph_use_image: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gtin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mpn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_last_imported: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviews_rating_sum: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviews_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_sold: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Vec<ProductCustomField>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bulk_pricing_rules: Option<Vec<ProductBulkPricingRule>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<ProductImage>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub videos: Option<Vec<ProductVideo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variants: Option<Vec<ProductVariant>>,
}

fn validate_create_product(params: &CreateProductParams) -> Result<(), Error> {
    if params.name.is_empty() {
        return Err(Error::Validation("name is required".to_string()));
    }
    if params.product_type != "physical" && params.product_type != "digital" {
        return Err(Error::Validation(
            "type must be \"physical\" or \"digital\"".to_string(),
        ));
    }
    if params.weight <= 0.0 {
        return Err(Error::Validation("weight must be positive".to_string()));
    }
    Ok(())
}

impl VersionClient {
    /// Fetches a single product by ID (V3).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on any transport or decoding failure.
    pub async fn get_product(
        &self,
        id: i64,
        params: &LimitedProductQueryParams,
    ) -> Result<Product, Error> {
        let url = url_with_query(self.url(&["catalog/products", &id.to_string()]), params)?;
        let envelope: Envelope<Product> = self.http().get(url).await?;
        Ok(envelope.data)
    }

    /// Fetches the product owning the variant with the given SKU (V3).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] unless the SKU matches exactly one
    /// variant, and [`Error::Http`] on transport failures.
    pub async fn get_product_by_sku(&self, sku: &str) -> Result<Product, Error> {
        let variants = self
            .get_all_variants(VariantQueryParams {
                sku: Some(sku.to_string()),
                ..VariantQueryParams::default()
            })
            .await?;

        let variant = match variants.as_slice() {
            [] => return Err(Error::Validation(format!("sku {sku:?} returned no results"))),
            [variant] => variant,
            _ => {
                return Err(Error::Validation(format!(
                    "sku {sku:?} returned too many results"
                )))
            }
        };

        self.get_product(variant.product_id, &LimitedProductQueryParams::default())
            .await
    }

    /// Fetches the products with the given IDs (V3).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on any transport or decoding failure.
    pub async fn get_products_by_ids(&self, ids: Vec<i64>) -> Result<Vec<Product>, Error> {
        let params = ProductQueryParams {
            id_in: Some(ids),
            ..ProductQueryParams::default()
        };
        let (products, _) = self.get_products(params).await?;
        Ok(products)
    }

    /// Fetches one page of products (V3).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on any transport or decoding failure.
    pub async fn get_products(
        &self,
        params: ProductQueryParams,
    ) -> Result<(Vec<Product>, MetaData), Error> {
        let url = url_with_query(self.url(&["catalog/products"]), &params)?;
        let envelope: Envelope<Vec<Product>> = self.http().get(url).await?;
        Ok((envelope.data, envelope.meta))
    }

    /// Fetches every product matching `params`, paging through the
    /// collection (V3). The `page` and `limit` fields are overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on any transport or decoding failure.
    pub async fn get_all_products(
        &self,
        mut params: ProductQueryParams,
    ) -> Result<Vec<Product>, Error> {
        let mut products = Vec::new();
        let mut page = 1;
        params.limit = Some(PAGE_LIMIT);

        loop {
            params.page = Some(page);
            let (batch, _) = self.get_products(params.clone()).await?;
            let batch_len = batch.len() as u64;
            products.extend(batch);

            if batch_len < PAGE_LIMIT {
                return Ok(products);
            }
            page += 1;
        }
    }

    /// Creates a product (V3).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when the name, type, or weight
    /// precheck fails (nothing is sent), and [`Error::Http`] on
    /// transport failures.
    pub async fn create_product(&self, params: &CreateProductParams) -> Result<Product, Error> {
        validate_create_product(params)?;
        let url = self.url(&["catalog/products"]);
        let envelope: Envelope<Product> = self.http().post(url, params).await?;
        Ok(envelope.data)
    }

    /// Updates a product (V3).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on any transport or decoding failure.
    pub async fn update_product(
        &self,
        id: i64,
        params: &UpdateProductParams,
    ) -> Result<Product, Error> {
        let url = self.url(&["catalog/products", &id.to_string()]);
        let envelope: Envelope<Product> = self.http().put(url, params).await?;
        Ok(envelope.data)
    }

    /// Deletes a product (V3).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on any transport failure.
    pub async fn delete_product(&self, id: i64) -> Result<(), Error> {
        let url = self.url(&["catalog/products", &id.to_string()]);
        self.http().delete(url).await?;
        Ok(())
    }

    /// Adds a category to a product's category list (V3).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on any transport or decoding failure.
    pub async fn add_category_to_product(
        &self,
        product_id: i64,
        category_id: i64,
    ) -> Result<Product, Error> {
        let mut product = self
            .get_product(product_id, &LimitedProductQueryParams::default())
            .await?;
        product.add_category(category_id);
        self.update_product(
            product_id,
            &UpdateProductParams {
                categories: Some(product.categories),
                ..UpdateProductParams::default()
            },
        )
        .await
    }

    /// Removes a category from a product's category list (V3).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on any transport or decoding failure.
    pub async fn remove_category_from_product(
        &self,
        product_id: i64,
        category_id: i64,
    ) -> Result<Product, Error> {
        let mut product = self
            .get_product(product_id, &LimitedProductQueryParams::default())
            .await?;
        product.remove_category(category_id);
        self.update_product(
            product_id,
            &UpdateProductParams {
                categories: Some(product.categories),
                ..UpdateProductParams::default()
            },
        )
        .await
    }
}
