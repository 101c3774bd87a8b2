//! Catalog product images (V3).

use serde::{Deserialize, Serialize};

use crate::clients::VersionClient;
use crate::error::Error;
use crate::rest::common::Envelope;

/// An image attached to a product.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProductImage {
    pub image_file: String,
    pub is_thumbnail: bool,
    pub sort_order: i64,
    pub description: String,
    pub image_url: String,
    pub id: i64,
    pub product_id: i64,
    pub url_zoom: String,
    pub url_standard: String,
    pub url_thumbnail: String,
    pub url_tiny: String,
    pub date_modified: String,
}

/// Payload for creating a product image.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateProductImageParams {
    pub product_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_zoom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_standard: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_thumbnail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_tiny: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_modified: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_thumbnail: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Payload for updating a product image; only set fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateProductImageParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_zoom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_standard: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_thumbnail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_tiny: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_file: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_thumbnail: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl VersionClient {
    /// Fetches all images on a product (V3).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on any transport or decoding failure.
    pub async fn get_product_images(&self, product_id: i64) -> Result<Vec<ProductImage>, Error> {
        let url = self.url(&["catalog/products", &product_id.to_string(), "images"]);
        let envelope: Envelope<Vec<ProductImage>> = self.http().get(url).await?;
        Ok(envelope.data)
    }

    /// Fetches a single product image (V3).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on any transport or decoding failure.
    pub async fn get_product_image(
        &self,
        product_id: i64,
        image_id: i64,
    ) -> Result<ProductImage, Error> {
        let url = self.url(&[
            "catalog/products",
            &product_id.to_string(),
            "images",
            &image_id.to_string(),
        ]);
        let envelope: Envelope<ProductImage> = self.http().get(url).await?;
        Ok(envelope.data)
    }

    /// Creates an image on a product (V3).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on any transport or decoding failure.
    pub async fn create_product_image(
        &self,
        product_id: i64,
        params: &CreateProductImageParams,
    ) -> Result<ProductImage, Error> {
        let url = self.url(&["catalog/products", &product_id.to_string(), "images"]);
        let envelope: Envelope<ProductImage> = self.http().post(url, params).await?;
        Ok(envelope.data)
    }

    /// Updates a product image (V3).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on any transport or decoding failure.
    pub async fn update_product_image(
        &self,
        product_id: i64,
        image_id: i64,
        params: &UpdateProductImageParams,
    ) -> Result<ProductImage, Error> {
        let url = self.url(&[
            "catalog/products",
            &product_id.to_string(),
            "images",
            &image_id.to_string(),
        ]);
        let envelope: Envelope<ProductImage> = self.http().put(url, params).await?;
        Ok(envelope.data)
    }

    /// Deletes a product image (V3).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on any transport failure.
    pub async fn delete_product_image(&self, product_id: i64, image_id: i64) -> Result<(), Error> {
        let url = self.url(&[
            "catalog/products",
            &product_id.to_string(),
            "images",
            &image_id.to_string(),
        ]);
        self.http().delete(url).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_params_omit_unset_fields() {
        let params = CreateProductImageParams {
            product_id: 42,
            image_url: Some("https://cdn.example.com/widget.png".to_string()),
            ..CreateProductImageParams::default()
        };
        let body = serde_json::to_value(&params).unwrap();
        assert_eq!(body["product_id"], 42);
        assert_eq!(body["image_url"], "https://cdn.example.com/widget.png");
        assert!(body.get("url_zoom").is_none());
    }
}
