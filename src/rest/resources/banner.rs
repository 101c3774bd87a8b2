//! Marketing banners (V2 only).
//!
//! Call these through `client.v2`.

use serde::{Deserialize, Serialize};

use crate::clients::VersionClient;
use crate::error::Error;
use crate::rest::common::{Envelope, MetaData};
use crate::rest::query::url_with_query;

/// A storefront banner.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Banner {
    pub id: i64,
    pub date_created: String,
    pub name: String,
    pub content: String,
    pub page: String,
    pub location: String,
    pub date_type: String,
    pub date_from: String,
    pub date_to: String,
    // The V2 API represents booleans on banners as "0"/"1" strings.
    pub visible: String,
    pub item_id: String,
}

/// Query parameters for banner collection reads.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BannerQueryParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
}

/// Payload for creating or updating a banner.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateUpdateBannerParams {
    pub name: String,
    pub content: String,
    pub page: String,
    pub location: String,
    pub date_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_from: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_to: Option<String>,
    pub visible: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<String>,
}

fn validate_banner(params: &CreateUpdateBannerParams) -> Result<(), Error> {
    let mut problems = Vec::new();

    if params.name.is_empty() {
        problems.push("name is required");
    }
    if params.content.is_empty() {
        problems.push("content is required");
    }
    if params.page.is_empty() {
        problems.push("page is required");
    }
    if params.location.is_empty() {
        problems.push("location is required");
    }
    if params.date_type.is_empty() {
        problems.push("date_type is required");
    }
    if params.date_type == "custom" {
        if params.date_from.is_none() {
            problems.push("date_from is required when date_type is \"custom\"");
        }
        if params.date_to.is_none() {
            problems.push("date_to is required when date_type is \"custom\"");
        }
    }
    if params.visible.is_empty() {
        problems.push("visible is required");
    }
    if params.item_id.is_none() && (params.page == "category_page" || params.page == "brand_page") {
        problems.push("item_id is required for category_page or brand_page");
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(Error::Validation(problems.join("; ")))
    }
}

impl VersionClient {
    /// Creates a banner (V2).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] listing every precheck failure
    /// (nothing is sent), and [`Error::Http`] on transport failures.
    pub async fn create_banner(&self, params: &CreateUpdateBannerParams) -> Result<Banner, Error> {
        validate_banner(params)?;
        let url = self.url(&["banners"]);
        let envelope: Envelope<Banner> = self.http().post(url, params).await?;
        Ok(envelope.data)
    }

    /// Updates a banner (V2).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] listing every precheck failure
    /// (nothing is sent), and [`Error::Http`] on transport failures.
    pub async fn update_banner(
        &self,
        banner_id: i64,
        params: &CreateUpdateBannerParams,
    ) -> Result<Banner, Error> {
        validate_banner(params)?;
        let url = self.url(&["banners", &banner_id.to_string()]);
        let envelope: Envelope<Banner> = self.http().put(url, params).await?;
        Ok(envelope.data)
    }

    /// Fetches one page of banners (V2).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on any transport or decoding failure.
    pub async fn get_banners(
        &self,
        params: &BannerQueryParams,
    ) -> Result<(Vec<Banner>, MetaData), Error> {
        let url = url_with_query(self.url(&["banners"]), params)?;
        let envelope: Envelope<Vec<Banner>> = self.http().get(url).await?;
        Ok((envelope.data, envelope.meta))
    }

    /// Fetches a single banner by ID (V2).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on any transport or decoding failure.
    pub async fn get_banner(&self, banner_id: i64) -> Result<Banner, Error> {
        let url = self.url(&["banners", &banner_id.to_string()]);
        let envelope: Envelope<Banner> = self.http().get(url).await?;
        Ok(envelope.data)
    }

    /// Deletes a banner (V2).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on any transport failure.
    pub async fn delete_banner(&self, banner_id: i64) -> Result<(), Error> {
        let url = self.url(&["banners", &banner_id.to_string()]);
        self.http().delete(url).await?;
        Ok(())
    }
}
