//! Content pages (V3).
//!
//! The create endpoint can answer 201 or 207 (partial success); both
//! land in the success path since the executor treats any 2xx as OK.

use serde::{Deserialize, Serialize};

use crate::clients::VersionClient;
use crate::error::Error;
use crate::rest::common::{Envelope, MetaData};
use crate::rest::query::url_with_query;

/// A content page in the storefront.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Page {
    pub id: i64,
    pub channel_id: i64,
    pub name: String,
    pub is_visible: bool,
    pub parent_id: i64,
    pub sort_order: i64,
    #[serde(rename = "type")]
    pub page_type: String,
    pub is_homepage: bool,
    pub is_customers_only: bool,
    pub url: String,
    pub meta_title: String,
    pub meta_keywords: String,
    pub meta_description: String,
    pub search_keywords: String,
}

/// The kinds of pages the platform supports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageType {
    Blog,
    ContactForm,
    Link,
    #[default]
    Page,
    Raw,
    RssFeed,
}

/// Contact fields a `contact_form` page can collect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Fullname,
    Phone,
    Companyname,
    Orderno,
    Rma,
}

/// Query parameters for page collection reads.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PageQueryParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<i64>,
    #[serde(rename = "id:in", skip_serializing_if = "Option::is_none")]
    pub id_in: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "name:like", skip_serializing_if = "Option::is_none")]
    pub name_like: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include: Option<String>,
}

/// Payload for creating a page. `name` and `page_type` are required.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreatePageParams {
    pub name: String,
    #[serde(rename = "type")]
    pub page_type: PageType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_fields: Option<Vec<ContactField>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_keywords: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_keywords: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_homepage: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_customers_only: Option<bool>,
}

/// Payload for updating a page; only set fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdatePageParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub page_type: Option<PageType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_homepage: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_customers_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_fields: Option<Vec<ContactField>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_keywords: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_keywords: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<i64>,
}

impl VersionClient {
    /// Fetches one page of content pages (V3).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on any transport or decoding failure.
    pub async fn get_pages(
        &self,
        params: &PageQueryParams,
    ) -> Result<(Vec<Page>, MetaData), Error> {
        let url = url_with_query(self.url(&["content/pages"]), params)?;
        let envelope: Envelope<Vec<Page>> = self.http().get(url).await?;
        Ok((envelope.data, envelope.meta))
    }

    /// Fetches a single content page by ID (V3).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on any transport or decoding failure.
    pub async fn get_page(&self, page_id: i64) -> Result<Page, Error> {
        let url = self.url(&["content/pages", &page_id.to_string()]);
        let envelope: Envelope<Page> = self.http().get(url).await?;
        Ok(envelope.data)
    }

    /// Creates a content page (V3).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on any transport or decoding failure.
    pub async fn create_page(&self, params: &CreatePageParams) -> Result<Page, Error> {
        let url = self.url(&["content/pages"]);
        let envelope: Envelope<Page> = self.http().post(url, params).await?;
        Ok(envelope.data)
    }

    /// Updates a content page (V3).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on any transport or decoding failure.
    pub async fn update_page(&self, page_id: i64, params: &UpdatePageParams) -> Result<Page, Error> {
        let url = self.url(&["content/pages", &page_id.to_string()]);
        let envelope: Envelope<Page> = self.http().put(url, params).await?;
        Ok(envelope.data)
    }

    /// Deletes a content page (V3).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on any transport failure.
    pub async fn delete_page(&self, page_id: i64) -> Result<(), Error> {
        let url = self.url(&["content/pages", &page_id.to_string()]);
        self.http().delete(url).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_type_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&PageType::ContactForm).unwrap(),
            r#""contact_form""#
        );
        assert_eq!(
            serde_json::to_string(&PageType::RssFeed).unwrap(),
            r#""rss_feed""#
        );
    }

    #[test]
    fn test_create_params_include_required_fields_only() {
        let params = CreatePageParams {
            name: "About Us".to_string(),
            page_type: PageType::Page,
            ..CreatePageParams::default()
        };
        let body = serde_json::to_value(&params).unwrap();
        assert_eq!(body["name"], "About Us");
        assert_eq!(body["type"], "page");
        assert_eq!(body.as_object().unwrap().len(), 2);
    }
}
