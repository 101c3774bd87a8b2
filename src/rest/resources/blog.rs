//! Blog posts (V2 only).
//!
//! Call these through `client.v2`. Unlike the rest of the surface, the
//! V2 blog endpoints return bare objects without the `data` envelope.

use serde::{Deserialize, Serialize};

use crate::clients::VersionClient;
use crate::error::Error;

/// A blog post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Blog {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub preview_url: String,
    pub body: String,
    pub tags: Vec<String>,
    pub summary: String,
    pub is_published: bool,
    pub published_date: LegacyDate,
    pub published_date_iso8601: String,
    pub meta_description: String,
    pub meta_keywords: String,
    pub author: String,
    pub thumbnail_path: String,
}

/// The structured date object the legacy blog API returns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegacyDate {
    pub date: String,
    pub timezone_type: i64,
    pub timezone: String,
}

/// Payload for updating a blog post; only set fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateBlogParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_published: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta_keywords: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,
}

impl VersionClient {
    /// Fetches a single blog post by ID (V2).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on any transport or decoding failure.
    pub async fn get_blog_post(&self, post_id: i64) -> Result<Blog, Error> {
        let url = self.url(&["blog/posts", &post_id.to_string()]);
        let blog: Blog = self.http().get(url).await?;
        Ok(blog)
    }

    /// Updates a blog post (V2).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on any transport or decoding failure.
    pub async fn update_blog_post(
        &self,
        post_id: i64,
        params: &UpdateBlogParams,
    ) -> Result<Blog, Error> {
        let url = self.url(&["blog/posts", &post_id.to_string()]);
        let blog: Blog = self.http().put(url, params).await?;
        Ok(blog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blog_decodes_bare_object() {
        let body = r#"{
            "id": 3,
            "title": "Hello",
            "is_published": true,
            "published_date": {
                "date": "2024-01-02 03:04:05.000000",
                "timezone_type": 3,
                "timezone": "UTC"
            },
            "tags": ["news"]
        }"#;
        let blog: Blog = serde_json::from_str(body).unwrap();
        assert_eq!(blog.title, "Hello");
        assert_eq!(blog.published_date.timezone, "UTC");
        assert_eq!(blog.tags, vec!["news"]);
    }

    #[test]
    fn test_update_params_omit_unset_fields() {
        let params = UpdateBlogParams {
            title: Some("Hello".to_string()),
            ..UpdateBlogParams::default()
        };
        assert_eq!(
            serde_json::to_string(&params).unwrap(),
            r#"{"title":"Hello"}"#
        );
    }
}
