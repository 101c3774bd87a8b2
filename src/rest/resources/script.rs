//! Storefront scripts (V3).

use serde::{Deserialize, Serialize};

use crate::clients::VersionClient;
use crate::error::Error;
use crate::rest::common::Envelope;

/// A script injected into storefront pages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Script {
    pub name: String,
    pub uuid: String,
    pub date_created: String,
    pub date_modified: String,
    pub description: String,
    pub html: String,
    pub src: String,
    pub auto_uninstall: bool,
    pub load_method: String,
    pub location: String,
    pub visibility: String,
    pub kind: String,
    pub api_client_id: String,
    pub consent_category: String,
    pub enabled: bool,
    pub channel_id: i64,
}

/// Payload for updating a script; only set fields are sent.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateScriptParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_uninstall: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_client_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consent_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<i64>,
}

impl VersionClient {
    /// Updates a script by UUID (V3).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on any transport or decoding failure.
    pub async fn update_script(
        &self,
        uuid: &str,
        params: &UpdateScriptParams,
    ) -> Result<Script, Error> {
        let url = self.url(&["content/scripts", uuid]);
        let envelope: Envelope<Script> = self.http().put(url, params).await?;
        Ok(envelope.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_params_omit_unset_fields() {
        let params = UpdateScriptParams {
            enabled: Some(false),
            ..UpdateScriptParams::default()
        };
        assert_eq!(
            serde_json::to_string(&params).unwrap(),
            r#"{"enabled":false}"#
        );
    }
}
