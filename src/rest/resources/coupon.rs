//! Store coupons (V2 only).
//!
//! Call these through `client.v2`.

use serde::{Deserialize, Serialize};

use crate::clients::VersionClient;
use crate::error::Error;
use crate::rest::common::{Envelope, MetaData};
use crate::rest::query::url_with_query;

/// A store coupon.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Coupon {
    pub id: i64,
    pub date_created: String,
    pub num_uses: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub coupon_type: String,
    pub amount: String,
    pub min_purchase: String,
    pub expires: String,
    pub enabled: bool,
    pub code: String,
    pub applies_to: CouponAppliesTo,
    pub max_uses: i64,
    pub max_uses_per_customer: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restricted_to: Option<CouponRestrictedTo>,
}

/// The products or categories a coupon applies to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CouponAppliesTo {
    pub ids: Vec<i64>,
    pub entity: String,
}

/// Optional restrictions on where a coupon can be used.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CouponRestrictedTo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub countries: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_methods: Option<Vec<String>>,
}

/// Query parameters for coupon collection reads.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CouponQueryParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub coupon_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_type: Option<String>,
}

/// Payload for creating or updating a coupon.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateUpdateCouponParams {
    pub name: String,
    #[serde(rename = "type")]
    pub coupon_type: String,
    pub amount: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_purchase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires: Option<String>,
    pub enabled: bool,
    pub code: String,
    pub applies_to: CouponAppliesTo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_uses: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_uses_per_customer: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restricted_to: Option<CouponRestrictedTo>,
}

fn validate_coupon(params: &CreateUpdateCouponParams) -> Result<(), Error> {
    if params.name.is_empty() {
        return Err(Error::Validation("name is required".to_string()));
    }
    if params.coupon_type.is_empty() {
        return Err(Error::Validation("type is required".to_string()));
    }
    if params.amount.is_empty() {
        return Err(Error::Validation("amount is required".to_string()));
    }
    if params.enabled && params.code.is_empty() {
        return Err(Error::Validation(
            "code is required when the coupon is enabled".to_string(),
        ));
    }
    if params.applies_to.ids.is_empty() {
        return Err(Error::Validation(
            "applies_to requires at least one id".to_string(),
        ));
    }
    if params.max_uses.is_some_and(|uses| uses < 0) {
        return Err(Error::Validation(
            "max_uses must be non-negative".to_string(),
        ));
    }
    if params.max_uses_per_customer.is_some_and(|uses| uses < 0) {
        return Err(Error::Validation(
            "max_uses_per_customer must be non-negative".to_string(),
        ));
    }
    Ok(())
}

impl VersionClient {
    /// Creates a coupon (V2).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when the payload precheck fails
    /// (nothing is sent), and [`Error::Http`] on transport failures.
    pub async fn create_coupon(&self, params: &CreateUpdateCouponParams) -> Result<Coupon, Error> {
        validate_coupon(params)?;
        let url = self.url(&["coupons"]);
        let envelope: Envelope<Coupon> = self.http().post(url, params).await?;
        Ok(envelope.data)
    }

    /// Updates a coupon (V2).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when the payload precheck fails
    /// (nothing is sent), and [`Error::Http`] on transport failures.
    pub async fn update_coupon(
        &self,
        coupon_id: i64,
        params: &CreateUpdateCouponParams,
    ) -> Result<Coupon, Error> {
        validate_coupon(params)?;
        let url = self.url(&["coupons", &coupon_id.to_string()]);
        let envelope: Envelope<Coupon> = self.http().put(url, params).await?;
        Ok(envelope.data)
    }

    /// Fetches one page of coupons (V2).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on any transport or decoding failure.
    pub async fn get_coupons(
        &self,
        params: &CouponQueryParams,
    ) -> Result<(Vec<Coupon>, MetaData), Error> {
        let url = url_with_query(self.url(&["coupons"]), params)?;
        let envelope: Envelope<Vec<Coupon>> = self.http().get(url).await?;
        Ok((envelope.data, envelope.meta))
    }

    /// Fetches a single coupon by ID (V2).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on any transport or decoding failure.
    pub async fn get_coupon(&self, coupon_id: i64) -> Result<Coupon, Error> {
        let url = self.url(&["coupons", &coupon_id.to_string()]);
        let envelope: Envelope<Coupon> = self.http().get(url).await?;
        Ok(envelope.data)
    }

    /// Deletes a coupon (V2).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on any transport failure.
    pub async fn delete_coupon(&self, coupon_id: i64) -> Result<(), Error> {
        let url = self.url(&["coupons", &coupon_id.to_string()]);
        self.http().delete(url).await?;
        Ok(())
    }
}
