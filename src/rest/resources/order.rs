//! Orders and their sub-resources (V2 only).
//!
//! Call these through `client.v2`. Monetary amounts arrive as decimal
//! strings, matching the wire format.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::clients::VersionClient;
use crate::error::Error;
use crate::rest::common::{Envelope, MetaData};
use crate::rest::query::url_with_query;

/// Fields orders can be sorted by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderSortField {
    Id,
    CustomerId,
    DateCreated,
    DateModified,
    StatusId,
    ChannelId,
    ExternalId,
}

impl fmt::Display for OrderSortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Id => "id",
            Self::CustomerId => "customer_id",
            Self::DateCreated => "date_created",
            Self::DateModified => "date_modified",
            Self::StatusId => "status_id",
            Self::ChannelId => "channel_id",
            Self::ExternalId => "external_id",
        };
        f.write_str(name)
    }
}

/// Sort direction for order listings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OrderSortDirection {
    Asc,
    Desc,
}

impl fmt::Display for OrderSortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        })
    }
}

/// A `field:direction` sort expression for the orders listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OrderSortQuery {
    pub field: OrderSortField,
    pub direction: OrderSortDirection,
}

impl fmt::Display for OrderSortQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.field, self.direction)
    }
}

/// An order placed in the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Order {
    pub id: i64,
    pub customer_id: i64,
    pub date_created: String,
    pub date_modified: String,
    pub date_shipped: String,
    pub status_id: i64,
    pub status: String,
    pub subtotal_ex_tax: String,
    pub subtotal_inc_tax: String,
    pub subtotal_tax: String,
    pub base_shipping_cost: String,
    pub shipping_cost_ex_tax: String,
    pub shipping_cost_inc_tax: String,
    pub shipping_cost_tax: String,
    pub shipping_cost_tax_class_id: i64,
    pub base_handling_cost: String,
    pub handling_cost_ex_tax: String,
    pub handling_cost_inc_tax: String,
    pub handling_cost_tax: String,
    pub handling_cost_tax_class_id: i64,
    pub base_wrapping_cost: String,
    pub wrapping_cost_ex_tax: String,
    pub wrapping_cost_inc_tax: String,
    pub wrapping_cost_tax: String,
    pub wrapping_cost_tax_class_id: i64,
    pub total_ex_tax: String,
    pub total_inc_tax: String,
    pub total_tax: String,
    pub items_total: i64,
    pub items_shipped: i64,
    pub payment_method: String,
    pub payment_provider_id: String,
    pub payment_status: String,
    pub refunded_amount: String,
    pub order_is_digital: bool,
    pub store_credit_amount: String,
    pub gift_certificate_amount: String,
    pub ip_address: String,
    pub ip_address_v6: String,
    pub geoip_country: String,
    pub geoip_country_iso2: String,
    pub currency_id: i64,
    pub currency_code: String,
    pub currency_exchange_rate: String,
    pub default_currency_id: i64,
    pub default_currency_code: String,
    pub staff_notes: String,
    pub customer_message: String,
    pub discount_amount: String,
    pub coupon_discount: String,
    pub shipping_address_count: i64,
    pub is_deleted: bool,
    pub ebay_order_id: String,
    pub cart_id: String,
    pub billing_address: BillingAddress,
    pub is_email_opt_in: bool,
    pub credit_card_type: Value,
    pub order_source: String,
    pub channel_id: i64,
    pub external_source: Value,
    pub products: UrlResource,
    pub shipping_addresses: UrlResource,
    pub coupons: UrlResource,
    pub external_id: Value,
    pub external_merchant_id: Value,
    pub tax_provider_id: String,
    pub store_default_currency_code: String,
    pub store_default_to_transactional_exchange_rate: String,
    pub custom_status: String,
    pub customer_locale: String,
    pub external_order_id: String,
}

/// The billing address on an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BillingAddress {
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub street_1: String,
    pub street_2: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    pub country_iso2: String,
    pub phone: String,
    pub email: String,
    pub form_fields: Vec<OrderFormField>,
}

/// A custom form field captured at checkout.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderFormField {
    pub name: String,
    pub value: String,
}

/// A link to a sub-resource of an order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UrlResource {
    pub url: String,
    pub resource: String,
}

/// Query parameters for order collection reads.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OrderQueryParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_total: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_total: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cart_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_date_created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_date_created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_date_modified: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_date_modified: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_deleted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<i64>,
}

/// A product line item on an order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderProduct {
    pub id: i64,
    pub order_id: i64,
    pub product_id: i64,
    pub order_address_id: i64,
    pub name: String,
    pub name_customer: String,
    pub name_merchant: String,
    pub sku: String,
    pub upc: String,
    #[serde(rename = "type")]
    pub product_type: String,
    pub base_price: String,
    pub price_ex_tax: String,
    pub price_inc_tax: String,
    pub price_tax: String,
    pub base_total: String,
    pub total_ex_tax: String,
    pub total_inc_tax: String,
    pub total_tax: String,
    pub weight: String,
    pub quantity: i64,
    pub base_cost_price: String,
    pub cost_price_inc_tax: String,
    pub cost_price_ex_tax: String,
    pub cost_price_tax: String,
    pub is_refunded: bool,
    pub quantity_refunded: i64,
    pub refund_amount: String,
    pub return_id: i64,
    pub wrapping_name: String,
    pub base_wrapping_cost: String,
    pub wrapping_cost_ex_tax: String,
    pub wrapping_cost_inc_tax: String,
    pub wrapping_cost_tax: String,
    pub wrapping_message: String,
    pub quantity_shipped: i64,
    pub event_name: Option<String>,
    pub event_date: Option<String>,
    pub fixed_shipping_cost: String,
    pub ebay_item_id: String,
    pub ebay_transaction_id: String,
    pub option_set_id: Option<i64>,
    pub parent_order_product_id: Option<i64>,
    pub is_bundled_product: bool,
    pub bin_picking_number: String,
    pub external_id: Option<String>,
    pub fulfillment_source: String,
    pub brand: String,
    pub discounted_total_inc_tax: String,
    pub applied_discounts: Vec<OrderProductAppliedDiscount>,
    pub product_options: Vec<OrderProductOption>,
    pub configurable_fields: Vec<Value>,
    pub gift_certificate_id: Option<i64>,
}

/// A discount applied to an order line item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderProductAppliedDiscount {
    pub id: String,
    pub amount: String,
    pub name: String,
    pub code: Option<String>,
    pub target: String,
}

/// An option value chosen for an order line item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderProductOption {
    pub id: i64,
    pub option_id: i64,
    pub order_product_id: i64,
    pub product_option_id: i64,
    pub display_name: String,
    pub display_name_customer: String,
    pub display_name_merchant: String,
    pub display_value: String,
    pub display_value_customer: String,
    pub display_value_merchant: String,
    pub value: String,
    #[serde(rename = "type")]
    pub option_type: String,
    pub name: String,
    pub display_style: String,
}

/// Query parameters for an order's line-item listing.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OrderProductsQueryParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
}

/// A coupon redeemed on an order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderCoupon {
    pub id: i64,
    pub coupon_id: i64,
    pub order_id: i64,
    pub code: String,
    pub amount: i64,
    #[serde(rename = "type")]
    pub discount_type: i64,
    pub discount: f64,
}

impl OrderCoupon {
    /// Returns the name of the numeric discount type.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self.discount_type {
            0 => "per_item_discount",
            1 => "percentage_discount",
            2 => "per_total_discount",
            3 => "shipping_discount",
            4 => "free_shipping",
            5 => "promotion",
            _ => "unknown",
        }
    }
}

/// A postal address on a shipment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderAddress {
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub street_1: String,
    pub street_2: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    pub country_iso2: String,
    pub phone: String,
    pub email: String,
}

/// A line item included in a shipment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderShipmentItem {
    pub order_product_id: i64,
    pub product_id: i64,
    pub quantity: i64,
}

/// A shipment created for an order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderShipment {
    pub id: i64,
    pub order_id: i64,
    pub customer_id: i64,
    pub order_address_id: i64,
    pub date_created: Option<DateTime<Utc>>,
    pub tracking_number: String,
    pub shipping_method: String,
    pub shipping_provider: String,
    pub tracking_carrier: String,
    pub tracking_link: String,
    pub comments: String,
    pub billing_address: OrderAddress,
    pub shipping_address: OrderAddress,
    pub items: Vec<OrderShipmentItem>,
    pub shipping_provider_display_name: String,
    pub generated_tracking_link: String,
}

/// Query parameters for an order's shipment listing.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OrderShipmentQueryParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
}

/// A form field on a shipping address; values can be strings, numbers,
/// or arrays.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderShippingFormField {
    pub name: String,
    pub value: Value,
}

/// The read-only shipping-quotes link on a shipping address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderShippingQuotes {
    pub url: String,
    pub resource: String,
}

/// A shipping destination on an order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderShippingAddress {
    pub id: i64,
    pub order_id: i64,
    pub items_total: f64,
    pub items_shipped: f64,
    pub base_cost: String,
    pub cost_ex_tax: String,
    pub cost_inc_tax: String,
    pub cost_tax: String,
    pub cost_tax_class_id: i64,
    pub base_handling_cost: String,
    pub handling_cost_ex_tax: String,
    pub handling_cost_inc_tax: String,
    pub handling_cost_tax: String,
    pub handling_cost_tax_class_id: i64,
    pub shipping_zone_id: f64,
    pub shipping_zone_name: String,
    pub form_fields: Vec<OrderShippingFormField>,
    pub shipping_quotes: OrderShippingQuotes,
    pub first_name: String,
    pub last_name: String,
    pub company: String,
    pub street_1: String,
    pub street_2: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub country: String,
    pub country_iso2: String,
    pub phone: String,
    pub email: String,
    pub shipping_method: String,
}

/// Query parameters for an order's shipping-address listing.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ShippingAddressQueryParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
}

/// A configurable order status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderStatus {
    pub id: i64,
    pub name: String,
    pub system_label: String,
    pub custom_label: String,
    pub system_description: String,
}

impl VersionClient {
    /// Fetches a single order by ID (V2).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on any transport or decoding failure.
    pub async fn get_order(&self, order_id: i64) -> Result<Order, Error> {
        let url = self.url(&["orders", &order_id.to_string()]);
        let envelope: Envelope<Order> = self.http().get(url).await?;
        Ok(envelope.data)
    }

    /// Fetches one page of orders (V2).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on any transport or decoding failure.
    pub async fn get_orders(
        &self,
        params: &OrderQueryParams,
    ) -> Result<(Vec<Order>, MetaData), Error> {
        let url = url_with_query(self.url(&["orders"]), params)?;
        let envelope: Envelope<Vec<Order>> = self.http().get(url).await?;
        Ok((envelope.data, envelope.meta))
    }

    /// Fetches one page of an order's line items (V2).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on any transport or decoding failure.
    pub async fn get_order_products(
        &self,
        order_id: i64,
        params: &OrderProductsQueryParams,
    ) -> Result<(Vec<OrderProduct>, MetaData), Error> {
        let url = url_with_query(
            self.url(&["orders", &order_id.to_string(), "products"]),
            params,
        )?;
        let envelope: Envelope<Vec<OrderProduct>> = self.http().get(url).await?;
        Ok((envelope.data, envelope.meta))
    }

    /// Lists the coupons redeemed on an order (V2).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on any transport or decoding failure.
    pub async fn get_order_coupons(&self, order_id: i64) -> Result<Vec<OrderCoupon>, Error> {
        let url = self.url(&["orders", &order_id.to_string(), "coupons"]);
        let envelope: Envelope<Vec<OrderCoupon>> = self.http().get(url).await?;
        Ok(envelope.data)
    }

    /// Lists the shipments created for an order (V2). This endpoint
    /// returns a bare array rather than the `data` envelope.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on any transport or decoding failure.
    pub async fn get_order_shipments(
        &self,
        order_id: i64,
        params: &OrderShipmentQueryParams,
    ) -> Result<Vec<OrderShipment>, Error> {
        let url = url_with_query(
            self.url(&["orders", &order_id.to_string(), "shipments"]),
            params,
        )?;
        let shipments: Vec<OrderShipment> = self.http().get(url).await?;
        Ok(shipments)
    }

    /// Lists the shipping destinations on an order (V2). This endpoint
    /// returns a bare array rather than the `data` envelope.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on any transport or decoding failure.
    pub async fn get_order_shipping_addresses(
        &self,
        order_id: i64,
        params: &ShippingAddressQueryParams,
    ) -> Result<Vec<OrderShippingAddress>, Error> {
        let url = url_with_query(
            self.url(&["orders", &order_id.to_string(), "shipping_addresses"]),
            params,
        )?;
        let addresses: Vec<OrderShippingAddress> = self.http().get(url).await?;
        Ok(addresses)
    }

    /// Lists the store's order statuses (V2).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Http`] on any transport or decoding failure.
    pub async fn get_order_statuses(&self) -> Result<Vec<OrderStatus>, Error> {
        let url = self.url(&["order_statuses"]);
        let envelope: Envelope<Vec<OrderStatus>> = self.http().get(url).await?;
        Ok(envelope.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_query_renders_field_and_direction() {
        let sort = OrderSortQuery {
            field: OrderSortField::DateCreated,
            direction: OrderSortDirection::Desc,
        };
        assert_eq!(sort.to_string(), "date_created:desc");
    }

    #[test]
    fn test_order_coupon_type_names() {
        let coupon = OrderCoupon {
            discount_type: 1,
            ..OrderCoupon::default()
        };
        assert_eq!(coupon.type_name(), "percentage_discount");

        let unknown = OrderCoupon {
            discount_type: 42,
            ..OrderCoupon::default()
        };
        assert_eq!(unknown.type_name(), "unknown");
    }

    #[test]
    fn test_order_decodes_nullable_externals() {
        let body = r#"{
            "id": 100,
            "status": "Shipped",
            "external_id": null,
            "credit_card_type": null,
            "billing_address": { "first_name": "Jane", "form_fields": [] },
            "products": { "url": "https://x/orders/100/products", "resource": "/orders/100/products" }
        }"#;
        let order: Order = serde_json::from_str(body).unwrap();
        assert_eq!(order.id, 100);
        assert!(order.external_id.is_null());
        assert_eq!(order.billing_address.first_name, "Jane");
        assert_eq!(order.products.resource, "/orders/100/products");
    }
}
