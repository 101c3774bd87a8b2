//! Integration tests for the typed resource surface.
//!
//! These run against a local mock server and verify envelope decoding,
//! sparse payload serialization, version routing, and pagination.

use bigcommerce_api::rest::resources::{
    CreatePageParams, CreateProductParams, LimitedProductQueryParams, PageType, ProductQueryParams,
};
use bigcommerce_api::{AccessToken, Client, StoreHash};
use serde_json::json;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(server: &MockServer) -> Client {
    Client::with_api_host(
        &server.uri(),
        StoreHash::new("abc123").unwrap(),
        AccessToken::new("test-token").unwrap(),
        None,
    )
    .unwrap()
}

#[tokio::test]
async fn test_get_product_decodes_the_data_envelope() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stores/abc123/v3/catalog/products/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "id": 42,
                "name": "Widget",
                "type": "physical",
                "sku": "WID-1",
                "price": 12.5,
                "categories": [3, 9],
                "inventory_level": 100
            },
            "meta": {}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let product = client
        .v3
        .get_product(42, &LimitedProductQueryParams::default())
        .await
        .unwrap();

    assert_eq!(product.id, 42);
    assert_eq!(product.name, "Widget");
    assert_eq!(product.sku, "WID-1");
    assert_eq!(product.categories, vec![3, 9]);
}

#[tokio::test]
async fn test_create_product_sends_only_set_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/stores/abc123/v3/catalog/products"))
        .and(body_json(json!({
            "name": "Widget",
            "type": "physical",
            "weight": 1.5,
            "price": 12.5
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "id": 7, "name": "Widget" },
            "meta": {}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let product = client
        .v3
        .create_product(&CreateProductParams {
            name: "Widget".to_string(),
            product_type: "physical".to_string(),
            weight: 1.5,
            price: 12.5,
            ..CreateProductParams::default()
        })
        .await
        .unwrap();

    assert_eq!(product.id, 7);
}

#[tokio::test]
async fn test_collection_params_land_in_the_query_string() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stores/abc123/v3/catalog/products"))
        .and(query_param("id:in", "3,9"))
        .and(query_param("is_visible", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "id": 3 }, { "id": 9 }],
            "meta": { "pagination": { "total": 2, "count": 2 } }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let (products, meta) = client
        .v3
        .get_products(ProductQueryParams {
            id_in: Some(vec![3, 9]),
            is_visible: Some(true),
            ..ProductQueryParams::default()
        })
        .await
        .unwrap();

    assert_eq!(products.len(), 2);
    assert_eq!(meta.pagination.total, 2);
}

#[tokio::test]
async fn test_get_all_brands_pages_until_a_short_batch() {
    let server = MockServer::start().await;

    let full_page: Vec<serde_json::Value> = (1..=250)
        .map(|id| json!({ "id": id, "name": format!("brand-{id}") }))
        .collect();
    Mock::given(method("GET"))
        .and(path("/stores/abc123/v3/catalog/brands"))
        .and(query_param("page", "1"))
        .and(query_param("limit", "250"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": full_page,
            "meta": {}
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/stores/abc123/v3/catalog/brands"))
        .and(query_param("page", "2"))
        .and(query_param("limit", "250"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [{ "id": 251, "name": "brand-251" }],
            "meta": {}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let brands = client.v3.get_all_brands(Default::default()).await.unwrap();

    assert_eq!(brands.len(), 251);
    assert_eq!(brands[0].id, 1);
    assert_eq!(brands[250].id, 251);
}

#[tokio::test]
async fn test_orders_route_through_the_v2_base() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stores/abc123/v2/orders/100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "id": 100,
                "status": "Shipped",
                "total_inc_tax": "99.95"
            },
            "meta": {}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let order = client.v2.get_order(100).await.unwrap();

    assert_eq!(order.id, 100);
    assert_eq!(order.status, "Shipped");
    assert_eq!(order.total_inc_tax, "99.95");
}

#[tokio::test]
async fn test_order_shipments_decode_a_bare_array() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/stores/abc123/v2/orders/100/shipments"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "order_id": 100, "tracking_number": "1Z999" },
            { "id": 2, "order_id": 100, "tracking_number": "1Z998" }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let shipments = client
        .v2
        .get_order_shipments(100, &Default::default())
        .await
        .unwrap();

    assert_eq!(shipments.len(), 2);
    assert_eq!(shipments[0].tracking_number, "1Z999");
}

#[tokio::test]
async fn test_create_page_posts_the_typed_payload() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/stores/abc123/v3/content/pages"))
        .and(body_json(json!({
            "name": "About us",
            "type": "page",
            "is_visible": true
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "data": { "id": 5, "name": "About us", "type": "page" },
            "meta": {}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let page = client
        .v3
        .create_page(&CreatePageParams {
            name: "About us".to_string(),
            page_type: PageType::Page,
            is_visible: Some(true),
            ..CreatePageParams::default()
        })
        .await
        .unwrap();

    assert_eq!(page.id, 5);
    assert_eq!(page.page_type, "page");
}

#[tokio::test]
async fn test_delete_page_succeeds_on_empty_body() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/stores/abc123/v3/content/pages/5"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    client.v3.delete_page(5).await.unwrap();
}
