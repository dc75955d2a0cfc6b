// common/mod.rs - Shared helpers for the integration tests
//
// Every test gets its own mockito server standing in for the remote API.

#![allow(dead_code)]

use catalog_portal::web_app::api::ApiClient;
use catalog_portal::web_app::config::ApiConfig;
use catalog_portal::web_app::model::Product;
use rust_decimal::Decimal;

/// Start a stub server and a client pointed at it
pub async fn stub_api() -> (mockito::ServerGuard, ApiClient) {
    let server = mockito::Server::new_async().await;
    let client = ApiClient::new(ApiConfig::new(server.url()));
    (server, client)
}

/// The two-product listing used throughout the scenarios
pub fn sample_products_json() -> &'static str {
    r#"[
        {"id": 1, "title": "Red Shoe", "price": 9.99, "thumbnail": "u1"},
        {"id": 2, "title": "Blue Hat", "price": 4.5, "thumbnail": "u2"}
    ]"#
}

pub fn product(id: i64, title: &str) -> Product {
    Product {
        id,
        title: title.to_string(),
        price: Decimal::new(1999, 2),
        thumbnail: format!("https://img.example/{}.png", id),
    }
}

/// `count` products titled "Item 1".."Item N"
pub fn numbered_products(count: i64) -> Vec<Product> {
    (1..=count).map(|i| product(i, &format!("Item {}", i))).collect()
}
