//! Shared fixtures for the storefront contract tests.
//!
//! Every test starts its own `wiremock::MockServer` standing in for the
//! backend and points a [`StorefrontConfig`] at it.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p vitrine-integration-tests
//! ```

use serde_json::{Value, json};
use wiremock::{Match, MockServer, Request};

use vitrine_storefront::StorefrontConfig;

/// Configuration pointing at the mock backend.
///
/// # Panics
///
/// Panics if the mock server URI is not a valid base URL.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn config_for(server: &MockServer) -> StorefrontConfig {
    StorefrontConfig::for_base_url(&server.uri()).unwrap()
}

/// Configuration pointing at a port nothing listens on.
///
/// # Panics
///
/// Panics if the hard-coded URL stops parsing.
#[must_use]
#[allow(clippy::unwrap_used)]
pub fn unreachable_config() -> StorefrontConfig {
    StorefrontConfig::for_base_url("http://127.0.0.1:1").unwrap()
}

/// A `{ user }` body as returned by profile and login.
#[must_use]
pub fn session_body(id: i64, first_name: &str) -> Value {
    json!({
        "user": {
            "id": id,
            "firstName": first_name,
            "lastName": "Souza",
            "email": format!("{}@example.com", first_name.to_lowercase()),
            "role": "customer"
        }
    })
}

/// A product as served by `/products`.
#[must_use]
pub fn product_json(id: i64, name: &str, price: f64, stock: u32) -> Value {
    json!({
        "id": id,
        "name": name,
        "price": price,
        "images": [format!("https://cdn.example.com/p/{id}.jpg")],
        "colors": ["Preto"],
        "categoryId": 1,
        "slug": name.to_lowercase().replace(' ', "-"),
        "stock": stock,
        "active": true,
        "color": "Preto",
        "description": format!("{name} de algodão")
    })
}

/// A `/products` page body.
#[must_use]
pub fn page_json(data: Vec<Value>, total: u64, page: u32, limit: u32) -> Value {
    json!({ "data": data, "total": total, "page": page, "limit": limit })
}

/// Matches requests that carry no `Cookie` header.
pub struct NoCookie;

impl Match for NoCookie {
    fn matches(&self, request: &Request) -> bool {
        !request.headers.contains_key("cookie")
    }
}
