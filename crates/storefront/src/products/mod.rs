//! Product listing client.
//!
//! Maps `{ page, limit }` to one page of products. Stateless: no caching,
//! no retries, no pagination cursor. Requests go out without cookies.

mod error;

pub use error::FetchError;

use std::sync::Arc;

use tracing::{debug, instrument};
use url::Url;

use vitrine_core::ProductPage;

use crate::config::StorefrontConfig;
use crate::http::{build_client, status_text};

/// Page size used when the caller does not pick one.
pub const DEFAULT_LIMIT: u32 = 3;

/// Which page of the listing to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductQuery {
    pub page: u32,
    /// Page size; [`DEFAULT_LIMIT`] when `None`.
    pub limit: Option<u32>,
}

impl ProductQuery {
    /// Query for `page` with the default page size.
    #[must_use]
    pub const fn page(page: u32) -> Self {
        Self { page, limit: None }
    }

    #[must_use]
    pub const fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Page size that will be sent.
    #[must_use]
    pub fn effective_limit(&self) -> u32 {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self::page(1)
    }
}

/// Client for the `/products` endpoint.
#[derive(Clone)]
pub struct ProductClient {
    inner: Arc<ProductClientInner>,
}

struct ProductClientInner {
    client: reqwest::Client,
    endpoint: Url,
}

impl ProductClient {
    /// Create a product client for the configured backend.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Client` if the HTTP client or endpoint URL
    /// cannot be built.
    pub fn new(config: &StorefrontConfig) -> Result<Self, FetchError> {
        let client =
            build_client(config.timeouts, false).map_err(|e| FetchError::Client(e.to_string()))?;
        let endpoint = config
            .endpoint("/products")
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self {
            inner: Arc::new(ProductClientInner { client, endpoint }),
        })
    }

    /// Full request URL for a query: `page` first, then `limit`.
    #[must_use]
    pub fn request_url(&self, query: ProductQuery) -> Url {
        let mut url = self.inner.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("page", &query.page.to_string())
            .append_pair("limit", &query.effective_limit().to_string());
        url
    }

    /// Fetch one page of products.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Status` on a non-2xx response (its message
    /// carries the status text), `FetchError::Http` when no response
    /// arrives, and `FetchError::Decode` when the body is not a page.
    #[instrument(skip(self), fields(page = query.page, limit = query.effective_limit()))]
    pub async fn get_products(&self, query: ProductQuery) -> Result<ProductPage, FetchError> {
        let response = self
            .inner
            .client
            .get(self.request_url(query))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            debug!(status = status.as_u16(), "product listing failed");
            return Err(FetchError::Status {
                status: status.as_u16(),
                status_text: status_text(status),
            });
        }

        let text = response.text().await?;
        let page: ProductPage =
            serde_json::from_str(&text).map_err(|e| FetchError::Decode(e.to_string()))?;
        debug!(count = page.data.len(), total = page.total, "fetched products");
        Ok(page)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn client() -> ProductClient {
        let config = StorefrontConfig::for_base_url("http://localhost:3000").unwrap();
        ProductClient::new(&config).unwrap()
    }

    #[test]
    fn test_default_limit_applies() {
        assert_eq!(ProductQuery::page(2).effective_limit(), 3);
        assert_eq!(ProductQuery::page(2).with_limit(12).effective_limit(), 12);
        assert_eq!(ProductQuery::default().page, 1);
    }

    #[test]
    fn test_request_url_orders_page_then_limit() {
        assert_eq!(
            client().request_url(ProductQuery::page(2)).as_str(),
            "http://localhost:3000/products?page=2&limit=3"
        );
    }

    #[test]
    fn test_request_url_with_explicit_limit() {
        assert_eq!(
            client()
                .request_url(ProductQuery::page(1).with_limit(20))
                .as_str(),
            "http://localhost:3000/products?page=1&limit=20"
        );
    }
}
