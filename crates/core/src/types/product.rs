//! Product catalog types as served by the storefront backend.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::{CategoryId, ProductId};
use super::price::{CurrencyCode, Price};

/// A product listed in the storefront.
///
/// Immutable value received from the backend. The only client-side
/// derivation is currency formatting via [`Product::price_in`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Unit price in the store currency, sent as a JSON number.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub colors: Vec<String>,
    pub category_id: CategoryId,
    pub slug: String,
    pub stock: u32,
    pub active: bool,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub description: String,
}

impl Product {
    /// The product's price tagged with the store currency.
    #[must_use]
    pub const fn price_in(&self, currency: CurrencyCode) -> Price {
        Price::new(self.price, currency)
    }

    /// The image shown on product cards, if any.
    #[must_use]
    pub fn cover_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// The color shown on product cards, if any.
    #[must_use]
    pub fn primary_color(&self) -> Option<&str> {
        self.colors.first().map(String::as_str)
    }

    /// Storefront path of the product detail page.
    #[must_use]
    pub fn detail_path(&self) -> String {
        format!("/products/{}", self.id)
    }
}

/// One page of the product listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductPage {
    pub data: Vec<Product>,
    /// Total number of products across all pages.
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}

impl ProductPage {
    /// Number of pages implied by `total` and `limit`.
    #[must_use]
    pub fn page_count(&self) -> u64 {
        if self.limit == 0 {
            return 0;
        }
        self.total.div_ceil(u64::from(self.limit))
    }

    /// Whether a page follows this one.
    #[must_use]
    pub fn has_next(&self) -> bool {
        u64::from(self.page) < self.page_count()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_json() -> serde_json::Value {
        serde_json::json!({
            "id": 12,
            "name": "Camiseta Básica",
            "price": 89.9,
            "images": ["https://cdn.example.com/p/12-a.jpg", "https://cdn.example.com/p/12-b.jpg"],
            "colors": ["Preto", "Branco"],
            "categoryId": 3,
            "slug": "camiseta-basica",
            "stock": 14,
            "active": true,
            "color": "Preto",
            "description": "Algodão 100%"
        })
    }

    #[test]
    fn test_deserialize_backend_product() {
        let product: Product = serde_json::from_value(sample_json()).unwrap();
        assert_eq!(product.id, ProductId::new(12));
        assert_eq!(product.category_id, CategoryId::new(3));
        assert_eq!(product.price, Decimal::new(899, 1));
        assert_eq!(product.stock, 14);
        assert!(product.active);
    }

    #[test]
    fn test_card_helpers() {
        let product: Product = serde_json::from_value(sample_json()).unwrap();
        assert_eq!(
            product.cover_image(),
            Some("https://cdn.example.com/p/12-a.jpg")
        );
        assert_eq!(product.primary_color(), Some("Preto"));
        assert_eq!(product.detail_path(), "/products/12");
        assert_eq!(product.price_in(CurrencyCode::BRL).display(), "R$ 89,90");
    }

    #[test]
    fn test_missing_optional_lists_default_to_empty() {
        let mut json = sample_json();
        let obj = json.as_object_mut().unwrap();
        obj.remove("images");
        obj.remove("colors");
        let product: Product = serde_json::from_value(json).unwrap();
        assert!(product.cover_image().is_none());
        assert!(product.primary_color().is_none());
    }

    #[test]
    fn test_page_count() {
        let page = ProductPage {
            data: Vec::new(),
            total: 10,
            page: 3,
            limit: 3,
        };
        assert_eq!(page.page_count(), 4);
        assert!(page.has_next());

        let last = ProductPage { page: 4, ..page };
        assert!(!last.has_next());
    }

    #[test]
    fn test_page_count_zero_limit() {
        let page = ProductPage {
            data: Vec::new(),
            total: 10,
            page: 1,
            limit: 0,
        };
        assert_eq!(page.page_count(), 0);
        assert!(!page.has_next());
    }
}
