//! Navigation targets returned by storefront actions.
//!
//! Actions never navigate on their own; they return a [`Redirect`] and the
//! front end decides how to follow it.

use std::fmt;

use vitrine_core::ProductId;

/// Where the shopper should be sent after an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redirect {
    /// Storefront home page.
    Home,
    /// Sign-in page.
    SignIn,
    /// Detail page for a product.
    Product(ProductId),
}

impl Redirect {
    /// Route path for this redirect.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::SignIn => "/sign-in".to_string(),
            Self::Product(id) => format!("/products/{id}"),
        }
    }
}

impl fmt::Display for Redirect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
