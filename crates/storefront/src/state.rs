//! Storefront handle shared across the front end.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::info;

use vitrine_core::Product;

use crate::auth::{AuthSession, google::GoogleSignIn};
use crate::cart::Cart;
use crate::config::StorefrontConfig;
use crate::error::Result;
use crate::products::ProductClient;

/// Everything a storefront front end needs, behind one cloneable handle.
///
/// Cheaply cloneable via `Arc`; clones share the session, cookie jar and
/// cart.
#[derive(Clone)]
pub struct Storefront {
    inner: Arc<StorefrontInner>,
}

struct StorefrontInner {
    config: StorefrontConfig,
    session: AuthSession,
    products: ProductClient,
    cart: Mutex<Cart>,
}

impl Storefront {
    /// Build the storefront without contacting the backend.
    ///
    /// # Errors
    ///
    /// Returns an error if an HTTP client cannot be built.
    pub fn new(config: StorefrontConfig) -> Result<Self> {
        let session = AuthSession::new(&config)?;
        let products = ProductClient::new(&config)?;
        let cart = Mutex::new(Cart::new(config.currency));

        Ok(Self {
            inner: Arc::new(StorefrontInner {
                config,
                session,
                products,
                cart,
            }),
        })
    }

    /// Build the storefront and restore any existing session.
    ///
    /// # Errors
    ///
    /// Returns an error if an HTTP client cannot be built.
    pub async fn start(config: StorefrontConfig) -> Result<Self> {
        let storefront = Self::new(config)?;
        storefront.inner.session.bootstrap().await;
        info!(
            api_base_url = %storefront.inner.config.api_base_url,
            authenticated = storefront.inner.session.is_authenticated().await,
            "storefront ready"
        );
        Ok(storefront)
    }

    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    #[must_use]
    pub fn session(&self) -> &AuthSession {
        &self.inner.session
    }

    #[must_use]
    pub fn products(&self) -> &ProductClient {
        &self.inner.products
    }

    /// Callback state for a new Google sign-in button.
    #[must_use]
    pub fn google_sign_in(&self) -> GoogleSignIn {
        GoogleSignIn::new(self.inner.session.clone())
    }

    /// Add one unit of `product` to the cart, returning the line quantity.
    ///
    /// # Errors
    ///
    /// Returns `CartError` when the product cannot be added.
    pub async fn add_to_cart(&self, product: &Product) -> Result<u32> {
        Ok(self.inner.cart.lock().await.add(product)?)
    }

    /// Snapshot of the cart.
    pub async fn cart(&self) -> Cart {
        self.inner.cart.lock().await.clone()
    }

    pub async fn clear_cart(&self) {
        self.inner.cart.lock().await.clear();
    }
}
