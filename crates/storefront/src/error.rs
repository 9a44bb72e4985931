//! Top-level storefront error.

use thiserror::Error;

use crate::auth::AuthError;
use crate::cart::CartError;
use crate::config::ConfigError;
use crate::products::FetchError;

/// Any failure a storefront operation can report.
///
/// `Display` forwards to the wrapped error, which already carries the
/// shopper-facing message.
#[derive(Debug, Error)]
pub enum StorefrontError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Cart(#[from] CartError),
}

/// Result alias for storefront operations.
pub type Result<T, E = StorefrontError> = std::result::Result<T, E>;
