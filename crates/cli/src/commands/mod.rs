//! Subcommand implementations.

pub mod products;
pub mod session;

use thiserror::Error;

use vitrine_storefront::StorefrontError;

/// Errors that can occur while running a subcommand.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// A storefront operation failed; the message is shopper-facing.
    #[error(transparent)]
    Storefront(#[from] StorefrontError),

    /// A flow reported a failure through its own error text.
    #[error("{0}")]
    Failed(String),

    /// Writing to stdout failed.
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<vitrine_storefront::AuthError> for CommandError {
    fn from(err: vitrine_storefront::AuthError) -> Self {
        Self::Storefront(err.into())
    }
}

impl From<vitrine_storefront::FetchError> for CommandError {
    fn from(err: vitrine_storefront::FetchError) -> Self {
        Self::Storefront(err.into())
    }
}
