//! Product listing errors.

use thiserror::Error;

/// Errors from [`super::ProductClient::get_products`].
///
/// `Display` is the text shown to the shopper.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The backend answered with a non-2xx status.
    #[error("Erro ao buscar produtos: {status_text}")]
    Status { status: u16, status_text: String },

    /// The request never produced a response.
    #[error("Erro ao buscar produtos: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered 2xx with a body that is not a product page.
    #[error("Erro ao buscar produtos: resposta inválida ({0})")]
    Decode(String),

    /// The HTTP client or endpoint URL could not be set up.
    #[error("Erro ao configurar o cliente de produtos: {0}")]
    Client(String),
}

impl FetchError {
    /// HTTP status of a failed response, if the backend answered.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
