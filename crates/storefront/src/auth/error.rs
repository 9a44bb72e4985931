//! Authentication error types.
//!
//! `Display` is the text shown to the shopper, so messages are in pt-BR.

use thiserror::Error;

/// Shown when a login is rejected without a server-provided message.
pub const LOGIN_FAILED: &str = "Erro ao fazer login";

/// Shown when a Google exchange is rejected without a server-provided message.
pub const GOOGLE_LOGIN_FAILED: &str = "Erro ao fazer login com Google. Tente novamente.";

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The backend refused the sign-in.
    ///
    /// `message` is the server's `message` field, or a generic fallback.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The identity widget reported success without a credential.
    #[error("Credencial do Google não encontrada. Tente novamente.")]
    MissingGoogleCredential,

    /// The request never produced a response.
    #[error("Não foi possível conectar ao servidor: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered 2xx with a body that is not `{ user }`.
    #[error("Resposta inválida do servidor: {0}")]
    InvalidResponse(String),

    /// The HTTP client or endpoint URLs could not be set up.
    #[error("Falha ao configurar o cliente de autenticação: {0}")]
    Client(String),
}

impl AuthError {
    /// HTTP status of a rejected request, if the backend answered.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}
