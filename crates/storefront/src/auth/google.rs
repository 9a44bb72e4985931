//! Google sign-in callbacks.
//!
//! The Google identity widget is an external collaborator: it invokes one of
//! two callbacks, either with a [`CredentialResponse`] or with nothing on
//! failure. [`GoogleSignIn`] turns those callbacks into a session exchange
//! and keeps the error text and loading flag a sign-in form displays.

use serde::Deserialize;
use tracing::{debug, instrument};

use super::{AuthError, AuthSession, GOOGLE_LOGIN_FAILED};
use crate::nav::Redirect;

/// Shown when the widget itself reports a failure.
pub const GOOGLE_WIDGET_FAILED: &str = "Erro ao autenticar com o Google. Tente novamente.";

/// Payload handed over by the identity widget on success.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialResponse {
    /// Google ID token (a JWT). May be missing even on "success".
    #[serde(default)]
    pub credential: Option<String>,
    #[serde(default)]
    pub client_id: Option<String>,
    /// How the account was selected (`btn`, `auto`, ...).
    #[serde(default, rename = "select_by")]
    pub select_by: Option<String>,
}

impl CredentialResponse {
    /// A response carrying only an ID token.
    #[must_use]
    pub fn with_credential(credential: impl Into<String>) -> Self {
        Self {
            credential: Some(credential.into()),
            ..Self::default()
        }
    }

    /// The ID token as handed over, unless it is missing or blank.
    fn token(&self) -> Option<&str> {
        self.credential
            .as_deref()
            .filter(|token| !token.trim().is_empty())
    }
}

/// State behind a "Sign in with Google" button.
pub struct GoogleSignIn {
    session: AuthSession,
    error: Option<String>,
    loading: bool,
}

impl GoogleSignIn {
    #[must_use]
    pub const fn new(session: AuthSession) -> Self {
        Self {
            session,
            error: None,
            loading: false,
        }
    }

    /// Error text to show under the button, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Whether an exchange is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Success callback from the widget.
    ///
    /// Exchanges the credential for a session. Returns where to navigate on
    /// success; on failure the error text is set and `None` is returned.
    /// A response without a credential never reaches the backend.
    #[instrument(skip(self, response), fields(select_by = ?response.select_by))]
    pub async fn handle_success(&mut self, response: CredentialResponse) -> Option<Redirect> {
        let Some(token) = response.token() else {
            self.error = Some(AuthError::MissingGoogleCredential.to_string());
            self.loading = false;
            return None;
        };

        self.loading = true;
        self.error = None;

        let outcome = self.session.sign_in_with_google(token).await;
        self.loading = false;

        match outcome {
            Ok(_) => Some(Redirect::Home),
            Err(err) => {
                debug!(error = %err, "Google sign-in failed");
                let message = err.to_string();
                self.error = Some(if message.trim().is_empty() {
                    GOOGLE_LOGIN_FAILED.to_string()
                } else {
                    message
                });
                None
            }
        }
    }

    /// Error callback from the widget.
    pub fn handle_error(&mut self) {
        self.error = Some(GOOGLE_WIDGET_FAILED.to_string());
        self.loading = false;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::StorefrontConfig;

    fn flow() -> GoogleSignIn {
        let config = StorefrontConfig::for_base_url("http://127.0.0.1:9").unwrap();
        GoogleSignIn::new(AuthSession::new(&config).unwrap())
    }

    #[test]
    fn test_credential_response_deserializes_widget_payload() {
        let response: CredentialResponse = serde_json::from_str(
            r#"{"credential":"eyJhbGciOi","clientId":"abc.apps.googleusercontent.com","select_by":"btn"}"#,
        )
        .unwrap();
        assert_eq!(response.token(), Some("eyJhbGciOi"));
        assert_eq!(
            response.client_id.as_deref(),
            Some("abc.apps.googleusercontent.com")
        );
    }

    #[test]
    fn test_blank_credential_has_no_token() {
        assert!(CredentialResponse::default().token().is_none());
        assert!(CredentialResponse::with_credential("   ").token().is_none());
        assert_eq!(
            CredentialResponse::with_credential(" tok ").token(),
            Some(" tok ")
        );
    }

    #[tokio::test]
    async fn test_missing_credential_sets_error() {
        let mut flow = flow();
        let redirect = flow.handle_success(CredentialResponse::default()).await;

        assert!(redirect.is_none());
        assert!(!flow.is_loading());
        assert_eq!(
            flow.error(),
            Some("Credencial do Google não encontrada. Tente novamente.")
        );
    }

    #[test]
    fn test_widget_error_sets_message() {
        let mut flow = flow();
        flow.handle_error();
        assert_eq!(flow.error(), Some(GOOGLE_WIDGET_FAILED));
        assert!(!flow.is_loading());
    }
}
