//! Session and authentication.
//!
//! [`AuthSession`] is the single owner of "who is signed in". It is created
//! once per process (see [`crate::Storefront`]) and shared by cloning the
//! handle. The backend tracks the session through a cookie; the handle's
//! HTTP client keeps the cookie jar, so no token is ever held here.
//!
//! # Session lifecycle
//!
//! 1. [`AuthSession::bootstrap`] probes `GET /auth/profile`. Any failure
//!    leaves the session anonymous, which is a valid state for a visitor.
//! 2. [`AuthSession::sign_in`] / [`AuthSession::sign_in_with_google`]
//!    replace the user from the backend's `{ user }` response.
//! 3. [`AuthSession::sign_out`] forgets the user locally.
//!
//! Mutating operations are serialized: each holds the operation lock from
//! its request until its state write, so operations on different clones
//! complete in the order they acquired the lock.

mod error;
pub mod google;

pub use error::{AuthError, GOOGLE_LOGIN_FAILED, LOGIN_FAILED};

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info, instrument, warn};
use url::Url;

use vitrine_core::{Credentials, RegisterInput, User};

use crate::config::StorefrontConfig;
use crate::http::{build_client, server_message};

/// Authentication state visible to the rest of the storefront.
///
/// Holds only the optional user; `is_authenticated` is derived from it, so
/// the two can never disagree.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    user: Option<User>,
}

impl SessionState {
    /// A visitor with no session.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self { user: None }
    }

    /// A signed-in user.
    #[must_use]
    pub const fn authenticated(user: User) -> Self {
        Self { user: Some(user) }
    }

    /// The signed-in user, if any.
    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

/// Request body for `POST /auth/login`.
#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Request body for `POST /auth/google`.
#[derive(Serialize)]
struct GoogleLoginRequest<'a> {
    token: &'a str,
}

/// Success body shared by profile, login, and Google login.
#[derive(Deserialize)]
struct SessionResponse {
    user: User,
}

struct AuthEndpoints {
    profile: Url,
    login: Url,
    google: Url,
}

impl AuthEndpoints {
    fn new(config: &StorefrontConfig) -> Result<Self, url::ParseError> {
        Ok(Self {
            profile: config.endpoint("/auth/profile")?,
            login: config.endpoint("/auth/login")?,
            google: config.endpoint("/auth/google")?,
        })
    }
}

/// Handle to the process-wide authentication state.
///
/// Cheaply cloneable; all clones share the same state and cookie jar.
#[derive(Clone)]
pub struct AuthSession {
    inner: Arc<AuthSessionInner>,
}

struct AuthSessionInner {
    client: reqwest::Client,
    endpoints: AuthEndpoints,
    state: RwLock<SessionState>,
    /// Held from request to state write by every mutating operation, so a
    /// slow response can never overwrite the result of a later operation.
    op_lock: Mutex<()>,
}

impl AuthSession {
    /// Create an anonymous session holder without contacting the backend.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Client` if the HTTP client or endpoint URLs
    /// cannot be built.
    pub fn new(config: &StorefrontConfig) -> Result<Self, AuthError> {
        let client = build_client(config.timeouts, true)
            .map_err(|e| AuthError::Client(e.to_string()))?;
        let endpoints = AuthEndpoints::new(config).map_err(|e| AuthError::Client(e.to_string()))?;

        Ok(Self {
            inner: Arc::new(AuthSessionInner {
                client,
                endpoints,
                state: RwLock::new(SessionState::anonymous()),
                op_lock: Mutex::new(()),
            }),
        })
    }

    /// Create a session holder and restore any existing backend session.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Client` if the HTTP client cannot be built.
    /// Backend failures during the profile probe are not errors.
    pub async fn start(config: &StorefrontConfig) -> Result<Self, AuthError> {
        let session = Self::new(config)?;
        session.bootstrap().await;
        Ok(session)
    }

    // =========================================================================
    // State
    // =========================================================================

    /// Snapshot of the current state.
    pub async fn state(&self) -> SessionState {
        self.inner.state.read().await.clone()
    }

    /// The signed-in user, if any.
    pub async fn user(&self) -> Option<User> {
        self.inner.state.read().await.user.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.inner.state.read().await.is_authenticated()
    }

    async fn replace(&self, next: SessionState) {
        *self.inner.state.write().await = next;
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Restore the session from the backend cookie.
    ///
    /// Issues `GET /auth/profile`. On success the returned user becomes the
    /// signed-in user; on any failure the session is reset to anonymous.
    /// Failures are logged and never returned.
    #[instrument(skip(self))]
    pub async fn bootstrap(&self) {
        let _op = self.inner.op_lock.lock().await;
        match self.fetch_profile().await {
            Ok(user) => {
                debug!(user_id = %user.id, "restored session from profile");
                self.replace(SessionState::authenticated(user)).await;
            }
            Err(err) => {
                debug!(error = %err, "no active session, continuing anonymously");
                self.replace(SessionState::anonymous()).await;
            }
        }
    }

    async fn fetch_profile(&self) -> Result<User, AuthError> {
        let response = self
            .inner
            .client
            .get(self.inner.endpoints.profile.clone())
            .send()
            .await?;

        read_user(response, LOGIN_FAILED).await
    }

    /// Sign in with an identifier and secret.
    ///
    /// Issues `POST /auth/login` with a JSON body. On success the response's
    /// user replaces the current one and is returned.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Rejected` on a non-2xx response, carrying the
    /// server's `message` (or a generic fallback). Returns `AuthError::Http`
    /// or `AuthError::InvalidResponse` for transport and decoding failures.
    /// The session is left untouched on error.
    #[instrument(skip(self, credentials), fields(identifier = %credentials.identifier))]
    pub async fn sign_in(&self, credentials: &Credentials) -> Result<User, AuthError> {
        let body = LoginRequest {
            email: &credentials.identifier,
            password: credentials.expose_secret(),
        };

        let _op = self.inner.op_lock.lock().await;
        let response = self
            .inner
            .client
            .post(self.inner.endpoints.login.clone())
            .json(&body)
            .send()
            .await?;

        let user = read_user(response, LOGIN_FAILED).await?;
        info!(user_id = %user.id, "signed in");
        self.replace(SessionState::authenticated(user.clone())).await;
        Ok(user)
    }

    /// Sign in by exchanging a Google ID token.
    ///
    /// Issues `POST /auth/google` with `{ token }`. Same contract as
    /// [`AuthSession::sign_in`].
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingGoogleCredential` without any request when
    /// the token is empty or whitespace. The token is sent as given.
    /// Otherwise as [`AuthSession::sign_in`].
    #[instrument(skip(self, id_token))]
    pub async fn sign_in_with_google(&self, id_token: &str) -> Result<User, AuthError> {
        if id_token.trim().is_empty() {
            return Err(AuthError::MissingGoogleCredential);
        }

        let _op = self.inner.op_lock.lock().await;
        let response = self
            .inner
            .client
            .post(self.inner.endpoints.google.clone())
            .json(&GoogleLoginRequest { token: id_token })
            .send()
            .await?;

        let user = read_user(response, GOOGLE_LOGIN_FAILED).await?;
        info!(user_id = %user.id, "signed in with Google");
        self.replace(SessionState::authenticated(user.clone())).await;
        Ok(user)
    }

    /// Forget the signed-in user.
    ///
    /// Local only: the backend session cookie is not invalidated here.
    #[instrument(skip(self))]
    pub async fn sign_out(&self) {
        let _op = self.inner.op_lock.lock().await;
        self.replace(SessionState::anonymous()).await;
        info!("signed out");
    }

    /// Account registration.
    ///
    /// Not wired to the backend: the call is accepted and does nothing, and
    /// the session is left as it was.
    ///
    /// # Errors
    ///
    /// Never fails today; the signature leaves room for the backend call.
    #[instrument(skip(self, _input))]
    pub async fn register(&self, _input: &RegisterInput) -> Result<(), AuthError> {
        warn!("account registration is not available; request ignored");
        Ok(())
    }
}

/// Decode a session response into its user.
///
/// Non-2xx responses become `AuthError::Rejected` with the server message,
/// or `fallback` when the body has none.
async fn read_user(response: reqwest::Response, fallback: &str) -> Result<User, AuthError> {
    let status = response.status();
    let text = response.text().await?;

    if !status.is_success() {
        let message = server_message(&text).unwrap_or_else(|| fallback.to_string());
        return Err(AuthError::Rejected {
            status: status.as_u16(),
            message,
        });
    }

    let body: SessionResponse =
        serde_json::from_str(&text).map_err(|e| AuthError::InvalidResponse(e.to_string()))?;
    Ok(body.user)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use vitrine_core::UserId;

    fn user(first_name: &str) -> User {
        serde_json::from_value(serde_json::json!({ "id": 1, "firstName": first_name })).unwrap()
    }

    #[test]
    fn test_state_invariant_holds_for_constructors() {
        let anon = SessionState::anonymous();
        assert!(!anon.is_authenticated());
        assert!(anon.user().is_none());

        let signed = SessionState::authenticated(user("Ana"));
        assert!(signed.is_authenticated());
        assert_eq!(signed.user().unwrap().id, UserId::new("1"));
    }

    #[test]
    fn test_default_state_is_anonymous() {
        assert_eq!(SessionState::default(), SessionState::anonymous());
    }

    #[test]
    fn test_login_request_shape() {
        let body = LoginRequest {
            email: "ana@example.com",
            password: "s3cret",
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            serde_json::json!({ "email": "ana@example.com", "password": "s3cret" })
        );
    }

    #[tokio::test]
    async fn test_new_session_is_anonymous() {
        let config = StorefrontConfig::for_base_url("http://127.0.0.1:9").unwrap();
        let session = AuthSession::new(&config).unwrap();
        assert!(!session.is_authenticated().await);
        assert!(session.user().await.is_none());
    }

    #[tokio::test]
    async fn test_empty_google_token_fails_before_network() {
        // Port 9 (discard) is never contacted: validation happens first.
        let config = StorefrontConfig::for_base_url("http://127.0.0.1:9").unwrap();
        let session = AuthSession::new(&config).unwrap();
        let err = session.sign_in_with_google("  ").await.unwrap_err();
        assert!(matches!(err, AuthError::MissingGoogleCredential));
        assert!(!session.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_sign_out_resets_state() {
        let config = StorefrontConfig::for_base_url("http://127.0.0.1:9").unwrap();
        let session = AuthSession::new(&config).unwrap();
        session.replace(SessionState::authenticated(user("Ana"))).await;
        assert!(session.is_authenticated().await);

        session.sign_out().await;
        assert_eq!(session.state().await, SessionState::anonymous());
    }
}
