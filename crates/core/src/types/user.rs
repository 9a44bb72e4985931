//! User and login types.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use secrecy::{ExposeSecret, SecretString};

use super::id::UserId;

/// A signed-in storefront user as reported by the backend.
///
/// Only `firstName` is consumed by the storefront; everything else the
/// backend sends is retained in `extra` so the value can be replaced
/// wholesale without losing fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Fields the storefront does not interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Login input: an account identifier and its secret.
///
/// Transient; never persisted client-side. The secret is redacted from
/// `Debug` output.
#[derive(Debug, Clone)]
pub struct Credentials {
    /// Account identifier (the e-mail address on the login form).
    pub identifier: String,
    /// Account password.
    pub secret: SecretString,
}

impl Credentials {
    /// Create credentials from an identifier and secret.
    #[must_use]
    pub fn new(identifier: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            secret: SecretString::from(secret.into()),
        }
    }

    /// Expose the secret for building the login request body.
    #[must_use]
    pub fn expose_secret(&self) -> &str {
        self.secret.expose_secret()
    }
}

/// Account registration input.
///
/// Accepted by the session holder's `register` operation, which is not
/// wired to the backend yet.
#[derive(Debug, Clone)]
pub struct RegisterInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: SecretString,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_user_keeps_unknown_fields() {
        let user: User = serde_json::from_value(serde_json::json!({
            "id": 5,
            "firstName": "Ana",
            "email": "ana@example.com",
            "role": "customer"
        }))
        .unwrap();

        assert_eq!(user.id, UserId::new("5"));
        assert_eq!(user.first_name, "Ana");
        assert_eq!(user.email.as_deref(), Some("ana@example.com"));
        assert!(user.last_name.is_none());
        assert_eq!(user.extra.get("role"), Some(&Value::from("customer")));
    }

    #[test]
    fn test_user_requires_first_name() {
        let result = serde_json::from_value::<User>(serde_json::json!({ "id": 5 }));
        assert!(result.is_err());
    }

    #[test]
    fn test_credentials_debug_redacts_secret() {
        let credentials = Credentials::new("ana@example.com", "hunter2-hunter2");
        let debug = format!("{credentials:?}");
        assert!(debug.contains("ana@example.com"));
        assert!(!debug.contains("hunter2-hunter2"));
        assert_eq!(credentials.expose_secret(), "hunter2-hunter2");
    }
}
