//! Shared HTTP plumbing for backend calls.
//!
//! Builds the `reqwest` clients used by the session holder and the product
//! client, and extracts user-facing text from error responses.

use reqwest::StatusCode;
use serde::Deserialize;

use crate::config::HttpTimeouts;

/// Build an HTTP client with the configured timeouts.
///
/// With `cookies` enabled the client keeps a cookie jar, so every request it
/// sends carries the backend session cookie.
pub(crate) fn build_client(
    timeouts: HttpTimeouts,
    cookies: bool,
) -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeouts.request)
        .connect_timeout(timeouts.connect)
        .cookie_store(cookies)
        .build()
}

/// Reason phrase for a status, falling back to the numeric code.
pub(crate) fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map_or_else(|| status.as_u16().to_string(), str::to_string)
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<ServerMessage>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ServerMessage {
    Text(String),
    List(Vec<String>),
}

/// Extract the `message` field from a JSON error body.
///
/// Validation-style backends send a list of messages; those are joined.
/// Returns `None` when the body is not JSON or carries no usable message.
pub(crate) fn server_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    let message = match parsed.message? {
        ServerMessage::Text(text) => text,
        ServerMessage::List(items) => items.join(", "),
    };
    let message = message.trim().to_string();
    (!message.is_empty()).then_some(message)
}
