//! Client error taxonomy and user-facing message normalization.
//!
//! SYSTEM CONTEXT
//! ==============
//! Network calls, validation and unexpected failures all surface here. Pages
//! never render a raw error; they render `format_error` output so that every
//! failure shape collapses into one short human-readable line.
//!
//! ERROR HANDLING
//! ==============
//! `format_error` is total. Anything it cannot interpret falls back to
//! [`GENERIC_ERROR_MESSAGE`].

#[cfg(test)]
#[path = "errors_test.rs"]
mod errors_test;

use std::collections::BTreeMap;

use serde_json::Value;

/// Fallback shown when no interpretable message is available.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong";

/// Shown for HTTP 429 responses that carry no message of their own.
pub const RATE_LIMITED_MESSAGE: &str = "Too many requests. Please wait a moment and try again.";

const MAX_MESSAGE_CHARS: usize = 200;

/// Failure raised by client-side actions.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// The request never produced an HTTP response.
    #[error("network error: {message}")]
    Network { message: String },
    /// The server answered with a non-2xx status.
    #[error("request failed with status {status}")]
    Http { status: u16, message: Option<String> },
    /// Field-level validation failure, keyed by field name.
    #[error("validation failed")]
    Validation { fields: BTreeMap<String, String> },
    /// A response body could not be decoded.
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("unknown error")]
    Unknown,
}

impl ClientError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network { message: message.into() }
    }

    /// Whether the server rejected the credential used for the request.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Http { status: 401, .. })
    }
}

#[cfg(feature = "hydrate")]
impl From<gloo_net::Error> for ClientError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => Self::Decode(e.to_string()),
            other => Self::network(other.to_string()),
        }
    }
}

/// Collapse any client error into a single line suitable for display.
pub fn format_error(err: &ClientError) -> String {
    let message = match err {
        ClientError::Network { message } => sanitize(message),
        ClientError::Http { status, message } => message
            .as_deref()
            .and_then(sanitize)
            .or_else(|| (*status == 429).then(|| RATE_LIMITED_MESSAGE.to_owned())),
        ClientError::Validation { fields } => fields.values().find_map(|m| sanitize(m)),
        ClientError::Decode(_) | ClientError::Unknown => None,
    };
    message.unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_owned())
}

/// First line only, trimmed and length-capped; `None` when nothing is left.
fn sanitize(raw: &str) -> Option<String> {
    let line = raw.lines().map(str::trim).find(|l| !l.is_empty())?;
    if line.chars().count() <= MAX_MESSAGE_CHARS {
        return Some(line.to_owned());
    }
    let mut capped: String = line.chars().take(MAX_MESSAGE_CHARS - 1).collect();
    capped.push('…');
    Some(capped)
}

/// Build a [`ClientError`] from a non-2xx response status and raw body.
///
/// Understands `{"message": ...}`, `{"detail": "..."}`,
/// `{"detail": [{"loc": [...], "msg": ...}]}` and `{"errors": {field: msg}}`.
pub fn error_from_response(status: u16, body: &str) -> ClientError {
    let Ok(Value::Object(obj)) = serde_json::from_str::<Value>(body) else {
        return ClientError::Http { status, message: None };
    };

    if let Some(Value::Array(items)) = obj.get("detail") {
        let fields = detail_field_errors(items);
        if !fields.is_empty() {
            return ClientError::Validation { fields };
        }
    }
    if let Some(Value::Object(errors)) = obj.get("errors") {
        let fields: BTreeMap<String, String> = errors
            .iter()
            .filter_map(|(field, msg)| Some((field.clone(), message_text(msg)?)))
            .collect();
        if !fields.is_empty() {
            return ClientError::Validation { fields };
        }
    }

    let message = ["message", "detail", "error"]
        .iter()
        .find_map(|key| obj.get(*key).and_then(Value::as_str))
        .map(str::to_owned);
    ClientError::Http { status, message }
}

fn detail_field_errors(items: &[Value]) -> BTreeMap<String, String> {
    items
        .iter()
        .filter_map(|item| {
            let msg = item.get("msg").and_then(Value::as_str)?;
            let field = item
                .get("loc")
                .and_then(Value::as_array)
                .and_then(|loc| loc.last())
                .map(|last| match last {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .unwrap_or_else(|| "form".to_owned());
            Some((field, msg.to_owned()))
        })
        .collect()
}

fn message_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Array(items) => items.iter().find_map(Value::as_str).map(str::to_owned),
        _ => None,
    }
}
