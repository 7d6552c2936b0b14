//! Response envelope normalization.
//!
//! The backend is not uniform: some endpoints wrap payloads in
//! `{succeeded, data, message}`, some use `success` for the flag, some
//! return the raw payload with no envelope at all, and failure bodies are
//! occasionally plain text. Everything funnels through [`normalize`] so
//! downstream code only ever sees an [`Outcome`].

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Longest slice of a raw (non-JSON) body echoed into a failure message.
const BODY_PREVIEW_LEN: usize = 300;

/// Uniform result of one gateway operation.
///
/// `success` is true only when the HTTP status was 2xx AND the backend's
/// boolean flag (when present) was true. `data` may be absent on
/// successful mutations whose response omits the entity body.
#[derive(Debug, Clone)]
pub struct Outcome<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
}

impl<T> Outcome<T> {
    pub fn success_with(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn success_empty() -> Self {
        Self {
            success: true,
            data: None,
            message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }

    /// The failure message, or `fallback` when none was recorded.
    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.message.as_deref().unwrap_or(fallback)
    }
}

/// Normalize one HTTP response (status + body text) into an [`Outcome`].
///
/// The body is read as text first and JSON parsing is attempted on top;
/// a body that fails to parse never panics — its raw text (truncated)
/// becomes the failure message.
pub fn normalize<T: DeserializeOwned>(
    status: u16,
    reason: &str,
    body: &str,
    fallback: &str,
) -> Outcome<T> {
    let http_ok = (200..300).contains(&status);

    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return if http_ok {
            Outcome::failure(format!("{fallback}: {}", preview(body)))
        } else {
            Outcome::failure(http_message(status, reason, body))
        };
    };

    let flag = backend_flag(&value);
    let message = backend_message(&value);

    match flag {
        // Business rejection: HTTP may be 200 but the flag says no.
        Some(false) => Outcome::failure(message.unwrap_or_else(|| fallback.to_string())),
        // The flag alone is not enough; the HTTP status must agree.
        Some(true) if !http_ok => Outcome::failure(http_message(status, reason, body)),
        Some(true) => decode(value.get("data").cloned().unwrap_or(Value::Null), message, body, fallback),
        // No flag: HTTP status alone governs.
        None if !http_ok => Outcome::failure(http_message(status, reason, body)),
        None => {
            let data = match &value {
                Value::Object(map) if map.contains_key("data") => map["data"].clone(),
                _ => value,
            };
            decode(data, message, body, fallback)
        }
    }
}

/// Normalize a response for operations that return no entity body
/// (deletes, accept/reject). A bare 2xx text body counts as success.
pub fn normalize_empty(status: u16, reason: &str, body: &str, fallback: &str) -> Outcome<()> {
    let http_ok = (200..300).contains(&status);

    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return if http_ok {
            Outcome::success_empty()
        } else {
            Outcome::failure(http_message(status, reason, body))
        };
    };

    match backend_flag(&value) {
        Some(false) => {
            Outcome::failure(backend_message(&value).unwrap_or_else(|| fallback.to_string()))
        }
        _ if !http_ok => Outcome::failure(http_message(status, reason, body)),
        _ => Outcome::success_empty(),
    }
}

fn backend_flag(value: &Value) -> Option<bool> {
    value
        .get("succeeded")
        .and_then(Value::as_bool)
        .or_else(|| value.get("success").and_then(Value::as_bool))
}

fn backend_message(value: &Value) -> Option<String> {
    value
        .get("message")
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

fn decode<T: DeserializeOwned>(
    data: Value,
    message: Option<String>,
    body: &str,
    fallback: &str,
) -> Outcome<T> {
    if data.is_null() {
        // Successful mutation without an entity body; callers reconcile
        // with a full reload.
        return Outcome {
            success: true,
            data: None,
            message,
        };
    }
    match serde_json::from_value::<T>(data) {
        Ok(data) => Outcome {
            success: true,
            data: Some(data),
            message,
        },
        Err(err) => {
            tracing::warn!(error = %err, "response payload had an unexpected shape");
            Outcome::failure(format!("{fallback}: {}", preview(body)))
        }
    }
}

fn http_message(status: u16, reason: &str, body: &str) -> String {
    format!("HTTP {status} {reason}: {}", preview(body))
}

/// Char-boundary-safe truncated prefix of a raw body.
fn preview(body: &str) -> &str {
    match body.char_indices().nth(BODY_PREVIEW_LEN) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}
