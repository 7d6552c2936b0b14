//! HTTP client wrapper shared by all entity operations.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::config::GatewayConfig;
use crate::envelope::{self, Outcome};
use crate::messages::MSG_LOGIN_FIRST;
use crate::session::Session;

/// HTTP gateway to the admissions REST API.
///
/// One instance per configured backend; cheap to clone via [`Arc`] in the
/// console layer. Every operation checks the session token before the
/// request is built — a missing token short-circuits to a failure outcome
/// without touching the network.
pub struct Gateway {
    http: reqwest::Client,
    base_url: String,
    session: Arc<Session>,
}

impl Gateway {
    pub fn new(config: GatewayConfig, session: Arc<Session>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url,
            session,
        }
    }

    /// Build a gateway from `QABUL_API_BASE_URL`.
    pub fn from_env(session: Arc<Session>) -> Result<Self, crate::config::ConfigError> {
        Ok(Self::new(GatewayConfig::from_env()?, session))
    }

    pub fn session(&self) -> &Arc<Session> {
        &self.session
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Attach the bearer token, or short-circuit when logged out.
    fn authorize(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<reqwest::RequestBuilder, String> {
        match self.session.token() {
            Some(token) => Ok(builder.bearer_auth(token)),
            None => Err(MSG_LOGIN_FIRST.to_string()),
        }
    }

    /// Send a request and normalize the JSON envelope into `Outcome<T>`.
    pub(crate) async fn send<T: DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
        fallback: &str,
    ) -> Outcome<T> {
        let (status, reason, body) = match self.dispatch(builder, fallback).await {
            Ok(parts) => parts,
            Err(outcome) => return outcome.map_type(),
        };
        envelope::normalize(status, &reason, &body, fallback)
    }

    /// Send a request whose success carries no entity body.
    pub(crate) async fn send_empty(
        &self,
        builder: reqwest::RequestBuilder,
        fallback: &str,
    ) -> Outcome<()> {
        let (status, reason, body) = match self.dispatch(builder, fallback).await {
            Ok(parts) => parts,
            Err(outcome) => return outcome,
        };
        envelope::normalize_empty(status, &reason, &body, fallback)
    }

    /// Send a request expected to answer with raw bytes (PDF exports).
    pub(crate) async fn send_bytes(
        &self,
        builder: reqwest::RequestBuilder,
        fallback: &str,
    ) -> Outcome<Vec<u8>> {
        let builder = match self.authorize(builder) {
            Ok(b) => b,
            Err(msg) => return Outcome::failure(msg),
        };
        let response = match builder.send().await {
            Ok(r) => r,
            Err(err) => {
                tracing::warn!(error = %err, "request failed before a response arrived");
                return Outcome::failure(format!("{fallback}: {err}"));
            }
        };
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Outcome::failure(format!(
                "HTTP {} {}: {}",
                status.as_u16(),
                status.canonical_reason().unwrap_or(""),
                body
            ));
        }
        match response.bytes().await {
            Ok(bytes) => Outcome::success_with(bytes.to_vec()),
            Err(err) => Outcome::failure(format!("{fallback}: {err}")),
        }
    }

    /// Authorize, send, and split the response into status + body text.
    /// Transport failures come back as ready-made failure outcomes.
    async fn dispatch(
        &self,
        builder: reqwest::RequestBuilder,
        fallback: &str,
    ) -> Result<(u16, String, String), Outcome<()>> {
        let builder = match self.authorize(builder) {
            Ok(b) => b,
            Err(msg) => return Err(Outcome::failure(msg)),
        };

        let response = match builder.send().await {
            Ok(r) => r,
            Err(err) => {
                tracing::warn!(error = %err, "request failed before a response arrived");
                return Err(Outcome::failure(format!("{fallback}: {err}")));
            }
        };

        let status = response.status();
        let reason = status.canonical_reason().unwrap_or("").to_string();
        match response.text().await {
            Ok(body) => Ok((status.as_u16(), reason, body)),
            Err(err) => Err(Outcome::failure(format!("{fallback}: {err}"))),
        }
    }
}

impl Outcome<()> {
    /// Re-type a data-less failure outcome. Only valid for failures, which
    /// is the only way `dispatch` produces one.
    fn map_type<T>(self) -> Outcome<T> {
        Outcome {
            success: self.success,
            data: None,
            message: self.message,
        }
    }
}
