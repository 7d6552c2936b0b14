//! Remote data gateway for the admissions REST API.
//!
//! Translates one programmatic intent ("create degree X") into one HTTP
//! request and normalizes the backend's inconsistent response envelopes
//! (`succeeded` vs `success`, raw payloads vs `{data: [...]}`) into a
//! uniform [`envelope::Outcome`]. Expected failures — missing token,
//! transport errors, malformed bodies, business rejections — are returned
//! as failed outcomes, never as panics or `Err` values.

pub mod client;
pub mod config;
pub mod envelope;
pub mod messages;
pub mod ops;
pub mod session;

pub use client::Gateway;
pub use config::{ConfigError, GatewayConfig};
pub use envelope::Outcome;
pub use session::Session;
