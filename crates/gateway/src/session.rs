//! Injected session object owning the bearer token.
//!
//! Replaces the original portal's ambient local-storage reads with an
//! explicit lifecycle: set at login, read by every gateway call, cleared
//! at logout.

use std::sync::RwLock;

/// Shared authentication session.
#[derive(Debug, Default)]
pub struct Session {
    token: RwLock<Option<String>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a session already holding a token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }

    /// Store the bearer token obtained at login.
    pub fn login(&self, token: impl Into<String>) {
        *self.token.write().expect("session lock poisoned") = Some(token.into());
    }

    /// Drop the token at logout.
    pub fn logout(&self) {
        *self.token.write().expect("session lock poisoned") = None;
    }

    /// Current token, if logged in.
    pub fn token(&self) -> Option<String> {
        self.token.read().expect("session lock poisoned").clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.read().expect("session lock poisoned").is_some()
    }
}
