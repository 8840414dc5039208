//! Persisted session token for the current browser context.
//!
//! SYSTEM CONTEXT
//! ==============
//! Login/register flows write the token, authorized API calls read it, and
//! route guards ask whether one is present. The store is provided through
//! Leptos context as an explicit handle so tests can swap the backend.
//!
//! ERROR HANDLING
//! ==============
//! Storage failures never propagate: reads degrade to "no token" and writes
//! are dropped, both with a console warning.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_TOKEN_KEY;
use crate::util::storage::{BrowserStorage, TokenStorage};

/// Opaque bearer credential issued by the server.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Token(String);

impl Token {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `Authorization` header value for this token.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token(<redacted>)")
    }
}

/// Handle to the single session token slot.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn TokenStorage>,
    key: Arc<str>,
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore").field("key", &self.key).finish_non_exhaustive()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(Arc::new(BrowserStorage), DEFAULT_TOKEN_KEY)
    }
}

impl SessionStore {
    pub fn new(storage: Arc<dyn TokenStorage>, key: &str) -> Self {
        Self { storage, key: Arc::from(key) }
    }

    /// Current token, or `None` when absent or unreadable.
    pub fn get(&self) -> Option<Token> {
        match self.storage.read(&self.key) {
            Ok(raw) => raw.map(Token),
            Err(e) => {
                leptos::logging::warn!("session read failed for key={}: {e}", self.key);
                None
            }
        }
    }

    /// Replace any existing token.
    pub fn set(&self, token: &Token) {
        if let Err(e) = self.storage.write(&self.key, token.as_str()) {
            leptos::logging::warn!("session write failed for key={}: {e}", self.key);
        }
    }

    /// Drop the token. Safe to call when none is stored.
    pub fn clear(&self) {
        if let Err(e) = self.storage.remove(&self.key) {
            leptos::logging::warn!("session clear failed for key={}: {e}", self.key);
        }
    }

    /// Token presence is the client's working definition of "signed in".
    pub fn is_authenticated(&self) -> bool {
        self.get().is_some()
    }
}
