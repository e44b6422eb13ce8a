//! Read-only access to the persisted session token.
//!
//! SYSTEM CONTEXT
//! ==============
//! The sign-in screen stores an opaque token under a fixed `localStorage`
//! key; route guards only ever ask whether it is there. Issuing, refreshing,
//! or validating the token happens elsewhere.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, PoisonError, RwLock};

use crate::config::RouterConfig;

/// Source of the current session token.
pub trait SessionStore: Send + Sync {
    /// The raw stored token, if any.
    fn token(&self) -> Option<String>;

    /// `true` when a non-empty token is stored. An empty value counts as
    /// signed out.
    fn has_session(&self) -> bool {
        self.token().is_some_and(|token| !token.is_empty())
    }
}

/// Session store handed to components through context.
pub type SharedSession = Arc<dyn SessionStore>;

/// In-process token holder for tests and non-browser hosts.
#[derive(Debug, Default)]
pub struct MemorySession {
    token: RwLock<Option<String>>,
}

impl MemorySession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }

    pub fn set_token(&self, token: impl Into<String>) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = Some(token.into());
    }

    pub fn clear(&self) {
        *self.token.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

impl SessionStore for MemorySession {
    fn token(&self) -> Option<String> {
        self.token.read().unwrap_or_else(PoisonError::into_inner).clone()
    }
}

/// Token stored in the browser's `localStorage` under `key`.
///
/// Missing storage (private mode, no window) reads as signed out. Outside the
/// `csr` build there is no browser and the store is always empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalStorageSession {
    key: String,
}

impl LocalStorageSession {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    #[must_use]
    pub fn from_config(config: &RouterConfig) -> Self {
        Self::new(config.storage_key())
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl SessionStore for LocalStorageSession {
    fn token(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let Some(window) = web_sys::window() else {
                leptos::logging::warn!("session: no window, treating as signed out");
                return None;
            };
            let storage = match window.local_storage() {
                Ok(Some(storage)) => storage,
                Ok(None) => {
                    leptos::logging::warn!("session: localStorage unavailable");
                    return None;
                }
                Err(e) => {
                    leptos::logging::warn!("session: localStorage access denied: {e:?}");
                    return None;
                }
            };
            match storage.get_item(&self.key) {
                Ok(token) => token,
                Err(e) => {
                    leptos::logging::warn!("session: failed to read {}: {e:?}", self.key);
                    None
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }
}
