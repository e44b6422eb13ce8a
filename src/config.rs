//! Router configuration: deploy base, session storage key, and login path.
//!
//! SYSTEM CONTEXT
//! ==============
//! The bundle may be served under a sub-path, so every incoming location is
//! stripped of the base before matching and every outgoing redirect gets it
//! back. The base is fixed at build time through `APP_BASE_URL`; a JSON
//! document can override any field for embedders.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// `localStorage` key holding the session token.
pub const DEFAULT_STORAGE_KEY: &str = "token";

/// Path every denied navigation is sent to.
pub const DEFAULT_LOGIN_PATH: &str = "/login";

/// Validated router settings.
///
/// Fields are private and every deserialization goes through
/// `RawRouterConfig`, so a `RouterConfig` always carries a normalized base
/// (empty, or `/segment` without a trailing slash).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRouterConfig")]
pub struct RouterConfig {
    base: String,
    storage_key: String,
    login_path: String,
}

/// Config document as written, before validation.
#[derive(Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawRouterConfig {
    base: String,
    storage_key: String,
    login_path: String,
}

impl Default for RawRouterConfig {
    fn default() -> Self {
        Self {
            base: String::new(),
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            login_path: DEFAULT_LOGIN_PATH.to_owned(),
        }
    }
}

impl TryFrom<RawRouterConfig> for RouterConfig {
    type Error = ConfigError;

    fn try_from(raw: RawRouterConfig) -> Result<Self, Self::Error> {
        Self {
            base: raw.base,
            storage_key: raw.storage_key,
            login_path: raw.login_path,
        }
        .validated()
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        let raw = RawRouterConfig::default();
        Self {
            base: raw.base,
            storage_key: raw.storage_key,
            login_path: raw.login_path,
        }
    }
}

impl RouterConfig {
    /// Parse and validate a JSON config document. Missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the document is malformed or a field is invalid.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let raw: RawRouterConfig = serde_json::from_str(raw)?;
        Self::try_from(raw)
    }

    /// Build from the compile-time environment (`APP_BASE_URL`).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBase`] when the baked-in base is not absolute.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        match option_env!("APP_BASE_URL") {
            Some(base) => Self::default().with_base(base),
            None => Ok(Self::default()),
        }
    }

    /// Replace the deploy base.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBase`] when `base` is neither empty nor absolute.
    pub fn with_base(mut self, base: &str) -> Result<Self, ConfigError> {
        base.clone_into(&mut self.base);
        self.validated()
    }

    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    #[must_use]
    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    #[must_use]
    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    /// Map a browser path to a table path, or `None` when it lies outside the base.
    ///
    /// The base itself maps to `/`.
    #[must_use]
    pub fn strip_base<'a>(&self, path: &'a str) -> Option<&'a str> {
        if self.base.is_empty() {
            return Some(path);
        }
        let rest = path.strip_prefix(self.base.as_str())?;
        if rest.is_empty() {
            Some("/")
        } else if rest.starts_with('/') {
            Some(rest)
        } else {
            None
        }
    }

    /// Prefix a table path with the base for an outgoing navigation.
    #[must_use]
    pub fn href(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    fn validated(mut self) -> Result<Self, ConfigError> {
        self.base = normalize_base(&self.base)?;
        if !self.login_path.starts_with('/') {
            return Err(ConfigError::InvalidLoginPath(self.login_path));
        }
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::EmptyStorageKey);
        }
        Ok(self)
    }
}

fn normalize_base(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(String::new());
    }
    if !trimmed.starts_with('/') {
        return Err(ConfigError::InvalidBase(raw.to_owned()));
    }
    // "/" and "/app/" both lose the trailing slash; "/" becomes no base at all.
    Ok(trimmed.trim_end_matches('/').to_owned())
}
