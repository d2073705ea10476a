//! Configuration management for fresh-cli.
//!
//! Credentials come from environment variables (optionally seeded from a
//! `.env` file by the binary) and can be overridden by command-line flags.
//! The resulting `Config` is passed explicitly to the API client.

use std::env;
use std::fmt;

use crate::error::FreshError;

/// Environment variable holding the Freshservice API key.
pub const API_KEY_VAR: &str = "FRESHSERVICE_API_KEY";

/// Environment variable holding the Freshservice domain.
pub const DOMAIN_VAR: &str = "FRESHSERVICE_DOMAIN";

/// Domain used when none is configured.
pub const DEFAULT_DOMAIN: &str = "freshservice.com";

/// Configuration for connecting to Freshservice.
///
/// The API key is stored but never logged; `Debug` output redacts it.
#[derive(Clone, PartialEq, Eq)]
pub struct Config {
    /// API key used as the Basic auth username.
    /// This value must never be logged or included in error messages.
    pub api_key: Option<String>,

    /// Service hostname used to build the API base URL
    /// (e.g., `acme.freshservice.com`).
    pub domain: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            domain: DEFAULT_DOMAIN.to_string(),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("domain", &self.domain)
            .finish()
    }
}

impl Config {
    /// Reads configuration from the process environment.
    ///
    /// Empty values count as unset; a missing domain falls back to
    /// [`DEFAULT_DOMAIN`].
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Self {
            api_key: read(API_KEY_VAR),
            domain: read(DOMAIN_VAR).unwrap_or_else(|| DEFAULT_DOMAIN.to_string()),
        }
    }

    /// Re-reads the environment into this configuration.
    ///
    /// Returns `true` if an API key is present afterwards.
    pub fn load(&mut self) -> bool {
        *self = Self::from_env();
        self.is_configured()
    }

    /// Stores the given credentials in the process environment and in `self`.
    ///
    /// Nothing is written to disk; the values live only as long as the process.
    pub fn save(&mut self, api_key: &str, domain: &str) {
        env::set_var(API_KEY_VAR, api_key);
        env::set_var(DOMAIN_VAR, domain);
        self.api_key = Some(api_key.to_string());
        self.domain = domain.to_string();
        tracing::debug!(domain = %domain, "Configuration saved to process environment");
    }

    /// Returns true if an API key is available.
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    /// Returns the API key, or a configuration error if none is set.
    pub fn api_key(&self) -> Result<&str, FreshError> {
        self.api_key
            .as_deref()
            .ok_or_else(|| FreshError::missing_env(API_KEY_VAR, "--api-key"))
    }

    /// Applies command-line overrides on top of this configuration.
    ///
    /// Flags win over environment values. Fails if no API key is available
    /// from either source.
    pub fn resolve(
        mut self,
        api_key: Option<String>,
        domain: Option<String>,
    ) -> Result<Self, FreshError> {
        if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
            self.api_key = Some(key.trim().to_string());
        }
        if let Some(domain) = domain.filter(|d| !d.trim().is_empty()) {
            self.domain = domain.trim().to_string();
        }

        self.api_key()?;
        Ok(self)
    }
}
