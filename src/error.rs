//! Error types for fresh-cli.
//!
//! This module defines `FreshError`, the unified error type used by the
//! configuration loader and the API client.
//!
//! # Security
//!
//! Error messages built from server responses are sanitized so the API key
//! never shows up in logs or on the terminal. Use `sanitize_message()` when
//! constructing error messages from external sources.

use std::time::Duration;
use thiserror::Error;

/// Keys shorter than this are not redacted; replacing them would mangle
/// unrelated text such as URLs.
const MIN_REDACTED_KEY_LEN: usize = 8;

/// Unified error type for all fresh-cli operations.
#[derive(Error, Debug)]
pub enum FreshError {
    /// Configuration error - missing API key or unusable domain.
    #[error("configuration error: {0}")]
    Config(String),

    /// HTTP request failed during transmission.
    #[error("HTTP request failed: {0}")]
    Http(#[source] reqwest::Error),

    /// HTTP client initialization failed.
    #[error("HTTP client error: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// HTTP response returned a non-success status code.
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// The HTTP status code returned.
        status: reqwest::StatusCode,
        /// The response body, potentially containing error details.
        body: String,
    },

    /// Request timed out.
    #[error("request timed out after {duration:?} ({operation})")]
    Timeout {
        /// How long we waited before timing out.
        duration: Duration,
        /// The operation that timed out.
        operation: String,
    },

    /// JSON serialization or deserialization failed.
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Requested ticket was not found.
    #[error("ticket not found: {id} (HTTP 404 Not Found)")]
    NotFound {
        /// The ID of the ticket that was not found.
        id: String,
    },

    /// Authentication failed - likely an invalid API key.
    #[error("authentication failed (HTTP {status}) - check FRESHSERVICE_API_KEY")]
    Authentication {
        /// The HTTP status code returned (401 or 403).
        status: reqwest::StatusCode,
    },
}

impl FreshError {
    /// Creates a configuration error for a missing setting.
    pub fn missing_env(var_name: &str, flag: &str) -> Self {
        FreshError::Config(format!(
            "API key is required. Set the {} environment variable or use the {} option",
            var_name, flag
        ))
    }

    /// Creates a configuration error for an invalid value.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        FreshError::Config(message.into())
    }

    /// Creates a not found error for a ticket ID.
    pub fn not_found(id: impl Into<String>) -> Self {
        FreshError::NotFound { id: id.into() }
    }

    /// Creates a timeout error.
    pub fn timeout(duration: Duration, operation: impl Into<String>) -> Self {
        FreshError::Timeout {
            duration,
            operation: operation.into(),
        }
    }

    /// Returns true for errors raised before any request left the process.
    #[must_use]
    pub fn is_config(&self) -> bool {
        matches!(self, FreshError::Config(_))
    }

    /// Returns the HTTP status behind this error, if the server answered.
    #[must_use]
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            FreshError::HttpStatus { status, .. } | FreshError::Authentication { status } => {
                Some(*status)
            }
            FreshError::NotFound { .. } => Some(reqwest::StatusCode::NOT_FOUND),
            FreshError::Http(e) => e.status(),
            _ => None,
        }
    }

    /// Replaces every occurrence of the API key in `message` with `[REDACTED]`.
    ///
    /// Keys shorter than eight characters are left alone.
    #[must_use]
    pub fn sanitize_message(message: &str, api_key: &str) -> String {
        if api_key.len() < MIN_REDACTED_KEY_LEN {
            return message.to_string();
        }
        message.replace(api_key, "[REDACTED]")
    }

    /// Creates a sanitized version of this error's display message.
    #[must_use]
    pub fn sanitized_display(&self, api_key: &str) -> String {
        Self::sanitize_message(&self.to_string(), api_key)
    }
}
