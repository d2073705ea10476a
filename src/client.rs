//! HTTP client for the Freshservice v2 API.
//!
//! This module provides the `FreshClient` struct for making authenticated
//! requests to the Freshservice REST API, plus `TicketFilters` for narrowing
//! ticket lists.
//!
//! Filtering happens client-side on the first page the server returns. There
//! is no pagination and no retry: each call is a single request.
//!
//! # Security
//!
//! The API key is never logged. Error bodies are sanitized before they are
//! surfaced.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method, Response, StatusCode};
use serde::Serialize;
use url::Url;

use crate::config::Config;
use crate::error::FreshError;
use crate::models::{
    GetTicketResponse, ListTicketsResponse, Ticket, TicketPriority, TicketStatus,
    UpdateStatusRequest,
};

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Basic auth password. Freshservice ignores it; the API key is the username.
const BASIC_AUTH_PASSWORD: &str = "X";

/// Maximum length for HTTP error response bodies.
const MAX_ERROR_BODY_LEN: usize = 500;

/// Default number of tickets shown by `list_tickets` callers.
pub const DEFAULT_LIST_LIMIT: usize = 20;

/// HTTP client for the Freshservice API.
///
/// # Example
///
/// ```ignore
/// let config = Config::from_env().resolve(None, None)?;
/// let client = FreshClient::new(&config)?;
///
/// let open = TicketFilters::new().with_status(TicketStatus::Open);
/// let tickets = client.list_tickets(&open, 10).await?;
/// ```
#[derive(Clone)]
pub struct FreshClient {
    /// The underlying HTTP client (cloning is cheap).
    http: Client,

    /// Base URL for the API (e.g., `https://acme.freshservice.com/api/v2`).
    base_url: String,

    /// API key for authentication.
    /// SECURITY: Never log this value!
    api_key: String,
}

impl FreshClient {
    /// Creates a client for `https://{domain}/api/v2`.
    ///
    /// # Errors
    ///
    /// Returns `FreshError::Config` if no API key is set or the domain does
    /// not form a valid URL, and `FreshError::HttpClient` if the HTTP client
    /// fails to initialize.
    pub fn new(config: &Config) -> Result<Self, FreshError> {
        let base_url = Self::api_base_url(&config.domain);
        Self::with_base_url(config, &base_url)
    }

    /// Creates a client against an explicit API root instead of the domain.
    pub fn with_base_url(config: &Config, base_url: &str) -> Result<Self, FreshError> {
        let api_key = config.api_key()?.to_string();

        let parsed = Url::parse(base_url).map_err(|e| {
            FreshError::invalid_config(format!("invalid API base URL {:?}: {}", base_url, e))
        })?;
        if parsed.host_str().is_none() {
            return Err(FreshError::invalid_config(format!(
                "API base URL {:?} has no host",
                base_url
            )));
        }

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(FreshError::HttpClient)?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// Builds the API root for a Freshservice domain.
    fn api_base_url(domain: &str) -> String {
        format!("https://{}/api/v2", domain.trim().trim_end_matches('/'))
    }

    /// Returns the API root this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns a reference to the API key for sanitization purposes.
    ///
    /// This should ONLY be used for sanitizing error messages, never for logging.
    pub fn api_key_for_sanitization(&self) -> &str {
        &self.api_key
    }

    /// Lists tickets, filtered client-side and capped at `limit`.
    ///
    /// Only the first page the server returns by default is considered, so
    /// fewer than `limit` matches may come back even when more exist.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let filters = TicketFilters::new().with_status(TicketStatus::Closed);
    /// let closed = client.list_tickets(&filters, 5).await?;
    /// ```
    pub async fn list_tickets(
        &self,
        filters: &TicketFilters,
        limit: usize,
    ) -> Result<Vec<Ticket>, FreshError> {
        let response: ListTicketsResponse = self.get("/tickets").await?;
        let fetched = response.tickets.len();

        let tickets: Vec<Ticket> = response
            .tickets
            .into_iter()
            .filter(|ticket| filters.matches(ticket))
            .take(limit)
            .collect();

        tracing::debug!(
            fetched = fetched,
            returned = tickets.len(),
            limit = limit,
            "Filtered ticket list"
        );

        Ok(tickets)
    }

    /// Gets full details of a single ticket.
    ///
    /// # Errors
    ///
    /// Returns `FreshError::NotFound` if the ticket doesn't exist.
    pub async fn get_ticket(&self, id: u64) -> Result<Ticket, FreshError> {
        let path = format!("/tickets/{}", id);

        let response: GetTicketResponse = self
            .get(&path)
            .await
            .map_err(|e| missing_ticket(e, id))?;

        Ok(response.ticket)
    }

    /// Sets a ticket's status.
    ///
    /// Success is judged on the HTTP status alone; the returned ticket is
    /// discarded.
    pub async fn update_ticket_status(
        &self,
        id: u64,
        status: TicketStatus,
    ) -> Result<(), FreshError> {
        let path = format!("/tickets/{}", id);
        let body = UpdateStatusRequest {
            status: status.code(),
        };

        self.send(Method::PUT, &path, Some(&body))
            .await
            .map_err(|e| missing_ticket(e, id))?;

        tracing::debug!(ticket_id = id, status = status.name(), "Ticket status updated");
        Ok(())
    }

    /// Makes a GET request and parses the JSON body.
    async fn get<T>(&self, path: &str) -> Result<T, FreshError>
    where
        T: serde::de::DeserializeOwned,
    {
        let response = self.send::<()>(Method::GET, path, None).await?;

        let body = response.text().await.map_err(FreshError::Http)?;

        tracing::trace!(body = %body, "Freshservice API response");

        serde_json::from_str(&body).map_err(FreshError::Serialization)
    }

    /// Sends an authenticated request and checks the HTTP status.
    async fn send<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response, FreshError>
    where
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, path);

        tracing::debug!(
            method = %method,
            path = %path,
            "Making Freshservice API request"
        );

        let mut req = self
            .http
            .request(method.clone(), &url)
            .basic_auth(&self.api_key, Some(BASIC_AUTH_PASSWORD));

        if let Some(body) = body {
            req = req.json(body);
        }

        let response = req.send().await.map_err(|e| {
            if e.is_timeout() {
                return FreshError::timeout(
                    Duration::from_secs(DEFAULT_TIMEOUT_SECS),
                    format!("{} {}", method, path),
                );
            }
            FreshError::Http(e)
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(self.handle_http_error(status, response).await);
        }

        Ok(response)
    }

    /// Converts a non-success response into a `FreshError`.
    async fn handle_http_error(&self, status: StatusCode, response: Response) -> FreshError {
        let body = response.text().await.unwrap_or_default();
        let body = FreshError::sanitize_message(&body, &self.api_key);
        let body = truncate_body(body);

        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                tracing::warn!(status = %status, "Freshservice rejected the API key");
                FreshError::Authentication { status }
            }
            _ => FreshError::HttpStatus { status, body },
        }
    }
}

/// Turns a 404 from a single-ticket endpoint into `NotFound` for that ticket.
///
/// A 404 on the collection endpoint means a wrong domain or path, so only
/// per-ticket calls go through here.
fn missing_ticket(err: FreshError, id: u64) -> FreshError {
    match err {
        FreshError::HttpStatus { status, .. } if status == StatusCode::NOT_FOUND => {
            FreshError::not_found(id.to_string())
        }
        other => other,
    }
}

/// Truncates an error body to `MAX_ERROR_BODY_LEN` bytes on a char boundary.
fn truncate_body(body: String) -> String {
    if body.len() <= MAX_ERROR_BODY_LEN {
        return body;
    }
    let mut end = MAX_ERROR_BODY_LEN;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}

/// Client-side filters for `list_tickets`.
///
/// Each set filter must match exactly; unset filters match everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TicketFilters {
    /// Keep only tickets with this status.
    pub status: Option<TicketStatus>,

    /// Keep only tickets with this priority.
    pub priority: Option<TicketPriority>,
}

impl TicketFilters {
    /// Creates empty filters (matches every ticket).
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters by status.
    pub fn with_status(mut self, status: TicketStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Filters by priority.
    pub fn with_priority(mut self, priority: TicketPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Returns true if `ticket` passes every set filter.
    pub fn matches(&self, ticket: &Ticket) -> bool {
        self.status.map_or(true, |s| ticket.status == s.code())
            && self.priority.map_or(true, |p| ticket.priority == p.code())
    }
}
