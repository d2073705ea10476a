//! # fresh-cli
//!
//! A command-line client for Freshservice tickets.
//!
//! It lists tickets with simple filtering, shows a single ticket's details,
//! and changes a ticket's status through the Freshservice v2 REST API.
//!
//! ## Architecture
//!
//! - [`config`] - Credentials from environment variables and flags
//! - [`error`] - Error type with API key sanitization
//! - [`models`] - Ticket model and status/priority codes
//! - [`client`] - HTTP client for the Freshservice API
//! - [`format`] - Plain-text tables and detail views
//! - [`cli`] - Command definitions and dispatch
//!
//! ## Usage
//!
//! ```bash
//! export FRESHSERVICE_API_KEY=your-api-key
//! export FRESHSERVICE_DOMAIN=acme.freshservice.com
//!
//! fresh-cli list --status open --limit 10
//! fresh-cli view 42
//! fresh-cli status 42 resolved
//! ```
//!
//! Optional:
//! - `RUST_LOG`: Log level (e.g., `fresh_cli=debug`)
//!
//! ## Example
//!
//! Using the [`FreshClient`](client::FreshClient) directly:
//!
//! ```ignore
//! use fresh_cli::client::{FreshClient, TicketFilters};
//! use fresh_cli::config::Config;
//! use fresh_cli::models::TicketStatus;
//!
//! async fn example() -> Result<(), fresh_cli::error::FreshError> {
//!     let config = Config::from_env().resolve(None, None)?;
//!     let client = FreshClient::new(&config)?;
//!
//!     let filters = TicketFilters::new().with_status(TicketStatus::Open);
//!     for ticket in client.list_tickets(&filters, 10).await? {
//!         println!("#{}: {}", ticket.id, ticket.subject);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
