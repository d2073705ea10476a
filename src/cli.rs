//! Command-line surface: argument definitions and command dispatch.
//!
//! Each command performs one request and returns the text to print, so the
//! binary stays a thin shell around [`run`].

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::client::{FreshClient, TicketFilters, DEFAULT_LIST_LIMIT};
use crate::error::FreshError;
use crate::format::{format_status_update, format_ticket_details, format_ticket_list};
use crate::models::{TicketPriority, TicketStatus};

/// Freshservice CLI - Manage your Freshservice tickets from the command line.
#[derive(Parser, Debug)]
#[command(name = "fresh-cli", version, about, long_about = None)]
pub struct Cli {
    /// Your Freshservice API key (overrides FRESHSERVICE_API_KEY)
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Freshservice domain (overrides FRESHSERVICE_DOMAIN) [default: freshservice.com]
    #[arg(long, value_name = "DOMAIN")]
    pub domain: Option<String>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Ticket subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List tickets
    List {
        /// Filter by status
        #[arg(long, value_enum)]
        status: Option<TicketStatus>,

        /// Filter by priority (1-4)
        #[arg(long, value_name = "1-4", value_parser = TicketPriority::parse_code)]
        priority: Option<TicketPriority>,

        /// Maximum number of tickets to show
        #[arg(long, default_value_t = DEFAULT_LIST_LIMIT)]
        limit: usize,
    },

    /// View detailed information about a specific ticket
    View {
        /// Ticket ID
        ticket_id: u64,
    },

    /// Update ticket status
    Status {
        /// Ticket ID
        ticket_id: u64,

        /// New status
        #[arg(value_enum)]
        status: TicketStatus,
    },
}

/// Runs a single command and returns its output.
pub async fn run(client: &FreshClient, command: Command) -> Result<String> {
    match command {
        Command::List {
            status,
            priority,
            limit,
        } => handle_list(client, status, priority, limit).await,
        Command::View { ticket_id } => handle_view(client, ticket_id).await,
        Command::Status { ticket_id, status } => handle_status(client, ticket_id, status).await,
    }
}

/// Flattens an API error and its causes into one line.
///
/// `FreshError` variants already print their source, so repeated text is
/// skipped when walking the chain.
fn describe(err: FreshError) -> anyhow::Error {
    let mut message = err.to_string();
    let mut source = std::error::Error::source(&err);
    while let Some(cause) = source {
        let text = cause.to_string();
        if !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = std::error::Error::source(cause);
    }
    anyhow::anyhow!(message)
}

async fn handle_list(
    client: &FreshClient,
    status: Option<TicketStatus>,
    priority: Option<TicketPriority>,
    limit: usize,
) -> Result<String> {
    let filters = TicketFilters { status, priority };

    tracing::debug!(?filters, limit, "list command");

    let tickets = client
        .list_tickets(&filters, limit)
        .await
        .map_err(describe)
        .context("Failed to list tickets")?;

    Ok(format_ticket_list(&tickets))
}

async fn handle_view(client: &FreshClient, ticket_id: u64) -> Result<String> {
    let ticket = client
        .get_ticket(ticket_id)
        .await
        .map_err(describe)
        .context("Failed to retrieve ticket")?;

    Ok(format_ticket_details(&ticket))
}

async fn handle_status(
    client: &FreshClient,
    ticket_id: u64,
    status: TicketStatus,
) -> Result<String> {
    client
        .update_ticket_status(ticket_id, status)
        .await
        .map_err(describe)
        .context("Failed to update ticket status")?;

    Ok(format_status_update(ticket_id, status))
}
