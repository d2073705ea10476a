//! Response envelopes and request bodies for the Freshservice v2 API.
//!
//! Freshservice wraps resources in a key named after the resource type:
//! `{"tickets": [...]}` for lists and `{"ticket": {...}}` for single records.

use serde::{Deserialize, Serialize};

use super::Ticket;

/// Response wrapper for `GET /tickets`.
#[derive(Debug, Clone, Deserialize)]
pub struct ListTicketsResponse {
    /// Tickets on the first page returned by the server.
    #[serde(default)]
    pub tickets: Vec<Ticket>,
}

/// Response wrapper for `GET /tickets/{id}`.
#[derive(Debug, Clone, Deserialize)]
pub struct GetTicketResponse {
    /// The full ticket.
    pub ticket: Ticket,
}

/// Body for `PUT /tickets/{id}` when only the status changes.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct UpdateStatusRequest {
    /// New raw status code.
    pub status: i64,
}
