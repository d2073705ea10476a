//! Ticket models for the Freshservice API.
//!
//! Freshservice encodes status and priority as small integers. The raw codes
//! are kept on [`Ticket`] so unknown values survive a round trip to the
//! terminal; [`TicketStatus`] and [`TicketPriority`] name the known ones.

use serde::{Deserialize, Deserializer};

/// Deserializes a field that may be missing or `null` into its default value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A helpdesk ticket as returned by the API.
///
/// Only `id` is required. Everything else defaults to empty/zero when the
/// server omits it or sends `null`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Ticket {
    /// Unique ticket ID.
    pub id: u64,

    /// Subject line.
    #[serde(default, deserialize_with = "null_as_default")]
    pub subject: String,

    /// Description body (may contain HTML).
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,

    /// Raw status code (see [`TicketStatus`]).
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: i64,

    /// Raw priority code (see [`TicketPriority`]).
    #[serde(default, deserialize_with = "null_as_default")]
    pub priority: i64,

    /// Creation timestamp, exactly as the server sent it.
    #[serde(default, deserialize_with = "null_as_default")]
    pub created_at: String,

    /// Last update timestamp, exactly as the server sent it.
    #[serde(default, deserialize_with = "null_as_default")]
    pub updated_at: String,

    /// Requester who raised the ticket.
    #[serde(default, deserialize_with = "null_as_default")]
    pub requester_id: u64,

    /// Agent the ticket is assigned to, if any.
    #[serde(default)]
    pub responder_id: Option<u64>,
}

impl Ticket {
    /// Returns the status label, or the raw code for unknown statuses.
    pub fn display_status(&self) -> String {
        status_label(self.status)
    }

    /// Returns the priority label, or the raw code for unknown priorities.
    pub fn display_priority(&self) -> String {
        priority_label(self.priority)
    }

    /// Returns the assigned agent ID, or "Unassigned".
    pub fn display_responder(&self) -> String {
        match self.responder_id {
            Some(id) if id != 0 => id.to_string(),
            _ => "Unassigned".to_string(),
        }
    }
}

/// Ticket lifecycle stage.
///
/// Also the set of names the command line accepts ("open", "pending", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum TicketStatus {
    /// Newly raised, awaiting work.
    Open,
    /// Waiting on someone outside the helpdesk.
    Pending,
    /// Fixed, awaiting confirmation.
    Resolved,
    /// Done.
    Closed,
}

impl TicketStatus {
    /// All known statuses, in code order.
    pub const ALL: [TicketStatus; 4] = [
        TicketStatus::Open,
        TicketStatus::Pending,
        TicketStatus::Resolved,
        TicketStatus::Closed,
    ];

    /// Returns the API code for this status.
    pub fn code(self) -> i64 {
        match self {
            TicketStatus::Open => 2,
            TicketStatus::Pending => 3,
            TicketStatus::Resolved => 4,
            TicketStatus::Closed => 5,
        }
    }

    /// Looks up a status by its API code.
    pub fn from_code(code: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }

    /// Human-readable label ("Open").
    pub fn label(self) -> &'static str {
        match self {
            TicketStatus::Open => "Open",
            TicketStatus::Pending => "Pending",
            TicketStatus::Resolved => "Resolved",
            TicketStatus::Closed => "Closed",
        }
    }

    /// Lowercase name used on the command line ("open").
    pub fn name(self) -> &'static str {
        match self {
            TicketStatus::Open => "open",
            TicketStatus::Pending => "pending",
            TicketStatus::Resolved => "resolved",
            TicketStatus::Closed => "closed",
        }
    }
}

/// Ticket urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TicketPriority {
    /// Priority 1.
    Low,
    /// Priority 2.
    Medium,
    /// Priority 3.
    High,
    /// Priority 4.
    Urgent,
}

impl TicketPriority {
    /// All known priorities, in code order.
    pub const ALL: [TicketPriority; 4] = [
        TicketPriority::Low,
        TicketPriority::Medium,
        TicketPriority::High,
        TicketPriority::Urgent,
    ];

    /// Returns the API code for this priority.
    pub fn code(self) -> i64 {
        match self {
            TicketPriority::Low => 1,
            TicketPriority::Medium => 2,
            TicketPriority::High => 3,
            TicketPriority::Urgent => 4,
        }
    }

    /// Looks up a priority by its API code.
    pub fn from_code(code: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.code() == code)
    }

    /// Parses a priority code given as text ("1" through "4").
    pub fn parse_code(text: &str) -> Result<Self, String> {
        let code: i64 = text
            .trim()
            .parse()
            .map_err(|_| format!("{:?} is not a number", text))?;
        Self::from_code(code).ok_or_else(|| format!("{} is not in 1..=4", code))
    }

    /// Human-readable label ("Low").
    pub fn label(self) -> &'static str {
        match self {
            TicketPriority::Low => "Low",
            TicketPriority::Medium => "Medium",
            TicketPriority::High => "High",
            TicketPriority::Urgent => "Urgent",
        }
    }
}

/// Returns the label for a raw status code, or the code itself if unknown.
pub fn status_label(code: i64) -> String {
    TicketStatus::from_code(code)
        .map(|s| s.label().to_string())
        .unwrap_or_else(|| code.to_string())
}

/// Returns the label for a raw priority code, or the code itself if unknown.
pub fn priority_label(code: i64) -> String {
    TicketPriority::from_code(code)
        .map(|p| p.label().to_string())
        .unwrap_or_else(|| code.to_string())
}
