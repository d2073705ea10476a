//! Plain-text rendering of tickets for the terminal.

use crate::models::{Ticket, TicketStatus};

/// Subjects longer than this are truncated in list output.
const MAX_SUBJECT_LENGTH: usize = 40;

/// Width of the horizontal rule under the list header.
const LIST_RULE_WIDTH: usize = 72;

/// Width of the rule under a ticket heading.
const DETAIL_RULE_WIDTH: usize = 60;

/// Shortens a subject to fit the list column.
///
/// Subjects over 40 characters become their first 37 characters plus "...".
pub fn truncate_subject(subject: &str) -> String {
    if subject.chars().count() <= MAX_SUBJECT_LENGTH {
        subject.to_string()
    } else {
        let head: String = subject.chars().take(MAX_SUBJECT_LENGTH - 3).collect();
        format!("{}...", head)
    }
}

/// One table line; the header uses the same widths so columns line up.
fn list_row(id: &str, subject: &str, status: &str, priority: &str) -> String {
    format!("{:<10} {:<40} {:<12} {:<10}", id, subject, status, priority)
        .trim_end()
        .to_string()
}

/// Formats tickets as a fixed-width table.
pub fn format_ticket_list(tickets: &[Ticket]) -> String {
    if tickets.is_empty() {
        return "No tickets found.".to_string();
    }

    let mut lines = Vec::with_capacity(tickets.len() + 2);
    lines.push(list_row("ID", "Subject", "Status", "Priority"));
    lines.push("-".repeat(LIST_RULE_WIDTH));

    for ticket in tickets {
        lines.push(list_row(
            &ticket.id.to_string(),
            &truncate_subject(&ticket.subject),
            &ticket.display_status(),
            &ticket.display_priority(),
        ));
    }

    lines.join("\n")
}

/// Formats full ticket details.
pub fn format_ticket_details(ticket: &Ticket) -> String {
    let mut output = String::new();

    output.push_str(&format!("Ticket #{}\n", ticket.id));
    output.push_str(&"=".repeat(DETAIL_RULE_WIDTH));
    output.push('\n');
    output.push_str(&format!("Subject: {}\n", ticket.subject));
    output.push_str("Description:\n");
    output.push_str(&ticket.description);
    output.push_str("\n\n");

    output.push_str("Details:\n");
    output.push_str(&format!("  Status:    {}\n", ticket.display_status()));
    output.push_str(&format!("  Priority:  {}\n", ticket.display_priority()));
    output.push_str(&format!("  Created:   {}\n", ticket.created_at));
    output.push_str(&format!("  Updated:   {}\n", ticket.updated_at));
    output.push_str(&format!("  Requester: {}\n", ticket.requester_id));
    output.push_str(&format!("  Assignee:  {}", ticket.display_responder()));

    output
}

/// Confirmation line after a status change.
pub fn format_status_update(id: u64, status: TicketStatus) -> String {
    format!("Ticket #{} status updated to {}.", id, status.name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn test_ticket() -> Ticket {
        Ticket {
            id: 123,
            subject: "VPN drops every hour".to_string(),
            description: "Started after the client update.".to_string(),
            status: 2,
            priority: 3,
            created_at: "2026-02-06T10:30:00Z".to_string(),
            updated_at: "2026-02-06T11:00:00Z".to_string(),
            requester_id: 1001,
            responder_id: Some(2002),
        }
    }

    #[test]
    fn test_truncate_subject_short_is_unchanged() {
        assert_eq!(truncate_subject("Short"), "Short");
        let exactly_forty = "a".repeat(40);
        assert_eq!(truncate_subject(&exactly_forty), exactly_forty);
    }

    #[test]
    fn test_truncate_subject_long() {
        let subject = "b".repeat(41);
        let truncated = truncate_subject(&subject);
        assert_eq!(truncated, format!("{}...", "b".repeat(37)));
        assert_eq!(truncated.chars().count(), 40);
    }

    #[test]
    fn test_truncate_subject_counts_characters() {
        let subject = "ø".repeat(45);
        assert_eq!(truncate_subject(&subject), format!("{}...", "ø".repeat(37)));
    }

    #[test]
    fn test_format_empty_list() {
        assert_eq!(format_ticket_list(&[]), "No tickets found.");
    }

    #[test]
    fn test_format_ticket_list() {
        let mut second = test_ticket();
        second.id = 124;
        second.subject = "x".repeat(50);
        second.status = 9;
        second.priority = 4;

        let output = format_ticket_list(&[test_ticket(), second]);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("ID         Subject"));
        assert_eq!(lines[1], "-".repeat(72));
        assert_eq!(
            lines[2],
            format!("{:<10} {:<40} {:<12} {}", "123", "VPN drops every hour", "Open", "High")
        );
        assert!(lines[3].contains(&format!("{}...", "x".repeat(37))));
        assert!(lines[3].contains(" 9 "));
        assert!(lines[3].ends_with("Urgent"));
    }

    #[test]
    fn test_list_header_aligns_with_rows() {
        let output = format_ticket_list(&[test_ticket()]);
        let lines: Vec<&str> = output.lines().collect();
        let (header, row) = (lines[0], lines[2]);

        assert_eq!(header.find("Subject"), Some(11));
        assert_eq!(row.find("VPN"), Some(11));
        assert_eq!(header.find("Status"), Some(52));
        assert_eq!(row.find("Open"), Some(52));
        assert_eq!(header.find("Priority"), Some(65));
        assert_eq!(row.find("High"), Some(65));
        assert!(lines.iter().all(|line| !line.ends_with(' ')));
    }

    #[test]
    fn test_format_ticket_details() {
        let expected = "\
Ticket #123
============================================================
Subject: VPN drops every hour
Description:
Started after the client update.

Details:
  Status:    Open
  Priority:  High
  Created:   2026-02-06T10:30:00Z
  Updated:   2026-02-06T11:00:00Z
  Requester: 1001
  Assignee:  2002";

        assert_eq!(format_ticket_details(&test_ticket()), expected);
    }

    #[test]
    fn test_format_ticket_details_unassigned() {
        let mut ticket = test_ticket();
        ticket.responder_id = None;
        let output = format_ticket_details(&ticket);
        assert!(output.ends_with("  Assignee:  Unassigned"));
    }

    #[test]
    fn test_format_status_update() {
        assert_eq!(
            format_status_update(42, TicketStatus::Resolved),
            "Ticket #42 status updated to resolved."
        );
    }
}
