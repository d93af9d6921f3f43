//! Plain-text rendering of the panel.

use std::fmt::Write;

use panel_core::{ReplyDraft, ResourceState};
use panel_orchestrator::{PanelSnapshot, PanelView};
use reply_composer::{clean_text, truncate_chars, DESCRIPTION_LIMIT};

/// Render the whole panel for one snapshot and the latest draft.
pub fn render(snapshot: &PanelSnapshot, draft: Option<&ReplyDraft>) -> String {
    let mut out = String::new();

    match snapshot.view() {
        PanelView::Connecting => {
            out.push_str("Connecting to the ticketing host...\n");
            return out;
        }
        PanelView::Fatal(err) => {
            let _ = writeln!(out, "Connection Error");
            let _ = writeln!(out, "  {}", err);
            let _ = writeln!(out, "  [Try Again] refreshes everything");
            return out;
        }
        PanelView::Loading => {
            out.push_str("Loading ticket...\n");
            return out;
        }
        PanelView::Empty => {
            out.push_str("No ticket data available.\n");
            out.push_str("Make sure you're viewing this from within a ticket.\n");
            return out;
        }
        PanelView::Ready => {}
    }

    out.push_str("Customer Intelligence\n\n");

    if let Some(ticket) = snapshot.ticket() {
        let description = truncate_chars(&clean_text(&ticket.description), DESCRIPTION_LIMIT);
        out.push_str("Ticket Details\n");
        let _ = writeln!(out, "  Requester: {}", or(&ticket.requester_email, "N/A"));
        let _ = writeln!(out, "  Subject: {}", or(&ticket.subject, "No subject"));
        let _ = writeln!(out, "  Description: {}", or(&description, "No description"));
        out.push('\n');
    }

    out.push_str("Customer\n");
    match &snapshot.customer {
        ResourceState::NotStarted => out.push_str("  No requester email on this ticket\n"),
        ResourceState::Loading => out.push_str("  Loading customer...\n"),
        ResourceState::Failed(err) => write_failure(&mut out, &err.message),
        ResourceState::Ready(None) => out.push_str("  No customer found\n"),
        ResourceState::Ready(Some(profile)) => {
            let _ = writeln!(out, "  {}", profile.name);
            if !profile.email.is_empty() {
                let _ = writeln!(out, "  Email: {}", profile.email);
            }
            if !profile.company.name.is_empty() {
                let _ = writeln!(out, "  Company: {}", profile.company.name);
            }
            if !profile.address.city.is_empty() {
                let _ = writeln!(out, "  City: {}", profile.address.city);
            }
            if !profile.website.is_empty() {
                let _ = writeln!(out, "  Website: http://{}", profile.website);
            }
        }
    }
    out.push('\n');

    out.push_str("Recent Activity\n");
    match &snapshot.posts {
        ResourceState::NotStarted => out.push_str("  No recent posts\n"),
        ResourceState::Loading => out.push_str("  Loading posts...\n"),
        ResourceState::Failed(err) => write_failure(&mut out, &err.message),
        ResourceState::Ready(posts) if posts.is_empty() => out.push_str("  No recent posts\n"),
        ResourceState::Ready(posts) => {
            for post in posts {
                let _ = writeln!(out, "  - {}", post.title);
            }
        }
    }
    out.push('\n');

    match draft {
        Some(draft) => {
            let _ = writeln!(out, "Suggested Reply ({})", draft.tone);
            out.push_str(&draft.text);
            out.push('\n');
        }
        None => out.push_str("Suggested Reply\nGenerating reply...\n"),
    }

    out
}

fn write_failure(out: &mut String, message: &str) {
    let _ = writeln!(out, "  {}", message);
    out.push_str("  [Try Again]\n");
}

fn or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use panel_core::{AppError, CustomerPost, CustomerProfile, ReplyTone, TicketRecord};

    fn ready(customer: ResourceState<Option<CustomerProfile>>) -> PanelSnapshot {
        PanelSnapshot {
            ticket: ResourceState::Ready(TicketRecord::new("a@b.com", "Late", "<p>Where is it?</p>")),
            customer,
            posts: ResourceState::NotStarted,
            initialized: true,
        }
    }

    #[test]
    fn test_connecting_and_fatal() {
        let out = render(&PanelSnapshot::default(), None);
        assert!(out.starts_with("Connecting"));

        let snapshot = PanelSnapshot {
            ticket: ResourceState::Failed(AppError::host("Host initialization timeout")),
            ..Default::default()
        };
        let out = render(&snapshot, None);
        assert!(out.contains("Connection Error"));
        assert!(out.contains("Host initialization timeout"));
    }

    #[test]
    fn test_ticket_fields_cleaned() {
        let out = render(&ready(ResourceState::Ready(None)), None);
        assert!(out.contains("Description: Where is it?"));
        assert!(out.contains("No customer found"));
        assert!(out.contains("Generating reply..."));
    }

    #[test]
    fn test_scoped_failure_keeps_ticket() {
        let snapshot = ready(ResourceState::Failed(AppError::network("Request timeout")));
        let out = render(&snapshot, None);
        assert!(out.contains("Subject: Late"));
        assert!(out.contains("Request timeout"));
        assert!(out.contains("[Try Again]"));
    }

    #[test]
    fn test_profile_posts_and_draft() {
        let profile = CustomerProfile::new(1, "Ada").with_company("Acme");
        let mut snapshot = ready(ResourceState::Ready(Some(profile)));
        snapshot.posts = ResourceState::Ready(vec![CustomerPost::new(1, 1, "qui est esse", "")]);
        let draft = ReplyDraft {
            text: "Hi Ada,".to_string(),
            tone: ReplyTone::Concise,
        };

        let out = render(&snapshot, Some(&draft));
        assert!(out.contains("Company: Acme"));
        assert!(!out.contains("City:"));
        assert!(out.contains("  - qui est esse"));
        assert!(out.contains("Suggested Reply (concise)\nHi Ada,"));
    }
}
