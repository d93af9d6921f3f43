//! Reply composition.

use panel_core::{CustomerPost, CustomerProfile, ReplyDraft, ReplyTone, TicketRecord};

use crate::template::{normalize_blank_lines, render, template_for};
use crate::text::{clean_text, truncate_chars};

/// Name used when no profile name is known.
pub const DEFAULT_CUSTOMER_NAME: &str = "Customer";

/// Maximum description characters quoted in a reply.
pub const DESCRIPTION_LIMIT: usize = 100;

/// Compose a reply draft.
///
/// Pure and deterministic: the same inputs always give the same text. Missing
/// data degrades to defaults and never fails.
pub fn compose(
    ticket: &TicketRecord,
    profile: Option<&CustomerProfile>,
    posts: &[CustomerPost],
    tone: ReplyTone,
) -> ReplyDraft {
    let customer_name = profile
        .map(|p| p.name.as_str())
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_CUSTOMER_NAME)
        .to_string();

    let company_info = profile
        .map(|p| p.company.name.as_str())
        .filter(|company| !company.is_empty())
        .map(|company| format!(" from {}", company))
        .unwrap_or_default();

    let location_info = profile
        .map(|p| p.address.city.as_str())
        .filter(|city| !city.is_empty())
        .map(|city| format!(" in {}", city))
        .unwrap_or_default();

    let website_info = profile
        .map(|p| p.website.as_str())
        .filter(|website| !website.is_empty())
        .map(|website| {
            format!(
                "\n\nI noticed your website ({}) - thanks for sharing that with us.",
                website
            )
        })
        .unwrap_or_default();

    let recent_activity = posts
        .first()
        .map(|post| {
            format!(
                "I see you've been active with topics like \"{}\" recently.",
                post.title
            )
        })
        .unwrap_or_default();

    let subject = clean_text(&ticket.subject);
    let description = truncate_chars(&clean_text(&ticket.description), DESCRIPTION_LIMIT);

    let values = [
        ("customerName", customer_name),
        ("companyInfo", company_info),
        ("locationInfo", location_info),
        ("subject", subject),
        ("recentActivity", recent_activity),
        ("description", description),
        ("websiteInfo", website_info),
    ];

    let text = normalize_blank_lines(&render(template_for(tone), &values));
    ReplyDraft { text, tone }
}

/// Everything a draft depends on, captured by value for delayed composition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftInputs {
    pub ticket: TicketRecord,
    pub profile: Option<CustomerProfile>,
    pub posts: Vec<CustomerPost>,
    pub tone: ReplyTone,
}

impl DraftInputs {
    pub fn new(
        ticket: TicketRecord,
        profile: Option<CustomerProfile>,
        posts: Vec<CustomerPost>,
        tone: ReplyTone,
    ) -> Self {
        Self {
            ticket,
            profile,
            posts,
            tone,
        }
    }

    /// Same inputs with a different tone.
    pub fn with_tone(mut self, tone: ReplyTone) -> Self {
        self.tone = tone;
        self
    }

    /// Compose the draft for these inputs.
    pub fn compose(&self) -> ReplyDraft {
        compose(&self.ticket, self.profile.as_ref(), &self.posts, self.tone)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_profile() -> CustomerProfile {
        CustomerProfile::new(1, "Leanne Graham")
            .with_email("Sincere@april.biz")
            .with_company("Romaguera-Crona")
            .with_city("Gwenborough")
            .with_website("hildegard.org")
    }

    #[test]
    fn test_full_profile_friendly() {
        let ticket = TicketRecord::new("Sincere@april.biz", "Login issue", "I cannot log in.");
        let posts = vec![CustomerPost::new(1, 1, "sunt aut facere", "body")];
        let draft = compose(&ticket, Some(&full_profile()), &posts, ReplyTone::Friendly);

        assert!(draft.text.starts_with("Hi Leanne Graham,"));
        assert!(draft
            .text
            .contains("Thank you for reaching out from Romaguera-Crona in Gwenborough!"));
        assert!(draft
            .text
            .contains("I see you've been active with topics like \"sunt aut facere\" recently."));
        assert!(draft.text.contains("Regarding your message: \"I cannot log in.\""));
        assert!(draft
            .text
            .contains("I noticed your website (hildegard.org) - thanks for sharing that with us."));
        assert!(draft.text.ends_with("Customer Support Team"));
        assert_eq!(draft.tone, ReplyTone::Friendly);
    }

    #[test]
    fn test_concise_website_follows_paragraph() {
        let ticket = TicketRecord::new("a@b.com", "Billing", "Charged twice");
        let draft = compose(&ticket, Some(&full_profile()), &[], ReplyTone::Concise);

        assert!(draft.text.contains(
            "I'll investigate this and provide a solution shortly.\n\nI noticed your website (hildegard.org)"
        ));
        assert!(draft.text.ends_with("Support Team"));
        assert!(!draft.text.contains("Customer Support Team"));
    }

    #[test]
    fn test_empty_profile_name_falls_back() {
        let ticket = TicketRecord::new("a@b.com", "s", "d");
        let profile = CustomerProfile::new(5, "");
        let draft = compose(&ticket, Some(&profile), &[], ReplyTone::Concise);
        assert!(draft.text.starts_with("Hi Customer,"));
    }

    #[test]
    fn test_only_first_post_referenced() {
        let ticket = TicketRecord::new("a@b.com", "s", "d");
        let posts = vec![
            CustomerPost::new(1, 1, "first", ""),
            CustomerPost::new(2, 1, "second", ""),
        ];
        let draft = compose(&ticket, None, &posts, ReplyTone::Friendly);
        assert!(draft.text.contains("\"first\""));
        assert!(!draft.text.contains("second"));
    }

    #[test]
    fn test_inputs_with_tone() {
        let inputs = DraftInputs::new(TicketRecord::new("a@b.com", "s", "d"), None, vec![], ReplyTone::Friendly)
            .with_tone(ReplyTone::Concise);
        assert_eq!(inputs.compose().tone, ReplyTone::Concise);
    }
}
