//! Reply templates and placeholder rendering.

use panel_core::ReplyTone;

const FRIENDLY_TEMPLATE: &str = r#"Hi {customerName},

Thank you for reaching out{companyInfo}{locationInfo}! I've received your inquiry about "{subject}" and I'm here to help.

{recentActivity}

Regarding your message: "{description}"

I understand your concern and I'm committed to providing you with the best possible solution. Let me look into this matter and get back to you with a comprehensive response shortly.

{websiteInfo}

Please don't hesitate to reach out if you have any additional questions in the meantime.

Best regards,
Customer Support Team"#;

const CONCISE_TEMPLATE: &str = r#"Hi {customerName},

Thanks for contacting us about "{subject}".

{recentActivity}

I've reviewed your message: "{description}"

I'll investigate this and provide a solution shortly.{websiteInfo}

Best regards,
Support Team"#;

/// Placeholders every template may use.
pub(crate) const PLACEHOLDERS: [&str; 7] = [
    "customerName",
    "companyInfo",
    "locationInfo",
    "subject",
    "recentActivity",
    "description",
    "websiteInfo",
];

/// Get the template body for a tone.
pub(crate) fn template_for(tone: ReplyTone) -> &'static str {
    match tone {
        ReplyTone::Friendly => FRIENDLY_TEMPLATE,
        ReplyTone::Concise => CONCISE_TEMPLATE,
    }
}

/// Replace `{name}` tokens in one left-to-right pass.
///
/// Substituted values are never rescanned, so a value that happens to
/// contain a token is emitted literally. Unknown tokens are kept as-is.
pub(crate) fn render(template: &str, values: &[(&str, String)]) -> String {
    let mut out = String::with_capacity(template.len() + 256);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };

        let name = &after[..close];
        match values.iter().find(|(key, _)| *key == name) {
            Some((_, value)) => out.push_str(value),
            None => {
                out.push('{');
                out.push_str(name);
                out.push('}');
            }
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}

/// Drop trailing spaces, fold runs of blank lines into one, and trim.
pub(crate) fn normalize_blank_lines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut blank_run = 0;

    for line in text.lines() {
        let line = line.trim_end();
        if line.is_empty() {
            blank_run += 1;
            if blank_run > 1 {
                continue;
            }
        } else {
            blank_run = 0;
        }
        out.push_str(line);
        out.push('\n');
    }

    out.trim().to_string()
}
