//! Data types for tickets, customers and reply drafts.

use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// The current ticket as handed over by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketRecord {
    /// Email of the person who opened the ticket. May be empty.
    pub requester_email: String,
    /// Ticket subject, possibly containing markup.
    pub subject: String,
    /// Ticket description, possibly containing markup.
    pub description: String,
}

impl TicketRecord {
    /// Create a new ticket record.
    pub fn new(
        requester_email: impl Into<String>,
        subject: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            requester_email: requester_email.into(),
            subject: subject.into(),
            description: description.into(),
        }
    }

    /// The fixed record used when the panel runs outside a host.
    ///
    /// The email matches an entry of the public placeholder directory so the
    /// whole chain can be exercised locally.
    pub fn simulated() -> Self {
        Self::new(
            "Sincere@april.biz",
            "Test ticket for development",
            "This is a simulated ticket for testing the Zendesk sidebar app in development mode.",
        )
    }

    /// Whether the requester email is usable for a directory lookup.
    pub fn has_requester_email(&self) -> bool {
        !self.requester_email.is_empty()
    }
}

/// Company block of a customer profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

/// Address block of a customer profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    #[serde(default, deserialize_with = "null_as_default")]
    pub city: String,
}

/// A customer entry from the external directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerProfile {
    pub id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub company: Company,
    #[serde(default, deserialize_with = "null_as_default")]
    pub address: Address,
    #[serde(default, deserialize_with = "null_as_default")]
    pub website: String,
}

impl CustomerProfile {
    /// Create a profile with only id and name set.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the email.
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Set the company name.
    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company.name = company.into();
        self
    }

    /// Set the city.
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.address.city = city.into();
        self
    }

    /// Set the website.
    pub fn with_website(mut self, website: impl Into<String>) -> Self {
        self.website = website.into();
        self
    }
}

/// A public post authored by a customer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerPost {
    pub id: u64,
    #[serde(rename = "userId")]
    pub customer_id: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub body: String,
}

impl CustomerPost {
    /// Create a new post.
    pub fn new(id: u64, customer_id: u64, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            customer_id,
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Reply style selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReplyTone {
    /// Warm and verbose.
    #[default]
    Friendly,
    /// Short and to the point.
    Concise,
}

impl ReplyTone {
    /// Get the tone name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Friendly => "friendly",
            Self::Concise => "concise",
        }
    }

    /// Parse a tone from a string, falling back to the default.
    pub fn parse_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "concise" => Self::Concise,
            _ => Self::Friendly,
        }
    }
}

impl std::fmt::Display for ReplyTone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A composed reply. Derived on demand, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplyDraft {
    pub text: String,
    pub tone: ReplyTone,
}

/// Where the panel is running.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HostContext {
    /// Embedded in the ticketing host; data comes from the handshake.
    #[default]
    Hosted,
    /// Standalone development; the simulated ticket is injected.
    Development,
}

impl HostContext {
    /// Whether the host handshake should be bypassed.
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}
