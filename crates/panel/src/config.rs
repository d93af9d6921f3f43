//! Configuration loaded from environment variables.

use std::env;
use std::time::Duration;

use host_bridge::detect_context;
use panel_core::{HostContext, ReplyTone};
use panel_orchestrator::DEFAULT_POSTS_LIMIT;
use reply_composer::DEFAULT_DRAFT_DELAY;

/// Default panel URL; resolves to development context.
pub const DEFAULT_PANEL_URL: &str = "http://localhost/";

/// Panel configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// URL the panel is served under; decides hosted vs development.
    pub panel_url: String,
    /// Context derived from `panel_url`.
    pub context: HostContext,
    /// Maximum posts shown per customer.
    pub posts_limit: usize,
    /// Tone of the generated draft.
    pub tone: ReplyTone,
    /// Debounce before a draft is generated.
    pub draft_delay: Duration,
    /// Copy the draft to the clipboard once generated.
    pub copy_draft: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// | Variable | Description | Default |
    /// |----------|-------------|---------|
    /// | `PANEL_URL` | URL the panel runs under | `http://localhost/` |
    /// | `PANEL_POSTS_LIMIT` | Posts shown per customer | `3` |
    /// | `PANEL_REPLY_TONE` | `friendly` or `concise` | `friendly` |
    /// | `PANEL_DRAFT_DELAY_MS` | Draft debounce | `300` |
    /// | `PANEL_COPY_DRAFT` | Copy the draft to the clipboard | `false` |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let panel_url = lookup("PANEL_URL").unwrap_or_else(|| DEFAULT_PANEL_URL.to_string());
        let context = detect_context(&panel_url);

        let posts_limit = match lookup("PANEL_POSTS_LIMIT") {
            Some(v) => v
                .parse::<usize>()
                .ok()
                .filter(|limit| *limit > 0)
                .ok_or(ConfigError::InvalidPostsLimit(v))?,
            None => DEFAULT_POSTS_LIMIT,
        };

        let tone = lookup("PANEL_REPLY_TONE")
            .map(|v| ReplyTone::parse_or_default(&v))
            .unwrap_or_default();

        let draft_delay = match lookup("PANEL_DRAFT_DELAY_MS") {
            Some(v) => v
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|_| ConfigError::InvalidDraftDelay(v))?,
            None => DEFAULT_DRAFT_DELAY,
        };

        let copy_draft = lookup("PANEL_COPY_DRAFT")
            .map(|v| matches!(v.trim().to_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            panel_url,
            context,
            posts_limit,
            tone,
            draft_delay,
            copy_draft,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("PANEL_POSTS_LIMIT must be a positive integer, got {0:?}")]
    InvalidPostsLimit(String),

    #[error("PANEL_DRAFT_DELAY_MS must be a number of milliseconds, got {0:?}")]
    InvalidDraftDelay(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.panel_url, DEFAULT_PANEL_URL);
        assert_eq!(config.context, HostContext::Development);
        assert_eq!(config.posts_limit, 3);
        assert_eq!(config.tone, ReplyTone::Friendly);
        assert_eq!(config.draft_delay, Duration::from_millis(300));
        assert!(!config.copy_draft);
    }

    #[test]
    fn test_hosted_url() {
        let config = config_from(&[
            ("PANEL_URL", "https://support.example.com/apps/panel"),
            ("PANEL_REPLY_TONE", "Concise"),
            ("PANEL_COPY_DRAFT", "true"),
        ])
        .unwrap();
        assert_eq!(config.context, HostContext::Hosted);
        assert_eq!(config.tone, ReplyTone::Concise);
        assert!(config.copy_draft);
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            config_from(&[("PANEL_POSTS_LIMIT", "0")]),
            Err(ConfigError::InvalidPostsLimit(_))
        ));
        assert!(matches!(
            config_from(&[("PANEL_DRAFT_DELAY_MS", "soon")]),
            Err(ConfigError::InvalidDraftDelay(_))
        ));
    }
}
