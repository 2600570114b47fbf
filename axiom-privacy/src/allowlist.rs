//! Organizational terms exempt from entity redaction.

use axiom_core::config::PrivacyConfig;

/// Fixed set of brand/organization terms that must never be redacted, even
/// when they co-occur with otherwise-redactable context (e.g. an org name
/// embedded as a prefix of a larger detected span). Applies only to the
/// entity pass; emails and phone numbers are always redacted.
#[derive(Debug, Clone)]
pub struct AllowList {
    terms: Vec<String>,
}

impl AllowList {
    pub fn from_config(config: &PrivacyConfig) -> Self {
        Self {
            terms: config.allowlist.clone(),
        }
    }

    /// Whether the candidate span text contains any allow-listed substring.
    /// Case-sensitive: brand names have a canonical spelling.
    pub fn shields(&self, span_text: &str) -> bool {
        self.terms.iter().any(|t| span_text.contains(t.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
