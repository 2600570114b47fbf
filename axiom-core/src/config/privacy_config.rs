use serde::{Deserialize, Serialize};

use super::defaults;

/// Redaction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PrivacyConfig {
    /// Organizational terms that must never be redacted, even when a detected
    /// entity span contains them. Matched as case-sensitive substrings.
    /// Does not apply to emails and phone numbers, which are always redacted.
    pub allowlist: Vec<String>,
}

impl Default for PrivacyConfig {
    fn default() -> Self {
        Self {
            allowlist: defaults::default_allowlist(),
        }
    }
}
