//! TOML-backed configuration. Every section has serde defaults so a partial
//! file (or an empty one) merges cleanly with the defaults in [`defaults`].

pub mod defaults;

mod embedding_config;
mod generation_config;
mod observability_config;
mod privacy_config;
mod scoring_config;
mod store_config;

pub use embedding_config::EmbeddingConfig;
pub use generation_config::GenerationConfig;
pub use observability_config::ObservabilityConfig;
pub use privacy_config::PrivacyConfig;
pub use scoring_config::ScoringConfig;
pub use store_config::StoreConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{AxiomError, AxiomResult};

/// Root configuration for the whole pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AxiomConfig {
    pub scoring: ScoringConfig,
    pub privacy: PrivacyConfig,
    pub embedding: EmbeddingConfig,
    pub store: StoreConfig,
    pub generation: GenerationConfig,
    pub observability: ObservabilityConfig,
}

impl AxiomConfig {
    /// Parse config from a TOML string. Missing sections and fields fall
    /// back to defaults.
    pub fn from_toml(input: &str) -> AxiomResult<Self> {
        toml::from_str(input).map_err(|e| AxiomError::Config(e.to_string()))
    }

    /// Load config from a file path.
    pub fn from_file(path: &std::path::Path) -> AxiomResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AxiomError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml(&content)
    }
}
