// Single source of truth for all default values.

// --- Scoring / governance gate ---
pub const DEFAULT_RAW_TEXT_THRESHOLD: f64 = 0.25;
pub const DEFAULT_EXTRACTED_FILE_THRESHOLD: f64 = 0.40;

// --- Privacy ---
pub fn default_allowlist() -> Vec<String> {
    ["UPM", "Raflatac", "Biofuels", "Biofore"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

// --- Embeddings ---
pub const DEFAULT_EMBEDDING_PROVIDER: &str = "hashed";
pub const DEFAULT_EMBEDDING_DIMENSIONS: usize = 384;
pub const DEFAULT_EMBEDDING_ENDPOINT: &str = "https://api.openai.com/v1/embeddings";
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-small";
pub const DEFAULT_EMBEDDING_CACHE_ENABLED: bool = true;
pub const DEFAULT_EMBEDDING_CACHE_SIZE: u64 = 10_000;
pub const DEFAULT_EMBEDDING_MAX_RETRIES: u32 = 3;

// --- Vector store ---
pub const DEFAULT_INDEX_URL: &str = "http://localhost:6333";
pub const DEFAULT_COLLECTION_NAME: &str = "axiom_knowledge_base";

// --- Collaborator HTTP calls ---
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;

// --- Generation ---
pub const DEFAULT_GENERATION_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_GENERATION_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_GENERATION_TEMPERATURE: f64 = 0.1;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
