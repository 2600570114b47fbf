/// Vector store / index backend errors. All variants are safe to retry.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("index connection failed: {reason}")]
    ConnectionFailed { reason: String },

    #[error("collection setup failed for '{collection}': {reason}")]
    CollectionSetupFailed { collection: String, reason: String },

    #[error("write failed for point {id}: {reason}")]
    WriteFailed { id: String, reason: String },

    #[error("search failed: {reason}")]
    SearchFailed { reason: String },

    #[error("index request timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },
}
