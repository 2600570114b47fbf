mod chat;
mod document;
mod receipt;
mod search;

pub use chat::ChatResponse;
pub use document::{DocumentRecord, LifecycleMetadata, SourceType};
pub use receipt::IngestReceipt;
pub use search::SearchHit;
