use crate::errors::AxiomResult;

/// Binary file extraction collaborator (e.g. PDF-to-text). The extracted
/// text is fed into the same ingestion path as raw text, under the
/// extracted-file acceptance threshold.
pub trait IFileExtractor: Send + Sync {
    fn extract(&self, bytes: &[u8]) -> AxiomResult<String>;
}
