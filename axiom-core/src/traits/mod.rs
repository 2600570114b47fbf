mod analysis;
mod embedding;
mod extractor;
mod generation;
mod index;

pub use analysis::{EntityLabel, EntitySpan, ILinguisticAnalyzer, PosTag, TokenAnnotation};
pub use embedding::IEmbeddingProvider;
pub use extractor::IFileExtractor;
pub use generation::IGenerationProvider;
pub use index::{IVectorIndex, ScoredPoint};
