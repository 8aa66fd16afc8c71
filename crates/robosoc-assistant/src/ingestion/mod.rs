//! Document ingestion: PDF text extraction and knowledge base assembly

mod extractor;
mod knowledge;

pub use extractor::{Extraction, PdfExtractor};
pub use knowledge::KnowledgeBase;

#[cfg(test)]
pub(crate) use extractor::tests as fixtures;
