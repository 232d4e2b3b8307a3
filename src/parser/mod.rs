// file: src/parser/mod.rs
// description: CF xml parsing module exports
// reference: internal module structure

pub mod normalizer;
pub mod queries;
pub mod records;
pub mod xml;

pub use normalizer::TextNormalizer;
pub use queries::{QUERY_TAG, QueryParser, is_relevant};
pub use records::{RECORD_TAG, RecordParser};
pub use xml::{ElementLocation, XmlElement};
