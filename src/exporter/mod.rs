// file: src/exporter/mod.rs
// description: output writers module exports
// reference: internal module structure

pub mod json;
pub mod trec;

pub use json::{DOCUMENTS_FILE, JsonExporter, QRELS_DIR};
pub use trec::TrecFormatter;
