// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod exporter;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod solr;
pub mod utils;

pub use crate::config::{Config, DatasetConfig};
pub use error::{PrepError, Result};
pub use exporter::{JsonExporter, TrecFormatter};
pub use models::{JudgmentList, Query, QueryParams, QueryText, Record};
pub use parser::{QueryParser, RecordParser, TextNormalizer, XmlElement, is_relevant};
pub use pipeline::{ExtractionStats, Extractor, ProgressTracker};
pub use solr::SolrClient;
pub use utils::Validator;
