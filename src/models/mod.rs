// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod query;
pub mod record;

pub use query::{JudgmentList, Query, QueryParams, QueryText, QUERY_KEY};
pub use record::Record;
