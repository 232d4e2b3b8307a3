// file: src/solr/mod.rs
// description: Solr search service module exports
// reference: internal module structure

pub mod client;

pub use client::{DEFAULT_COLLECTION, DEFAULT_SOLR_URI, SolrClient};
