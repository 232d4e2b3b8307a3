// file: src/solr/client.rs
// description: Solr select endpoint client
// reference: https://solr.apache.org/guide/solr/latest/query-guide/json-request-api.html

use crate::error::{PrepError, Result};
use crate::models::{QueryParams, QueryText};
use crate::utils::Validator;
use reqwest::Client;
use serde_json::Value;
use std::path::Path;
use tracing::debug;

pub const DEFAULT_SOLR_URI: &str = "http://localhost:8983/solr";
pub const DEFAULT_COLLECTION: &str = "courses";

pub struct SolrClient {
    client: Client,
    base_uri: String,
    collection: String,
}

impl SolrClient {
    pub fn new(base_uri: impl Into<String>, collection: impl Into<String>) -> Result<Self> {
        let base_uri = base_uri.into();
        let collection = collection.into();

        Validator::validate_url(&base_uri)?;
        Validator::validate_collection(&collection)?;

        Ok(Self {
            client: Client::new(),
            base_uri,
            collection,
        })
    }

    pub fn select_url(&self) -> String {
        format!(
            "{}/{}/select",
            self.base_uri.trim_end_matches('/'),
            self.collection
        )
    }

    /// Loads the query text and the request options and merges them into one
    /// request body.
    pub fn load_request(query_path: &Path, params_path: &Path) -> Result<QueryParams> {
        let query = QueryText::from_file(query_path)?;
        let params = QueryParams::from_file(params_path)?;
        Ok(params.with_query_text(query.query_text))
    }

    /// Sends one POST to `<uri>/<collection>/select` and returns the decoded
    /// response body.
    pub async fn select(&self, params: &QueryParams) -> Result<Value> {
        let url = self.select_url();

        debug!("Posting {} request options to {}", params.as_map().len(), url);

        let response = self
            .client
            .post(&url)
            .json(params)
            .send()
            .await
            .map_err(|e| PrepError::Http(format!("Failed to send request to {}: {}", url, e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(PrepError::Http(format!(
                "{} returned status {}: {}",
                url, status, error_text
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| PrepError::Http(format!("Failed to parse Solr response: {}", e)))?;

        Ok(body)
    }
}
