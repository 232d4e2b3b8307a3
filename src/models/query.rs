// file: src/models/query.rs
// description: query and relevance judgment models
// reference: internal data structures

use crate::error::{PrepError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Key under which the query text is sent to Solr.
pub const QUERY_KEY: &str = "query";

/// An information need together with the documents judged relevant to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    #[serde(alias = "query_n")]
    pub query_id: String,
    pub query_text: String,
    #[serde(alias = "qrels")]
    pub judgments: Vec<String>,
}

impl Query {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| PrepError::file_operation(path, e))?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Only the judgments of a query file; other keys may be absent.
#[derive(Debug, Clone, Deserialize)]
pub struct JudgmentList {
    #[serde(alias = "qrels")]
    pub judgments: Vec<String>,
}

impl JudgmentList {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| PrepError::file_operation(path, e))?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Only the text of a query file.
#[derive(Debug, Clone, Deserialize)]
pub struct QueryText {
    pub query_text: String,
}

impl QueryText {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| PrepError::file_operation(path, e))?;
        Ok(serde_json::from_str(&content)?)
    }
}

/// Free-form Solr request options loaded from a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryParams(Map<String, Value>);

impl QueryParams {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| PrepError::file_operation(path, e))?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Sets the `query` key, leaving every other option untouched.
    pub fn with_query_text(mut self, text: impl Into<String>) -> Self {
        self.0.insert(QUERY_KEY.to_string(), Value::String(text.into()));
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }
}
