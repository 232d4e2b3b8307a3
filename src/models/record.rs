// file: src/models/record.rs
// description: CF collection record model
// reference: internal data structures

use serde::{Deserialize, Serialize};

/// One paper of the CF collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    pub authors: Vec<String>,
    pub major_subjects: Vec<String>,
    pub minor_subjects: Vec<String>,
    pub id: i64,
    pub source: String,
    pub title: String,
}
