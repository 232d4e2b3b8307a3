// file: src/exporter/trec.rs
// description: TREC qrels output for judgment lists
// reference: trec_eval qrels format (query iteration docno relevance)

use crate::error::Result;
use crate::models::JudgmentList;
use std::io::Write;
use std::path::Path;

const QUERY_PLACEHOLDER: &str = "0";
const ITERATION: &str = "0";
const RELEVANT: &str = "1";

pub struct TrecFormatter;

impl TrecFormatter {
    pub fn new() -> Self {
        Self
    }

    pub fn format_line(&self, doc_id: &str) -> String {
        format!(
            "{} {} {} {}",
            QUERY_PLACEHOLDER,
            ITERATION,
            doc_id.trim(),
            RELEVANT
        )
    }

    pub fn write_judgments<W: Write>(&self, judgments: &[String], out: &mut W) -> Result<usize> {
        for doc_id in judgments {
            writeln!(out, "{}", self.format_line(doc_id))?;
        }
        out.flush()?;
        Ok(judgments.len())
    }

    /// Reads a query file and writes its judgments in TREC format.
    pub fn write_file<W: Write>(&self, path: &Path, out: &mut W) -> Result<usize> {
        let list = JudgmentList::from_file(path)?;
        self.write_judgments(&list.judgments, out)
    }
}

impl Default for TrecFormatter {
    fn default() -> Self {
        Self::new()
    }
}
