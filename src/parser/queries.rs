// file: src/parser/queries.rs
// description: maps CF QUERY elements onto Query values and filters their judgments
// reference: internal data structures

use crate::error::{PrepError, Result};
use crate::models::Query;
use crate::parser::normalizer::TextNormalizer;
use crate::parser::xml::{ElementLocation, XmlElement};
use std::path::Path;

pub const QUERY_TAG: &str = "QUERY";

const QUERY_NUMBER: &str = "QueryNumber";
const QUERY_TEXT: &str = "QueryText";
const RECORDS: &str = "Records";
const ITEM: &str = "Item";
const SCORE: &str = "score";

/// Relevance tier encoded in a CF score string.
///
/// The tier is the second-to-last character of the score; a document is
/// relevant when that digit is above zero. Returns `None` when the score is
/// shorter than two characters or that character is not a decimal digit.
pub fn is_relevant(score: &str) -> Option<bool> {
    let mut chars = score.chars().rev();
    chars.next()?;
    let tier = chars.next()?.to_digit(10)?;
    Some(tier > 0)
}

pub struct QueryParser {
    normalizer: TextNormalizer,
}

impl QueryParser {
    pub fn new() -> Self {
        Self {
            normalizer: TextNormalizer::new(),
        }
    }

    pub fn parse_file(&self, path: &Path) -> Result<Vec<Query>> {
        let root = XmlElement::from_file(path)?;
        self.parse_root(&root, &path.display().to_string())
    }

    pub fn parse_str(&self, content: &str, file: &str) -> Result<Vec<Query>> {
        let root = XmlElement::parse(content, file)?;
        self.parse_root(&root, file)
    }

    pub fn parse_root(&self, root: &XmlElement, file: &str) -> Result<Vec<Query>> {
        root.children_named(QUERY_TAG)
            .enumerate()
            .map(|(i, query)| self.parse_query(query, &ElementLocation::new(file, QUERY_TAG, i + 1)))
            .collect()
    }

    pub fn parse_query(&self, query: &XmlElement, location: &ElementLocation<'_>) -> Result<Query> {
        // The id names the output file, so it is used without edge spaces.
        let query_id = self.scalar(query, QUERY_NUMBER, location)?.trim().to_string();
        if query_id.is_empty() {
            return Err(location.empty(QUERY_NUMBER));
        }

        Ok(Query {
            query_id,
            query_text: self.scalar(query, QUERY_TEXT, location)?,
            judgments: self.judgments(query, location)?,
        })
    }

    fn judgments(&self, query: &XmlElement, location: &ElementLocation<'_>) -> Result<Vec<String>> {
        let records = query.child(RECORDS).ok_or_else(|| location.missing(RECORDS))?;
        let mut judgments = Vec::new();

        for item in records.descendants().into_iter().filter(|e| e.name == ITEM) {
            let score = item.attribute(SCORE).ok_or_else(|| location.missing("Item@score"))?;

            let relevant = is_relevant(score).ok_or_else(|| PrepError::InvalidScore {
                file: location.file.to_string(),
                index: location.index,
                score: score.to_string(),
            })?;

            if relevant {
                let doc_id = item.text().trim();
                if doc_id.is_empty() {
                    return Err(location.empty(ITEM));
                }
                judgments.push(doc_id.to_string());
            }
        }

        Ok(judgments)
    }

    fn scalar(&self, query: &XmlElement, field: &str, location: &ElementLocation<'_>) -> Result<String> {
        query
            .child(field)
            .map(|element| self.normalizer.normalize(element.text()))
            .ok_or_else(|| location.missing(field))
    }
}

impl Default for QueryParser {
    fn default() -> Self {
        Self::new()
    }
}
