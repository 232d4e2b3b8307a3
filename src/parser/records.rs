// file: src/parser/records.rs
// description: maps CF collection RECORD elements onto Record values
// reference: internal data structures

use crate::error::{PrepError, Result};
use crate::models::Record;
use crate::parser::normalizer::TextNormalizer;
use crate::parser::xml::{ElementLocation, XmlElement};
use std::path::Path;

pub const RECORD_TAG: &str = "RECORD";

const ABSTRACT: &str = "ABSTRACT";
const EXTRACT: &str = "EXTRACT";
const AUTHORS: &str = "AUTHORS";
const MAJOR_SUBJECTS: &str = "MAJORSUBJ";
const MINOR_SUBJECTS: &str = "MINORSUBJ";
const RECORD_NUMBER: &str = "RECORDNUM";
const SOURCE: &str = "SOURCE";
const TITLE: &str = "TITLE";

pub struct RecordParser {
    normalizer: TextNormalizer,
}

impl RecordParser {
    pub fn new() -> Self {
        Self {
            normalizer: TextNormalizer::new(),
        }
    }

    pub fn parse_file(&self, path: &Path) -> Result<Vec<Record>> {
        let root = XmlElement::from_file(path)?;
        self.parse_root(&root, &path.display().to_string())
    }

    pub fn parse_str(&self, content: &str, file: &str) -> Result<Vec<Record>> {
        let root = XmlElement::parse(content, file)?;
        self.parse_root(&root, file)
    }

    pub fn parse_root(&self, root: &XmlElement, file: &str) -> Result<Vec<Record>> {
        root.children_named(RECORD_TAG)
            .enumerate()
            .map(|(i, record)| {
                self.parse_record(record, &ElementLocation::new(file, RECORD_TAG, i + 1))
            })
            .collect()
    }

    pub fn parse_record(
        &self,
        record: &XmlElement,
        location: &ElementLocation<'_>,
    ) -> Result<Record> {
        Ok(Record {
            abstract_text: self.abstract_text(record, location)?,
            authors: self.text_list(record, AUTHORS),
            major_subjects: self.text_list(record, MAJOR_SUBJECTS),
            minor_subjects: self.text_list(record, MINOR_SUBJECTS),
            id: self.record_id(record, location)?,
            source: self.scalar(record, SOURCE, location)?,
            title: self.scalar(record, TITLE, location)?,
        })
    }

    // ABSTRACT wins when both are present.
    fn abstract_text(&self, record: &XmlElement, location: &ElementLocation<'_>) -> Result<String> {
        let (field, element) = match record.child(ABSTRACT) {
            Some(element) => (ABSTRACT, element),
            None => (
                EXTRACT,
                record
                    .child(EXTRACT)
                    .ok_or_else(|| location.missing("ABSTRACT or EXTRACT"))?,
            ),
        };

        let text = self.normalizer.normalize(element.text());
        if text.trim().is_empty() {
            return Err(location.empty(field));
        }

        Ok(text)
    }

    fn record_id(&self, record: &XmlElement, location: &ElementLocation<'_>) -> Result<i64> {
        let raw = self.scalar(record, RECORD_NUMBER, location)?;

        raw.trim().parse::<i64>().map_err(|_| PrepError::InvalidId {
            file: location.file.to_string(),
            index: location.index,
            value: raw,
        })
    }

    fn scalar(
        &self,
        record: &XmlElement,
        field: &str,
        location: &ElementLocation<'_>,
    ) -> Result<String> {
        record
            .child(field)
            .map(|element| self.normalizer.normalize(element.text()))
            .ok_or_else(|| location.missing(field))
    }

    // List entries keep their raw text; elements without text are skipped.
    fn text_list(&self, record: &XmlElement, field: &str) -> Vec<String> {
        match record.child(field) {
            Some(element) => element
                .descendants()
                .into_iter()
                .map(XmlElement::text)
                .filter(|text| !text.is_empty())
                .map(str::to_string)
                .collect(),
            None => Vec::new(),
        }
    }
}

impl Default for RecordParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const COLLECTION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<root>
  <RECORD>
    <PAPERNUM>PN74001</PAPERNUM>
    <RECORDNUM>00001 </RECORDNUM>
    <MEDLINENUM>75051687</MEDLINENUM>
    <AUTHORS><AUTHOR>Hoiby-N</AUTHOR><AUTHOR>Jacobsen-L</AUTHOR></AUTHORS>
    <TITLE>Pseudomonas aeruginosa infection in cystic fibrosis.  Relationship
      between mucoid strains.</TITLE>
    <SOURCE>Acta-Paediatr-Scand. 1974 Sep; 63(5): 761-3.</SOURCE>
    <MAJORSUBJ><TOPIC>CYSTIC-FIBROSIS: co</TOPIC><TOPIC>PSEUDOMONAS-AERUGINOSA: im</TOPIC></MAJORSUBJ>
    <MINORSUBJ><TOPIC>ADOLESCENCE</TOPIC></MINORSUBJ>
    <ABSTRACT>The significance of
      mucoid strains was studied.</ABSTRACT>
  </RECORD>
  <RECORD>
    <RECORDNUM>00002</RECORDNUM>
    <TITLE>Second</TITLE>
    <SOURCE>Lancet</SOURCE>
    <EXTRACT>Extract only.</EXTRACT>
  </RECORD>
</root>"#;

    #[test]
    fn test_parse_collection() {
        let parser = RecordParser::new();
        let records = parser.parse_str(COLLECTION, "cf74.xml").unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0],
            Record {
                abstract_text: "The significance of mucoid strains was studied.".to_string(),
                authors: vec!["Hoiby-N".to_string(), "Jacobsen-L".to_string()],
                major_subjects: vec![
                    "CYSTIC-FIBROSIS: co".to_string(),
                    "PSEUDOMONAS-AERUGINOSA: im".to_string()
                ],
                minor_subjects: vec!["ADOLESCENCE".to_string()],
                id: 1,
                source: "Acta-Paediatr-Scand. 1974 Sep; 63(5): 761-3.".to_string(),
                title: "Pseudomonas aeruginosa infection in cystic fibrosis. Relationship between mucoid strains.".to_string(),
            }
        );
    }

    #[test]
    fn test_extract_fallback_and_empty_lists() {
        let parser = RecordParser::new();
        let records = parser.parse_str(COLLECTION, "cf74.xml").unwrap();

        assert_eq!(records[1].abstract_text, "Extract only.");
        assert_eq!(records[1].id, 2);
        assert!(records[1].authors.is_empty());
        assert!(records[1].major_subjects.is_empty());
        assert!(records[1].minor_subjects.is_empty());
    }

    #[test]
    fn test_abstract_preferred_over_extract() {
        let xml = "<root><RECORD><RECORDNUM>3</RECORDNUM><TITLE>t</TITLE><SOURCE>s</SOURCE>\
                   <EXTRACT>from extract</EXTRACT><ABSTRACT>from abstract</ABSTRACT></RECORD></root>";
        let records = RecordParser::new().parse_str(xml, "x.xml").unwrap();

        assert_eq!(records[0].abstract_text, "from abstract");
    }

    #[test]
    fn test_missing_abstract_fails_with_location() {
        let xml = "<root>\
                   <RECORD><RECORDNUM>1</RECORDNUM><TITLE>t</TITLE><SOURCE>s</SOURCE><ABSTRACT>a</ABSTRACT></RECORD>\
                   <RECORD><RECORDNUM>2</RECORDNUM><TITLE>t</TITLE><SOURCE>s</SOURCE></RECORD>\
                   </root>";
        let err = RecordParser::new().parse_str(xml, "cf75.xml").unwrap_err();

        match err {
            PrepError::MissingField { file, index, .. } => {
                assert_eq!(file, "cf75.xml");
                assert_eq!(index, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_blank_abstract_fails() {
        let xml = "<root><RECORD><RECORDNUM>1</RECORDNUM><TITLE>t</TITLE><SOURCE>s</SOURCE>\
                   <ABSTRACT>   </ABSTRACT></RECORD></root>";
        let err = RecordParser::new().parse_str(xml, "x.xml").unwrap_err();

        assert!(matches!(err, PrepError::EmptyField { .. }));
    }

    #[test]
    fn test_non_numeric_id_fails() {
        let xml = "<root><RECORD><RECORDNUM>12a</RECORDNUM><TITLE>t</TITLE><SOURCE>s</SOURCE>\
                   <ABSTRACT>a</ABSTRACT></RECORD></root>";
        let err = RecordParser::new().parse_str(xml, "x.xml").unwrap_err();

        assert!(matches!(err, PrepError::InvalidId { ref value, .. } if value == "12a"));
    }

    #[test]
    fn test_edge_whitespace_kept_as_single_space() {
        let xml = "<root><RECORD><RECORDNUM>\n 7 \n</RECORDNUM>\
                   <TITLE>\n  Lung function\n</TITLE><SOURCE>Lancet</SOURCE>\
                   <ABSTRACT>Measured. </ABSTRACT></RECORD></root>";
        let records = RecordParser::new().parse_str(xml, "x.xml").unwrap();

        assert_eq!(records[0].id, 7);
        assert_eq!(records[0].title, " Lung function ");
        assert_eq!(records[0].abstract_text, "Measured. ");
        assert_eq!(records[0].source, "Lancet");
    }

    #[test]
    fn test_list_entries_keep_raw_text() {
        let xml = "<root><RECORD><RECORDNUM>1</RECORDNUM><TITLE>t</TITLE><SOURCE>s</SOURCE>\
                   <AUTHORS><AUTHOR>Smith  J</AUTHOR><AUTHOR/><AUTHOR>Doe-A</AUTHOR></AUTHORS>\
                   <ABSTRACT>a</ABSTRACT></RECORD></root>";
        let records = RecordParser::new().parse_str(xml, "x.xml").unwrap();

        assert_eq!(
            records[0].authors,
            vec!["Smith  J".to_string(), "Doe-A".to_string()]
        );
    }

    #[test]
    fn test_missing_title_fails() {
        let xml = "<root><RECORD><RECORDNUM>1</RECORDNUM><SOURCE>s</SOURCE>\
                   <ABSTRACT>a</ABSTRACT></RECORD></root>";
        let err = RecordParser::new().parse_str(xml, "x.xml").unwrap_err();

        assert!(matches!(err, PrepError::MissingField { ref field, .. } if field == "TITLE"));
    }
}
