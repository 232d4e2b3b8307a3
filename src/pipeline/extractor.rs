// file: src/pipeline/extractor.rs
// description: turns the configured CF xml files into data.json and qrels/<id>.json
// reference: orchestrates the sequential extraction workflow

use crate::config::Config;
use crate::error::Result;
use crate::exporter::JsonExporter;
use crate::models::Record;
use crate::parser::{
    ElementLocation, QUERY_TAG, QueryParser, RECORD_TAG, RecordParser, XmlElement,
};
use crate::pipeline::progress::{ExtractionStats, ProgressTracker};
use std::path::Path;
use tracing::{debug, info};

pub struct Extractor {
    config: Config,
    record_parser: RecordParser,
    query_parser: QueryParser,
    verbose: bool,
    colored: bool,
}

impl Extractor {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            record_parser: RecordParser::new(),
            query_parser: QueryParser::new(),
            verbose: false,
            colored: true,
        }
    }

    /// Verbose runs draw progress bars and report per-query counts.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn colored(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    /// Runs the whole extraction. The first malformed record or query aborts
    /// the run.
    pub fn run(&self) -> Result<ExtractionStats> {
        let exporter = JsonExporter::new(&self.config.output)?;
        let mut progress = ProgressTracker::new(self.verbose, self.colored);

        let mut dataset = Vec::new();
        for path in &self.config.dataset.data_files {
            self.extract_records(path, &mut dataset, &mut progress)?;
        }

        if self.verbose {
            info!("{} documents acquired", dataset.len());
        }

        exporter.export_records(&dataset)?;

        for path in &self.config.dataset.qrels {
            self.extract_queries(path, &exporter, &mut progress)?;
        }

        let stats = progress.finish();
        debug!(
            "Extraction finished in {:.2}s ({:.1} documents/s, {:.1} judgments per query)",
            stats.duration_secs,
            stats.documents_per_second(),
            stats.judgments_per_query()
        );
        Ok(stats)
    }

    fn extract_records(
        &self,
        path: &Path,
        dataset: &mut Vec<Record>,
        progress: &mut ProgressTracker,
    ) -> Result<()> {
        debug!("Reading records from {}", path.display());

        let root = XmlElement::from_file(path)?;
        let file = path.display().to_string();
        let records: Vec<&XmlElement> = root.children_named(RECORD_TAG).collect();

        let bar = progress.file_bar(&file, records.len());
        for (i, element) in records.into_iter().enumerate() {
            let location = ElementLocation::new(&file, RECORD_TAG, i + 1);
            dataset.push(self.record_parser.parse_record(element, &location)?);
            progress.add_document();
            bar.inc(1);
        }
        bar.finish_and_clear();

        progress.add_file();
        Ok(())
    }

    fn extract_queries(
        &self,
        path: &Path,
        exporter: &JsonExporter,
        progress: &mut ProgressTracker,
    ) -> Result<()> {
        debug!("Reading queries from {}", path.display());

        let root = XmlElement::from_file(path)?;
        let file = path.display().to_string();
        let queries: Vec<&XmlElement> = root.children_named(QUERY_TAG).collect();

        let bar = progress.file_bar(&file, queries.len());
        for (i, element) in queries.into_iter().enumerate() {
            let location = ElementLocation::new(&file, QUERY_TAG, i + 1);
            let query = self.query_parser.parse_query(element, &location)?;

            if self.verbose {
                info!("Query {} has {} QRELS.", query.query_id, query.judgments.len());
            }

            exporter.export_query(&query)?;
            progress.add_query(query.judgments.len());
            bar.inc(1);
        }
        bar.finish_and_clear();

        progress.add_file();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatasetConfig;
    use crate::error::PrepError;
    use crate::models::Query;
    use pretty_assertions::assert_eq;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const RECORDS: &str = r#"<root>
  <RECORD><RECORDNUM>1</RECORDNUM><TITLE>First</TITLE><SOURCE>Lancet</SOURCE>
    <AUTHORS><AUTHOR>Hoiby-N</AUTHOR></AUTHORS><ABSTRACT>One.</ABSTRACT></RECORD>
  <RECORD><RECORDNUM>2</RECORDNUM><TITLE>Second</TITLE><SOURCE>BMJ</SOURCE>
    <EXTRACT>Two.</EXTRACT></RECORD>
</root>"#;

    const MORE_RECORDS: &str = r#"<root>
  <RECORD><RECORDNUM>3</RECORDNUM><TITLE>Third</TITLE><SOURCE>Nature</SOURCE>
    <ABSTRACT>Three.</ABSTRACT></RECORD>
</root>"#;

    const QUERIES: &str = r#"<root>
  <QUERY><QueryNumber>00001</QueryNumber><QueryText>calcium
    and mucus</QueryText>
    <Records><Item score="1222">1</Item><Item score="0001">2</Item><Item score="0010">3</Item></Records>
  </QUERY>
  <QUERY><QueryNumber>00002</QueryNumber><QueryText>lung</QueryText>
    <Records><Item score="2000">2</Item></Records>
  </QUERY>
</root>"#;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn config(dir: &Path, data_files: Vec<PathBuf>, qrels: Vec<PathBuf>) -> Config {
        Config {
            dataset: DatasetConfig { data_files, qrels },
            output: dir.join("out"),
        }
    }

    #[test]
    fn test_run_writes_documents_and_qrels() {
        let temp = TempDir::new().unwrap();
        let a = write(temp.path(), "cf74.xml", RECORDS);
        let b = write(temp.path(), "cf75.xml", MORE_RECORDS);
        let q = write(temp.path(), "cfquery.xml", QUERIES);

        let stats = Extractor::new(config(temp.path(), vec![a, b], vec![q]))
            .verbose(true)
            .colored(false)
            .run()
            .unwrap();

        assert_eq!(stats.files_read, 3);
        assert_eq!(stats.documents, 3);
        assert_eq!(stats.queries, 2);
        assert_eq!(stats.judgments, 2);

        let out = temp.path().join("out");
        let records: Vec<Record> =
            serde_json::from_str(&fs::read_to_string(out.join("data.json")).unwrap()).unwrap();
        let ids: Vec<i64> = records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(records[1].abstract_text, "Two.");

        let first = Query::from_file(&out.join("qrels/00001.json")).unwrap();
        assert_eq!(first.query_text, "calcium and mucus");
        assert_eq!(first.judgments, vec!["1".to_string(), "3".to_string()]);

        let second = Query::from_file(&out.join("qrels/00002.json")).unwrap();
        assert!(second.judgments.is_empty());
    }

    #[test]
    fn test_malformed_record_aborts_before_writing() {
        let temp = TempDir::new().unwrap();
        let good = write(temp.path(), "cf74.xml", RECORDS);
        let bad = write(
            temp.path(),
            "cf75.xml",
            "<root><RECORD><RECORDNUM>x</RECORDNUM><TITLE>t</TITLE><SOURCE>s</SOURCE>\
             <ABSTRACT>a</ABSTRACT></RECORD></root>",
        );

        let err = Extractor::new(config(temp.path(), vec![good, bad], vec![]))
            .run()
            .unwrap_err();

        assert!(matches!(err, PrepError::InvalidId { .. }));
        assert!(err.to_string().contains("cf75.xml"));
        assert!(!temp.path().join("out/data.json").exists());
    }

    #[test]
    fn test_missing_input_file() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("missing.xml");

        let err = Extractor::new(config(temp.path(), vec![missing], vec![]))
            .run()
            .unwrap_err();

        assert!(matches!(err, PrepError::FileOperation { .. }));
    }
}
