// file: src/exporter/json.rs
// description: json export of records and per-query judgment files

use crate::error::{PrepError, Result};
use crate::models::{Query, Record};
use crate::utils::Validator;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const DOCUMENTS_FILE: &str = "data.json";
pub const QRELS_DIR: &str = "qrels";

const INDENT: &[u8] = b"    ";

#[derive(Debug, Clone)]
pub struct JsonExporter {
    output_dir: PathBuf,
}

impl JsonExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Result<Self> {
        let output_dir = output_dir.into();
        fs::create_dir_all(&output_dir).map_err(|e| PrepError::file_operation(&output_dir, e))?;
        Ok(Self { output_dir })
    }

    /// Writes every record as one JSON array to `data.json`.
    pub fn export_records(&self, records: &[Record]) -> Result<PathBuf> {
        let path = self.output_dir.join(DOCUMENTS_FILE);
        write_pretty(&path, records)?;

        info!("Wrote {} documents to {}", records.len(), path.display());
        Ok(path)
    }

    /// Writes one query to `qrels/<query_id>.json`.
    pub fn export_query(&self, query: &Query) -> Result<PathBuf> {
        Validator::validate_file_stem(&query.query_id)?;

        let dir = self.output_dir.join(QRELS_DIR);
        fs::create_dir_all(&dir).map_err(|e| PrepError::file_operation(&dir, e))?;

        let path = dir.join(format!("{}.json", query.query_id));
        write_pretty(&path, query)?;

        debug!("Wrote query {} to {}", query.query_id, path.display());
        Ok(path)
    }
}

fn write_pretty<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path).map_err(|e| PrepError::file_operation(path, e))?;
    let mut writer = BufWriter::new(file);

    let mut serializer = Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut serializer)?;

    writer
        .flush()
        .map_err(|e| PrepError::file_operation(path, e))?;
    Ok(())
}
