// file: src/config.rs
// description: extractor configuration management with json/toml support
// reference: https://docs.rs/config

use crate::error::{PrepError, Result};
use crate::utils::Validator;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "config/config.json";
pub const ENV_PREFIX: &str = "CF_PREP";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub dataset: DatasetConfig,
    pub output: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatasetConfig {
    /// XML files holding `RECORD` elements.
    pub data_files: Vec<PathBuf>,
    /// XML files holding `QUERY` elements with their judgments.
    pub qrels: Vec<PathBuf>,
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let path = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_PATH));

        Validator::validate_file_path(path).map_err(|e| PrepError::Config(e.to_string()))?;

        let settings = config::Config::builder()
            .add_source(config::File::from(path))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| PrepError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| PrepError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn documents_path(&self) -> PathBuf {
        self.output.join("data.json")
    }

    pub fn qrels_dir(&self) -> PathBuf {
        self.output.join("qrels")
    }

    fn validate(&self) -> Result<()> {
        if self.dataset.data_files.is_empty() {
            return Err(PrepError::Config(
                "dataset.data_files must list at least one file".to_string(),
            ));
        }

        if self.output.as_os_str().is_empty() {
            return Err(PrepError::Config("output must not be empty".to_string()));
        }

        Ok(())
    }
}
