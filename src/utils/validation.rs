// file: src/utils/validation.rs
// description: input validation helpers for paths, file names and service urls
// reference: input validation patterns

use crate::error::{PrepError, Result};
use std::path::Path;

pub struct Validator;

impl Validator {
    pub fn validate_file_path(path: &Path) -> Result<()> {
        if !path.exists() {
            return Err(PrepError::Validation(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        if !path.is_file() {
            return Err(PrepError::Validation(format!(
                "Path is not a file: {}",
                path.display()
            )));
        }

        Ok(())
    }

    /// A query id becomes a file name, so it must not climb out of or
    /// descend into directories.
    pub fn validate_file_stem(stem: &str) -> Result<()> {
        if stem.is_empty() || stem == "." || stem == ".." {
            return Err(PrepError::Validation(format!(
                "Invalid file name: {:?}",
                stem
            )));
        }

        if stem.contains(['/', '\\', '\0']) {
            return Err(PrepError::Validation(format!(
                "File name contains a path separator: {:?}",
                stem
            )));
        }

        Ok(())
    }

    pub fn validate_url(url: &str) -> Result<()> {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(PrepError::Validation(format!(
                "Invalid URL format: {}",
                url
            )));
        }
        Ok(())
    }

    pub fn validate_collection(name: &str) -> Result<()> {
        if name.trim().is_empty() || name.contains('/') {
            return Err(PrepError::Validation(format!(
                "Invalid collection name: {:?}",
                name
            )));
        }
        Ok(())
    }
}
