use crate::types::RawRow;
use csv::ReaderBuilder;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const REQUIRED_COLUMNS: [&str; 6] = [
    "date",
    "location",
    "total_cases",
    "total_deaths",
    "new_cases",
    "new_deaths",
];

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("missing required column `{0}`")]
    MissingColumn(&'static str),
    #[error("failed to read CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Read the whole dataset into memory. The existence check runs before any
/// parsing so a bad path is reported as such, not as a CSV error.
pub fn load_dataset(path: &Path) -> Result<Vec<RawRow>, LoadError> {
    if !path.is_file() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let mut rdr = ReaderBuilder::new().flexible(true).from_path(path)?;

    let headers = rdr.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn(column));
        }
    }

    let mut rows = Vec::new();
    for result in rdr.deserialize::<RawRow>() {
        rows.push(result?);
    }
    Ok(rows)
}
