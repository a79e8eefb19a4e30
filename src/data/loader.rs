//! CSV Data Loader Module
//! Loads the EV population CSV with Polars and materializes vehicle records.

use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::record::VehicleRecord;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("failed to read dataset: {0}")]
    Fetch(#[from] std::io::Error),
    #[error("failed to parse CSV: {0}")]
    Parse(#[from] PolarsError),
}

/// Read the dataset at `path` into vehicle records.
///
/// Parsing is header-driven: the columns State, County, Make, Model,
/// Model Year, Electric Vehicle Type, and Electric Range are looked up by
/// name, and a missing column is treated as entirely empty. Rows missing
/// Model Year, Make, or Model are dropped before entering the table.
pub fn read_records(path: &Path) -> Result<Vec<VehicleRecord>, LoaderError> {
    // Distinguish an unreachable file from a malformed one.
    std::fs::metadata(path)?;

    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(10000))
        .with_ignore_errors(true)
        .finish()?
        .collect()?;

    Ok(records_from_frame(&df))
}

fn records_from_frame(df: &DataFrame) -> Vec<VehicleRecord> {
    let height = df.height();
    let make = column_text(df, "Make");
    let model = column_text(df, "Model");
    let model_year = column_text(df, "Model Year");
    let electric_range = column_text(df, "Electric Range");
    let ev_type = column_text(df, "Electric Vehicle Type");
    let state = column_text(df, "State");
    let county = column_text(df, "County");

    let mut records = Vec::with_capacity(height);
    for i in 0..height {
        let record = VehicleRecord {
            make: make[i].clone(),
            model: model[i].clone(),
            model_year: model_year[i].clone(),
            electric_range: electric_range[i].clone(),
            ev_type: ev_type[i].clone(),
            state: state[i].clone(),
            county: county[i].clone(),
        };
        if record.is_complete() {
            records.push(record);
        }
    }

    let dropped = height - records.len();
    if dropped > 0 {
        log::debug!("dropped {dropped} rows missing Model Year, Make, or Model");
    }

    records
}

/// Extract one column as text, empty string for nulls. A column absent from
/// the file yields all-empty values rather than an error.
fn column_text(df: &DataFrame, name: &str) -> Vec<String> {
    let Ok(column) = df.column(name) else {
        return vec![String::new(); df.height()];
    };

    (0..df.height())
        .map(|i| match column.get(i) {
            Ok(value) if !value.is_null() => value.to_string().trim_matches('"').to_string(),
            _ => String::new(),
        })
        .collect()
}

/// Owns the loaded record table and remembers where it came from.
pub struct DataLoader {
    records: Vec<VehicleRecord>,
    file_path: Option<PathBuf>,
}

impl Default for DataLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl DataLoader {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            file_path: None,
        }
    }

    /// Load a CSV file synchronously. Returns the number of usable rows.
    pub fn load_csv(&mut self, path: &Path) -> Result<usize, LoaderError> {
        let records = read_records(path)?;
        self.file_path = Some(path.to_path_buf());
        self.records = records;
        Ok(self.records.len())
    }

    /// Install records parsed elsewhere (used for background loading).
    pub fn set_records(&mut self, path: PathBuf, records: Vec<VehicleRecord>) {
        self.file_path = Some(path);
        self.records = records;
    }

    pub fn records(&self) -> &[VehicleRecord] {
        &self.records
    }

    pub fn row_count(&self) -> usize {
        self.records.len()
    }

    pub fn file_path(&self) -> Option<&PathBuf> {
        self.file_path.as_ref()
    }
}
