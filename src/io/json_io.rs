use std::fs;
use std::io;
use std::path::Path;

use serde_json::Value;

use crate::state::data_model::TableData;
use crate::state::table_config::TableConfig;

#[derive(Debug, thiserror::Error)]
pub enum JsonIoError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("JSON root is not an array or a table configuration object")]
    UnsupportedRoot,
    #[error("JSON array contains non-object elements")]
    NotArrayOfObjects,
}

/// Loads a table configuration from a JSON file.
///
/// The root may be a configuration object (`{"data": [...], "width": [...]}`)
/// or a bare array of row objects, in which case every column gets
/// `default_width`.
pub fn load_table_config(path: &Path, default_width: f64) -> Result<TableConfig, JsonIoError> {
    let content = fs::read_to_string(path)?;
    parse_table_config(&content, default_width)
}

pub fn parse_table_config(content: &str, default_width: f64) -> Result<TableConfig, JsonIoError> {
    let value: Value = serde_json::from_str(content)?;

    match value {
        Value::Array(_) => {
            let rows = rows_from_value(value)?;
            let column_count = rows.first().map(|row| row.len()).unwrap_or(0);
            let width = vec![default_width; column_count + 1];
            Ok(TableConfig::new(rows, width))
        }
        Value::Object(_) => Ok(serde_json::from_value(value)?),
        _ => Err(JsonIoError::UnsupportedRoot),
    }
}

fn rows_from_value(value: Value) -> Result<TableData, JsonIoError> {
    match value {
        Value::Array(arr) => {
            let mut rows = Vec::with_capacity(arr.len());
            for item in arr {
                match item {
                    Value::Object(map) => rows.push(map),
                    _ => return Err(JsonIoError::NotArrayOfObjects),
                }
            }
            Ok(rows)
        }
        _ => Err(JsonIoError::UnsupportedRoot),
    }
}
