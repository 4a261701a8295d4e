//! CSV parsing for the import pipeline.
//!
//! Rows are represented as ordered field-to-value mappings built by zipping
//! each data row positionally against the header row. The zip is permissive:
//! a short row simply lacks its trailing fields, and surplus values beyond
//! the header width are dropped.

use csv::{ReaderBuilder, Trim};
use indexmap::IndexMap;
use std::fs;
use std::path::Path;

/// One CSV data row, keyed by header name in column order.
pub type Record = IndexMap<String, String>;

/// Parses CSV content into a sequence of records.
///
/// The first line supplies the field names; every subsequent non-empty line
/// becomes one record. Fields and headers are trimmed of surrounding
/// whitespace. A duplicate header silently shadows the earlier column.
///
/// # Arguments
/// * `content` - Raw CSV text, header row first
///
/// # Returns
/// The parsed records in file order, or an error if a row cannot be read
pub fn parse_csv(content: &str) -> Result<Vec<Record>, Box<dyn std::error::Error>> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let mut record = Record::new();
        for (index, header) in headers.iter().enumerate() {
            if let Some(value) = row.get(index) {
                record.insert(header.clone(), value.to_string());
            }
        }
        records.push(record);
    }

    Ok(records)
}

/// Reads and parses a CSV file.
///
/// A missing or unreadable file is fatal and propagates to the caller; no
/// partial-import recovery is attempted for a bad source file.
pub fn read_records(path: &Path) -> Result<Vec<Record>, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    parse_csv(&content)
}
