#![deny(unsafe_code)]

pub mod cities;
pub mod countries;
pub mod states;

use std::path::Path;

use crate::error::RefdataError;

/// Read a seed CSV into its header row and records, with shared error
/// wrapping for the per-file parsers.
pub(crate) fn read_records(
    path: &Path,
) -> Result<(csv::StringRecord, Vec<csv::StringRecord>), RefdataError> {
    let bytes = std::fs::read(path).map_err(|e| RefdataError::io(path, e))?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(bytes.as_slice());
    let headers = reader
        .headers()
        .map_err(|e| RefdataError::csv(path, e.to_string()))?
        .clone();

    let mut rows = Vec::new();
    for row in reader.records() {
        let row = row.map_err(|e| RefdataError::csv(path, e.to_string()))?;
        rows.push(row);
    }
    Ok((headers, rows))
}

/// Look up a trimmed, non-empty cell by header name.
pub(crate) fn field(
    headers: &csv::StringRecord,
    row: &csv::StringRecord,
    name: &str,
) -> Option<String> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .and_then(|i| row.get(i))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Parse a required numeric id column.
pub(crate) fn id_field(
    headers: &csv::StringRecord,
    row: &csv::StringRecord,
    name: &str,
    path: &Path,
) -> Result<u64, RefdataError> {
    let raw = field(headers, row, name)
        .ok_or_else(|| RefdataError::csv(path, format!("missing {name}")))?;
    raw.parse::<u64>()
        .map_err(|_| RefdataError::csv(path, format!("invalid {name}: {raw:?}")))
}
