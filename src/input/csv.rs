//! CSV loader for the PersPlan exports.

use std::path::Path;

use crate::errors::AppResult;
use crate::models::record::{Dataset, Record};

/// Read a delimited export into a [`Dataset`].
///
/// Headers are required. The exports are written as "utf-8-sig", so a
/// leading BOM is stripped from the first header cell. Ragged rows pass
/// through unchanged: short rows read as empty cells, surplus cells have no
/// column name and are dropped on output.
pub fn read_dataset(path: &Path, delimiter: u8) -> AppResult<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(delimiter)
        .from_path(path)?;

    let mut headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
    if let Some(first) = headers.first_mut() {
        *first = first.trim_start_matches('\u{feff}').to_string();
    }

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result?;
        let mut record = Record::new();
        for (i, header) in headers.iter().enumerate() {
            record.push(header, row.get(i).unwrap_or(""));
        }
        records.push(record);
    }

    Ok(Dataset { headers, records })
}
