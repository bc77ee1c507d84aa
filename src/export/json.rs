use std::path::Path;

use serde_json::{Map, Value};

use crate::errors::AppResult;
use crate::models::record::Record;

/// Writes the JSON twin of the report: an array with one string-valued
/// object per row, columns in report order.
pub fn write_report_json(path: &Path, columns: &[&str], rows: &[Record]) -> AppResult<()> {
    let mut out: Vec<Value> = Vec::with_capacity(rows.len());

    for row in rows {
        let mut object = Map::new();
        for &column in columns {
            object.insert(column.to_string(), Value::String(row.get(column).to_string()));
        }
        out.push(Value::Object(object));
    }

    let json = serde_json::to_string_pretty(&out)?;
    std::fs::write(path, json)?;
    Ok(())
}
