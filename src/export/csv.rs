use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::errors::AppResult;
use crate::models::record::Record;

/// Writes the reconciliation report: comma-delimited, UTF-8 without BOM.
/// The header row is written even when there are no data rows.
pub fn write_report(path: &Path, columns: &[&str], rows: &[Record]) -> AppResult<()> {
    let wtr = csv::Writer::from_path(path)?;
    write_rows(wtr, columns, rows)
}

/// Writes the annotated zero-shift list: semicolon-delimited with a leading
/// UTF-8 BOM so German Excel picks up encoding and separator.
pub fn write_liste(path: &Path, columns: &[&str], rows: &[Record]) -> AppResult<()> {
    let mut file = File::create(path)?;
    file.write_all("\u{feff}".as_bytes())?;
    let wtr = csv::WriterBuilder::new().delimiter(b';').from_writer(file);
    write_rows(wtr, columns, rows)
}

fn write_rows<W: Write>(mut wtr: csv::Writer<W>, columns: &[&str], rows: &[Record]) -> AppResult<()> {
    wtr.write_record(columns)?;

    for row in rows {
        wtr.write_record(columns.iter().map(|c| row.get(c)))?;
    }

    wtr.flush()?;
    Ok(())
}
