//! Classified entry of a scraped PersPlan table row.

/// One classified row of the Anfragen or Dienstplan table, ready to be
/// written into an export. `beschreibung` is the synthesized human-readable
/// summary shown in the report.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableEntry {
    pub typ: String,
    pub datum: String,
    pub veranstaltung: String,
    pub uhrzeit: String,
    pub beschreibung: String,
    pub eingeplant: String,
}
