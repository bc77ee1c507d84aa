//! Row and table models for the loaded exports.
//!
//! The exports are plain CSV with free-form headers, so rows are kept as
//! ordered (column, value) pairs instead of fixed structs. Lookups on a
//! missing column yield an empty string, which lets short rows behave like
//! rows with empty cells.

/// One data row, column order preserved from the source file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Append a column without checking for duplicates. Used by the loader,
    /// which walks the header row in order.
    pub fn push(&mut self, column: &str, value: &str) {
        self.fields.push((column.to_string(), value.to_string()));
    }

    /// Value of `column`, or "" when the row has no such column.
    pub fn get(&self, column: &str) -> &str {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
            .unwrap_or("")
    }

    /// Replace the value of `column` in place, appending the column at the
    /// end when the row does not have it yet.
    pub fn set(&mut self, column: &str, value: &str) {
        for (name, stored) in &mut self.fields {
            if name.as_str() == column {
                *stored = value.to_string();
                return;
            }
        }
        self.fields.push((column.to_string(), value.to_string()));
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A loaded export: header order plus one [`Record`] per data row.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub headers: Vec<String>,
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
