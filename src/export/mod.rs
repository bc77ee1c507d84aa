// src/export/mod.rs

pub mod csv;
pub mod json;

use clap::ValueEnum;

/// Output format of the reconciliation report.
#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}
