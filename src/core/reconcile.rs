//! Reconciliation of the two PersPlan exports.
//!
//! Both exports carry one row per employee and day with a category in `typ`.
//! Employees with at least one active row in either export already have
//! work or a pending request; everyone else lands in the report.

use std::path::PathBuf;

use crate::config::Config;
use crate::core::classify::{ActiveRule, Classification, Classifier};
use crate::errors::AppResult;
use crate::export::{self, ExportFormat};
use crate::input::csv::read_dataset;
use crate::input::discovery::{NamePattern, resolve_input};
use crate::models::record::Record;
use crate::ui::messages::{info, success, warning};
use crate::utils::date::file_timestamp;
use crate::utils::path::{display_name, ensure_dir, expand_tilde};
use crate::utils::table::Table;

/// Fixed column set of the reconciliation report.
pub const REPORT_COLUMNS: [&str; 10] = [
    "typ",
    "datum",
    "veranstaltung",
    "uhrzeit",
    "beschreibung",
    "eingeplant",
    "mitarbeiter",
    "personalnummer",
    "telefon",
    "kommentar",
];

/// Categories that count as "has a request" in the Anfragen export.
pub const ANFRAGEN_AKTIV: [&str; 3] = ["anfrage", "urlaub", "schicht"];
/// Categories that count as "has work" in the Dienstplan export.
pub const DIENSTE_AKTIV: [&str; 1] = ["dienst"];

const TYP_FALLBACK: &str = "Keine Anfragen";
const BESCHREIBUNG_FALLBACK: &str = "Keine Anfragen oder Dienste gefunden";

const OUTPUT_STEM: &str = "abgleich_jobundanfrage";

/// Identities without an active row in either classification, one report row
/// each, sorted by identity.
///
/// The row content comes from the first-seen row of the requests export,
/// then of the shifts export. `typ` and `beschreibung` get a placeholder
/// only when the source cell is literally empty, so wordings like
/// "Keine Schichten" survive into the report.
pub fn reconcile(anfragen: &Classification, dienste: &Classification) -> Vec<Record> {
    let mut names: Vec<&str> = anfragen
        .fallback
        .keys()
        .chain(dienste.fallback.keys())
        .collect();
    names.sort_unstable();
    names.dedup();

    let mut kandidaten = Vec::new();
    for name in names {
        if anfragen.is_active(name) || dienste.is_active(name) {
            continue;
        }

        let base = anfragen
            .fallback
            .get(name)
            .or_else(|| dienste.fallback.get(name));

        let mut row = Record::new();
        for column in REPORT_COLUMNS {
            let value = base.map(|r| r.get(column)).unwrap_or("");
            row.push(column, value);
        }
        if row.get("typ").is_empty() {
            row.set("typ", TYP_FALLBACK);
        }
        if row.get("beschreibung").is_empty() {
            row.set("beschreibung", BESCHREIBUNG_FALLBACK);
        }
        row.set("mitarbeiter", name);

        kandidaten.push(row);
    }

    kandidaten
}

/// Inputs of one reconciliation run, resolved from flags or discovery.
pub struct ReconcileOptions {
    pub anfragen: Option<PathBuf>,
    pub dienste: Option<PathBuf>,
    pub format: ExportFormat,
}

pub struct ReconcileLogic;

impl ReconcileLogic {
    /// Full run: resolve the inputs, classify both exports, write the
    /// timestamped report and print the summary.
    pub fn run(cfg: &Config, opts: &ReconcileOptions) -> AppResult<()> {
        let export_dir = expand_tilde(&cfg.export_dir);
        ensure_dir(&export_dir)?;

        let anfragen_path = resolve_input(
            &opts.anfragen,
            &export_dir,
            &NamePattern::Prefix(cfg.anfragen_prefix.clone()),
        )?;
        let dienste_path = resolve_input(
            &opts.dienste,
            &export_dir,
            &NamePattern::Prefix(cfg.dienste_prefix.clone()),
        )?;

        let anfragen_ds = read_dataset(&anfragen_path, b',')?;
        let dienste_ds = read_dataset(&dienste_path, b',')?;

        for (ds, path) in [(&anfragen_ds, &anfragen_path), (&dienste_ds, &dienste_path)] {
            if ds.is_empty() {
                warning(format!("{} enthält keine Datenzeilen.", display_name(path)));
            }
        }

        let anfragen = Classifier::new("mitarbeiter", "typ", ActiveRule::any_of(&ANFRAGEN_AKTIV))
            .classify(&anfragen_ds);
        let dienste = Classifier::new("mitarbeiter", "typ", ActiveRule::any_of(&DIENSTE_AKTIV))
            .classify(&dienste_ds);

        let kandidaten = reconcile(&anfragen, &dienste);

        let output_path = export_dir.join(format!(
            "{OUTPUT_STEM}_{}.{}",
            file_timestamp(),
            opts.format.extension()
        ));
        match opts.format {
            ExportFormat::Csv => {
                export::csv::write_report(&output_path, &REPORT_COLUMNS, &kandidaten)?
            }
            ExportFormat::Json => {
                export::json::write_report_json(&output_path, &REPORT_COLUMNS, &kandidaten)?
            }
        }

        success(format!(
            "Verglichen: {} vs. {}",
            display_name(&anfragen_path),
            display_name(&dienste_path)
        ));
        success(format!(
            "{} Mitarbeitende ohne Anfragen & Dienste → {}",
            kandidaten.len(),
            output_path.display()
        ));

        print_preview(&kandidaten, cfg.preview_rows);

        Ok(())
    }
}

fn print_preview(kandidaten: &[Record], limit: usize) {
    if kandidaten.is_empty() {
        info("Keine Mitarbeitenden ohne Anfragen und Dienste gefunden.");
        return;
    }

    let shown = if limit == 0 { kandidaten.len() } else { limit };
    let mut table = Table::new(&["Mitarbeiter", "PersNr", "Telefon", "Typ"]);
    for row in kandidaten.iter().take(shown) {
        table.add_row(vec![
            row.get("mitarbeiter").to_string(),
            row.get("personalnummer").to_string(),
            row.get("telefon").to_string(),
            row.get("typ").to_string(),
        ]);
    }
    println!("\n{}", table.render());

    if kandidaten.len() > shown {
        info(format!(
            "… und {} weitere (siehe Export).",
            kandidaten.len() - shown
        ));
    }
}
