//! Analyse of the zero-shift list against the requests export.
//!
//! The list arrives keyed by personnel number (`PersNr`); the requests
//! export carries `personalnummer` and `typ`. Every list row is passed
//! through unchanged and annotated with whether the employee already has at
//! least one row with `typ` exactly "Anfrage".

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::core::classify::{ActiveRule, Classifier};
use crate::errors::{AppError, AppResult};
use crate::export;
use crate::input::csv::read_dataset;
use crate::input::discovery::{NamePattern, resolve_input};
use crate::models::record::Dataset;
use crate::ui::messages::{info, success};
use crate::utils::path::{display_name, ensure_dir, expand_tilde};

const LISTE_PREFIX: &str = "Check_Keine_Schichten_";
const OUTPUT_STEM: &str = "Analyse_Keine_Schichten_vs_Anfragen";

pub const HAT_ANFRAGE: &str = "Hat_Anfrage";
pub const MUSS_ANGESCHRIEBEN: &str = "Muss_angeschrieben_werden";

/// Pass the zero-shift list through unchanged and append the two derived
/// columns. `mit_anfrage` holds the personnel numbers that already have a
/// request.
pub fn annotate(liste: &Dataset, mit_anfrage: &HashSet<String>) -> Dataset {
    let mut headers = liste.headers.clone();
    for extra in [HAT_ANFRAGE, MUSS_ANGESCHRIEBEN] {
        if !headers.iter().any(|h| h == extra) {
            headers.push(extra.to_string());
        }
    }

    let mut records = Vec::with_capacity(liste.records.len());
    for record in &liste.records {
        let persnr = record.get("PersNr").trim();
        let hat = mit_anfrage.contains(persnr);

        let mut row = record.clone();
        row.set(HAT_ANFRAGE, bool_str(hat));
        row.set(MUSS_ANGESCHRIEBEN, bool_str(!hat));
        records.push(row);
    }

    Dataset { headers, records }
}

/// The downstream sheets expect the Python spelling of booleans.
fn bool_str(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}

/// Inputs of one analyse run, resolved from flags or discovery.
pub struct AnalyseOptions {
    pub anfragen: Option<PathBuf>,
    pub liste: Option<PathBuf>,
}

pub struct AnalyseLogic;

impl AnalyseLogic {
    /// Full run: resolve the inputs, annotate the list and write it to the
    /// outbox with the month label of the input file.
    pub fn run(cfg: &Config, opts: &AnalyseOptions) -> AppResult<()> {
        let export_dir = expand_tilde(&cfg.export_dir);
        let eingang_dir = expand_tilde(&cfg.eingang_dir);
        let ausgang_dir = expand_tilde(&cfg.ausgang_dir);

        let anfragen_path = resolve_input(
            &opts.anfragen,
            &export_dir,
            &NamePattern::Prefix(cfg.anfragen_prefix.clone()),
        )?;
        let liste_path = resolve_input(
            &opts.liste,
            &eingang_dir,
            &NamePattern::Contains(cfg.liste_marker.clone()),
        )?;

        info(format!(
            "Starte Abgleich: {} ↔ {}",
            liste_path.display(),
            anfragen_path.display()
        ));

        let anfragen_ds = read_dataset(&anfragen_path, b',')?;
        let liste_ds = read_dataset(&liste_path, b';')?;

        require_column(&anfragen_ds, "personalnummer", &anfragen_path)?;
        require_column(&anfragen_ds, "typ", &anfragen_path)?;
        require_column(&liste_ds, "PersNr", &liste_path)?;

        let anfragen = Classifier::new("personalnummer", "typ", ActiveRule::equals("Anfrage"))
            .classify(&anfragen_ds);

        let annotated = annotate(&liste_ds, &anfragen.active);

        let total = annotated.records.len();
        let mit_anfrage = annotated
            .records
            .iter()
            .filter(|r| r.get(HAT_ANFRAGE) == "True")
            .count();

        println!("\nAnalyse-Ergebnis:");
        println!("Insgesamt: {total} Mitarbeiter mit 0 Schichten");
        println!("{mit_anfrage} haben bereits Anfragen");
        println!("{} müssen kontaktiert werden\n", total - mit_anfrage);

        ensure_dir(&ausgang_dir)?;
        let output_path = ausgang_dir.join(output_name(&liste_path));
        let columns: Vec<&str> = annotated.headers.iter().map(String::as_str).collect();
        export::csv::write_liste(&output_path, &columns, &annotated.records)?;

        success(format!(
            "Ergebnis gespeichert unter: {}",
            output_path.display()
        ));

        Ok(())
    }
}

/// Output name derives from the month label of the list file:
/// "Check_Keine_Schichten_2025-10.csv" becomes
/// "Analyse_Keine_Schichten_vs_Anfragen_2025-10.csv".
fn output_name(liste_path: &Path) -> String {
    let label = display_name(liste_path)
        .replace(LISTE_PREFIX, "")
        .replace(".csv", "");
    format!("{OUTPUT_STEM}_{label}.csv")
}

fn require_column(dataset: &Dataset, column: &str, path: &Path) -> AppResult<()> {
    if dataset.has_column(column) {
        return Ok(());
    }
    Err(AppError::MissingColumn {
        column: column.to_string(),
        file: display_name(path),
    })
}
