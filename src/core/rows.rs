//! Text-level classification of PersPlan table rows.
//!
//! The scraper hands over the trimmed cell texts of one table row plus the
//! separately located Eingeplant/Status value; this module decides the entry
//! type and synthesizes the human-readable description that ends up in the
//! exports.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::entry::TableEntry;

/// Dates as PersPlan renders them, e.g. "Mo. 03.11.25".
static DATE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-zÄÖÜäöü]{1,3}\.\s*\d{2}\.\d{2}\.\d{2}").unwrap());

/// Personnel number labels on the profile page, e.g. "PerNr.: 14655",
/// "Personal-Nr.: 14655" or "Personal Nr: 14655".
static PERSNR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:PerNr\.|Personal[-\s]?Nr\.?)\s*:\s*(\d+)").unwrap());

fn cell(cells: &[String], index: usize) -> &str {
    cells.get(index).map(String::as_str).unwrap_or("")
}

fn starts_with_date(text: &str) -> bool {
    DATE_PATTERN.find(text).map(|m| m.start() == 0).unwrap_or(false)
}

fn non_empty_or(value: String, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value
    }
}

/// Date of an Anfragen row: the first cell that starts with a date, then the
/// first non-empty cell.
pub fn anfrage_datum(cells: &[String]) -> String {
    for value in cells {
        if starts_with_date(value) {
            return value.clone();
        }
    }
    for value in cells {
        if !value.is_empty() {
            return value.clone();
        }
    }
    String::new()
}

/// Date of a Dienstplan row. The date column is usually the second cell;
/// rowspan layouts leave it empty, so the row text is searched as a whole
/// before falling back to the first non-empty cell.
pub fn dienst_datum(cells: &[String]) -> String {
    if cells.len() >= 2 && !cells[1].is_empty() {
        return cells[1].clone();
    }
    let joined = cells.join(" ");
    if let Some(m) = DATE_PATTERN.find(&joined) {
        return m.as_str().to_string();
    }
    for value in cells {
        if starts_with_date(value) {
            return value.clone();
        }
    }
    for value in cells {
        if !value.is_empty() {
            return value.clone();
        }
    }
    String::new()
}

/// First labelled personnel number in a blob of page text.
pub fn personalnummer_from_text(text: &str) -> Option<String> {
    PERSNR_PATTERN.captures(text).map(|caps| caps[1].to_string())
}

/// Classify one row of the Anfragen table.
///
/// `eingeplant` is the value of the row's Eingeplant column. Returns `None`
/// for rows without any text. Holiday filler rows count as "Keine Anfragen"
/// unless the row itself says so, in which case the shorter standard wording
/// wins.
pub fn parse_anfrage_row(cells: &[String], eingeplant: &str) -> Option<TableEntry> {
    let joined = cells.join(" ");
    if joined.is_empty() {
        return None;
    }
    let lower = joined.to_lowercase();

    if lower.contains("feiertag") && !lower.contains("keine anfragen") {
        let datum = non_empty_or(anfrage_datum(cells), "?");
        let trimmed = joined.trim();
        let beschreibung = if trimmed.is_empty() { "Keine Schichten" } else { trimmed };
        let text = format!("{beschreibung} – keine Schichten am {datum}");
        return Some(TableEntry {
            typ: "Keine Anfragen".to_string(),
            datum,
            veranstaltung: String::new(),
            uhrzeit: String::new(),
            beschreibung: text,
            eingeplant: eingeplant.to_string(),
        });
    }

    if lower.contains("urlaub") {
        let datum = non_empty_or(anfrage_datum(cells), "?");
        let text = format!("Urlaub am {datum}");
        return Some(TableEntry {
            typ: "Urlaub".to_string(),
            datum,
            veranstaltung: String::new(),
            uhrzeit: String::new(),
            beschreibung: text,
            eingeplant: eingeplant.to_string(),
        });
    }

    if lower.contains("keine anfragen") {
        let datum = non_empty_or(anfrage_datum(cells), "?");
        let text = format!("Keine Anfragen am {datum}");
        return Some(TableEntry {
            typ: "Keine Anfragen".to_string(),
            datum,
            veranstaltung: String::new(),
            uhrzeit: String::new(),
            beschreibung: text,
            eingeplant: eingeplant.to_string(),
        });
    }

    let uhrzeit = cell(cells, 3).to_string();
    let veranstaltung = cell(cells, 4).to_string();
    let datum = anfrage_datum(cells);

    let mut text = format!(
        "{} – {} am {}",
        if veranstaltung.is_empty() { "–" } else { &veranstaltung },
        if uhrzeit.is_empty() { "–" } else { &uhrzeit },
        if datum.is_empty() { "?" } else { &datum },
    );
    if !eingeplant.is_empty() {
        text.push_str(&format!(" (Eingeplant: {eingeplant})"));
    }

    Some(TableEntry {
        typ: "Anfrage".to_string(),
        datum,
        veranstaltung,
        uhrzeit,
        beschreibung: text,
        eingeplant: eingeplant.to_string(),
    })
}

/// Classify one row of the Dienstplan table.
///
/// `status` is the text of the row's status container. Returns `None` for
/// rows without any text.
pub fn parse_dienst_row(cells: &[String], status: &str) -> Option<TableEntry> {
    let joined = cells.join(" ");
    if joined.trim().is_empty() {
        return None;
    }

    let datum = non_empty_or(dienst_datum(cells), "?");
    let uhrzeit = cell(cells, 2).to_string();
    let veranstaltung = cell(cells, 5).to_string();

    if !row_has_assignment(cells) {
        let lower = joined.to_lowercase();
        let beschreibung = if lower.contains("feiertag") {
            format!("Feiertag {datum} – keine Schichten am {datum}")
        } else {
            format!("Keine Schichten am {datum}")
        };
        return Some(TableEntry {
            typ: "Keine Schichten".to_string(),
            datum,
            veranstaltung: String::new(),
            uhrzeit: String::new(),
            beschreibung,
            eingeplant: status.to_string(),
        });
    }

    let location = cell(cells, 4);
    let rolle = cell(cells, 7);
    let mut teile: Vec<&str> = Vec::new();
    for part in [veranstaltung.as_str(), location, rolle] {
        if !part.is_empty() {
            teile.push(part);
        }
    }

    let mut beschreibung = if teile.is_empty() {
        "Dienst".to_string()
    } else {
        teile.join(" | ")
    };
    beschreibung.push_str(&format!(
        " – {} am {}",
        if uhrzeit.is_empty() { "–" } else { &uhrzeit },
        datum,
    ));
    if !status.is_empty() {
        beschreibung.push_str(&format!(" (Status: {status})"));
    }

    Some(TableEntry {
        typ: "Dienst".to_string(),
        datum,
        veranstaltung,
        uhrzeit,
        beschreibung,
        eingeplant: status.to_string(),
    })
}

/// A row counts as an assignment unless it mentions a holiday or explicitly
/// says "keine Schichten", or carries no payload past the date and time
/// columns.
fn row_has_assignment(cells: &[String]) -> bool {
    let cleaned: Vec<String> = cells.iter().map(|v| v.trim().to_lowercase()).collect();
    if cleaned.iter().any(|v| v.contains("feiertag")) {
        return false;
    }
    if cleaned.iter().any(|v| v.contains("keine schichten")) {
        return false;
    }
    cells.iter().skip(2).any(|v| !v.is_empty())
}
