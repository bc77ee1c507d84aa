#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub fn abg() -> Command {
    cargo_bin_cmd!("abgleich")
}

/// Create a fresh per-test working directory inside the system temp dir
pub fn setup_work_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_abgleich", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test dir");
    path
}

/// Write a CSV fixture into `dir` and return its path
pub fn write_csv(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).expect("write test csv");
    path
}

/// Header of the PersPlan exports (requests and shifts share the schema)
pub const EXPORT_HEADER: &str =
    "typ,datum,veranstaltung,uhrzeit,beschreibung,eingeplant,mitarbeiter,personalnummer,telefon,kommentar";

/// Build an export file body from the shared header plus data rows
pub fn export_csv(rows: &[&str]) -> String {
    let mut out = String::from(EXPORT_HEADER);
    out.push('\n');
    for row in rows {
        out.push_str(row);
        out.push('\n');
    }
    out
}

/// Path of the report written by a reconcile run, if any
pub fn find_report(dir: &Path, ext: &str) -> Option<PathBuf> {
    let suffix = format!(".{ext}");
    fs::read_dir(dir)
        .ok()?
        .filter_map(Result::ok)
        .map(|e| e.path())
        .find(|p| {
            p.file_name()
                .map(|n| {
                    let name = n.to_string_lossy();
                    name.starts_with("abgleich_jobundanfrage_") && name.ends_with(&suffix)
                })
                .unwrap_or(false)
        })
}
