//! Input discovery: pick the newest export matching a name pattern.
//!
//! The scraper drops timestamped files into the working directories and the
//! reconciliation always runs against the most recent one, so "newest" means
//! modification time, not name order.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::errors::{AppError, AppResult};

/// File-name pattern for picking an input out of a working directory.
/// Only `.csv` files are considered.
#[derive(Debug, Clone)]
pub enum NamePattern {
    /// Name starts with the prefix.
    Prefix(String),
    /// Name contains the fragment.
    Contains(String),
}

impl NamePattern {
    pub fn matches(&self, name: &str) -> bool {
        if !name.ends_with(".csv") {
            return false;
        }
        match self {
            NamePattern::Prefix(prefix) => name.starts_with(prefix.as_str()),
            NamePattern::Contains(fragment) => name.contains(fragment.as_str()),
        }
    }
}

impl fmt::Display for NamePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NamePattern::Prefix(prefix) => write!(f, "Präfix '{prefix}'"),
            NamePattern::Contains(fragment) => write!(f, "'{fragment}' im Namen"),
        }
    }
}

/// An explicitly given path wins over discovery.
pub fn resolve_input(
    explicit: &Option<PathBuf>,
    dir: &Path,
    pattern: &NamePattern,
) -> AppResult<PathBuf> {
    match explicit {
        Some(path) => Ok(path.clone()),
        None => latest_matching(dir, pattern),
    }
}

/// Newest file in `dir` matching `pattern`.
///
/// An unreadable directory propagates as an I/O error; a readable directory
/// without a match reports pattern and directory.
pub fn latest_matching(dir: &Path, pattern: &NamePattern) -> AppResult<PathBuf> {
    let mut newest: Option<(SystemTime, PathBuf)> = None;

    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let file_name = entry.file_name();
        let name = match file_name.to_str() {
            Some(name) => name,
            None => continue,
        };
        if !pattern.matches(name) {
            continue;
        }
        let modified = entry.metadata()?.modified()?;
        let is_newer = match &newest {
            Some((best, _)) => modified > *best,
            None => true,
        };
        if is_newer {
            newest = Some((modified, path));
        }
    }

    match newest {
        Some((_, path)) => Ok(path),
        None => Err(AppError::MissingInput {
            pattern: pattern.to_string(),
            dir: dir.display().to_string(),
        }),
    }
}
