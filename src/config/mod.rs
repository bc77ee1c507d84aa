use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::path::{ensure_dir, expand_tilde};

/// Working directories and discovery patterns of the tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub export_dir: String,
    pub eingang_dir: String,
    pub ausgang_dir: String,
    #[serde(default = "default_anfragen_prefix")]
    pub anfragen_prefix: String,
    #[serde(default = "default_dienste_prefix")]
    pub dienste_prefix: String,
    #[serde(default = "default_liste_marker")]
    pub liste_marker: String,
    #[serde(default = "default_preview_rows")]
    pub preview_rows: usize,
}

fn default_anfragen_prefix() -> String {
    "anfragen_".to_string()
}
fn default_dienste_prefix() -> String {
    "dienstplaene_".to_string()
}
fn default_liste_marker() -> String {
    "Keine_Schichten".to_string()
}
fn default_preview_rows() -> usize {
    20
}

impl Default for Config {
    fn default() -> Self {
        Self {
            export_dir: "exports".to_string(),
            eingang_dir: "eingang".to_string(),
            ausgang_dir: "ausgang".to_string(),
            anfragen_prefix: default_anfragen_prefix(),
            dienste_prefix: default_dienste_prefix(),
            liste_marker: default_liste_marker(),
            preview_rows: default_preview_rows(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("abgleich")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".abgleich")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("abgleich.conf")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    /// Write the configuration file and create the working directories.
    /// `export_dir` carries the `--export-dir` override into the written
    /// config; `is_test` skips the config file so test runs leave the user
    /// configuration alone.
    pub fn init_all(export_dir: Option<String>, is_test: bool) -> AppResult<()> {
        let mut config = Config::default();
        if let Some(dir) = export_dir {
            config.export_dir = dir;
        }

        if !is_test {
            ensure_dir(&Self::config_dir())?;
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| AppError::Config(e.to_string()))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            success(format!("Konfiguration: {}", Self::config_file().display()));
        }

        for dir in [&config.export_dir, &config.eingang_dir, &config.ausgang_dir] {
            ensure_dir(&expand_tilde(dir))?;
        }
        success(format!(
            "Arbeitsordner angelegt: {}, {}, {}",
            config.export_dir, config.eingang_dir, config.ausgang_dir
        ));

        Ok(())
    }
}
