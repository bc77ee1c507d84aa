use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for abgleich
/// CLI application to reconcile PersPlan staffing exports
#[derive(Parser)]
#[command(
    name = "abgleich",
    version = env!("CARGO_PKG_VERSION"),
    about = "Abgleich von PersPlan-Exporten: Mitarbeitende ohne Anfragen und Dienste finden",
    long_about = None
)]
pub struct Cli {
    /// Override the export directory (useful for tests or one-off runs)
    #[arg(global = true, long = "export-dir")]
    pub export_dir: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the default configuration and create the working directories
    Init,

    /// Show the configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "path", help = "Print the configuration file location")]
        path: bool,
    },

    /// Compare the requests and shifts exports; report employees with neither
    Reconcile {
        /// Requests export (default: newest anfragen_*.csv in the export dir)
        #[arg(long = "anfragen", value_name = "FILE")]
        anfragen: Option<String>,

        /// Shifts export (default: newest dienstplaene_*.csv in the export dir)
        #[arg(long = "dienste", value_name = "FILE")]
        dienste: Option<String>,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,
    },

    /// Annotate the zero-shift list with request coverage
    Analyse {
        /// Requests export (default: newest anfragen_*.csv in the export dir)
        #[arg(long = "anfragen", value_name = "FILE")]
        anfragen: Option<String>,

        /// Zero-shift list (default: newest *Keine_Schichten*.csv in the inbox)
        #[arg(long = "liste", value_name = "FILE")]
        liste: Option<String>,

        /// Inbox directory holding the zero-shift lists
        #[arg(long = "eingang-dir", value_name = "DIR")]
        eingang_dir: Option<String>,

        /// Output directory for the annotated list
        #[arg(long = "ausgang-dir", value_name = "DIR")]
        ausgang_dir: Option<String>,
    },
}
