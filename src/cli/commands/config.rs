use crate::config::Config;
use crate::errors::{AppError, AppResult};

use crate::cli::parser::Commands;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config, path } = cmd {
        if *path {
            println!("{}", Config::config_file().display());
        }

        if *print_config || !*path {
            let yaml =
                serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
            println!("Aktuelle Konfiguration:\n");
            print!("{yaml}");
        }
    }

    Ok(())
}
