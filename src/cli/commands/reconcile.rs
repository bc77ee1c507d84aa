use std::path::PathBuf;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::reconcile::{ReconcileLogic, ReconcileOptions};
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Reconcile {
        anfragen,
        dienste,
        format,
    } = cmd
    {
        let opts = ReconcileOptions {
            anfragen: anfragen.as_ref().map(PathBuf::from),
            dienste: dienste.as_ref().map(PathBuf::from),
            format: format.clone(),
        };
        ReconcileLogic::run(cfg, &opts)?;
    }
    Ok(())
}
