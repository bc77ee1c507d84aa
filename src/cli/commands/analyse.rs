use std::path::PathBuf;

use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::analyse::{AnalyseLogic, AnalyseOptions};
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Analyse {
        anfragen,
        liste,
        eingang_dir,
        ausgang_dir,
    } = cmd
    {
        let mut run_cfg = cfg.clone();
        if let Some(dir) = eingang_dir {
            run_cfg.eingang_dir = dir.clone();
        }
        if let Some(dir) = ausgang_dir {
            run_cfg.ausgang_dir = dir.clone();
        }

        let opts = AnalyseOptions {
            anfragen: anfragen.as_ref().map(PathBuf::from),
            liste: liste.as_ref().map(PathBuf::from),
        };
        AnalyseLogic::run(&run_cfg, &opts)?;
    }
    Ok(())
}
