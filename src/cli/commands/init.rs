use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (with `--export-dir` folded in when given)
///  - the working directories (exports, eingang, ausgang)
pub fn handle(cli: &Cli) -> AppResult<()> {
    Config::init_all(cli.export_dir.clone(), cli.test)
}
