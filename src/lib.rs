pub mod cli;
pub mod core;

use anyhow::Result;
use std::path::PathBuf;
use tracing::{debug, info};

pub enum AppCommand {
    /// Convert the request of an input file; `None` falls back to the
    /// configured default input.
    Convert {
        input: Option<PathBuf>,
        diagnostics: bool,
    },
}

pub fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("fxpath starting...");

    let config = match config_path {
        Some(path) => core::config::AppConfig::load_from_path(path)?,
        None => core::config::AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    match command {
        AppCommand::Convert { input, diagnostics } => {
            let input = input.unwrap_or_else(|| config.input_path());
            cli::convert::run(&input, &config, diagnostics || config.diagnostics)
        }
    }
}
