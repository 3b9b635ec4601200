use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use fxpath::core::log::init_logging;
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Convert the amount described by an input file
    Convert {
        /// Input file (defaults to the configured input, then devises.txt)
        input: Option<PathBuf>,

        /// Print exchange rates, search maps and the resolved path
        #[arg(short, long)]
        diagnostics: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => fxpath::cli::setup::setup(),
        Some(Commands::Convert { input, diagnostics }) => fxpath::run_command(
            fxpath::AppCommand::Convert { input, diagnostics },
            cli.config_path.as_deref(),
        ),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}
