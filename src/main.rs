//! Response Validator - judge AI-service responses against expectation sets

use std::process::ExitCode;

use clap::Parser;

use response_validator::{
    cli::{Cli, Command},
    config::Config,
    setup_tracing,
    validator::cli_handler::{run_check_command, run_presets_command},
};

/// Exit code for configuration and input problems; 1 means the response failed
const EXIT_INPUT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ Failed to load configuration: {e}");
            return ExitCode::from(EXIT_INPUT_ERROR);
        }
    };

    let level = cli.log_level.as_deref().unwrap_or(&config.logging.level);
    let format = cli.log_format.as_deref().unwrap_or(&config.logging.format);
    if let Err(e) = setup_tracing(level, Some(format)) {
        eprintln!("❌ Failed to setup tracing: {e}");
        return ExitCode::from(EXIT_INPUT_ERROR);
    }

    match cli.command {
        Command::Check(args) => run_check_command(&args, &config.validation),
        Command::Presets => run_presets_command(),
    }
}
