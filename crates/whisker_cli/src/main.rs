//! whisker CLI - Main entry point.
//!
//! Exit codes:
//! - 0: Success
//! - 1: General error
//! - 2: Invalid arguments
//! - 3: Data error
//! - 4: Template error

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use whisker_core::CoreError;
use whisker_formats::FormatError;
use whisker_templates::TemplateError;

mod commands;

use commands::{Cli, Commands};

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const SUCCESS: u8 = 0;
    pub const GENERAL_ERROR: u8 = 1;
    pub const INVALID_ARGS: u8 = 2;
    pub const DATA_ERROR: u8 = 3;
    pub const TEMPLATE_ERROR: u8 = 4;
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "whisker=debug,warn"
    } else if cli.quiet {
        "error"
    } else {
        "whisker=info,warn"
    };

    // Logging may already be initialized; keep going either way.
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .try_init();

    let result = match cli.command {
        Commands::Render(args) => commands::render::execute(args),
        Commands::Resolve(args) => commands::resolve::execute(args),
        Commands::Formats(args) => commands::formats::execute(args),
    };

    match result {
        Ok(()) => ExitCode::from(ExitCodes::SUCCESS),
        Err(e) => {
            let exit_code = categorize_error(&e);
            eprintln!("Error: {:#}", e);
            ExitCode::from(exit_code)
        }
    }
}

/// Categorize error to determine exit code
fn categorize_error(e: &anyhow::Error) -> u8 {
    for cause in e.chain() {
        if cause.downcast_ref::<FormatError>().is_some() {
            return ExitCodes::DATA_ERROR;
        }
        if let Some(err) = cause.downcast_ref::<TemplateError>() {
            return match err {
                TemplateError::Format(_) => ExitCodes::DATA_ERROR,
                TemplateError::Core(CoreError::InvalidPath(_)) => ExitCodes::INVALID_ARGS,
                TemplateError::InvalidSetting { .. } => ExitCodes::INVALID_ARGS,
                TemplateError::Settings(_) | TemplateError::Io(_) => ExitCodes::GENERAL_ERROR,
                _ => ExitCodes::TEMPLATE_ERROR,
            };
        }
    }

    let msg = e.to_string().to_lowercase();
    if msg.contains("argument") || msg.contains("not found") {
        ExitCodes::INVALID_ARGS
    } else {
        ExitCodes::GENERAL_ERROR
    }
}
