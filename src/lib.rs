pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

use clap::Parser;
use cli::Cli;
use commands::AppContext;
use config::AppSettings;
use models::error::SError;
use std::process::ExitCode;
use tokio::runtime::Runtime;
use tracing::{debug, error};

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => AppSettings::load_from(path),
        None => AppSettings::load(),
    };
    let mut settings = match loaded {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error while loading configuration: {e}");
            return ExitCode::FAILURE;
        }
    };
    if cli.site.is_some() {
        settings.site = cli.site.clone();
    }

    let _guard = utils::logging::init(&settings.log_dir, &settings.log_level);
    debug!(?settings, "configuration loaded");

    let runtime = match build_runtime() {
        Ok(rt) => rt,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let ctx = AppContext::new(settings);
    match runtime.block_on(commands::route(&ctx, cli.command)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Form events are handled one at a time; a single-threaded runtime is enough.
pub fn build_runtime() -> Result<Runtime, SError> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| SError::AsyncRuntimeError(e.to_string()))
}
