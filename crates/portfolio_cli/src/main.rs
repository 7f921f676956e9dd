//! Server entry point.
//!
//! # Responsibility
//! - Load configuration and logging before anything touches storage.
//! - Map startup failures to a non-zero exit code.

use log::error;
use portfolio_core::{core_version, init_logging};
use portfolio_web::{serve, WebConfig};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match WebConfig::load() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("portfolio: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = init_logging(config.log_level(), config.log_dir.as_deref()) {
        eprintln!("portfolio: {err}");
        return ExitCode::FAILURE;
    }
    log::info!("portfolio version={}", core_version());

    match serve(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=server_start module=cli status=error error={err}");
            ExitCode::FAILURE
        }
    }
}
