use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, error::ErrorKind};
use log::{debug, error};
use plane_reservations::{Args, Config, LogSink, ReservationError, RunOutcome, run};
use std::io::Write;

fn main() -> Result<()> {
    let config = match Config::from_args(Args::parse()) {
        Ok(config) => config,
        // Exits with usage and status 2
        Err(e) => Args::command().error(ErrorKind::ValueValidation, e).exit(),
    };

    // Initialize logger - RUST_LOG wins, otherwise INFO (DEBUG with --verbose)
    let level = if config.verbose { "debug" } else { "info" };
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .try_init();
    debug!("Configuration: {config:?}");

    match reserve_and_group(&config) {
        Ok(outcome) => {
            debug!("Finished with {} groups", outcome.groups);
            Ok(())
        }
        Err(e) => {
            error!("Error: {e:#}");

            for cause in e.chain() {
                if let Some(err) = cause.downcast_ref::<ReservationError>()
                    && err.is_token_error()
                {
                    error!(
                        "Hint: reservations look like '1F 2A 1G', with rows 1..={} and seats A-K (no I).",
                        config.number_rows
                    );
                    break;
                }
            }
            let _ = std::io::stderr().flush();
            std::process::exit(1);
        }
    }
}

fn reserve_and_group(config: &Config) -> Result<RunOutcome> {
    let mut sink = LogSink;
    run(config, &mut sink).context("Failed to process reservations")
}
