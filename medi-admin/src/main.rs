//! medi-admin: developer tool over the credential and payroll policies
//!
//! Loads `.env`, sets up logging, then runs one command.

mod commands;
mod config;
mod logger;
mod seed;

use clap::Parser;
use commands::Cli;
use config::AdminConfig;
use shared::AppError;
use shared::util::now_millis;

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    let config = AdminConfig::from_env();
    logger::init_logger(&config)?;

    tracing::debug!(
        command = cli.command.name(),
        environment = %config.environment,
        "Running command"
    );

    match commands::execute(cli.command, &config, now_millis()) {
        Ok(output) => {
            println!("{output}");
            Ok(())
        }
        Err(err) => {
            if let Some(app) = err.downcast_ref::<AppError>() {
                tracing::error!(
                    code = app.code.code(),
                    category = app.code.category().name(),
                    details = ?app.details,
                    "{}",
                    app.message
                );
            }
            Err(err)
        }
    }
}
