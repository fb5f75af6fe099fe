//! AutoLaunch - per-user auto-launch items
//!
//! Main entry point for the AutoLaunch CLI.

mod adapters;
mod cli;
mod cmd_launch;

use std::path::Path;

use clap::Parser;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::Cli;

/// Initialize tracing with console output and, optionally, daily log files.
fn init_tracing(log_dir: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let console = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let file = match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let file_appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("autolaunch")
                .filename_suffix("log")
                .max_log_files(7)
                .build(dir)?;

            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            // The guard flushes on drop; keep it for the life of the process.
            static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
                std::sync::OnceLock::new();
            let _ = GUARD.set(guard);

            Some(fmt::layer().with_writer(non_blocking).with_ansi(false))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console)
        .with(file)
        .init();

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    init_tracing(cli.log_dir.as_deref())?;

    let config = adapters::load_config(cli.config.as_deref())?;

    cmd_launch::handle_command(cli.command, cli.home.as_deref(), &config)
}
