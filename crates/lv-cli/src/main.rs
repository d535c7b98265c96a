use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use lv_cli::commands::{correlate, notifications, texts, timeline, util};
use lv_cli::{Cli, Commands, Config};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with verbose flag support
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let config = Config::load_from(cli.config.as_deref()).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");
    if config.typing_timeout_ms < 0 {
        anyhow::bail!(
            "typing_timeout_ms must not be negative, got {}",
            config.typing_timeout_ms
        );
    }

    let mut stdout = std::io::stdout().lock();

    match &cli.command {
        Some(Commands::Timeline { files, kind, json }) => {
            let data = util::load_logs(files)?;
            timeline::run(&mut stdout, &data, *kind, *json, config.utc)?;
        }
        Some(Commands::Correlate {
            files,
            location,
            at,
            json,
        }) => {
            let data = util::load_logs(files)?;
            let selection = match (location, at) {
                (Some(index), _) => correlate::Selection::Index(*index),
                (None, Some(timestamp)) => correlate::Selection::At(*timestamp),
                (None, None) => correlate::Selection::All,
            };
            correlate::run(&mut stdout, &data, selection, *json, config.utc)?;
        }
        Some(Commands::Texts { files, json }) => {
            let data = util::load_logs(files)?;
            texts::run(
                &mut stdout,
                &data,
                &config.segment_config(),
                *json,
                config.utc,
            )?;
        }
        Some(Commands::Notifications { files, json }) => {
            let data = util::load_logs(files)?;
            notifications::run(&mut stdout, &data, *json, config.utc)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            writeln!(stdout)?;
        }
    }

    Ok(())
}
