use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

use catascan::adapter::inbound::cli::command::{Cli, ColorChoice, Commands};
use catascan::adapter::inbound::cli::output::{self, OutputConfig};
use catascan::adapter::inbound::cli::{login, nearby, paths, scan};
use catascan::infrastructure::config::settings::Config;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {}
    }
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose));

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            output::error(&format!("{e:#}"));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::load_or_default(paths::default_config())
            .context("failed to load ~/.catascan/config.toml")?,
    };
    config.logging.with_verbosity(cli.verbose).init();
    debug!(?config, "Configuration loaded");

    let code = tokio::select! {
        result = dispatch(&cli.command, &config) => result?,
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupted");
            ExitCode::from(130)
        }
    };
    Ok(code)
}

async fn dispatch(command: &Commands, config: &Config) -> catascan::error::Result<ExitCode> {
    match command {
        Commands::Nearby(args) => nearby::execute(args, config).await,
        Commands::Scan(args) => scan::execute(args, config).await,
        Commands::Login(args) => login::login(args, config).map(|()| ExitCode::SUCCESS),
        Commands::Logout => login::logout(config).map(|()| ExitCode::SUCCESS),
    }
}
