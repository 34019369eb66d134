//! vtgen - admin route table generator for MFD projects.

mod cli;
mod config;
mod logger;
mod mfd;
mod naming;
mod routes;
mod utils;

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::GenConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose());

    // `init` runs before any config exists
    if let Commands::Init { dry } = &cli.command {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;
        return cli::init::init_config(&cwd, *dry);
    }

    let config = GenConfig::load(&cli)?;

    match &cli.command {
        Commands::Init { .. } => Ok(()),
        Commands::Routes { .. } => cli::routes::generate_routes(&config).map(|_| ()),
        Commands::Query { args } => cli::query::run_query(args, &config),
        Commands::Check { .. } => cli::check::check_project(&config),
    }
}
