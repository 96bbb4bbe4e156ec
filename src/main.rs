use anyhow::Context;
use clap::Parser;
use colored::*;

use customizations::cli::Cli;
use customizations::config::Config;
use customizations::{commands, logging};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init(cli.debug);

    if cli.debug {
        eprintln!("{} {:?}", "DEBUG:".yellow(), cli);
    }

    let config = Config::load().context("Failed to load configuration")?;

    if let Err(e) = commands::run(cli, config).await {
        eprintln!("{} {}", "[X]".red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
