use std::path::Path;

use clap::Parser;
use vroum_art::{Config, Identity};

mod cli;
mod commands;
mod error;

use crate::cli::Cli;
use crate::commands::Commands;
use crate::error::AppError;

fn load_config(path: Option<&Path>) -> Result<Config, AppError> {
    let config = match path {
        Some(path) => Config::from_file(path)
            .map_err(|e| AppError::ConfigLoadError(e.to_string()))?,
        None => Config::default(),
    };
    Ok(config.with_env_overrides())
}

fn parse_identity(raw: &str) -> Result<Identity, AppError> {
    raw.parse()
        .map_err(|_| AppError::InvalidIdentity(raw.to_owned()))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Cli::parse();
    let config = load_config(args.config.as_deref())?;

    match &args.command {
        Commands::Nft(nft) => nft.run(&config)?,
        Commands::Generative(generative) => generative.run(&config)?,
        Commands::Regenerate(regenerate) => regenerate.run(&config)?,
        Commands::Decode(decode) => decode.run()?,
        Commands::List(list) => list.run(&config)?,
    }

    Ok(())
}
