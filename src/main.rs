use anyhow::Result;
use clap::Parser;

mod cache;
mod cli;
mod config;
mod generator;
mod llm;
mod patcher;
mod utils;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Args::parse();
    let (config, command) = args.into_parts();

    match command {
        cli::Command::Generate { components } => {
            generator::workflow::launch(&config, &components).await?;
        }
        cli::Command::AddBaseStyles => patcher::base_styles::run(&config)?,
        cli::Command::FixHosts => patcher::hosts::run(&config)?,
        cli::Command::FixImports { .. } => patcher::imports::run(&config)?,
    }

    Ok(())
}
