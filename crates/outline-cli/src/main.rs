//! Outline CLI Application
//!
//! Command-line interface for the Outline requirements-definition wizard.

mod args;
mod cli;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use outline_core::WizardBuilder;
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args { database_file, no_color, command } = Args::parse();

    let wizard = WizardBuilder::new()
        .with_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize wizard")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Outline started");

    match command {
        Some(Task { command }) => {
            Cli::new(wizard, renderer)
                .handle_task_command(command)
                .await
        }
        Some(Step { command }) => {
            Cli::new(wizard, renderer)
                .handle_step_command(command)
                .await
        }
        None => Cli::new(wizard, renderer).list_tasks(""),
    }
}
