//! Command-line interface for the opsplan execution board.

mod args;
mod cli;
mod renderer;

use anyhow::Result;
use clap::Parser;
use log::debug;
use opsplan_core::BoardBuilder;

use args::{Args, Commands};
use cli::Cli;
use renderer::TerminalRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    match &args.database_file {
        Some(path) => debug!("Using database file {}", path.display()),
        None => debug!("No database file given, using the XDG default"),
    }

    let board = BoardBuilder::new()
        .with_database_path(args.database_file)
        .build()
        .await?;
    let renderer = TerminalRenderer::new(!args.no_color);
    let cli = Cli::new(board, renderer);

    match args.command {
        Some(Commands::Plan { command }) => cli.handle_plan_command(command).await,
        Some(Commands::Task { command }) => cli.handle_task_command(command).await,
        None => cli.list_plans_default().await,
    }
}
