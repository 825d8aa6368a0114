//! Atelier CLI binary.
//!
//! This binary provides command-line access to the render studio:
//! - Launch the interactive terminal studio
//! - Run one-shot image or video renders to a file

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, launch_tui, run_render};

    let cli = Cli::parse();

    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Tui => {
            launch_tui().await?;
        }
        Commands::Render(args) => {
            run_render(args).await?;
        }
    }

    Ok(())
}
