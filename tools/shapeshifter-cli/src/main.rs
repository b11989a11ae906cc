//! Shapeshifter CLI - inspect and edit wavetable module dumps
//!
//! # Commands
//!
//! - `shapeshifter banks` - List bank names in a dump
//! - `shapeshifter render` - Draw one wave as a PNG
//! - `shapeshifter play` - Export one wave as a looping WAV preview
//! - `shapeshifter import` - Replace one wave with samples from a WAV file
//! - `shapeshifter rename` - Change a bank name
//! - `shapeshifter serve` - Browse banks, waves and previews in a web browser
//!
//! # Usage
//!
//! ```bash
//! shapeshifter banks dump.bin
//! shapeshifter render dump.bin --bank 0 --wave 6 -o wave.png
//! shapeshifter import dump.bin --bank 3 --wave 0 saw.wav -o edited.bin
//! shapeshifter serve dump.bin --bind 127.0.0.1:8080
//! ```

mod banks;
mod config;
mod dump;
mod import;
mod play;
mod render;
mod rename;
mod serve;
mod viewer;

use anyhow::Result;
use clap::{Parser, Subcommand};

/// Shapeshifter CLI - inspect and edit wavetable module dumps
#[derive(Parser)]
#[command(name = "shapeshifter")]
#[command(about = "Inspect and edit Shapeshifter wavetable dumps")]
#[command(version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the bank names in a dump
    Banks(banks::BanksArgs),

    /// Draw one wave as a PNG line plot
    Render(render::RenderArgs),

    /// Export one wave as a looping WAV preview
    Play(play::PlayArgs),

    /// Replace one wave with samples from a WAV file
    Import(import::ImportArgs),

    /// Change a bank name
    Rename(rename::RenameArgs),

    /// Serve a web viewer for a dump
    Serve(serve::ServeArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    // Logs go to stderr so listings on stdout stay clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Banks(args) => banks::execute(args),
        Commands::Render(args) => render::execute(args),
        Commands::Play(args) => play::execute(args),
        Commands::Import(args) => import::execute(args),
        Commands::Rename(args) => rename::execute(args),
        Commands::Serve(args) => serve::execute(args),
    }
}
