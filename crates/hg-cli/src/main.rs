//! CLI frontend for the Hausgeist interactive-fiction engine.

mod commands;
mod demo;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "hausgeist",
    about = "Hausgeist — a small interactive-fiction engine",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the built-in demo house
    Play {
        /// CSV vocabulary file (one raw,canonical pair per line) replacing
        /// the built-in one
        #[arg(short, long)]
        aliases: Option<PathBuf>,

        /// Print term-resolution traces with every turn
        #[arg(short, long)]
        trace: bool,
    },

    /// Dump the demo world's containment tree, hidden entities included
    Tree,

    /// List the vocabulary the parser understands
    Vocab {
        /// CSV vocabulary file (one raw,canonical pair per line) replacing
        /// the built-in one
        #[arg(short, long)]
        aliases: Option<PathBuf>,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play { aliases, trace } => commands::play::run(aliases.as_deref(), trace),
        Commands::Tree => commands::tree::run(),
        Commands::Vocab { aliases } => commands::vocab::run(aliases.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
