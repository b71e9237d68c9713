//! CLI frontend for the Zhouyi diviner.

mod commands;
mod render;

use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "zhouyi",
    about = "Zhouyi — an I Ching coin-casting diviner",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Cast a hexagram and ask the oracle for an interpretation
    Cast {
        /// The question to ponder (skips the interactive prompt)
        #[arg(short, long)]
        question: Option<String>,

        /// RNG seed for a reproducible cast
        #[arg(short, long)]
        seed: Option<u64>,

        /// Model variant to query: flash or pro (default: saved preference)
        #[arg(short, long)]
        model: Option<String>,

        /// Cast all six lines without waiting for Enter between throws
        #[arg(short, long)]
        auto: bool,

        /// Stop after resolving the hexagrams; do not call the oracle
        #[arg(long)]
        no_oracle: bool,
    },

    /// List all 64 hexagrams
    List,

    /// Show one hexagram by its King Wen number
    Show {
        /// King Wen number (1-64)
        number: u8,
    },

    /// Print or set the preferred model variant
    Model {
        /// New variant: flash or pro (omit to print the current choice)
        variant: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Cast {
            question,
            seed,
            model,
            auto,
            no_oracle,
        } => {
            commands::cast::run(commands::cast::CastArgs {
                question,
                seed,
                model,
                auto,
                no_oracle,
            })
            .await
        }
        Commands::List => commands::list::run(),
        Commands::Show { number } => commands::show::run(number),
        Commands::Model { variant } => commands::model::run(variant.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
