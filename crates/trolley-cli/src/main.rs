mod plan_cmd;
mod sample_cmd;
mod validate_cmd;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "trolley", about = "Grocery shopping route planner")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write sample data files (stores.json, items.json) to a directory
    Sample {
        /// Output directory
        #[arg(long, default_value = ".")]
        out: PathBuf,
        /// RNG seed for reproducible data
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Check an entity draft file against the model invariants
    Validate {
        /// What the file contains
        #[arg(long, value_enum)]
        kind: EntityKind,
        /// JSON file with a single entity draft
        file: PathBuf,
    },
    /// Plan a shopping route from a store file and an items file
    Plan {
        /// JSON file with one store
        #[arg(long)]
        store: PathBuf,
        /// JSON file with an array of items
        #[arg(long)]
        items: PathBuf,
        /// Planner strategy (default: linear)
        #[arg(long)]
        planner: Option<String>,
        /// Print the route as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum EntityKind {
    Item,
    Store,
    List,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Sample { out, seed } => sample_cmd::run(&out, seed),
        Commands::Validate { kind, file } => validate_cmd::run(kind, &file),
        Commands::Plan {
            store,
            items,
            planner,
            json,
        } => plan_cmd::run(&store, &items, planner.as_deref(), json),
    }
}
