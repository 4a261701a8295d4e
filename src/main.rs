use clap::{Parser, Subcommand};
use flight_graph::config::load_config;
use flight_graph::db::client::ArangoStore;
use flight_graph::db::ingestion::run_import;
use flight_graph::logger::{self, init_logger, StdoutLogger};
use std::path::Path;

#[derive(Parser)]
#[command(name = "flight-graph")]
#[command(about = "Flight Graph CSV Import Engine", long_about = None)]
struct Cli {
    /// Path to the JSON configuration file
    #[arg(long, default_value = "config.json")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Import airport and flight CSV files into the graph store
    Import {
        /// Node CSV path (overrides the configured path)
        #[arg(long)]
        nodes: Option<String>,

        /// Edge CSV path (overrides the configured path)
        #[arg(long)]
        edges: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logger
    init_logger(StdoutLogger);

    let cli = Cli::parse();

    // Load config
    let config = load_config(Path::new(&cli.config))?;

    // Connect to the store
    let store = ArangoStore::new(&config.store);

    match cli.command {
        Commands::Import { nodes, edges } => {
            let nodes_path = nodes.unwrap_or_else(|| config.import.nodes_path.clone());
            let edges_path = edges.unwrap_or_else(|| config.import.edges_path.clone());

            let summary = run_import(
                &store,
                &config.graph,
                Path::new(&nodes_path),
                Path::new(&edges_path),
            )
            .await?;

            logger::info(&format!(
                "Graph successfully set up: {} nodes, {} edges inserted, {} edges skipped",
                summary.nodes_inserted, summary.edges_inserted, summary.edges_skipped
            ));
        }
    }

    Ok(())
}
