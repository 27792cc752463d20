//! CLI entry point for the `gwalk` command-line tool.

use std::process;

use clap::{Parser, Subcommand};

use graphwalk::cli::commands::{self, SearchKind, TraversalKind};
use graphwalk::GraphError;

#[derive(Parser)]
#[command(
    name = "gwalk",
    about = "graphwalk CLI — traverse and search a directed graph"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    /// Comma-separated directed edges, e.g. "5-3,6-3,7-1" (default: sample graph; ignored by demo)
    #[arg(long, global = true)]
    edges: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the sample graph and run every traversal and search on it
    Demo,
    /// Print the vertex-to-neighbors mapping
    Show,
    /// Breadth-first traversal
    Bft {
        /// Starting vertex
        start: String,
    },
    /// Iterative depth-first traversal
    Dft {
        /// Starting vertex
        start: String,
    },
    /// Recursive depth-first traversal
    DftRecursive {
        /// Starting vertex
        start: String,
    },
    /// Breadth-first (shortest) path search
    Bfs {
        /// Starting vertex
        start: String,
        /// Destination vertex
        destination: String,
    },
    /// Depth-first path search
    Dfs {
        /// Starting vertex
        start: String,
        /// Destination vertex
        destination: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let graph = match commands::load_graph(cli.edges.as_deref()) {
        Some(graph) => graph,
        None => {
            eprintln!("Invalid edge list: {}", cli.edges.unwrap_or_default());
            process::exit(3);
        }
    };
    log::debug!(
        "loaded graph with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    let result = match cli.command {
        Commands::Demo => {
            if cli.edges.is_some() {
                log::warn!("demo always runs on the sample graph; --edges is ignored");
            }
            commands::cmd_demo(json)
        }
        Commands::Show => commands::cmd_show(&graph, json),
        Commands::Bft { start } => commands::cmd_traverse(&graph, TraversalKind::Bft, &start, json),
        Commands::Dft { start } => commands::cmd_traverse(&graph, TraversalKind::Dft, &start, json),
        Commands::DftRecursive { start } => {
            commands::cmd_traverse(&graph, TraversalKind::DftRecursive, &start, json)
        }
        Commands::Bfs { start, destination } => {
            commands::cmd_search(&graph, SearchKind::Bfs, &start, &destination, json)
        }
        Commands::Dfs { start, destination } => {
            commands::cmd_search(&graph, SearchKind::Dfs, &start, &destination, json)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        let code = match &e {
            GraphError::UnknownVertex(_) => 4,
            GraphError::NotFound { .. } => 5,
        };
        process::exit(code);
    }
}
