use clap::{Parser, Subcommand};
use petgraph::Direction;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "foundling")]
#[command(about = "Orphan-node detection for directed graphs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find every node with no remaining directed path to the root.
    Scan {
        /// JSON graph description (nodes, root, edges, deletedEdge).
        path: PathBuf,
    },
    /// Dump the node index mapping and the reversed adjacency structure.
    Graph {
        /// JSON graph description.
        path: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Scan { path } => cmd_scan(path)?,
        Commands::Graph { path } => cmd_graph(path)?,
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// scan
// ---------------------------------------------------------------------------

fn cmd_scan(path: &Path) -> anyhow::Result<()> {
    use atlas::GraphInput;
    use oracle::GraphOracle;

    let input = GraphInput::from_path(path)?;
    let outcome = atlas::build(&input)?;

    for warning in &outcome.warnings {
        eprintln!("warning: {}", warning);
    }

    let orphans = GraphOracle::find_orphans(&outcome.graph, outcome.root);

    println!("+------------------------------------------+");
    println!("| FOUNDLING SCAN                           |");
    println!("+------------------------------------------+");
    println!("| Nodes          : {:>22} |", outcome.graph.node_count());
    println!("| Edges          : {:>22} |", outcome.graph.graph.edge_count());
    println!("| Root           : {:>22} |", outcome.graph.name(outcome.root));
    println!("| Orphans        : {:>22} |", orphans.len());
    println!("+------------------------------------------+");

    if orphans.is_empty() {
        println!("No orphan nodes detected.");
    } else {
        println!("\nORPHAN NODES:");
        for name in &orphans {
            println!("  {name}");
        }
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// graph
// ---------------------------------------------------------------------------

/// Debug dump: index mapping plus the predecessor list of every node.
fn cmd_graph(path: &Path) -> anyhow::Result<()> {
    use atlas::GraphInput;

    let input = GraphInput::from_path(path)?;
    let outcome = atlas::build(&input)?;

    for warning in &outcome.warnings {
        eprintln!("warning: {}", warning);
    }

    let graph = &outcome.graph;

    println!("NODES (index -> id):");
    for idx in graph.graph.node_indices() {
        println!("  {:>4}  {}", idx.index(), graph.name(idx));
    }

    println!("\nPREDECESSORS (node <- nodes with an edge into it):");
    for idx in graph.graph.node_indices() {
        let preds: Vec<&str> = graph
            .graph
            .neighbors_directed(idx, Direction::Outgoing)
            .map(|p| graph.name(p))
            .collect();
        if preds.is_empty() {
            println!("  {} <- (none)", graph.name(idx));
        } else {
            println!("  {} <- {}", graph.name(idx), preds.join(" "));
        }
    }

    println!(
        "\nRoot: {} (index {})",
        graph.name(outcome.root),
        outcome.root.index()
    );

    Ok(())
}
