mod edgelist;
mod report;
mod routing;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::{Level, info};

use crate::{
    edgelist::load_graph,
    report::{QueryReport, render_all},
    routing::{WeightMode, dijkstra},
};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum QueryMode {
    Distance,
    Time,
    /// Two independent queries, one per weight.
    Both,
}

impl QueryMode {
    fn weight_modes(self) -> &'static [WeightMode] {
        match self {
            QueryMode::Distance => &[WeightMode::ByDistance],
            QueryMode::Time => &[WeightMode::ByTime],
            QueryMode::Both => &[WeightMode::ByDistance, WeightMode::ByTime],
        }
    }
}

/// Shortest paths by distance or time over an undirected edge list.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Edge list: `A B distance time` or `A B weight` per line (`.gz` accepted).
    graph: PathBuf,

    #[arg(long)]
    from: String,

    #[arg(long)]
    to: String,

    #[arg(long, value_enum, default_value_t = QueryMode::Distance)]
    mode: QueryMode,

    /// Print results as JSON.
    #[arg(long)]
    json: bool,

    /// More log output on stderr (-v info, -vv debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let now = std::time::Instant::now();
    let graph = load_graph(&args.graph)
        .with_context(|| format!("loading graph from {}", args.graph.display()))?;
    info!(
        nodes = graph.size(),
        edges = graph.edge_count(),
        elapsed = ?now.elapsed(),
        "graph loaded"
    );

    let outcomes = args
        .mode
        .weight_modes()
        .iter()
        .map(|&mode| dijkstra::solve(&graph, &args.from, &args.to, mode).map(|r| (mode, r)))
        .collect::<Result<Vec<_>, _>>()?;

    if args.json {
        let reports: Vec<_> = outcomes
            .iter()
            .map(|(mode, result)| QueryReport::new(result, &graph, *mode))
            .collect();
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        print!("{}", render_all(&outcomes, &graph));
    }

    Ok(())
}
