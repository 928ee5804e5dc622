use std::fs;
use std::path::PathBuf;

use clap::Parser;
use eyre::{Result, WrapErr};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod config;
mod display;
mod graph;
mod matrix;

use display::CaseRecord;
use graph::{johnson, Graph, GraphError};
use matrix::{parse_cases, WeightMatrix};

#[derive(Parser)]
#[command(name = "johnson-apsp")]
#[command(about = "All-pairs shortest paths via Johnson's algorithm", long_about = None)]
struct Cli {
    /// Input file with one or more adjacency-matrix cases
    #[arg(default_value = config::DEFAULT_INPUT)]
    input: PathBuf,

    /// Emit one JSON record per case instead of rendered matrices
    #[arg(long)]
    json: bool,
}

fn run_case(number: usize, case: &WeightMatrix, json: bool) -> Result<()> {
    let graph = Graph::from_matrix(&case.rows)?;
    match johnson(&graph) {
        Ok(distances) => {
            if json {
                display::emit_json(&CaseRecord::solved(number, &distances));
            } else {
                println!("Case {}: ", number);
                print!("{}", display::render_matrix(&distances));
                println!();
            }
        }
        Err(GraphError::NegativeCycle) => {
            info!(case = number, "negative-weight cycle detected");
            if json {
                display::emit_json(&CaseRecord::negative_cycle(number, case.size));
            } else {
                println!("The graph contains a negative-weight cycle.");
            }
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

fn main() -> Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::WARN)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();
    let text = fs::read_to_string(&cli.input)
        .wrap_err_with(|| format!("failed to read {}", cli.input.display()))?;

    let cases = parse_cases(&text)?;
    info!(cases = cases.len(), "parsed input");

    for (idx, case) in cases.iter().enumerate() {
        run_case(idx + 1, case, cli.json)?;
    }
    Ok(())
}
