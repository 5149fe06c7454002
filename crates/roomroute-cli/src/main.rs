use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use roomroute_cli::output;
use roomroute_lib::{
    config::{DEFAULT_PLAN_FILE, DEFAULT_WEIGHTS_FILE},
    load_graph, plan_route, suggest_locations, Graph, RouteOutcome,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Floor plan routing utilities")]
struct Cli {
    /// Path to the floor plan file.
    #[arg(long, default_value = DEFAULT_PLAN_FILE)]
    plan: PathBuf,

    /// Path to the weights file. When omitted, `weights.config` is used if
    /// it exists in the working directory; otherwise every move costs the
    /// same.
    #[arg(long)]
    weights: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(ValueEnum, Clone, Copy, Debug, Eq, PartialEq)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute the cheapest route from a starting location to an item.
    Route {
        /// Starting location name.
        #[arg(long = "from")]
        from: String,
        /// Item or location to reach.
        #[arg(long = "to")]
        to: String,
    },
    /// List every location and item the floor plan knows about.
    Locations,
}

fn main() -> Result<ExitCode> {
    init_tracing();
    let cli = Cli::parse();

    let graph = load_floor_plan(&cli)?;
    match cli.command {
        Command::Route { ref from, ref to } => handle_route(&graph, from, to, cli.format),
        Command::Locations => handle_locations(&graph, cli.format),
    }
}

fn load_floor_plan(cli: &Cli) -> Result<Graph> {
    let weights_path = cli.weights.clone().or_else(default_weights_path);
    load_graph(&cli.plan, weights_path.as_deref())
        .with_context(|| format!("failed to load floor plan from {}", cli.plan.display()))
}

/// Use `weights.config` from the working directory when it exists.
fn default_weights_path() -> Option<PathBuf> {
    let path = PathBuf::from(DEFAULT_WEIGHTS_FILE);
    path.exists().then_some(path)
}

fn handle_route(graph: &Graph, from: &str, to: &str, format: OutputFormat) -> Result<ExitCode> {
    match plan_route(graph, from, to) {
        RouteOutcome::Found(plan) => {
            match format {
                OutputFormat::Text => println!("{}", output::render_directions(&plan)),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&plan)?),
            }
            Ok(ExitCode::SUCCESS)
        }
        outcome @ RouteOutcome::NoRoute { .. } => {
            match format {
                OutputFormat::Text => {
                    let suggestions = suggest_locations(graph, to, 3);
                    eprintln!("{}", output::render_no_route(from, to, &suggestions));
                }
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&outcome)?),
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

fn handle_locations(graph: &Graph, format: OutputFormat) -> Result<ExitCode> {
    match format {
        OutputFormat::Text => {
            for name in graph.location_names() {
                println!("- {}", name);
            }
        }
        OutputFormat::Json => {
            let names: Vec<&str> = graph.location_names().collect();
            println!("{}", serde_json::to_string_pretty(&names)?);
        }
    }
    Ok(ExitCode::SUCCESS)
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
