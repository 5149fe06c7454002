//! Configuration file loading.
//!
//! The floor plan file chains locations from outermost to the item they
//! hold, one chain per line, e.g. `Stairs : Hallway : Kitchen keys`. The
//! optional weights file prices individual moves; without it every move
//! costs the same.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::graph::{build_graph, Graph};
use crate::weights::Weights;

/// Default floor plan file name, resolved in the working directory.
pub const DEFAULT_PLAN_FILE: &str = "input.config";

/// Default weights file name, used when present alongside the floor plan.
pub const DEFAULT_WEIGHTS_FILE: &str = "weights.config";

/// Load and parse a weights file.
pub fn load_weights(path: &Path) -> Result<Weights> {
    let contents = fs::read_to_string(path)?;
    let weights = Weights::parse(contents.lines())?;
    debug!("loaded weights from {}", path.display());
    Ok(weights)
}

/// Load a floor plan file and build the location graph.
///
/// When `weights_path` is `None`, every move costs the uniform default.
pub fn load_graph(plan_path: &Path, weights_path: Option<&Path>) -> Result<Graph> {
    let weights = match weights_path {
        Some(path) => load_weights(path)?,
        None => Weights::Uniform,
    };
    let contents = fs::read_to_string(plan_path)?;
    let graph = build_graph(contents.lines(), &weights)?;
    debug!(
        "loaded floor plan from {} ({} locations)",
        plan_path.display(),
        graph.len()
    );
    Ok(graph)
}
