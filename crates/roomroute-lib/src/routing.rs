//! Name-level route planning over a built graph.

use serde::Serialize;
use tracing::debug;

use crate::graph::Graph;
use crate::path::shortest_path;

/// Similarity floor below which a location name is not worth suggesting.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Planned route returned by the library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutePlan {
    pub start: String,
    pub goal: String,
    pub steps: Vec<String>,
    pub total_cost: u64,
}

impl RoutePlan {
    /// Number of moves in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Outcome of a route query.
///
/// `NoRoute` is a successful computation with a negative answer, covering
/// both an unreachable goal and a name the floor plan has never seen.
/// Configuration problems never end up here; they abort construction as
/// [`crate::Error`] long before a query runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "outcome")]
pub enum RouteOutcome {
    Found(RoutePlan),
    NoRoute { start: String, goal: String },
}

/// Resolve the cheapest route from `start` to the location or item `goal`.
pub fn plan_route(graph: &Graph, start: &str, goal: &str) -> RouteOutcome {
    let no_route = || RouteOutcome::NoRoute {
        start: start.to_string(),
        goal: goal.to_string(),
    };

    let Some(start_id) = graph.location_id(start) else {
        debug!("unknown start location: {}", start);
        return no_route();
    };
    let Some(goal_id) = graph.location_id(goal) else {
        debug!("unknown goal: {}", goal);
        return no_route();
    };
    let Some(route) = shortest_path(graph, start_id, goal_id) else {
        debug!("{} is unreachable from {}", goal, start);
        return no_route();
    };

    let total_cost = route
        .windows(2)
        .filter_map(|pair| graph.edge_cost(pair[0], pair[1]))
        .sum();
    let steps = route
        .iter()
        .filter_map(|&id| graph.location_name(id))
        .map(str::to_string)
        .collect();

    RouteOutcome::Found(RoutePlan {
        start: start.to_string(),
        goal: goal.to_string(),
        steps,
        total_cost,
    })
}

/// Suggest known locations with names similar to `name`, best match first.
pub fn suggest_locations(graph: &Graph, name: &str, limit: usize) -> Vec<String> {
    let wanted = name.to_lowercase();
    let mut scored: Vec<(f64, &str)> = graph
        .location_names()
        .map(|candidate| (strsim::jaro_winkler(&wanted, &candidate.to_lowercase()), candidate))
        .filter(|&(score, _)| score >= SUGGESTION_THRESHOLD)
        .collect();
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    scored
        .into_iter()
        .take(limit)
        .map(|(_, candidate)| candidate.to_string())
        .collect()
}
