use std::collections::HashMap;

use tracing::debug;

use crate::error::{Error, Result};
use crate::scan::word_tokens;
use crate::weights::{Weights, CONTAINMENT_COST};

/// Index of a location within a [`Graph`].
///
/// Identifiers are assigned in the order locations first appear in the
/// floor plan, so a fixed input always produces the same numbering.
pub type LocationId = usize;

/// Directed edge within the location graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub target: LocationId,
    pub cost: u64,
}

/// Directed, weighted graph over named locations.
///
/// Built once from configuration and read-only afterwards; queries never
/// mutate it, so it can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    names: Vec<String>,
    ids: HashMap<String, LocationId>,
    adjacency: Vec<Vec<Edge>>,
}

impl Graph {
    /// Lookup a location identifier by its case-sensitive name.
    pub fn location_id(&self, name: &str) -> Option<LocationId> {
        self.ids.get(name).copied()
    }

    /// Lookup a location name by identifier.
    pub fn location_name(&self, id: LocationId) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    /// Iterate over all known location names in first-seen order.
    pub fn location_names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Number of known locations.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Return the outgoing edges for a given location.
    pub fn neighbours(&self, location: LocationId) -> &[Edge] {
        self.adjacency
            .get(location)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Cost of the direct edge from `from` to `to`, if one exists.
    pub fn edge_cost(&self, from: LocationId, to: LocationId) -> Option<u64> {
        self.neighbours(from)
            .iter()
            .find(|edge| edge.target == to)
            .map(|edge| edge.cost)
    }

    fn intern(&mut self, name: &str) -> LocationId {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        let id = self.names.len();
        self.names.push(name.to_string());
        self.ids.insert(name.to_string(), id);
        self.adjacency.push(Vec::new());
        id
    }

    fn insert_edge(&mut self, from: LocationId, to: LocationId, cost: u64) {
        let edges = &mut self.adjacency[from];
        if let Some(existing) = edges.iter_mut().find(|edge| edge.target == to) {
            existing.cost = cost;
            return;
        }
        edges.push(Edge { target: to, cost });
    }
}

/// Build the location graph from floor plan lines.
///
/// Each line chains locations from outermost to the thing they hold, e.g.
/// `Stairs : Hallway : Kitchen keys`. Consecutive pairs become directed
/// edges priced via `weights`, except the final pair, which is the
/// containment edge and always costs zero: once you are at the holding
/// location, collecting what it contains is free. A line that restates an
/// edge overwrites its cost. Blank lines are skipped; a line with a single
/// name registers the location without adding edges; a non-blank line with
/// no names at all fails with [`Error::MalformedPlanLine`].
pub fn build_graph<I, S>(lines: I, weights: &Weights) -> Result<Graph>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut graph = Graph::default();
    for line in lines {
        let line = line.as_ref();
        if line.trim().is_empty() {
            continue;
        }
        let tokens = word_tokens(line);
        if tokens.is_empty() {
            return Err(Error::MalformedPlanLine {
                line: line.trim().to_string(),
            });
        }
        if tokens.len() == 1 {
            graph.intern(tokens[0]);
            continue;
        }
        for pair in 0..tokens.len() - 1 {
            let (source, destination) = (tokens[pair], tokens[pair + 1]);
            let cost = if pair + 2 == tokens.len() {
                CONTAINMENT_COST
            } else {
                weights.cost(source, destination)?
            };
            let from = graph.intern(source);
            let to = graph.intern(destination);
            graph.insert_edge(from, to, cost);
        }
    }
    debug!("built floor plan graph with {} locations", graph.len());
    Ok(graph)
}
