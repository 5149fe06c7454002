use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use crate::graph::{Graph, LocationId};

/// Find the cheapest path from `start` to `goal` using Dijkstra's algorithm.
///
/// Returns `None` when the goal cannot be reached. Ties between equal-cost
/// frontier locations are broken by identifier, so results are deterministic
/// for a fixed floor plan. A location with no outgoing edges simply has an
/// empty neighbour list; it is not an error to search from one.
pub fn shortest_path(graph: &Graph, start: LocationId, goal: LocationId) -> Option<Vec<LocationId>> {
    if start == goal {
        return Some(vec![start]);
    }

    let mut costs: HashMap<LocationId, u64> = HashMap::new();
    let mut parents: HashMap<LocationId, Option<LocationId>> = HashMap::new();
    let mut queue = BinaryHeap::new();

    costs.insert(start, 0);
    parents.insert(start, None);
    queue.push(QueueEntry {
        location: start,
        cost: 0,
    });

    while let Some(entry) = queue.pop() {
        let best = match costs.get(&entry.location) {
            Some(&cost) if cost < entry.cost => continue, // stale entry
            Some(&cost) => cost,
            None => continue,
        };

        if entry.location == goal {
            return Some(reconstruct_path(&parents, start, goal));
        }

        for edge in graph.neighbours(entry.location) {
            let candidate = best.saturating_add(edge.cost);
            if candidate < *costs.get(&edge.target).unwrap_or(&u64::MAX) {
                costs.insert(edge.target, candidate);
                parents.insert(edge.target, Some(entry.location));
                queue.push(QueueEntry {
                    location: edge.target,
                    cost: candidate,
                });
            }
        }
    }

    None
}

fn reconstruct_path(
    parents: &HashMap<LocationId, Option<LocationId>>,
    start: LocationId,
    goal: LocationId,
) -> Vec<LocationId> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(location) = current {
        path.push(location);
        if location == start {
            break;
        }
        current = parents.get(&location).copied().flatten();
    }
    path.reverse();
    path
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry {
    location: LocationId,
    cost: u64,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.location.cmp(&self.location))
    }
}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
