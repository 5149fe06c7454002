//! Roomroute library entry points.
//!
//! This crate parses a floor plan description and an optional weights file
//! into a directed, weighted location graph and answers cheapest-route
//! queries over it. Higher-level consumers (the CLI) should only depend on
//! the functions exported here instead of reimplementing behavior.

#![deny(warnings)]

pub mod config;
pub mod error;
pub mod graph;
pub mod path;
pub mod routing;
pub mod scan;
pub mod weights;

pub use config::{load_graph, load_weights};
pub use error::{Error, Result};
pub use graph::{build_graph, Edge, Graph, LocationId};
pub use path::shortest_path;
pub use routing::{plan_route, suggest_locations, RouteOutcome, RoutePlan};
pub use weights::{Weights, CONTAINMENT_COST, DEFAULT_COST};
