//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Path, Terminal, Weight};
use crate::graph::Graph;
use crate::planner::RouteAnswer;

/// Request for the distance of an exact route.
#[derive(Debug, Deserialize)]
pub struct RouteDistanceRequest {
    /// Comma-separated stops, e.g. "A,B,C"
    pub stops: String,
}

/// Response for a route distance query.
#[derive(Debug, Serialize)]
pub struct RouteDistanceResponse {
    /// Stops as parsed from the request
    pub stops: Vec<Terminal>,

    /// Total distance, or "NO SUCH ROUTE"
    pub distance: RouteAnswer,
}

/// Request naming a start and end terminal.
#[derive(Debug, Deserialize)]
pub struct ShortestRouteRequest {
    pub start: String,
    pub end: String,
}

/// Response for a shortest route query.
#[derive(Debug, Serialize)]
pub struct ShortestRouteResponse {
    pub start: Terminal,
    pub end: Terminal,

    /// Shortest distance, or "NO SUCH ROUTE"
    pub distance: RouteAnswer,

    /// The route itself, when there is one
    pub route: Option<Path>,
}

/// Request to list routes under a limit.
///
/// Exactly one of the limits must be given.
#[derive(Debug, Deserialize)]
pub struct RoutesRequest {
    pub start: String,
    pub end: String,

    /// Routes with between 1 and this many stops
    pub max_stops: Option<u64>,

    /// Routes with exactly this many stops
    pub exact_stops: Option<u64>,

    /// Routes with total distance strictly below this
    pub max_distance: Option<u64>,
}

/// Response listing routes.
#[derive(Debug, Serialize)]
pub struct RoutesResponse {
    /// Number of routes found
    pub count: usize,

    /// The routes, in a stable order
    pub routes: Vec<Path>,
}

/// A single outgoing connection.
#[derive(Debug, Serialize)]
pub struct ConnectionResult {
    pub to: Terminal,
    pub distance: Weight,
}

/// A terminal and its outgoing connections.
#[derive(Debug, Serialize)]
pub struct TerminalResult {
    pub name: Terminal,
    pub connections: Vec<ConnectionResult>,
}

/// Response describing the whole network.
#[derive(Debug, Serialize)]
pub struct NetworkResponse {
    /// Terminals in the order they were first seen
    pub terminals: Vec<TerminalResult>,

    /// Number of directed edges
    pub edges: usize,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

impl NetworkResponse {
    /// Create from a graph.
    pub fn from_graph(graph: &Graph) -> Self {
        let terminals = graph
            .terminals()
            .map(|name| TerminalResult {
                name: name.clone(),
                connections: graph
                    .neighbours(name)
                    .unwrap_or_default()
                    .into_iter()
                    .map(|(to, distance)| ConnectionResult { to, distance })
                    .collect(),
            })
            .collect();

        Self {
            terminals,
            edges: graph.edge_count(),
        }
    }
}
