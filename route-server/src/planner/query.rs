//! Route queries over a built network.
//!
//! Translates journey questions ("how far is this route", "how many routes
//! with at most three stops") into graph searches, and turns an impossible
//! route into a [`RouteAnswer::NoSuchRoute`] answer.

use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::connections::{Connection, ConnectionError, parse_edge_list};
use crate::domain::{GraphError, Path, Terminal};
use crate::graph::Graph;

use super::answer::RouteAnswer;

/// Error building a planner.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlannerError {
    /// The edge list could not be parsed
    #[error(transparent)]
    Connections(#[from] ConnectionError),

    /// The connections do not form a valid network
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Answers route queries over a fixed network.
///
/// The network is built once in [`RoutePlanner::new`] and never changes
/// afterwards, so a planner can be shared freely between readers.
#[derive(Debug, Clone)]
pub struct RoutePlanner {
    graph: Graph,
}

impl RoutePlanner {
    /// Build a planner from connections, inserted in order.
    ///
    /// Fails on the first connection that repeats an existing edge.
    pub fn new<I>(connections: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = Connection>,
    {
        let mut graph = Graph::new();
        for connection in connections {
            graph.add_edge(&connection.origin, &connection.destination, connection.weight)?;
        }

        debug!(
            terminals = graph.node_count(),
            edges = graph.edge_count(),
            "Built route network"
        );
        Ok(Self { graph })
    }

    /// Build a planner from an edge list such as `"AB5, BC4"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use route_server::planner::{RouteAnswer, RoutePlanner};
    /// use route_server::domain::Terminal;
    ///
    /// let planner = RoutePlanner::from_edge_list("AB5, BC4").unwrap();
    /// let stops: Vec<Terminal> = ["A", "B", "C"]
    ///     .iter()
    ///     .map(|s| Terminal::parse(s).unwrap())
    ///     .collect();
    /// assert_eq!(planner.route_distance(&stops), RouteAnswer::Distance(9));
    /// ```
    pub fn from_edge_list(text: &str) -> Result<Self, PlannerError> {
        let connections = parse_edge_list(text)?;
        Ok(Self::new(connections)?)
    }

    /// The underlying network.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Total distance along an exact sequence of stops.
    ///
    /// Unknown terminals, missing edges and sequences of fewer than two stops
    /// all answer [`RouteAnswer::NoSuchRoute`].
    pub fn route_distance(&self, stops: &[Terminal]) -> RouteAnswer {
        match self.graph.build_path(stops) {
            Ok(weights) => weights
                .map(|w| w.iter().map(|d| u64::from(*d)).sum::<u64>())
                .into(),
            Err(e) => {
                warn!(error = %e, "No such route");
                RouteAnswer::NoSuchRoute
            }
        }
    }

    /// Distance of the shortest route from `start` to `end`.
    ///
    /// When `start == end` this is the shortest round trip; staying put does
    /// not count.
    pub fn shortest_route_length(
        &self,
        start: &Terminal,
        end: &Terminal,
    ) -> Result<RouteAnswer, GraphError> {
        self.shortest_route_with_length(start, end).map(|(_, length)| length)
    }

    /// The shortest route from `start` to `end` together with its distance.
    pub fn shortest_route_with_length(
        &self,
        start: &Terminal,
        end: &Terminal,
    ) -> Result<(Option<Path>, RouteAnswer), GraphError> {
        let route = self.shortest_route(start, end)?;
        let length = match &route {
            Some(path) => self.route_distance(path.terminals()),
            None => RouteAnswer::NoSuchRoute,
        };
        Ok((route, length))
    }

    /// The shortest route from `start` to `end`, if there is one.
    pub fn shortest_route(
        &self,
        start: &Terminal,
        end: &Terminal,
    ) -> Result<Option<Path>, GraphError> {
        self.graph.shortest_path(start, end)
    }

    /// Number of routes from `start` to `end` with at most `n` stops.
    pub fn count_routes_with_at_most_stops(
        &self,
        start: &Terminal,
        end: &Terminal,
        n: u64,
    ) -> Result<usize, GraphError> {
        Ok(self.routes_with_at_most_stops(start, end, n)?.len())
    }

    /// Number of routes from `start` to `end` with exactly `n` stops.
    pub fn count_routes_with_exact_stops(
        &self,
        start: &Terminal,
        end: &Terminal,
        n: u64,
    ) -> Result<usize, GraphError> {
        Ok(self.routes_with_exact_stops(start, end, n)?.len())
    }

    /// Number of routes from `start` to `end` shorter than `n`.
    pub fn count_routes_with_distance_less_than(
        &self,
        start: &Terminal,
        end: &Terminal,
        n: u64,
    ) -> Result<usize, GraphError> {
        Ok(self.routes_with_distance_less_than(start, end, n)?.len())
    }

    pub fn routes_with_at_most_stops(
        &self,
        start: &Terminal,
        end: &Terminal,
        n: u64,
    ) -> Result<BTreeSet<Path>, GraphError> {
        self.graph.paths_with_at_most_stops(start, end, n)
    }

    pub fn routes_with_exact_stops(
        &self,
        start: &Terminal,
        end: &Terminal,
        n: u64,
    ) -> Result<BTreeSet<Path>, GraphError> {
        self.graph.paths_with_exact_stops(start, end, n)
    }

    pub fn routes_with_distance_less_than(
        &self,
        start: &Terminal,
        end: &Terminal,
        n: u64,
    ) -> Result<BTreeSet<Path>, GraphError> {
        self.graph.paths_shorter_than_distance(start, end, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOWN: &str = "AB5, BC4, CD8, DC8, DE6, AD5, CE2, EB3, AE7";

    fn t(s: &str) -> Terminal {
        Terminal::parse(s).unwrap()
    }

    fn stops(names: &[&str]) -> Vec<Terminal> {
        names.iter().map(|n| t(n)).collect()
    }

    fn town() -> RoutePlanner {
        RoutePlanner::from_edge_list(TOWN).unwrap()
    }

    #[test]
    fn route_distances() {
        let planner = town();

        let cases: &[(&[&str], RouteAnswer)] = &[
            (&["A", "B", "C"], RouteAnswer::Distance(9)),
            (&["A", "D"], RouteAnswer::Distance(5)),
            (&["A", "D", "C"], RouteAnswer::Distance(13)),
            (&["A", "E", "B", "C", "D"], RouteAnswer::Distance(22)),
            (&["A", "E", "D"], RouteAnswer::NoSuchRoute),
            (&["A", "F"], RouteAnswer::NoSuchRoute),
        ];

        for (route, expected) in cases {
            assert_eq!(
                planner.route_distance(&stops(route)),
                *expected,
                "route {:?}",
                route
            );
        }
    }

    #[test]
    fn single_stop_has_no_route() {
        let planner = town();
        assert_eq!(planner.route_distance(&stops(&["A"])), RouteAnswer::NoSuchRoute);
        assert_eq!(planner.route_distance(&[]), RouteAnswer::NoSuchRoute);
    }

    #[test]
    fn routes_with_at_most_stops() {
        let planner = town();
        assert_eq!(
            planner
                .count_routes_with_at_most_stops(&t("C"), &t("C"), 3)
                .unwrap(),
            2
        );
    }

    #[test]
    fn routes_with_exact_stops() {
        let planner = town();
        assert_eq!(
            planner
                .count_routes_with_exact_stops(&t("A"), &t("C"), 4)
                .unwrap(),
            3
        );
    }

    #[test]
    fn shortest_route_lengths() {
        let planner = town();
        assert_eq!(
            planner.shortest_route_length(&t("A"), &t("C")).unwrap(),
            RouteAnswer::Distance(9)
        );
        assert_eq!(
            planner.shortest_route_length(&t("B"), &t("B")).unwrap(),
            RouteAnswer::Distance(9)
        );
    }

    #[test]
    fn shortest_route_unreachable() {
        let planner = RoutePlanner::from_edge_list("AB5, CA2").unwrap();
        assert_eq!(
            planner.shortest_route_length(&t("A"), &t("C")).unwrap(),
            RouteAnswer::NoSuchRoute
        );
        assert_eq!(planner.shortest_route(&t("A"), &t("C")).unwrap(), None);
    }

    #[test]
    fn routes_with_distance_less_than() {
        let planner = town();
        assert_eq!(
            planner
                .count_routes_with_distance_less_than(&t("C"), &t("C"), 30)
                .unwrap(),
            7
        );
    }

    #[test]
    fn distance_routes_listed() {
        let planner = town();
        let routes = planner
            .routes_with_distance_less_than(&t("C"), &t("C"), 30)
            .unwrap();
        let rendered: Vec<String> = routes.iter().map(|p| p.to_string()).collect();

        assert!(rendered.contains(&"C-D-C".to_string()));
        assert!(rendered.contains(&"C-E-B-C".to_string()));
        assert!(rendered.contains(&"C-E-B-C-D-C".to_string()));
        assert!(rendered.contains(&"C-D-C-E-B-C".to_string()));
        assert!(rendered.contains(&"C-D-E-B-C".to_string()));
        assert!(rendered.contains(&"C-E-B-C-E-B-C".to_string()));
        assert!(rendered.contains(&"C-E-B-C-E-B-C-E-B-C".to_string()));
    }

    #[test]
    fn counts_reject_unknown_terminals() {
        let planner = town();
        let err = planner
            .count_routes_with_exact_stops(&t("A"), &t("Z"), 2)
            .unwrap_err();
        assert_eq!(err, GraphError::UnknownNode { names: stops(&["Z"]) });

        assert!(planner.shortest_route_length(&t("Q"), &t("A")).is_err());
    }

    #[test]
    fn duplicate_connection_fails_build() {
        let err = RoutePlanner::from_edge_list("AB5, BC4, AB7").unwrap_err();
        assert_eq!(
            err,
            PlannerError::Graph(GraphError::EdgeAlreadyExists {
                origin: t("A"),
                destination: t("B"),
            })
        );
    }

    #[test]
    fn invalid_edge_list_fails_build() {
        let err = RoutePlanner::from_edge_list("AB5, BC, CD8").unwrap_err();
        assert!(matches!(err, PlannerError::Connections(_)));
    }

    #[test]
    fn build_from_connections() {
        let planner = RoutePlanner::new(vec![
            Connection::new(t("X1"), t("Y22"), 4),
            Connection::new(t("Y22"), t("Z333"), 6),
        ])
        .unwrap();

        assert_eq!(
            planner.route_distance(&stops(&["X1", "Y22", "Z333"])),
            RouteAnswer::Distance(10)
        );
        assert_eq!(planner.graph().node_count(), 3);
    }

    #[test]
    fn zero_weight_connection_fails_build() {
        let err = RoutePlanner::new(vec![
            Connection::new(t("A"), t("A"), 0),
            Connection::new(t("A"), t("B"), 1),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            GraphError::ZeroWeight {
                origin: t("A"),
                destination: t("A"),
            }
        );
    }

    #[test]
    fn shortest_route_with_length() {
        let planner = town();
        let (route, length) = planner.shortest_route_with_length(&t("A"), &t("C")).unwrap();
        assert_eq!(route.map(|p| p.to_string()), Some("A-B-C".to_string()));
        assert_eq!(length, RouteAnswer::Distance(9));
    }
}
