//! Flat textual edge lists.
//!
//! The format is a comma-separated list of tokens such as
//! `AB5, BC4, CD8`: one origin character, one destination character, then
//! the distance between them. Separators are a comma followed by any number
//! of spaces. Input is either accepted whole or rejected; no graph is built
//! from a partially valid list.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::{InvalidTerminal, Terminal, Weight};

/// Shape of a whole edge list.
static EDGE_LIST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w\w\d+(, *\w\w\d+)*$").unwrap());

/// A single token of an edge list.
static EDGE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(\w)(\w)(\d+)").unwrap());

/// Errors from parsing an edge list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConnectionError {
    /// The text does not have the shape of an edge list
    #[error("edge list is invalid: {0}")]
    Invalid(String),

    /// A distance is zero or too large
    #[error("invalid distance {distance} for {origin} -> {destination}")]
    Weight {
        origin: String,
        destination: String,
        distance: String,
    },
}

/// A directed, weighted connection between two terminals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection {
    pub origin: Terminal,
    pub destination: Terminal,
    pub weight: Weight,
}

impl Connection {
    /// Create a new connection.
    pub fn new(origin: Terminal, destination: Terminal, weight: Weight) -> Self {
        Self {
            origin,
            destination,
            weight,
        }
    }
}

/// Parse an edge list such as `"AB5, BC4, CD8"`.
///
/// Surrounding whitespace (for example a trailing newline when the list was
/// read from a file) is ignored. Distances must be positive.
///
/// # Examples
///
/// ```
/// use route_server::connections::parse_edge_list;
///
/// let connections = parse_edge_list("AB5, BC4").unwrap();
/// assert_eq!(connections.len(), 2);
/// assert_eq!(connections[1].weight, 4);
///
/// assert!(parse_edge_list("AB5 BC4").is_err());
/// ```
pub fn parse_edge_list(text: &str) -> Result<Vec<Connection>, ConnectionError> {
    let text = text.trim();

    if !EDGE_LIST.is_match(text) {
        return Err(ConnectionError::Invalid(text.to_string()));
    }

    EDGE.captures_iter(text)
        .map(|caps| {
            let (_, [origin, destination, distance]) = caps.extract();
            let weight_error = || ConnectionError::Weight {
                origin: origin.to_string(),
                destination: destination.to_string(),
                distance: distance.to_string(),
            };

            let weight: Weight = distance.parse().map_err(|_| weight_error())?;
            if weight == 0 {
                return Err(weight_error());
            }

            let invalid = |e: InvalidTerminal| ConnectionError::Invalid(e.to_string());
            let origin = Terminal::parse(origin).map_err(invalid)?;
            let destination = Terminal::parse(destination).map_err(invalid)?;

            Ok(Connection::new(origin, destination, weight))
        })
        .collect()
}
