//! Graph error types.
//!
//! These errors represent structural failures when building or walking the
//! route network. Searches that simply find nothing are not errors.

use std::fmt;

use super::Terminal;

/// Errors raised by the graph store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// An edge for this ordered pair was already inserted
    #[error("edge {origin} -> {destination} already exists")]
    EdgeAlreadyExists {
        origin: Terminal,
        destination: Terminal,
    },

    /// Edges must have a positive weight
    #[error("edge {origin} -> {destination} has zero weight")]
    ZeroWeight {
        origin: Terminal,
        destination: Terminal,
    },

    /// One or more names were never inserted into the graph
    #[error("unknown terminal(s): {}", Names(.names))]
    UnknownNode { names: Vec<Terminal> },

    /// Consecutive stops with no direct edge between them
    #[error("no edge {from} -> {to}")]
    NoSuchEdge { from: Terminal, to: Terminal },
}

struct Names<'a>(&'a [Terminal]);

impl fmt::Display for Names<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{name}")?;
        }
        Ok(())
    }
}
