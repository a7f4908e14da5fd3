//! Walks through the route network.

use std::fmt;

use serde::Serialize;

use super::Terminal;

/// Distance carried by a single edge.
pub type Weight = u32;

/// An ordered sequence of terminals describing a walk.
///
/// Terminals may repeat: a path is not required to be simple. The number of
/// stops is the number of edges traversed, one less than the number of
/// terminals.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Path(Vec<Terminal>);

impl Path {
    /// Create a path from its terminals, first to last.
    pub fn new(terminals: Vec<Terminal>) -> Self {
        Self(terminals)
    }

    /// The terminals along this path, in order.
    pub fn terminals(&self) -> &[Terminal] {
        &self.0
    }

    /// Number of edges traversed.
    pub fn stops(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// First terminal, if any.
    pub fn first(&self) -> Option<&Terminal> {
        self.0.first()
    }

    /// Last terminal, if any.
    pub fn last(&self) -> Option<&Terminal> {
        self.0.last()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, terminal) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("-")?;
            }
            write!(f, "{terminal}")?;
        }
        Ok(())
    }
}
