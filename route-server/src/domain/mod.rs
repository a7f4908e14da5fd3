//! Domain types for the route planner.
//!
//! This module contains the value types shared by the graph store and the
//! query layer. Types enforce their invariants at construction time, so code
//! that receives them can trust their validity.

mod error;
mod path;
mod terminal;

pub use error::GraphError;
pub use path::{Path, Weight};
pub use terminal::{InvalidTerminal, Terminal};
