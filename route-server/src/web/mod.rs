//! Web layer for the route planner.
//!
//! Provides read-only JSON endpoints over a network loaded at startup.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
