//! Route planner.
//!
//! This module answers the questions a traveller asks of the route network:
//! how far a given route is, how many routes fit a stop or distance limit,
//! and how short the shortest route is. All of the searching happens in
//! [`crate::graph`]; this layer picks the search and shapes the answer.

mod answer;
mod query;

pub use answer::{NO_SUCH_ROUTE, RouteAnswer};
pub use query::{PlannerError, RoutePlanner};
