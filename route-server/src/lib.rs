//! Route planner over a network of terminals.
//!
//! Answers questions about a small directed, weighted network: the distance
//! of a given route, how many routes fit a stop or distance limit, and the
//! shortest route between two terminals.

pub mod config;
pub mod connections;
pub mod demo;
pub mod domain;
pub mod graph;
pub mod planner;
pub mod web;
