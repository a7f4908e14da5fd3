//! Runtime configuration.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

/// Default listen address for the HTTP API.
pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Default log filter when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Errors loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The edge list file could not be read
    #[error("failed to read edge list from {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Where the edge list comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdgeListSource {
    /// The edge list itself, given on the command line
    Inline(String),
    /// A file holding the edge list
    File(PathBuf),
}

impl EdgeListSource {
    /// Interpret a command-line input.
    ///
    /// An input naming an existing file is read from that file; anything
    /// else is taken to be the edge list itself.
    pub fn detect(input: &str) -> Self {
        let path = Path::new(input);
        if path.is_file() {
            EdgeListSource::File(path.to_path_buf())
        } else {
            EdgeListSource::Inline(input.to_string())
        }
    }

    /// Load the edge list text.
    pub fn read(&self) -> Result<String, ConfigError> {
        match self {
            EdgeListSource::Inline(text) => Ok(text.clone()),
            EdgeListSource::File(path) => {
                std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                    path: path.clone(),
                    source,
                })
            }
        }
    }
}

/// Default ceiling on the stop bound of a route listing.
pub const DEFAULT_MAX_STOPS: u64 = 10;

/// Default ceiling on the distance bound of a route listing.
pub const DEFAULT_MAX_DISTANCE: u64 = 100;

/// Configuration for the HTTP API.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on.
    pub addr: SocketAddr,

    /// Largest `max_stops` or `exact_stops` a request may ask for.
    /// Route enumeration grows exponentially with this bound.
    pub max_stops: u64,

    /// Largest `max_distance` a request may ask for.
    pub max_distance: u64,
}

impl ServerConfig {
    /// Create a configuration with the default search limits.
    pub fn new(addr: SocketAddr) -> Self {
        Self {
            addr,
            max_stops: DEFAULT_MAX_STOPS,
            max_distance: DEFAULT_MAX_DISTANCE,
        }
    }

    /// Override the search limits.
    pub fn with_limits(mut self, max_stops: u64, max_distance: u64) -> Self {
        self.max_stops = max_stops;
        self.max_distance = max_distance;
        self
    }
}
