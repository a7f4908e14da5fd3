//! Distance answers.

use std::fmt;

use serde::{Serialize, Serializer};

/// Text shown when no route satisfies a distance query.
pub const NO_SUCH_ROUTE: &str = "NO SUCH ROUTE";

/// The answer to a distance query.
///
/// "No such route" is a meaningful answer rather than an error: it is what a
/// user asking for the length of an impossible journey should be told.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RouteAnswer {
    /// Total distance of the route
    Distance(u64),
    /// No route exists
    NoSuchRoute,
}

impl RouteAnswer {
    /// The distance, if there is a route.
    pub fn distance(&self) -> Option<u64> {
        match self {
            RouteAnswer::Distance(d) => Some(*d),
            RouteAnswer::NoSuchRoute => None,
        }
    }
}

impl From<Option<u64>> for RouteAnswer {
    fn from(distance: Option<u64>) -> Self {
        distance.map_or(RouteAnswer::NoSuchRoute, RouteAnswer::Distance)
    }
}

impl fmt::Display for RouteAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteAnswer::Distance(d) => write!(f, "{d}"),
            RouteAnswer::NoSuchRoute => f.write_str(NO_SUCH_ROUTE),
        }
    }
}

/// Serializes as the bare number, or the `NO SUCH ROUTE` string.
impl Serialize for RouteAnswer {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RouteAnswer::Distance(d) => serializer.serialize_u64(*d),
            RouteAnswer::NoSuchRoute => serializer.serialize_str(NO_SUCH_ROUTE),
        }
    }
}
