//! Terminal name type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid terminal name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid terminal name: {reason}")]
pub struct InvalidTerminal {
    reason: &'static str,
}

/// The name of a terminal (a node in the route network).
///
/// Names are opaque: any non-empty string without whitespace or commas is
/// accepted, so single letters such as `A` work as well as longer codes.
///
/// # Examples
///
/// ```
/// use route_server::domain::Terminal;
///
/// let a = Terminal::parse("A").unwrap();
/// assert_eq!(a.as_str(), "A");
///
/// assert!(Terminal::parse("KGX").is_ok());
/// assert!(Terminal::parse("").is_err());
/// assert!(Terminal::parse("A B").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Terminal(String);

impl Terminal {
    /// Parse a terminal name from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidTerminal> {
        if s.is_empty() {
            return Err(InvalidTerminal {
                reason: "must not be empty",
            });
        }

        if s.chars().any(|c| c.is_whitespace() || c == ',') {
            return Err(InvalidTerminal {
                reason: "must not contain whitespace or commas",
            });
        }

        Ok(Terminal(s.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Terminal {
    type Error = InvalidTerminal;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Terminal::parse(&value)
    }
}

impl From<Terminal> for String {
    fn from(terminal: Terminal) -> Self {
        terminal.0
    }
}

impl fmt::Debug for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Terminal({})", self.0)
    }
}

impl fmt::Display for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
