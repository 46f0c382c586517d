//! Variable paths.

use std::fmt;
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};

/// The current-value token.
pub const CURRENT: &str = ".";

/// A parsed variable path: either `.` or one or more named segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Path {
    Current,
    Named(Vec<String>),
}

impl Path {
    /// Parse a dotted path such as `foo`, `foo.bar` or `.`.
    ///
    /// Empty paths, empty segments (`a..b`, `.a`, `a.`) and segments holding
    /// whitespace or braces are rejected.
    pub fn parse(raw: &str) -> CoreResult<Self> {
        let raw = raw.trim();
        if raw == CURRENT {
            return Ok(Self::Current);
        }
        if raw.is_empty() {
            return Err(CoreError::InvalidPath(raw.to_string()));
        }

        let segments: Vec<String> = raw.split('.').map(str::to_string).collect();
        if segments.iter().any(|s| s.is_empty() || s.chars().any(is_reserved)) {
            return Err(CoreError::InvalidPath(raw.to_string()));
        }
        Ok(Self::Named(segments))
    }

    pub fn is_current(&self) -> bool {
        matches!(self, Self::Current)
    }

    /// The segment resolved against the context stack.
    pub fn root(&self) -> &str {
        match self {
            Self::Current => CURRENT,
            Self::Named(segments) => &segments[0],
        }
    }

    /// Segments resolved against the root's value.
    pub fn rest(&self) -> &[String] {
        match self {
            Self::Current => &[],
            Self::Named(segments) => &segments[1..],
        }
    }
}

fn is_reserved(c: char) -> bool {
    c.is_whitespace() || c == '{' || c == '}'
}

impl FromStr for Path {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Current => write!(f, "{}", CURRENT),
            Self::Named(segments) => write!(f, "{}", segments.join(".")),
        }
    }
}
