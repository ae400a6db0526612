//! Field paths locating a tri-state leaf inside a decoded record.
//!
//! Paths print and parse as `address.city` or `items[2].sku`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error parsing a field path
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathParseError {
    /// A `.` with no key after it
    #[error("empty key in path at position {0}")]
    EmptyKey(usize),
    /// `[` without a matching `]`
    #[error("unclosed bracket starting at position {0}")]
    UnclosedBracket(usize),
    /// Bracket contents are not an index
    #[error("invalid index at position {0}: {1}")]
    InvalidIndex(usize, String),
    /// Character not allowed here
    #[error("unexpected character '{0}' at position {1}")]
    UnexpectedChar(char, usize),
}

/// One step of a field path
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PathSegment {
    /// Record field or map key
    Key(String),
    /// Sequence element
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Key(k) => write!(f, ".{}", k),
            PathSegment::Index(i) => write!(f, "[{}]", i),
        }
    }
}

/// Location of a leaf beneath the decode destination.
///
/// The root path is empty and addresses the destination itself.
///
/// ```
/// use tristate_wire::FieldPath;
///
/// let city = FieldPath::root().key("address").key("city");
/// assert_eq!(city.to_string(), "address.city");
/// assert_eq!("address.city".parse::<FieldPath>().unwrap(), city);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FieldPath {
    segments: Vec<PathSegment>,
}

impl FieldPath {
    /// The empty path
    pub fn root() -> Self {
        Self::default()
    }

    /// Segments from the root down
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// Number of segments
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether this is the root path
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Append a key (builder form)
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.push_key(key);
        self
    }

    /// Append an index (builder form)
    pub fn index(mut self, idx: usize) -> Self {
        self.push_index(idx);
        self
    }

    /// Append a key in place
    pub fn push_key(&mut self, key: impl Into<String>) {
        self.segments.push(PathSegment::Key(key.into()));
    }

    /// Append an index in place
    pub fn push_index(&mut self, idx: usize) {
        self.segments.push(PathSegment::Index(idx));
    }

    /// Remove and return the last segment
    pub fn pop(&mut self) -> Option<PathSegment> {
        self.segments.pop()
    }

    /// Path one level up, `None` at the root
    pub fn parent(&self) -> Option<FieldPath> {
        let (_, head) = self.segments.split_last()?;
        Some(FieldPath {
            segments: head.to_vec(),
        })
    }

    /// Last segment, `None` at the root
    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }

    /// Whether `self` is a prefix of `other` (a path is its own ancestor)
    pub fn is_ancestor_of(&self, other: &FieldPath) -> bool {
        other.segments.starts_with(&self.segments)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Key(k) if i == 0 => f.write_str(k)?,
                other => write!(f, "{}", other)?,
            }
        }
        Ok(())
    }
}

impl FromStr for FieldPath {
    type Err = PathParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        let mut path = FieldPath::root();
        let mut i = 0;
        let is_key_char = |c: char| c.is_alphanumeric() || c == '_' || c == '-';

        while i < chars.len() {
            match chars[i] {
                '.' if i + 1 >= chars.len() || !is_key_char(chars[i + 1]) => {
                    return Err(PathParseError::EmptyKey(i + 1));
                }
                '.' => i += 1,
                '[' => {
                    let start = i;
                    let close = chars[start..]
                        .iter()
                        .position(|&c| c == ']')
                        .map(|offset| start + offset)
                        .ok_or(PathParseError::UnclosedBracket(start))?;
                    let digits: String = chars[start + 1..close].iter().collect();
                    let idx = digits
                        .parse::<usize>()
                        .map_err(|_| PathParseError::InvalidIndex(start + 1, digits))?;
                    path.push_index(idx);
                    i = close + 1;
                }
                c if is_key_char(c) => {
                    let start = i;
                    while i < chars.len() && is_key_char(chars[i]) {
                        i += 1;
                    }
                    path.push_key(chars[start..i].iter().collect::<String>());
                }
                c => return Err(PathParseError::UnexpectedChar(c, i)),
            }
        }
        Ok(path)
    }
}
