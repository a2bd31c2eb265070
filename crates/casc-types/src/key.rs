use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A mapping key: either a name or a non-negative position index.
///
/// Named keys address fields ("methods", "doc"); index keys address
/// positional slots such as overload numbers. Index keys sort before all
/// named keys, and numerically among themselves.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// Positional key (e.g. an overload index).
    Index(u64),
    /// Named key.
    Name(String),
}

impl Key {
    /// Parse a key from a single path segment.
    ///
    /// A segment consisting entirely of ASCII digits becomes an `Index`;
    /// anything else becomes a `Name`. Names that happen to look numeric
    /// cannot be expressed through this parser.
    pub fn parse(segment: &str) -> Self {
        if !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(index) = segment.parse::<u64>() {
                return Self::Index(index);
            }
        }
        Self::Name(segment.to_string())
    }

    /// The key's name, if it is a named key.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Self::Name(name) => Some(name),
            Self::Index(_) => None,
        }
    }

    /// The key's index, if it is a positional key.
    pub fn as_index(&self) -> Option<u64> {
        match self {
            Self::Index(index) => Some(*index),
            Self::Name(_) => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{index}"),
            Self::Name(name) => write!(f, "{name}"),
        }
    }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Self::Name(name.to_string())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Self::Name(name)
    }
}

impl From<u64> for Key {
    fn from(index: u64) -> Self {
        Self::Index(index)
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Self::Index(index as u64)
    }
}

// Keys serialize as plain strings so mappings keyed by `Key` remain valid
// JSON objects. Digit-only strings deserialize back to `Index`.
impl Serialize for Key {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Index(index) => serializer.collect_str(index),
            Self::Name(name) => serializer.serialize_str(name),
        }
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        if raw.is_empty() {
            return Err(D::Error::custom("key must be non-empty"));
        }
        Ok(Self::parse(&raw))
    }
}
