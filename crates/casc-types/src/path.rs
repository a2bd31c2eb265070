use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;
use crate::key::Key;

/// A resolved address into a tree: an ordered sequence of keys.
///
/// Paths are produced by query iteration and consumed by the tolerant
/// get/delete helpers. The empty path addresses the root.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct KeyPath(Vec<Key>);

impl KeyPath {
    /// The empty path (the root).
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// Parse a dotted path such as `Node.enums.Type` or `methods.create.0`.
    ///
    /// Digit-only segments become index keys. Empty segments (leading,
    /// trailing, or doubled dots) are rejected; the empty string parses
    /// to the root path.
    pub fn parse(raw: &str) -> Result<Self, TypeError> {
        if raw.is_empty() {
            return Ok(Self::root());
        }
        let mut keys = Vec::new();
        for segment in raw.split('.') {
            if segment.is_empty() {
                return Err(TypeError::EmptyPathSegment(raw.to_string()));
            }
            keys.push(Key::parse(segment));
        }
        Ok(Self(keys))
    }

    /// The keys making up this path.
    pub fn keys(&self) -> &[Key] {
        &self.0
    }

    /// Number of keys in the path.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` for the root path.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Append a key in place.
    pub fn push(&mut self, key: Key) {
        self.0.push(key);
    }

    /// A new path with `key` appended.
    pub fn child(&self, key: Key) -> Self {
        let mut keys = self.0.clone();
        keys.push(key);
        Self(keys)
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            write!(f, "{key}")?;
        }
        Ok(())
    }
}

impl From<Vec<Key>> for KeyPath {
    fn from(keys: Vec<Key>) -> Self {
        Self(keys)
    }
}

impl FromIterator<Key> for KeyPath {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
