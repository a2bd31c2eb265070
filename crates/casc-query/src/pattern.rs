use casc_types::Key;
use serde::{Deserialize, Serialize};

use crate::error::{QueryError, QueryResult};

/// One segment of a multi-key pattern.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Segment {
    /// Match exactly one key.
    Exact(Key),
    /// Match any of the listed keys, in list order.
    AnyOf(Vec<Key>),
    /// Match every key present at this level.
    Any,
}

impl From<Key> for Segment {
    fn from(key: Key) -> Self {
        Self::Exact(key)
    }
}

impl From<&str> for Segment {
    fn from(name: &str) -> Self {
        Self::Exact(Key::from(name))
    }
}

/// An ordered multi-key pattern: an address into a tree where each level
/// is a fixed key, a list of alternative keys, or a wildcard.
///
/// The dotted text form accepted by [`Pattern::parse`] uses `*` for the
/// wildcard and `{a,b}` for key lists: `*.methods.{doc,static}.0`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern(Vec<Segment>);

impl Pattern {
    /// Build a pattern from segments.
    pub fn new(segments: Vec<Segment>) -> Self {
        Self(segments)
    }

    /// Parse a dotted pattern string.
    pub fn parse(raw: &str) -> QueryResult<Self> {
        if raw.is_empty() {
            return Err(QueryError::EmptyPattern);
        }
        let mut segments = Vec::new();
        for piece in raw.split('.') {
            segments.push(parse_segment(piece)?);
        }
        Ok(Self(segments))
    }

    /// The pattern's segments in order.
    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` for a pattern with no segments. Such a pattern is
    /// rejected by the query entry point.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Segment>> for Pattern {
    fn from(segments: Vec<Segment>) -> Self {
        Self(segments)
    }
}

fn parse_segment(piece: &str) -> QueryResult<Segment> {
    if piece.is_empty() {
        return Err(QueryError::InvalidSegment(piece.to_string()));
    }
    if piece == "*" {
        return Ok(Segment::Any);
    }
    if let Some(inner) = piece.strip_prefix('{') {
        let Some(inner) = inner.strip_suffix('}') else {
            return Err(QueryError::InvalidSegment(piece.to_string()));
        };
        let mut keys = Vec::new();
        for alt in inner.split(',') {
            let alt = alt.trim();
            if alt.is_empty() {
                return Err(QueryError::InvalidSegment(piece.to_string()));
            }
            keys.push(Key::parse(alt));
        }
        return Ok(Segment::AnyOf(keys));
    }
    Ok(Segment::Exact(Key::parse(piece)))
}
