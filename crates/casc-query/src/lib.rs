//! Multi-key path patterns and lazy query iteration for casc trees.
//!
//! A pattern is an ordered sequence of segments — a fixed key, a list of
//! alternative keys, or a wildcard — consumed level by level against a
//! mapping tree. Querying yields every `(path, value)` pair the pattern
//! resolves to, without manifesting the whole tree.
//!
//! # Key Types
//!
//! - [`Segment`] / [`Pattern`] -- The multi-key address model
//! - [`query`] / [`Query`] -- Lazy, finite, restartable iteration
//! - [`QueryError`] -- Empty or malformed patterns

pub mod error;
pub mod iter;
pub mod pattern;

pub use error::{QueryError, QueryResult};
pub use iter::{query, Query};
pub use pattern::{Pattern, Segment};
