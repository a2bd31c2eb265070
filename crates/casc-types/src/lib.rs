//! Foundation types for casc, the cascading structural diff engine.
//!
//! This crate provides the value model shared by every other casc crate:
//! nested key-value trees with heterogeneous keys, plus the change records
//! that diff trees are built from.
//!
//! # Key Types
//!
//! - [`Key`] -- A mapping key: a name or a non-negative position index
//! - [`Value`] -- Tagged tree value: mapping, sequence, scalar, absence
//!   sentinel, or an embedded change record
//! - [`Map`] -- Alias for `BTreeMap<Key, Value>`, the mapping representation
//! - [`ChangeRecord`] -- Added / Removed / Changed at one tree position
//! - [`KeyPath`] -- A resolved address into a tree

pub mod change;
pub mod error;
pub mod key;
pub mod path;
pub mod value;

pub use change::ChangeRecord;
pub use error::TypeError;
pub use key::Key;
pub use path::KeyPath;
pub use value::{Map, Value};
