//! Structural comparator for casc.
//!
//! Compares two versions of a nested key-value tree and produces four
//! mirrored trees: the merged shared structure, the two one-sided trees,
//! and a diffs tree holding a typed [`casc_types::ChangeRecord`] at every
//! point of difference.
//!
//! # Key Types
//!
//! - [`CompareOutput`] -- The `both` / `only_old` / `only_new` / `diffs` result
//! - [`compare`] / [`compare_maps`] -- Checked and mapping-typed entry points
//! - [`DiffError`] -- Structural misuse of the comparator

pub mod compare;
pub mod error;

pub use compare::{compare, compare_maps, CompareOutput};
pub use error::{DiffError, DiffResult};
