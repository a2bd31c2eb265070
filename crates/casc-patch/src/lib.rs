//! Deep rewriting and pruning for casc trees.
//!
//! The patcher walks a tree pre-order, replacing or deleting nodes a
//! predicate matches; the pruner builds on it to cascade away structure
//! that became empty, repeating until a fixed point. Tolerant path helpers
//! cover direct addressing where a query pattern would be overkill.
//!
//! # Key Types
//!
//! - [`deep_patch`] / [`Outcome`] / [`Patched`] -- One rewrite pass
//! - [`prune`] / [`prune_map`] -- Fixed-point removal of empty structure
//! - [`get_path`] / [`delete_path`] -- Missing paths are no-ops, not errors

pub mod patch;
pub mod path_ops;
pub mod prune;

pub use patch::{deep_patch, deep_patch_map, Outcome, Patched};
pub use path_ops::{delete_path, get_path};
pub use prune::{prune, prune_map};
