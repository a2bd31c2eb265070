//! Cascading structural comparison of two mapping trees.
//!
//! For every key present in either input the comparator classifies the pair:
//! both values mappings means recurse, anything else is compared atomically
//! by equality. The result mirrors the input shape as four trees: the merged
//! shared structure, the two one-sided trees, and the diffs tree holding
//! [`ChangeRecord`]s at every point of difference.

use casc_types::{ChangeRecord, Map, Value};
use serde::{Deserialize, Serialize};

use crate::error::{DiffError, DiffResult};

/// The four outputs of a structural comparison.
///
/// All four trees mirror the nesting of the inputs. A comparison found no
/// differences exactly when `diffs` is empty; the comparator never records
/// an empty diff subtree, so emptiness at the root means emptiness at every
/// level.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CompareOutput {
    /// Keys present in both trees with equal values; shared mapping
    /// structure is mirrored here even where a subtree holds no equal
    /// leaves.
    pub both: Map,
    /// Keys (and subtrees of keys) present only in the old tree.
    pub only_old: Map,
    /// Keys (and subtrees of keys) present only in the new tree.
    pub only_new: Map,
    /// The diffs tree: nested mappings holding a [`ChangeRecord`] at every
    /// point of difference.
    pub diffs: Map,
}

impl CompareOutput {
    /// Returns `true` if the comparison found no differences.
    pub fn is_clean(&self) -> bool {
        self.diffs.is_empty()
    }

    /// Number of top-level entries in the diffs tree.
    pub fn diff_count(&self) -> usize {
        self.diffs.len()
    }
}

/// Compare two tree values, which must both be mappings.
///
/// This is the checked entry point; use [`compare_maps`] when the mapping
/// shape is already known.
pub fn compare(old: &Value, new: &Value) -> DiffResult<CompareOutput> {
    match (old, new) {
        (Value::Map(old_map), Value::Map(new_map)) => Ok(compare_maps(old_map, new_map)),
        _ => Err(DiffError::RootNotMapping {
            old: old.kind(),
            new: new.kind(),
        }),
    }
}

/// Compare two mapping trees.
///
/// For each key present in either input:
/// - both values mappings: recurse; the recursive `both` subtree is always
///   recorded (even when empty) to mirror shared structure, the other three
///   subtrees only when non-empty.
/// - present in both, at least one side not a mapping: equal values go to
///   `both`, unequal values produce a `Changed` record. Sequences compare
///   atomically; a changed sequence is a single `Changed` leaf holding both
///   whole sequences.
/// - present on one side only: recorded in the one-sided tree and as
///   `Added`/`Removed` in the diffs tree.
pub fn compare_maps(old: &Map, new: &Map) -> CompareOutput {
    let mut out = CompareOutput::default();

    for (key, old_val) in old {
        match new.get(key) {
            Some(new_val) => match (old_val, new_val) {
                (Value::Map(old_sub), Value::Map(new_sub)) => {
                    let sub = compare_maps(old_sub, new_sub);
                    out.both.insert(key.clone(), Value::Map(sub.both));
                    if !sub.only_old.is_empty() {
                        out.only_old.insert(key.clone(), Value::Map(sub.only_old));
                    }
                    if !sub.only_new.is_empty() {
                        out.only_new.insert(key.clone(), Value::Map(sub.only_new));
                    }
                    if !sub.diffs.is_empty() {
                        out.diffs.insert(key.clone(), Value::Map(sub.diffs));
                    }
                }
                _ => {
                    if old_val == new_val {
                        out.both.insert(key.clone(), old_val.clone());
                    } else {
                        out.diffs.insert(
                            key.clone(),
                            Value::change(ChangeRecord::Changed {
                                old: old_val.clone(),
                                new: new_val.clone(),
                            }),
                        );
                    }
                }
            },
            None => {
                out.only_old.insert(key.clone(), old_val.clone());
                out.diffs.insert(
                    key.clone(),
                    Value::change(ChangeRecord::Removed(old_val.clone())),
                );
            }
        }
    }

    for (key, new_val) in new {
        if !old.contains_key(key) {
            out.only_new.insert(key.clone(), new_val.clone());
            out.diffs.insert(
                key.clone(),
                Value::change(ChangeRecord::Added(new_val.clone())),
            );
        }
    }

    out
}
