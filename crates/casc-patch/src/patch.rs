//! Pre-order predicate-driven tree rewriting.
//!
//! At every node, root first, the predicate is evaluated. A match hands the
//! node to the transform and recursion stops there; otherwise mapping nodes
//! are rebuilt from their recursively patched children and everything else
//! passes through untouched. A single pass visits each node exactly once —
//! cascading cleanup of structures that become empty mid-pass is the
//! pruner's job, not this one's.

use casc_types::{Map, Value};

/// What a transform did with a matched node.
///
/// `Delete` removes the node's key from its parent entirely. It is a
/// distinct signal rather than an overloaded null so that "the new value
/// is genuinely none" and "remove this entry" stay distinguishable.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    /// Replace the node with this value.
    Keep(Value),
    /// Remove the node from its parent.
    Delete,
}

/// The result of one patch pass.
#[derive(Clone, Debug, PartialEq)]
pub struct Patched {
    /// The rewritten tree, or `None` if the root itself was deleted.
    pub value: Option<Value>,
    /// Whether any node, at any depth including the root, was replaced
    /// or deleted.
    pub changed: bool,
}

/// Rewrite `value` pre-order with `predicate` and `transform`.
///
/// Predicates supplied by filter rules are expected to be total over "is
/// this node of the shape I care about": they return `false` on unexpected
/// shapes rather than failing.
pub fn deep_patch(
    value: Value,
    predicate: &impl Fn(&Value) -> bool,
    transform: &impl Fn(Value) -> Outcome,
) -> Patched {
    if predicate(&value) {
        return match transform(value) {
            Outcome::Keep(replacement) => Patched {
                value: Some(replacement),
                changed: true,
            },
            Outcome::Delete => Patched {
                value: None,
                changed: true,
            },
        };
    }

    match value {
        Value::Map(map) => {
            let mut changed = false;
            let mut rebuilt = Map::new();
            for (key, child) in map {
                let result = deep_patch(child, predicate, transform);
                changed |= result.changed;
                if let Some(patched_child) = result.value {
                    rebuilt.insert(key, patched_child);
                }
            }
            Patched {
                value: Some(Value::Map(rebuilt)),
                changed,
            }
        }
        other => Patched {
            value: Some(other),
            changed: false,
        },
    }
}

/// [`deep_patch`] over a mapping root, returning the rebuilt mapping and
/// the change flag. A root-level match that keeps a non-mapping value (or
/// deletes the root) collapses to an empty mapping.
pub fn deep_patch_map(
    map: Map,
    predicate: &impl Fn(&Value) -> bool,
    transform: &impl Fn(Value) -> Outcome,
) -> (Map, bool) {
    match deep_patch(Value::Map(map), predicate, transform) {
        Patched {
            value: Some(Value::Map(rebuilt)),
            changed,
        } => (rebuilt, changed),
        Patched { changed, .. } => (Map::new(), changed),
    }
}
