//! Fixed-point pruning of empty structure.
//!
//! Filter deletions leave empty mappings behind at every ancestor level.
//! A single patch pass cannot see an ancestor that becomes empty only as a
//! side effect of a descendant's removal, so pruning repeats passes until
//! one reports no change. Each matching pass removes at least one entry,
//! so the loop terminates on any finite tree.

use casc_types::{Map, Value};

use crate::patch::{deep_patch, Outcome, Patched};

/// Remove every mapping entry whose value is an empty container or the
/// absence sentinel, cascading upward to a fixed point.
///
/// An empty root mapping is kept: "no differences" is represented by an
/// empty tree, not by the tree's disappearance.
pub fn prune(value: Value) -> Value {
    let mut current = value;
    loop {
        let Patched { value, changed } =
            deep_patch(current, &has_empty_children, &drop_empty_children);
        current = match value {
            Some(v) => v,
            // The transform always keeps; deletion of the root cannot occur.
            None => return Value::empty_map(),
        };
        if !changed {
            return current;
        }
    }
}

/// [`prune`] over a mapping root.
pub fn prune_map(map: Map) -> Map {
    match prune(Value::Map(map)) {
        Value::Map(pruned) => pruned,
        _ => Map::new(),
    }
}

fn has_empty_children(value: &Value) -> bool {
    value
        .as_map()
        .is_some_and(|map| map.values().any(Value::is_empty_container))
}

fn drop_empty_children(value: Value) -> Outcome {
    match value {
        Value::Map(map) => Outcome::Keep(Value::Map(
            map.into_iter()
                .filter(|(_, child)| !child.is_empty_container())
                .collect(),
        )),
        other => Outcome::Keep(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn tree(json: serde_json::Value) -> Value {
        Value::from(json)
    }

    #[test]
    fn empty_leaf_and_emptied_parent_both_vanish() {
        let pruned = prune(tree(serde_json::json!({"A": {"x": {}}, "B": 5})));
        assert_eq!(pruned, tree(serde_json::json!({"B": 5})));
    }

    #[test]
    fn deep_chain_collapses_to_empty_root() {
        let pruned = prune(tree(serde_json::json!({"a": {"b": {"c": {}}}})));
        assert_eq!(pruned, Value::empty_map());
    }

    #[test]
    fn nulls_and_absent_are_pruned() {
        let mut map = casc_types::Map::new();
        map.insert("gone".into(), Value::Absent);
        map.insert("none".into(), Value::Null);
        map.insert("kept".into(), Value::Int(1));
        let pruned = prune(Value::Map(map));
        assert_eq!(pruned, tree(serde_json::json!({"kept": 1})));
    }

    #[test]
    fn empty_sequences_are_pruned() {
        let pruned = prune(tree(serde_json::json!({"a": [], "b": [1]})));
        assert_eq!(pruned, tree(serde_json::json!({"b": [1]})));
    }

    #[test]
    fn empty_root_survives() {
        assert_eq!(prune(Value::empty_map()), Value::empty_map());
    }

    #[test]
    fn non_empty_values_untouched() {
        let original = tree(serde_json::json!({"a": {"b": 1}, "c": "x"}));
        assert_eq!(prune(original.clone()), original);
    }

    #[test]
    fn prune_map_returns_mapping() {
        let map = match tree(serde_json::json!({"a": {}})) {
            Value::Map(map) => map,
            other => panic!("expected mapping, got {other:?}"),
        };
        assert!(prune_map(map).is_empty());
    }

    proptest! {
        #[test]
        fn prune_is_idempotent(json in arb_json()) {
            let once = prune(Value::from(json));
            let twice = prune(once.clone());
            prop_assert_eq!(once, twice);
        }
    }

    fn arb_json() -> impl Strategy<Value = serde_json::Value> {
        let leaf = prop_oneof![
            Just(serde_json::json!(null)),
            (-5i64..5).prop_map(|i| serde_json::json!(i)),
            "[a-z]{0,3}".prop_map(|s| serde_json::json!(s)),
        ];
        leaf.prop_recursive(4, 32, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..3).prop_map(serde_json::Value::Array),
                prop::collection::btree_map("[a-c0-3]{1,2}", inner, 0..4)
                    .prop_map(|m| serde_json::Value::Object(m.into_iter().collect())),
            ]
        })
    }
}
