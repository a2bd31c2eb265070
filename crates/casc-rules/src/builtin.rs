//! Generic built-in filter rules.
//!
//! These are the domain-agnostic building blocks of a filter catalog:
//! drop one-sided records at an address pattern ("new methods are ok"),
//! drop changed records a predicate accepts ("the doc just got longer"),
//! drop changed strings that only differ cosmetically, and tolerate an
//! explicit known-ignorable path list. Domain-specific catalogs compose
//! these, or implement [`FilterRule`] directly.

use std::cell::Cell;

use casc_patch::{deep_patch_map, delete_path, Outcome};
use casc_query::{query, Pattern, QueryError, QueryResult};
use casc_types::{ChangeRecord, KeyPath, Map, Value};

use crate::rule::FilterRule;
use crate::text;

/// Delete `Added` records located by a multi-key pattern.
pub struct DropAdded {
    name: String,
    pattern: Pattern,
}

impl DropAdded {
    /// Errors on an empty pattern, which may never mean "match nothing".
    pub fn new(name: impl Into<String>, pattern: Pattern) -> QueryResult<Self> {
        if pattern.is_empty() {
            return Err(QueryError::EmptyPattern);
        }
        Ok(Self {
            name: name.into(),
            pattern,
        })
    }
}

impl FilterRule for DropAdded {
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, diffs: &mut Map) -> usize {
        drop_records_at(diffs, &self.pattern, ChangeRecord::is_added)
    }
}

/// Delete `Removed` records located by a multi-key pattern.
pub struct DropRemoved {
    name: String,
    pattern: Pattern,
}

impl DropRemoved {
    /// Errors on an empty pattern, which may never mean "match nothing".
    pub fn new(name: impl Into<String>, pattern: Pattern) -> QueryResult<Self> {
        if pattern.is_empty() {
            return Err(QueryError::EmptyPattern);
        }
        Ok(Self {
            name: name.into(),
            pattern,
        })
    }
}

impl FilterRule for DropRemoved {
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, diffs: &mut Map) -> usize {
        drop_records_at(diffs, &self.pattern, ChangeRecord::is_removed)
    }
}

fn drop_records_at(
    diffs: &mut Map,
    pattern: &Pattern,
    matches: impl Fn(&ChangeRecord) -> bool,
) -> usize {
    // Rule constructors reject empty patterns, so the query cannot fail.
    let Ok(hits) = query(diffs, pattern, false) else {
        return 0;
    };
    let targets: Vec<KeyPath> = hits
        .filter(|(_, value)| value.as_change().is_some_and(&matches))
        .map(|(path, _)| path)
        .collect();

    targets
        .iter()
        .filter(|path| delete_path(diffs, path))
        .count()
}

/// Delete every `Changed` record, anywhere in the tree, whose old/new pair
/// a caller-supplied predicate accepts.
///
/// This is the deep-rewrite idiom: the predicate inspects shape deep in
/// the record and the whole enclosing record is deleted, not just a leaf.
pub struct DropChangedWhere {
    name: String,
    accept: Box<dyn Fn(&Value, &Value) -> bool + Send + Sync>,
}

impl DropChangedWhere {
    pub fn new(
        name: impl Into<String>,
        accept: impl Fn(&Value, &Value) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            name: name.into(),
            accept: Box::new(accept),
        }
    }
}

impl FilterRule for DropChangedWhere {
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, diffs: &mut Map) -> usize {
        drop_changed_where(diffs, &self.accept)
    }
}

fn drop_changed_where(diffs: &mut Map, accept: impl Fn(&Value, &Value) -> bool) -> usize {
    let dropped = Cell::new(0usize);
    let predicate = |value: &Value| {
        matches!(
            value.as_change(),
            Some(ChangeRecord::Changed { old, new }) if accept(old, new)
        )
    };
    let transform = |_: Value| {
        dropped.set(dropped.get() + 1);
        Outcome::Delete
    };
    let (rebuilt, _) = deep_patch_map(std::mem::take(diffs), &predicate, &transform);
    *diffs = rebuilt;
    dropped.get()
}

/// Delete `Changed` string records whose sides are equal after
/// normalization — capitalization, punctuation, and whitespace churn.
pub struct NormalizedStringsEqual {
    normalizer: fn(&str) -> String,
}

impl NormalizedStringsEqual {
    /// Uses [`text::normalize`].
    pub fn new() -> Self {
        Self {
            normalizer: text::normalize,
        }
    }

    /// Use a caller-supplied normalizer instead.
    pub fn with_normalizer(normalizer: fn(&str) -> String) -> Self {
        Self { normalizer }
    }
}

impl Default for NormalizedStringsEqual {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterRule for NormalizedStringsEqual {
    fn name(&self) -> &str {
        "normalized-strings-equal"
    }

    fn apply(&self, diffs: &mut Map) -> usize {
        let normalizer = self.normalizer;
        drop_changed_where(diffs, move |old, new| match (old, new) {
            (Value::Str(old), Value::Str(new)) => normalizer(old) == normalizer(new),
            _ => false,
        })
    }
}

/// Delete an explicit list of known-ignorable paths. Missing paths are
/// silently skipped.
pub struct IgnorePaths {
    name: String,
    paths: Vec<KeyPath>,
}

impl IgnorePaths {
    pub fn new(name: impl Into<String>, paths: Vec<KeyPath>) -> Self {
        Self {
            name: name.into(),
            paths,
        }
    }
}

impl FilterRule for IgnorePaths {
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, diffs: &mut Map) -> usize {
        self.paths
            .iter()
            .filter(|path| delete_path(diffs, path))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::FilterPipeline;
    use casc_diff::compare_maps;
    use casc_types::Key;

    fn tree(json: serde_json::Value) -> Map {
        match Value::from(json) {
            Value::Map(map) => map,
            other => panic!("expected mapping, got {other:?}"),
        }
    }

    fn diffs_between(old: serde_json::Value, new: serde_json::Value) -> Map {
        compare_maps(&tree(old), &tree(new)).diffs
    }

    #[test]
    fn drop_added_clears_new_entries_at_pattern() {
        let mut diffs = diffs_between(
            serde_json::json!({"C": {"methods": {"old": 1}}}),
            serde_json::json!({"C": {"methods": {"old": 2, "brandNew": 3}}}),
        );
        let rule =
            DropAdded::new("new-methods-ok", Pattern::parse("*.methods.*").unwrap()).unwrap();
        assert_eq!(rule.apply(&mut diffs), 1);

        // The changed record for "old" must survive.
        let methods = diffs
            .get(&Key::from("C"))
            .and_then(Value::as_map)
            .and_then(|c| c.get(&Key::from("methods")))
            .and_then(Value::as_map)
            .unwrap();
        assert!(methods.get(&Key::from("brandNew")).is_none());
        assert!(methods.get(&Key::from("old")).is_some());
    }

    #[test]
    fn drop_added_ignores_removed_records() {
        let mut diffs = diffs_between(
            serde_json::json!({"C": {"gone": 1}}),
            serde_json::json!({"C": {}}),
        );
        let rule = DropAdded::new("added-only", Pattern::parse("*.*").unwrap()).unwrap();
        assert_eq!(rule.apply(&mut diffs), 0);
        assert!(!diffs.is_empty());
    }

    #[test]
    fn drop_removed_clears_one_sided_entries() {
        let mut diffs = diffs_between(
            serde_json::json!({"enums": {"valueDocs": {"a": "d1", "b": "d2"}}}),
            serde_json::json!({"enums": {"valueDocs": {}}}),
        );
        let rule = DropRemoved::new(
            "value-docs-gone-ok",
            Pattern::parse("enums.valueDocs.*").unwrap(),
        )
        .unwrap();
        assert_eq!(rule.apply(&mut diffs), 2);
    }

    #[test]
    fn drop_changed_where_deletes_whole_records() {
        // "doc got longer" acceptance: new starts with old.
        let mut diffs = diffs_between(
            serde_json::json!({"m": {"doc": "Short.", "static": false}}),
            serde_json::json!({"m": {"doc": "Short. Now longer.", "static": true}}),
        );
        let rule = DropChangedWhere::new("longer-doc-ok", |old, new| {
            match (old.as_str(), new.as_str()) {
                (Some(old), Some(new)) => new.starts_with(old),
                _ => false,
            }
        });
        assert_eq!(rule.apply(&mut diffs), 1);

        let m = diffs.get(&Key::from("m")).and_then(Value::as_map).unwrap();
        assert!(m.get(&Key::from("doc")).is_none());
        assert!(m.get(&Key::from("static")).is_some());
    }

    #[test]
    fn normalized_strings_equal_drops_cosmetic_changes() {
        let mut diffs = diffs_between(
            serde_json::json!({"m": {"doc": "Class Name.", "n": 1}}),
            serde_json::json!({"m": {"doc": "class name", "n": 2}}),
        );
        let rule = NormalizedStringsEqual::new();
        assert_eq!(rule.apply(&mut diffs), 1);

        let m = diffs.get(&Key::from("m")).and_then(Value::as_map).unwrap();
        assert!(m.get(&Key::from("doc")).is_none());
        assert!(m.get(&Key::from("n")).is_some());
    }

    #[test]
    fn normalized_strings_equal_skips_non_strings() {
        let mut diffs = diffs_between(
            serde_json::json!({"m": {"count": 1}}),
            serde_json::json!({"m": {"count": 2}}),
        );
        assert_eq!(NormalizedStringsEqual::new().apply(&mut diffs), 0);
    }

    #[test]
    fn ignore_paths_tolerates_missing_entries() {
        let mut diffs = diffs_between(
            serde_json::json!({"Node": {"enums": {"Type": "v1"}}}),
            serde_json::json!({"Node": {"enums": {"Type": "v2"}}}),
        );
        let rule = IgnorePaths::new(
            "known-ignorable",
            vec![
                KeyPath::parse("Node.enums.Type").unwrap(),
                KeyPath::parse("Node.aliasEnums.Type").unwrap(),
            ],
        );
        assert_eq!(rule.apply(&mut diffs), 1);
    }

    #[test]
    fn empty_pattern_is_rejected_at_construction() {
        assert!(matches!(
            DropAdded::new("bad", Pattern::new(Vec::new())),
            Err(QueryError::EmptyPattern)
        ));
        assert!(matches!(
            DropRemoved::new("bad", Pattern::new(Vec::new())),
            Err(QueryError::EmptyPattern)
        ));
    }

    #[test]
    fn full_pipeline_reaches_no_diffs() {
        // New method added, doc re-capitalized: both acceptable, so the
        // pipeline must leave an empty tree.
        let old = serde_json::json!({
            "Mesh": {"methods": {"create": {"0": {"doc": "Creates a mesh."}}}}
        });
        let new = serde_json::json!({
            "Mesh": {"methods": {
                "create": {"0": {"doc": "Creates a Mesh"}},
                "fresh": {"0": {"doc": "Brand new."}}
            }}
        });
        let mut diffs = diffs_between(old, new);

        let pipeline = FilterPipeline::new()
            .with_rule(Box::new(
                DropAdded::new("new-methods-ok", Pattern::parse("*.methods.*").unwrap())
                    .unwrap(),
            ))
            .with_rule(Box::new(NormalizedStringsEqual::new()));
        let report = pipeline.run(&mut diffs);

        assert_eq!(report.total_removed(), 2);
        assert!(diffs.is_empty(), "expected no diffs, got {diffs:?}");
    }
}
