use serde::{Deserialize, Serialize};

use crate::value::Value;

/// A typed record describing one difference between two trees.
///
/// Records are produced by the comparator and carry the invariants it
/// maintains: `Added`/`Removed` payloads are never the absence sentinel,
/// and a `Changed` record always has `old != new`. Two mapping values at
/// the same key never become a leaf `Changed` — the comparator recurses
/// into them instead.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ChangeRecord {
    /// The key exists only in the new tree.
    Added(Value),
    /// The key exists only in the old tree.
    Removed(Value),
    /// The key exists in both trees with differing values.
    Changed { old: Value, new: Value },
}

impl ChangeRecord {
    /// Returns `true` for an `Added` record.
    pub fn is_added(&self) -> bool {
        matches!(self, Self::Added(_))
    }

    /// Returns `true` for a `Removed` record.
    pub fn is_removed(&self) -> bool {
        matches!(self, Self::Removed(_))
    }

    /// Returns `true` for a `Changed` record.
    pub fn is_changed(&self) -> bool {
        matches!(self, Self::Changed { .. })
    }

    /// The old-side value, where one exists (`Removed` and `Changed`).
    pub fn old_value(&self) -> Option<&Value> {
        match self {
            Self::Added(_) => None,
            Self::Removed(old) => Some(old),
            Self::Changed { old, .. } => Some(old),
        }
    }

    /// The new-side value, where one exists (`Added` and `Changed`).
    pub fn new_value(&self) -> Option<&Value> {
        match self {
            Self::Added(new) => Some(new),
            Self::Removed(_) => None,
            Self::Changed { new, .. } => Some(new),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_predicates() {
        let added = ChangeRecord::Added(Value::Int(1));
        let removed = ChangeRecord::Removed(Value::Int(1));
        let changed = ChangeRecord::Changed {
            old: Value::Int(1),
            new: Value::Int(2),
        };
        assert!(added.is_added() && !added.is_removed());
        assert!(removed.is_removed() && !removed.is_changed());
        assert!(changed.is_changed() && !changed.is_added());
    }

    #[test]
    fn side_accessors() {
        let changed = ChangeRecord::Changed {
            old: Value::Str("a".into()),
            new: Value::Str("b".into()),
        };
        assert_eq!(changed.old_value(), Some(&Value::Str("a".into())));
        assert_eq!(changed.new_value(), Some(&Value::Str("b".into())));

        let added = ChangeRecord::Added(Value::Bool(true));
        assert_eq!(added.old_value(), None);
        assert_eq!(added.new_value(), Some(&Value::Bool(true)));
    }

    #[test]
    fn serde_roundtrip() {
        let record = ChangeRecord::Changed {
            old: Value::Int(1),
            new: Value::Str("one".into()),
        };
        let json = serde_json::to_string(&record).unwrap();
        let parsed: ChangeRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }
}
