use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::change::ChangeRecord;
use crate::key::Key;

/// An ordered mapping from keys to tree values.
pub type Map = BTreeMap<Key, Value>;

/// A node in a cascading tree.
///
/// Trees are arbitrary nestings of mappings, sequences, and scalar leaves.
/// Two variants are special:
///
/// - [`Value::Absent`] is the absence sentinel — "no value at this key".
///   It is distinct from [`Value::Null`], which is an explicit none leaf
///   present in the data. `Absent` never appears in a produced diffs tree.
/// - [`Value::Change`] wraps a [`ChangeRecord`] and only ever appears
///   inside a diffs tree, never in a source tree.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Absence sentinel, distinct from an explicit `Null` leaf.
    Absent,
    /// An explicit none leaf.
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// Domain-specific atomic constant (e.g. an enumerated value name).
    Sym(String),
    /// Order-significant sequence. Compared atomically, never element-wise.
    Seq(Vec<Value>),
    /// Ordered mapping. Comparison is insertion-order-irrelevant.
    Map(Map),
    /// A change record inside a diffs tree.
    Change(Box<ChangeRecord>),
}

impl Value {
    /// An empty mapping value.
    pub fn empty_map() -> Self {
        Self::Map(Map::new())
    }

    /// Wrap a change record.
    pub fn change(record: ChangeRecord) -> Self {
        Self::Change(Box::new(record))
    }

    /// Returns `true` if this value is a mapping.
    pub fn is_map(&self) -> bool {
        matches!(self, Self::Map(_))
    }

    /// The mapping, if this value is one.
    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Mutable access to the mapping, if this value is one.
    pub fn as_map_mut(&mut self) -> Option<&mut Map> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// The change record, if this value wraps one.
    pub fn as_change(&self) -> Option<&ChangeRecord> {
        match self {
            Self::Change(record) => Some(record),
            _ => None,
        }
    }

    /// The string content, if this value is a string leaf.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Look up a child value by key. `None` for missing keys and for
    /// non-mapping values.
    pub fn get(&self, key: &Key) -> Option<&Value> {
        self.as_map().and_then(|map| map.get(key))
    }

    /// Returns `true` if this value is "empty" for pruning purposes:
    /// the absence sentinel, an explicit none, an empty mapping, or an
    /// empty sequence.
    pub fn is_empty_container(&self) -> bool {
        match self {
            Self::Absent | Self::Null => true,
            Self::Seq(items) => items.is_empty(),
            Self::Map(map) => map.is_empty(),
            _ => false,
        }
    }

    /// Short tag describing this value's shape, for error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Absent => "absent",
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "string",
            Self::Sym(_) => "symbol",
            Self::Seq(_) => "sequence",
            Self::Map(_) => "mapping",
            Self::Change(_) => "change",
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::Seq(v)
    }
}

impl From<Map> for Value {
    fn from(v: Map) -> Self {
        Self::Map(v)
    }
}

/// Convert a plain JSON document into a tree value.
///
/// Object keys consisting entirely of ASCII digits become `Key::Index`,
/// so positional indices survive a round trip through JSON (where all
/// object keys are strings). JSON `null` becomes [`Value::Null`], never
/// the absence sentinel.
impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Int(i)
                } else {
                    Self::Float(n.as_f64().unwrap_or(0.0))
                }
            }
            serde_json::Value::String(s) => Self::Str(s),
            serde_json::Value::Array(items) => {
                Self::Seq(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(fields) => Self::Map(
                fields
                    .into_iter()
                    .map(|(k, v)| (Key::parse(&k), Value::from(v)))
                    .collect(),
            ),
        }
    }
}
