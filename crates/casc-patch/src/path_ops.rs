//! Tolerant path addressing into mapping trees.
//!
//! Both helpers treat a partially or fully nonexistent path as "already
//! absent, nothing to do" — a lookup returns `None` and a deletion is a
//! silent no-op, never an error.

use casc_types::{Key, KeyPath, Map, Value};

/// Look up the value at `path`, or `None` if any key along the way is
/// missing or an intermediate value is not a mapping. The root path
/// addresses no entry and yields `None`.
pub fn get_path<'a>(tree: &'a Map, path: &KeyPath) -> Option<&'a Value> {
    let (first, rest) = path.keys().split_first()?;
    let mut current = tree.get(first)?;
    for key in rest {
        current = current.get(key)?;
    }
    Some(current)
}

/// Delete the entry at `path`, cascading removal upward through ancestors
/// that became empty. Returns `true` if an entry was deleted; a missing
/// path (including the root path) returns `false` and leaves the tree
/// untouched.
pub fn delete_path(tree: &mut Map, path: &KeyPath) -> bool {
    delete_keys(tree, path.keys())
}

fn delete_keys(map: &mut Map, keys: &[Key]) -> bool {
    let Some((head, rest)) = keys.split_first() else {
        return false;
    };
    if rest.is_empty() {
        return map.remove(head).is_some();
    }
    let Some(child) = map.get_mut(head) else {
        return false;
    };
    let Some(child_map) = child.as_map_mut() else {
        return false;
    };
    let deleted = delete_keys(child_map, rest);
    let now_empty = child_map.is_empty();
    if deleted && now_empty {
        map.remove(head);
    }
    deleted
}
