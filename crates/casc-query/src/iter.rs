//! Lazy depth-first iteration over a tree under a multi-key pattern.
//!
//! Each pattern segment is consumed against the current mapping node:
//! wildcards expand to every key present, key lists to the listed keys
//! that are present, fixed keys to themselves when present. Absent keys
//! are silently skipped; a non-mapping value with segments remaining is a
//! dead end. The iterator is finite and restartable — the tree is fully
//! materialized and a fresh call re-traverses from scratch.

use casc_types::{Key, KeyPath, Map, Value};

use crate::error::{QueryError, QueryResult};
use crate::pattern::{Pattern, Segment};

/// Run `pattern` against `tree`, yielding `(path, value)` pairs for every
/// address the pattern resolves to.
///
/// With `only_maps` set, hits whose value is not a mapping are filtered
/// out. Errors only on an empty pattern.
pub fn query<'a>(tree: &'a Map, pattern: &'a Pattern, only_maps: bool) -> QueryResult<Query<'a>> {
    let Some((head, rest)) = pattern.segments().split_first() else {
        return Err(QueryError::EmptyPattern);
    };
    let root = Frame {
        node: tree,
        keys: candidate_keys(tree, head).into_iter(),
        rest,
        prefix: KeyPath::root(),
    };
    Ok(Query {
        only_maps,
        stack: vec![root],
    })
}

/// Lazy iterator over pattern hits. Created by [`query`].
pub struct Query<'a> {
    only_maps: bool,
    stack: Vec<Frame<'a>>,
}

struct Frame<'a> {
    node: &'a Map,
    keys: std::vec::IntoIter<Key>,
    rest: &'a [Segment],
    prefix: KeyPath,
}

impl<'a> Iterator for Query<'a> {
    type Item = (KeyPath, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let top = self.stack.last_mut()?;
            let Some(key) = top.keys.next() else {
                self.stack.pop();
                continue;
            };

            let node = top.node;
            let rest = top.rest;
            let prefix = top.prefix.clone();

            // Candidate keys were filtered to present ones at frame
            // creation; absent keys are skipped, never an error.
            let Some(value) = node.get(&key) else {
                continue;
            };

            if rest.is_empty() {
                if !self.only_maps || value.is_map() {
                    return Some((prefix.child(key), value));
                }
                continue;
            }

            // Segments remain: only mappings can be descended into.
            let Value::Map(child) = value else {
                continue;
            };
            let (head, tail) = (&rest[0], &rest[1..]);
            self.stack.push(Frame {
                node: child,
                keys: candidate_keys(child, head).into_iter(),
                rest: tail,
                prefix: prefix.child(key),
            });
        }
    }
}

fn candidate_keys(node: &Map, segment: &Segment) -> Vec<Key> {
    match segment {
        Segment::Any => node.keys().cloned().collect(),
        Segment::AnyOf(keys) => keys
            .iter()
            .filter(|k| node.contains_key(k))
            .cloned()
            .collect(),
        Segment::Exact(key) => {
            if node.contains_key(key) {
                vec![key.clone()]
            } else {
                Vec::new()
            }
        }
    }
}
