//! Fold a raw parse tree into a canonical [`Tree`].
//!
//! Work happens bottom-up. Options become `(key, scalar)` pairs, blocks become
//! `(kind, mapping)` pairs (wrapped in one more mapping level when the block
//! is named), and each level's pairs are folded into a mapping:
//!
//! - a new key is inserted as-is
//! - a repeated key is combined with the existing value by [`merge_value`]
//!
//! `merge_value` deep-merges two mappings, lets a mapping be absorbed into a
//! list's elements by [`merge_into_array`], and turns every other pairing into
//! a flat list.

use std::mem;

use crate::parser::ast::{RawDocument, RawNode};
use crate::value::{Mapping, Tree, Value};

/// Merge a parsed document into a tree. Never fails.
pub fn merge(doc: RawDocument) -> Tree {
    merge_options(Mapping::new(), doc.children.into_iter().map(node_to_pair))
}

fn node_to_pair(node: RawNode) -> (String, Value) {
    match node {
        RawNode::Option { key, value } => (key, Value::Scalar(value.into_text())),
        RawNode::Block {
            kind,
            name,
            children,
        } => {
            let body = Value::Mapping(merge_options(
                Mapping::new(),
                children.into_iter().map(node_to_pair),
            ));
            if name.is_empty() {
                (kind, body)
            } else {
                (kind, Value::Mapping(Mapping::from([(name, body)])))
            }
        }
    }
}

/// Fold `updates`, in order, into `existing`.
pub fn merge_options<I>(mut existing: Mapping, updates: I) -> Mapping
where
    I: IntoIterator<Item = (String, Value)>,
{
    for (key, value) in updates {
        match existing.get_mut(&key) {
            Some(slot) => {
                // Take the current value out, leaving a placeholder until the merge is done.
                let current = mem::replace(slot, Value::List(Vec::new()));
                *slot = merge_value(current, value);
            }
            None => {
                existing.insert(key, value);
            }
        }
    }
    existing
}

/// Combine an existing value with a repeated one.
pub fn merge_value(target: Value, value: Value) -> Value {
    match (target, value) {
        (Value::Mapping(target), Value::Mapping(value)) => {
            Value::Mapping(merge_options(target, value))
        }
        (Value::List(target), Value::Mapping(value)) => {
            Value::List(merge_into_array(target, value))
        }
        (target, value) => {
            let mut items = target.into_items();
            items.extend(value.into_items());
            Value::List(items)
        }
    }
}

/// Absorb the keys of `update` into the elements of `list`.
///
/// Each key goes to the first element, left to right, that can take it: a
/// mapping holding the key has that key's value merged, and a scalar equal to
/// the key becomes `{key: value}`. Keys no element took are appended as one
/// trailing mapping.
pub fn merge_into_array(mut list: Vec<Value>, mut update: Mapping) -> Vec<Value> {
    for item in list.iter_mut() {
        if update.is_empty() {
            break;
        }
        match item {
            Value::Mapping(map) => {
                for (key, slot) in map.iter_mut() {
                    if let Some(incoming) = update.shift_remove(key) {
                        let current = mem::replace(slot, Value::List(Vec::new()));
                        *slot = merge_value(current, incoming);
                    }
                }
            }
            Value::Scalar(scalar) => {
                if let Some(incoming) = update.shift_remove(scalar.as_str()) {
                    let key = mem::take(scalar);
                    *item = Value::Mapping(Mapping::from([(key, incoming)]));
                }
            }
            Value::List(_) => {}
        }
    }

    if !update.is_empty() {
        list.push(Value::Mapping(update));
    }
    list
}
