//! Proptest strategies producing populated trees, for property tests over
//! code that consumes these collections. Compiled behind the `proptest`
//! feature, which is on by default.

use core::fmt;

use proptest::collection::vec;
use proptest::prelude::*;

use crate::{MapTree, SeqTree, SetTree};

/// Sequences of up to `len` values drawn from `item`.
pub fn seq_tree<T, S>(
    node_capacity: usize,
    item: S,
    len: usize,
) -> impl Strategy<Value = SeqTree<T>>
where
    T: fmt::Debug,
    S: Strategy<Value = T>,
{
    vec(item, 0..=len).prop_map(move |values| {
        let mut tree = SeqTree::new(node_capacity);
        for value in values {
            tree.push(value);
        }
        tree
    })
}

/// Sets of up to `len` keys drawn from `key`.
pub fn set_tree<K, S>(node_capacity: usize, key: S, len: usize) -> impl Strategy<Value = SetTree<K>>
where
    K: Ord + Clone + fmt::Debug,
    S: Strategy<Value = K>,
{
    vec(key, 0..=len).prop_map(move |keys| {
        let mut tree = SetTree::new(node_capacity);
        tree.extend(keys);
        tree
    })
}

/// Maps of up to `len` entries drawn from `entry`.
pub fn map_tree<K, V, S>(
    node_capacity: usize,
    entry: S,
    len: usize,
) -> impl Strategy<Value = MapTree<K, V>>
where
    K: Ord + Clone + fmt::Debug,
    V: fmt::Debug,
    S: Strategy<Value = (K, V)>,
{
    vec(entry, 0..=len).prop_map(move |entries| {
        let mut tree = MapTree::new(node_capacity);
        tree.extend(entries);
        tree
    })
}
