//! The public façade: [`Trie`], wrapping an optional root [`Node`] and
//! exposing `get`, `put`/`try_put`, and `remove`.
//!
//! `put` and `remove` are expressed as a recursive descent on
//! `(current node, remaining key suffix)` that rebuilds only the spine on
//! the path being modified (SPEC_FULL.md §4.1.1); every off-path child is
//! reused by `Rc::clone`.

use std::rc::Rc;

use log::trace;

use crate::error::PutError;
use crate::node::{Children, Node};
use crate::value::{Typed, Value};

/// An immutable, persistent key -> value map.
///
/// Cloning a `Trie` is `O(1)` (it clones an `Option<Rc<Node>>`); distinct
/// clones may share structure freely since nodes are never mutated after
/// construction.
#[derive(Debug, Clone, Default)]
pub struct Trie {
    root: Option<Rc<Node>>,
}

impl Trie {
    /// An empty trie.
    pub fn new() -> Self {
        Trie { root: None }
    }

    fn from_root(root: Option<Rc<Node>>) -> Self {
        Trie { root }
    }

    /// Whether the trie holds no key-value pairs (an absent root).
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Looks up `key`, returning a reference to the stored value only if it
    /// was stored under type `T`. A type mismatch, a missing key, and an
    /// empty trie are all reported as `None` -- never as an error.
    pub fn get<T: Typed>(&self, key: impl AsRef<[u8]>) -> Option<&T> {
        let key = key.as_ref();
        let mut current = self.root.as_ref()?;
        for &byte in key {
            current = current.child(byte)?;
        }
        T::from_value(current.value()?)
    }

    /// Returns a new `Trie` with `key` mapped to `value`, sharing every
    /// off-path subtree with `self`. `self` is left unchanged and remains
    /// fully usable.
    pub fn put<T: Typed>(&self, key: impl AsRef<[u8]>, value: T) -> Trie {
        let key = key.as_ref();
        let new_root = put_rec(self.root.as_ref(), key, value.into_value());
        Trie::from_root(Some(new_root))
    }

    /// Fallible variant of [`Trie::put`]. Never fails today (see
    /// [`PutError`]); provided as the `Result`-returning entry point a
    /// caller-supplied key validator would hook into.
    pub fn try_put<T: Typed>(&self, key: impl AsRef<[u8]>, value: T) -> Result<Trie, PutError> {
        Ok(self.put(key, value))
    }

    /// Returns a new `Trie` with `key` removed, pruning any node left both
    /// valueless and childless by the removal (cascading up to the root if
    /// necessary). If `key` was already absent, the returned `Trie` shares
    /// the receiver's root outright.
    pub fn remove(&self, key: impl AsRef<[u8]>) -> Trie {
        let key = key.as_ref();
        match self.root.as_ref() {
            None => self.clone(),
            Some(root) => Trie::from_root(remove_rec(root, key)),
        }
    }
}

/// `put_rec(current, key, value)` is the terminal/non-terminal recursion
/// from SPEC_FULL.md §4.1.1. `current` is `None` exactly when the caller is
/// descending into previously-absent territory.
fn put_rec(current: Option<&Rc<Node>>, key: &[u8], value: Value) -> Rc<Node> {
    match key.split_first() {
        None => {
            // Terminal step: rebuild (or create) this node as a value node,
            // keeping whatever children it already had.
            let children = current.map(|n| n.children().clone()).unwrap_or_default();
            trace!("put: writing value node, {} children kept", children.len());
            Node::with_value(children, value)
        }
        Some((&byte, rest)) => {
            let old_child = current.and_then(|n| n.child(byte));
            let new_child = put_rec(old_child, rest, value);

            let mut children: Children = current.map(|n| n.children().clone()).unwrap_or_default();
            children.insert(byte, new_child);

            match current.and_then(|n| n.value()) {
                Some(v) => {
                    trace!("put: preserving existing value while rebuilding spine at byte {byte:#04x}");
                    Node::with_value(children, v.clone())
                }
                None => Node::internal(children),
            }
        }
    }
}

/// `remove_rec(current, key)` returns `None` when `current` should be
/// pruned entirely (it became both valueless and childless), matching the
/// cleanup policy in SPEC_FULL.md §4.1 / invariant 1.
fn remove_rec(current: &Rc<Node>, key: &[u8]) -> Option<Rc<Node>> {
    match key.split_first() {
        None => {
            // Terminal step: drop the value, keep children if any remain.
            if current.children().is_empty() {
                trace!("remove: pruning leaf value node, no children to keep");
                None
            } else {
                Some(Node::internal(current.children().clone()))
            }
        }
        Some((&byte, rest)) => {
            let old_child = match current.child(byte) {
                Some(child) => child,
                // The key is absent under this byte; nothing to remove,
                // so this node is unchanged (not pruned).
                None => return Some(current.clone()),
            };
            let new_child = remove_rec(old_child, rest);

            let mut children: Children = current.children().clone();
            match new_child {
                Some(child) => {
                    children.insert(byte, child);
                }
                None => {
                    trace!("remove: cascading prune of edge {byte:#04x}");
                    children.remove(&byte);
                }
            }

            match current.value() {
                Some(v) => Some(Node::with_value(children, v.clone())),
                None if children.is_empty() => None,
                None => Some(Node::internal(children)),
            }
        }
    }
}
