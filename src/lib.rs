//! An immutable, persistent key -> value map implemented as a copy-on-write
//! trie indexed by byte-string keys.
//!
//! Every mutation ([`Trie::put`], [`Trie::remove`]) returns a logically new
//! [`Trie`] that shares unchanged subtrees with its predecessor. No existing
//! node is ever mutated in place; see [`node`] for the sharing discipline.

pub mod error;
pub mod node;
pub mod trie;
pub mod value;

pub use error::PutError;
pub use trie::Trie;
pub use value::Value;
