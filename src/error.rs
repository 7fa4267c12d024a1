//! Error type for the one fallible entry point, [`crate::Trie::try_put`].
//!
//! The core operations described in SPEC_FULL.md §7 encode every steady
//! state outcome as `Option` absence; there is no situation under the
//! invariants in §3 that makes `put` itself fail (an empty key is a legal
//! key). `PutError` exists so a caller that wants to validate keys (e.g.
//! reject a key over some size limit) before committing a `put` has a
//! `Result`-returning entry point to hang that validation off of, without
//! forcing a signature change onto the infallible `put`.

use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PutError {
    /// Reserved for caller-supplied key validation; the core itself never
    /// produces this variant.
    KeyRejected(String),
}

impl fmt::Display for PutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PutError::KeyRejected(reason) => write!(f, "key rejected: {reason}"),
        }
    }
}

impl Error for PutError {}
