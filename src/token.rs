// src/token.rs
//! Interned token handle.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A named category handle handed out by a [`crate::TokenRegistry`].
///
/// Tokens are immutable and cheap to clone. Equality, ordering and hashing
/// all go by name; within one registry equal names also share one allocation
/// (see [`Token::ptr_eq`]).
#[derive(Clone)]
pub struct Token {
    name: Arc<str>,
}

impl Token {
    /// Only the registry mints tokens.
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: Arc::from(name),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// True when both handles point at the same interned entry.
    pub fn ptr_eq(a: &Token, b: &Token) -> bool {
        Arc::ptr_eq(&a.name, &b.name)
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        Token::ptr_eq(self, other) || self.name == other.name
    }
}

impl Eq for Token {}

impl Hash for Token {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl PartialOrd for Token {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Token {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Token").field(&&*self.name).finish()
    }
}
