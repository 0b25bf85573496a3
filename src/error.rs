// src/error.rs
//! Error types for token registration and event dispatch.

use crate::overlay::OverlayKind;

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, InvalidNameError>;

/// Why a name was refused.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvalidNameKind {
    /// The name was empty and the registry is configured to reject empty names.
    Empty,
    /// The name contains a character outside `[a-z_]`.
    IllegalChar { ch: char, offset: usize },
}

/// Raised when a name fails the `[a-z_]` character rule.
/// Nothing is registered when this is returned.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid token name {name:?}: {}", describe(.kind))]
pub struct InvalidNameError {
    pub name: String,
    pub kind: InvalidNameKind,
}

impl InvalidNameError {
    pub(crate) fn new(name: &str, kind: InvalidNameKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
        }
    }
}

fn describe(kind: &InvalidNameKind) -> String {
    match kind {
        InvalidNameKind::Empty => "name is empty".to_string(),
        InvalidNameKind::IllegalChar { ch, offset } => {
            format!("illegal character {ch:?} at byte {offset}, only a-z and _ are allowed")
        }
    }
}

/// Errors raised by listeners misusing a [`crate::bus::Dispatch`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BusError {
    #[error("{0:?} events cannot be cancelled")]
    NotCancellable(OverlayKind),
}
