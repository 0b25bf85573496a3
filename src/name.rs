// src/name.rs
//! Token name validation.
//!
//! Names may only contain lowercase ASCII letters and `_` (use `_` to
//! separate words). The check is a rejection scan: the first character
//! outside `[a-z_]` fails the name.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::EmptyNamePolicy;
use crate::error::{InvalidNameError, InvalidNameKind};

static ILLEGAL_CHAR: Lazy<Regex> =
    Lazy::new(|| Regex::new("[^a-z_]").expect("static name pattern compiles"));

/// The `[a-z_]` character rule plus the empty-name policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NameRule {
    empty: EmptyNamePolicy,
}

impl NameRule {
    /// Build a rule with the given empty-name policy.
    pub fn new(empty: EmptyNamePolicy) -> Self {
        Self { empty }
    }

    /// Fail with the first offending character, or with
    /// [`InvalidNameKind::Empty`] when empty names are rejected.
    pub fn check(&self, name: &str) -> Result<(), InvalidNameError> {
        if name.is_empty() && self.empty == EmptyNamePolicy::Reject {
            return Err(InvalidNameError::new(name, InvalidNameKind::Empty));
        }
        if let Some(m) = ILLEGAL_CHAR.find(name) {
            // the match is exactly one char
            let ch = m.as_str().chars().next().unwrap_or_default();
            return Err(InvalidNameError::new(
                name,
                InvalidNameKind::IllegalChar {
                    ch,
                    offset: m.start(),
                },
            ));
        }
        Ok(())
    }

    /// Shorthand for `check(name).is_ok()`.
    pub fn is_valid(&self, name: &str) -> bool {
        self.check(name).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_lowercase_and_underscore() {
        let rule = NameRule::default();
        for name in ["axe", "pickaxe", "tool_axe", "_", "__a__"] {
            assert!(rule.is_valid(name), "{name} should be valid");
        }
    }

    #[test]
    fn rejects_with_first_offender() {
        let rule = NameRule::default();
        let err = rule.check("tool-axe2").unwrap_err();
        assert_eq!(
            err.kind,
            InvalidNameKind::IllegalChar { ch: '-', offset: 4 }
        );

        let err = rule.check("Pickaxe").unwrap_err();
        assert_eq!(
            err.kind,
            InvalidNameKind::IllegalChar { ch: 'P', offset: 0 }
        );
    }

    #[test]
    fn non_ascii_offsets_are_byte_offsets() {
        let err = NameRule::default().check("ab\u{e9}").unwrap_err();
        assert_eq!(
            err.kind,
            InvalidNameKind::IllegalChar { ch: '\u{e9}', offset: 2 }
        );
    }

    #[test]
    fn empty_follows_policy() {
        let strict = NameRule::default();
        assert_eq!(strict.check("").unwrap_err().kind, InvalidNameKind::Empty);

        let literal = NameRule::new(EmptyNamePolicy::Allow);
        assert!(literal.check("").is_ok());
        assert!(literal.check(" ").is_err());
    }
}
