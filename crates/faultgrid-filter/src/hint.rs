//! Tri-state parsing of loose boolean scheduler hints.
//!
//! Scheduler hints arrive as free-form strings supplied by API callers.
//! The anti-affinity constraint is bypassed only by an *explicitly*
//! falsy hint, so the parser must keep "absent", "truthy", and "falsy"
//! apart instead of collapsing everything into a bool.

use serde::{Deserialize, Serialize};

const TRUE_STRINGS: &[&str] = &["1", "t", "true", "on", "y", "yes"];
const FALSE_STRINGS: &[&str] = &["0", "f", "false", "off", "n", "no"];

/// Parsed value of a boolean-like scheduler hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HintValue {
    True,
    False,
    /// Hint absent, or present with text that is neither truthy nor
    /// falsy. Malformed hints are deliberately not an error.
    Unset,
}

impl HintValue {
    /// Parse a raw hint value. Matching is case-insensitive and ignores
    /// surrounding whitespace.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::Unset;
        };
        let normalized = raw.trim().to_ascii_lowercase();
        if TRUE_STRINGS.contains(&normalized.as_str()) {
            Self::True
        } else if FALSE_STRINGS.contains(&normalized.as_str()) {
            Self::False
        } else {
            Self::Unset
        }
    }

    pub fn is_explicitly_false(self) -> bool {
        self == Self::False
    }
}
