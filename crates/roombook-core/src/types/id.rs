//! Identifier normalisation.
//!
//! The remote API hands out numeric ids while the calendar widget and
//! route parameters carry them as strings. Everything is compared in the
//! normalised string form so `1` and `"1"` name the same facility.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// An id as it appears on the wire: either a JSON number or a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IdValue {
    /// A signed integer id.
    Integer(i64),
    /// A non-integer number; only whole values normalise cleanly.
    Float(f64),
    /// A textual id.
    Text(String),
}

impl IdValue {
    /// Returns the canonical string form.
    pub fn normalized(&self) -> String {
        match self {
            Self::Integer(n) => n.to_string(),
            Self::Float(f) if f.fract() == 0.0 && f.is_finite() => format!("{f:.0}"),
            Self::Float(f) => f.to_string(),
            Self::Text(s) => normalize_id(s),
        }
    }
}

impl fmt::Display for IdValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.normalized())
    }
}

/// Normalises a textual id by trimming surrounding whitespace.
pub fn normalize_id(raw: &str) -> String {
    raw.trim().to_string()
}

/// Serde helper: accepts a number or string and yields the normalised string.
pub fn deserialize_normalized<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    IdValue::deserialize(deserializer).map(|v| v.normalized())
}

/// Serde helper for optional ids.
pub fn deserialize_normalized_opt<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<IdValue>::deserialize(deserializer).map(|v| v.map(|v| v.normalized()))
}
