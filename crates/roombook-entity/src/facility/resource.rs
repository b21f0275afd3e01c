//! Bookable resource identifier.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

use roombook_core::types::{IdValue, normalize_id};

/// Opaque identifier naming a bookable facility.
///
/// Always held in normalised string form: numeric ids are stringified
/// and surrounding whitespace is trimmed, so `ResourceRef::from(1)` and
/// `ResourceRef::from(" 1")` compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ResourceRef(String);

impl ResourceRef {
    /// Creates a reference from any textual id.
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(normalize_id(raw.as_ref()))
    }

    /// Returns the normalised id.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the id is empty after normalisation.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ResourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ResourceRef {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<String> for ResourceRef {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<u64> for ResourceRef {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<i64> for ResourceRef {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl From<u32> for ResourceRef {
    fn from(id: u32) -> Self {
        Self(id.to_string())
    }
}

impl From<i32> for ResourceRef {
    fn from(id: i32) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for ResourceRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        IdValue::deserialize(deserializer).map(|v| Self(v.normalized()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_and_text_ids_match() {
        assert_eq!(ResourceRef::from(1u64), ResourceRef::from("1"));
        assert_eq!(ResourceRef::from(" 42 "), ResourceRef::from(42i32));
        assert_ne!(ResourceRef::from(1u64), ResourceRef::from("2"));
    }

    #[test]
    fn test_deserialize_number_or_string() {
        let ids: Vec<ResourceRef> = serde_json::from_str(r#"[1, "1", " 7"]"#).unwrap();
        assert_eq!(ids[0], ids[1]);
        assert_eq!(ids[2].as_str(), "7");
    }

    #[test]
    fn test_serializes_as_string() {
        let json = serde_json::to_string(&ResourceRef::from(3u64)).unwrap();
        assert_eq!(json, "\"3\"");
    }
}
