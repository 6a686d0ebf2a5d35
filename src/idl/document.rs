//! Opaque IDL document
//!
//! The harvester never interprets an IDL beyond a few top-level fields used
//! for progress output. Everything else is written back verbatim.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A fetched IDL, kept as raw JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdlDocument(Value);

/// Top-level facts about an IDL for display
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct IdlSummary {
    pub name: Option<String>,
    pub version: Option<String>,
    pub instructions: usize,
}

impl IdlDocument {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// Serialize with two-space indentation.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.0)
    }

    /// Read name, version and instruction count.
    ///
    /// New-format IDLs (0.1.0 spec) keep name and version under `metadata`;
    /// legacy IDLs keep them at the root.
    pub fn summary(&self) -> IdlSummary {
        let field = |key: &str| {
            self.0
                .get("metadata")
                .and_then(|m| m.get(key))
                .or_else(|| self.0.get(key))
                .and_then(Value::as_str)
                .map(str::to_string)
        };

        IdlSummary {
            name: field("name"),
            version: field("version"),
            instructions: self
                .0
                .get("instructions")
                .and_then(Value::as_array)
                .map_or(0, Vec::len),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_summary_new_format() {
        let doc = IdlDocument::new(json!({
            "address": "JUP6LkbZbjS1jKKwapdHNy74zcZ3tLUZoi5QNyVTaV4",
            "metadata": { "name": "jupiter", "version": "0.1.0", "spec": "0.1.0" },
            "instructions": [{ "name": "route" }, { "name": "swap" }]
        }));

        let summary = doc.summary();
        assert_eq!(summary.name.as_deref(), Some("jupiter"));
        assert_eq!(summary.version.as_deref(), Some("0.1.0"));
        assert_eq!(summary.instructions, 2);
    }

    #[test]
    fn test_summary_legacy_format() {
        let doc = IdlDocument::new(json!({
            "version": "0.3.0",
            "name": "marinade_finance",
            "instructions": [{ "name": "deposit" }],
            "metadata": { "address": "MarBmsSgKXdrN1egZf5sqe1TMai9K1rChYNDJgjq7aD" }
        }));

        let summary = doc.summary();
        assert_eq!(summary.name.as_deref(), Some("marinade_finance"));
        assert_eq!(summary.version.as_deref(), Some("0.3.0"));
        assert_eq!(summary.instructions, 1);
    }

    #[test]
    fn test_summary_of_unrecognized_json() {
        let summary = IdlDocument::new(json!(["not", "an", "idl"])).summary();
        assert_eq!(summary, IdlSummary::default());
    }

    #[test]
    fn test_pretty_json_uses_two_space_indent() {
        let doc = IdlDocument::new(json!({ "version": "0.1.0" }));
        assert_eq!(doc.to_pretty_json().unwrap(), "{\n  \"version\": \"0.1.0\"\n}");
    }
}
