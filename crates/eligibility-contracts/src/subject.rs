//! The subject under evaluation: a loosely typed attribute map.
//!
//! Subjects arrive as JSON objects supplied per call. The engine never
//! mutates them; all reads go through `Subject::get`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Attribute holding the subject's document collection.
pub const DOCUMENTS_FIELD: &str = "documents";

/// A user profile: attribute name to primitive, array, or nested document value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Subject(pub Map<String, Value>);

impl Subject {
    /// Look up an attribute. `None` only when the key is absent; a present
    /// `null` is returned as `Some(Value::Null)`.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Identifier used to key batch entries: the `id` or `userId` attribute,
    /// falling back to the subject's position in the batch.
    pub fn identifier(&self, index: usize) -> String {
        ["id", "userId"]
            .iter()
            .find_map(|key| match self.0.get(*key) {
                Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
                Some(Value::Number(n)) => Some(n.to_string()),
                _ => None,
            })
            .unwrap_or_else(|| format!("#{index}"))
    }

    /// Parse the `documents` attribute. Entries that do not have the expected
    /// shape are skipped.
    pub fn documents(&self) -> Vec<SubjectDocument> {
        match self.0.get(DOCUMENTS_FIELD) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| serde_json::from_value(item.clone()).ok())
                .collect(),
            _ => Vec::new(),
        }
    }
}

impl From<Map<String, Value>> for Subject {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// One entry of a subject's document collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectDocument {
    /// Document type, e.g. `"aadhaar"` or `"incomeCertificate"`.
    #[serde(alias = "type", alias = "docType")]
    pub document_type: String,

    /// Whether the credential has been verified upstream.
    #[serde(default, alias = "isVerified")]
    pub verified: bool,
}
