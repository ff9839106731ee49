//! Batch result types for the two entry points.
//!
//! Every entry is tagged with the identifier of the schema or subject it came
//! from. Entries that hit a structural error are isolated into `errors` and
//! never abort their siblings.

use serde::{ser::SerializeMap, Deserialize, Serialize, Serializer};

use crate::{error::EligibilityError, subject::Subject, verdict::Reason};

/// One schema's verdict for the subject in `check_eligibility`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaVerdict {
    pub schema_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema_name: Option<String>,
    pub is_eligible: bool,
    pub reasons: Vec<Reason>,
}

/// One subject's outcome in `check_users_eligibility`.
///
/// The subject's own attributes are flattened into the entry. Ineligible
/// entries carry rendered reason strings. `subjectId` and `reasons` belong to
/// the entry: subject attributes with those names are left out of the
/// serialized object so every key appears once.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserEntry {
    pub subject_id: String,
    #[serde(flatten)]
    pub subject: Subject,
    #[serde(default)]
    pub reasons: Option<Vec<String>>,
}

impl UserEntry {
    const SUBJECT_ID_KEY: &'static str = "subjectId";
    const REASONS_KEY: &'static str = "reasons";
}

impl Serialize for UserEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let attributes: Vec<_> = self
            .subject
            .0
            .iter()
            .filter(|(key, _)| *key != Self::SUBJECT_ID_KEY && *key != Self::REASONS_KEY)
            .collect();

        let len = 1 + attributes.len() + usize::from(self.reasons.is_some());
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry(Self::SUBJECT_ID_KEY, &self.subject_id)?;
        for (key, value) in attributes {
            map.serialize_entry(key, value)?;
        }
        if let Some(reasons) = &self.reasons {
            map.serialize_entry(Self::REASONS_KEY, reasons)?;
        }
        map.end()
    }
}

/// A schema or subject isolated out of a batch by a structural error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchError {
    /// Identifier of the offending schema or subject.
    pub id: String,
    /// Error kind tag, e.g. `"UnsupportedCondition"`.
    pub kind: String,
    pub message: String,
}

impl BatchError {
    pub fn new(id: impl Into<String>, error: &EligibilityError) -> Self {
        Self {
            id: id.into(),
            kind: error.kind().to_string(),
            message: error.to_string(),
        }
    }
}

/// Result of evaluating one subject against many schemas.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaBatchResult {
    pub eligible: Vec<SchemaVerdict>,
    pub ineligible: Vec<SchemaVerdict>,
    pub errors: Vec<BatchError>,
}

/// Result of evaluating many subjects against one schema.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserBatchResult {
    pub eligible_users: Vec<UserEntry>,
    pub ineligible_users: Vec<UserEntry>,
    pub errors: Vec<BatchError>,
}

/// Outcome of structural validation of one benefit schema document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    /// One entry per violation. Empty when valid.
    pub errors: Vec<String>,
}

impl ValidationReport {
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }
}
