//! Benefit schema types: criteria, rules, and condition operators.
//!
//! A benefit schema is validated structurally before it reaches the engine,
//! then deserialized into `BenefitSchema`. The engine reads it but never
//! mutates it.
//!
//! Example document:
//! ```json
//! {
//!   "id": "pm-scholarship",
//!   "eligibility": [{
//!     "type": "personal",
//!     "description": "Applicant must be an adult",
//!     "criteria": { "name": "age", "condition": "gte", "conditionValues": 18 }
//!   }]
//! }
//! ```

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Grouping under which a criterion is declared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Personal,
    Educational,
    Economical,
    Geographical,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Personal => "personal",
            Category::Educational => "educational",
            Category::Economical => "economical",
            Category::Geographical => "geographical",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The inner object of a wrapped condition: `{ "condition": "gte" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WrappedCondition {
    pub condition: String,
}

/// A condition as it appears on the wire.
///
/// Producers send either the bare operator string or an object carrying it,
/// possibly nested one level under `criteria`. Any other JSON shape lands in
/// `Malformed` so the error surfaces when the criterion is evaluated, not
/// when the whole schema is parsed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OperatorSpec {
    Plain(String),
    Wrapped { condition: String },
    NestedWrapped { criteria: WrappedCondition },
    Malformed(Value),
}

impl OperatorSpec {
    /// The raw condition string, or `None` for a malformed shape.
    pub fn condition(&self) -> Option<&str> {
        match self {
            OperatorSpec::Plain(s) => Some(s),
            OperatorSpec::Wrapped { condition } => Some(condition),
            OperatorSpec::NestedWrapped { criteria } => Some(&criteria.condition),
            OperatorSpec::Malformed(_) => None,
        }
    }
}

impl From<&str> for OperatorSpec {
    fn from(s: &str) -> Self {
        OperatorSpec::Plain(s.to_string())
    }
}

/// The comparison a criterion applies to one subject attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Subject attribute to read.
    #[serde(rename = "name", alias = "field")]
    pub field: String,

    /// Comparison operator. `None` when the document omits it.
    #[serde(
        rename = "condition",
        alias = "operator",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub operator: Option<OperatorSpec>,

    /// A primitive or an ordered sequence of primitives.
    #[serde(rename = "conditionValues", alias = "operands", default)]
    pub operands: Value,
}

/// One eligibility rule within a benefit schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    #[serde(rename = "type", alias = "category")]
    pub category: Category,

    /// Human-readable statement of the rule, echoed into reasons.
    #[serde(default)]
    pub description: String,

    #[serde(rename = "criteria", alias = "rule")]
    pub rule: Rule,

    /// Document types accepted as proof. When present, the subject must hold
    /// at least one verified document of one of these types.
    #[serde(
        rename = "allowedProofs",
        alias = "requiredProofTypes",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub required_proof_types: Option<Vec<String>>,
}

/// The eligibility view of a benefit schema document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenefitSchema {
    /// Document identifier. Numeric ids are accepted and kept in their
    /// decimal form.
    #[serde(
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Criteria in declaration order. All must pass.
    pub eligibility: Vec<Criterion>,
}

fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(de::Error::custom(format!(
            "expected a string or number id, got {other}"
        ))),
    }
}

impl BenefitSchema {
    /// Identifier used to key batch entries: the document `id`, falling back
    /// to the schema's position in the batch.
    pub fn identifier(&self, index: usize) -> String {
        self.id
            .clone()
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| format!("#{index}"))
    }

    /// Same as `identifier`, read from a raw document that may not
    /// deserialize.
    pub fn identifier_of(raw: &Value, index: usize) -> String {
        match raw.get("id") {
            Some(Value::String(s)) if !s.is_empty() => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => format!("#{index}"),
        }
    }
}
