//! Verdict and reason types.
//!
//! A `Verdict` is the outcome for one (subject, schema) pair. `reasons` is
//! empty iff `is_eligible` is true, and each `Reason` carries enough
//! structure to re-render the explanation in any locale.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::schema::Category;

/// Canonical comparison operator, resolved from the wire `OperatorSpec`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Equals,
    In,
    Gte,
    Lte,
    Gt,
    Lt,
    Between,
}

impl Operator {
    /// Canonical name, as serialized.
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equals => "equals",
            Operator::In => "in",
            Operator::Gte => "gte",
            Operator::Lte => "lte",
            Operator::Gt => "gt",
            Operator::Lt => "lt",
            Operator::Between => "between",
        }
    }

    /// Symbol used when rendering "Required: >= 18".
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Equals => "=",
            Operator::In => "in",
            Operator::Gte => ">=",
            Operator::Lte => "<=",
            Operator::Gt => ">",
            Operator::Lt => "<",
            Operator::Between => "between",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a criterion failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReasonKind {
    /// The subject has no attribute named by the criterion.
    MissingField,
    /// No verified document of an accepted type was found.
    DocumentInvalid,
    /// The comparison evaluated to false.
    ConditionFailed,
}

/// A structured explanation of one failed criterion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reason {
    pub kind: ReasonKind,
    pub category: Category,
    pub field: String,
    /// Locale-rendered explanation.
    pub message: String,
    /// The criterion's description.
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed_value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operator: Option<Operator>,
}

impl Reason {
    /// Flatten to `"{category}: {message} ({description})"`.
    pub fn render(&self) -> String {
        format!("{}: {} ({})", self.category, self.message, self.description)
    }
}

/// Eligibility outcome for one (subject, schema) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    pub is_eligible: bool,
    pub reasons: Vec<Reason>,
}

impl Verdict {
    /// Build a verdict from collected reasons. Eligible iff none were collected.
    pub fn from_reasons(reasons: Vec<Reason>) -> Self {
        Self {
            is_eligible: reasons.is_empty(),
            reasons,
        }
    }
}
