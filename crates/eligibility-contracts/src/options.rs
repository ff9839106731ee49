//! Per-call evaluation options.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EligibilityError;

/// Language used to render reason messages and error text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Hi,
}

impl Locale {
    /// The catalog code for this locale (`"en"`, `"hi"`).
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Hi => "hi",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = EligibilityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" => Ok(Locale::En),
            "hi" => Ok(Locale::Hi),
            other => Err(EligibilityError::ConfigError {
                reason: format!("unsupported locale '{other}', expected 'en' or 'hi'"),
            }),
        }
    }
}

/// Options recognized by both batch entry points.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EvaluationOptions {
    /// When set, a field present with a JSON `null` value is reported as
    /// missing instead of being coerced.
    pub strict_checking: bool,

    /// Language for reasons and error messages.
    pub locale: Locale,
}
