//! Operator normalization and alias table.
//!
//! A raw condition is normalized by lower-casing and stripping all
//! whitespace, so `"Greater Than Equals"`, `"greaterthanequals"` and `"gte"`
//! resolve to the same canonical `Operator`.
//!
//! | aliases                                        | operator  |
//! |------------------------------------------------|-----------|
//! | `equals`, `equal`, `=`, `==`                   | `Equals`  |
//! | `in`, `includes`                               | `In`      |
//! | `gte`, `>=`, `greaterthanequal(s)`             | `Gte`     |
//! | `lte`, `<=`, `lessthanequal(s)`                | `Lte`     |
//! | `gt`, `>`, `greaterthan`                       | `Gt`      |
//! | `lt`, `<`, `lessthan`                          | `Lt`      |
//! | `between`                                      | `Between` |

use eligibility_contracts::{
    error::{EligibilityError, EligibilityResult},
    options::Locale,
    schema::OperatorSpec,
    verdict::Operator,
};
use eligibility_core::{messages, traits::Translator};

/// Lower-case `raw` and remove every whitespace character.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Look up an already-normalized condition in the alias table.
pub fn lookup(normalized: &str) -> Option<Operator> {
    let operator = match normalized {
        "equals" | "equal" | "=" | "==" => Operator::Equals,
        "in" | "includes" => Operator::In,
        "gte" | ">=" | "greaterthanequal" | "greaterthanequals" => Operator::Gte,
        "lte" | "<=" | "lessthanequal" | "lessthanequals" => Operator::Lte,
        "gt" | ">" | "greaterthan" => Operator::Gt,
        "lt" | "<" | "lessthan" => Operator::Lt,
        "between" => Operator::Between,
        _ => return None,
    };
    Some(operator)
}

/// Resolve a wire condition into its canonical operator, rendering any error
/// message in `locale`.
pub fn resolve(
    spec: Option<&OperatorSpec>,
    translator: &dyn Translator,
    locale: Locale,
) -> EligibilityResult<Operator> {
    let Some(spec) = spec else {
        return Err(EligibilityError::ConditionRequired {
            message: translator.translate(locale, messages::CONDITION_REQUIRED, &[]),
        });
    };

    let Some(raw) = spec.condition() else {
        return Err(EligibilityError::InvalidConditionStructure {
            message: translator.translate(locale, messages::INVALID_CONDITION_STRUCTURE, &[]),
        });
    };

    let normalized = normalize(raw);
    if normalized.is_empty() {
        return Err(EligibilityError::ConditionRequired {
            message: translator.translate(locale, messages::CONDITION_REQUIRED, &[]),
        });
    }

    lookup(&normalized).ok_or_else(|| EligibilityError::UnsupportedCondition {
        message: translator.translate(
            locale,
            messages::UNSUPPORTED_CONDITION,
            &[("condition", normalized.as_str())],
        ),
        condition: normalized,
    })
}
