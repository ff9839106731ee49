//! The standard condition evaluator.
//!
//! `StandardConditionEvaluator` implements `ConditionEvaluator` from
//! eligibility-core. Evaluation of one criterion:
//!
//! 1. Infer the comparison type from the operand (`between`: from `min`).
//! 2. Coerce the subject value (first element if it is a sequence) and the
//!    operand scalars to that type.
//! 3. Apply the operator:
//!    - `Equals`         → coerced subject == coerced first operand
//!    - `In`             → coerced subject ∈ coerced operand sequence
//!    - `Gte/Lte/Gt/Lt`  → ordering against the first operand
//!    - `Between`        → `min <= subject <= max`; operands must be `[min, max]`
//!
//! Values that cannot be ordered (NaN, mixed kinds) fail every comparison.

use std::cmp::Ordering;
use std::sync::Arc;

use serde_json::Value;

use eligibility_contracts::{
    error::{EligibilityError, EligibilityResult},
    options::Locale,
    schema::OperatorSpec,
    verdict::Operator,
};
use eligibility_core::{
    messages,
    traits::{ConditionEvaluator, Translator},
};

use crate::coerce::{coerce, first_scalar, infer_comparison_type, Coerced, ComparisonType};
use crate::operator;

/// The built-in `ConditionEvaluator`.
///
/// Holds only a translator for rendering error messages; evaluation itself
/// is a pure function of its inputs.
pub struct StandardConditionEvaluator {
    translator: Arc<dyn Translator>,
}

impl StandardConditionEvaluator {
    pub fn new(translator: Arc<dyn Translator>) -> Self {
        Self { translator }
    }

    /// Resolve `spec` and evaluate in one call.
    ///
    /// ```rust,ignore
    /// let passed = evaluator.evaluate_spec(&json!(16), &"gte".into(), &json!(18), Locale::En)?;
    /// assert!(!passed);
    /// ```
    pub fn evaluate_spec(
        &self,
        value: &Value,
        spec: &OperatorSpec,
        operands: &Value,
        locale: Locale,
    ) -> EligibilityResult<bool> {
        let operator = self.resolve(Some(spec), locale)?;
        self.evaluate(value, operator, operands, locale)
    }

    fn between_error(&self, locale: Locale) -> EligibilityError {
        EligibilityError::BetweenRequiresArray {
            message: self.translator.translate(locale, messages::BETWEEN_REQUIRES_ARRAY, &[]),
        }
    }
}

impl ConditionEvaluator for StandardConditionEvaluator {
    fn resolve(&self, spec: Option<&OperatorSpec>, locale: Locale) -> EligibilityResult<Operator> {
        operator::resolve(spec, self.translator.as_ref(), locale)
    }

    fn evaluate(
        &self,
        value: &Value,
        operator: Operator,
        operands: &Value,
        locale: Locale,
    ) -> EligibilityResult<bool> {
        let target = infer_comparison_type(operands);
        let subject = coerce(value, target);

        let passed = match operator {
            Operator::Equals => subject == coerce(first_scalar(operands), target),

            Operator::In => match operands {
                Value::Array(items) => items.iter().any(|item| coerce(item, target) == subject),
                scalar => coerce(scalar, target) == subject,
            },

            Operator::Gte => compares(&subject, operands, target, |o| o.is_ge()),
            Operator::Lte => compares(&subject, operands, target, |o| o.is_le()),
            Operator::Gt => compares(&subject, operands, target, |o| o.is_gt()),
            Operator::Lt => compares(&subject, operands, target, |o| o.is_lt()),

            Operator::Between => {
                let [min, max] = match operands {
                    Value::Array(items) if items.len() == 2 => [&items[0], &items[1]],
                    _ => return Err(self.between_error(locale)),
                };
                let min = coerce(min, target);
                let max = coerce(max, target);
                min <= subject && subject <= max
            }
        };

        Ok(passed)
    }
}

fn compares(
    subject: &Coerced,
    operands: &Value,
    target: ComparisonType,
    accept: impl Fn(Ordering) -> bool,
) -> bool {
    subject
        .partial_cmp(&coerce(first_scalar(operands), target))
        .is_some_and(accept)
}
