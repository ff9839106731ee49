//! The eligibility aggregator: one subject against one benefit schema.
//!
//! Criteria are walked in schema order. Each one contributes at most one
//! `Reason`:
//!
//!   lookup field → [missing? MissingField] → proofs → [none verified? DocumentInvalid]
//!     → resolve operator → evaluate → [false? ConditionFailed]
//!
//! There is no short-circuit: every criterion is evaluated so the caller gets
//! the complete explanation in one pass. Evaluator errors (missing or unknown
//! operator, malformed `between` operands) are not business failures and
//! propagate to the caller unchanged.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use eligibility_contracts::{
    error::{EligibilityError, EligibilityResult},
    options::{EvaluationOptions, Locale},
    schema::{BenefitSchema, Criterion},
    subject::Subject,
    verdict::{Operator, Reason, ReasonKind, Verdict},
};

use crate::format::display_value;
use crate::messages;
use crate::traits::{ConditionEvaluator, DocumentVerifier, SchemaValidator, Translator};

/// Evaluates subjects against benefit schemas.
///
/// Holds the collaborators behind `Arc` so a single engine can be shared
/// across threads. Construct one at startup and reuse it for every call.
pub struct EligibilityEngine {
    pub(crate) conditions: Arc<dyn ConditionEvaluator>,
    pub(crate) validator: Arc<dyn SchemaValidator>,
    pub(crate) translator: Arc<dyn Translator>,
    pub(crate) documents: Arc<dyn DocumentVerifier>,
    pub(crate) parallel: bool,
}

impl EligibilityEngine {
    /// Create an engine that evaluates batch entries sequentially.
    pub fn new(
        conditions: Arc<dyn ConditionEvaluator>,
        validator: Arc<dyn SchemaValidator>,
        translator: Arc<dyn Translator>,
        documents: Arc<dyn DocumentVerifier>,
    ) -> Self {
        Self {
            conditions,
            validator,
            translator,
            documents,
            parallel: false,
        }
    }

    /// Enables or disables parallel evaluation of batch entries.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Evaluate `subject` against every criterion of `schema`.
    ///
    /// # Errors
    ///
    /// Returns the condition evaluator's error for the first criterion whose
    /// operator or operands are malformed. Missing fields, missing proofs, and
    /// failed comparisons are reported as reasons, not errors.
    pub fn evaluate_subject_against_schema(
        &self,
        subject: &Subject,
        schema: &BenefitSchema,
        options: &EvaluationOptions,
    ) -> EligibilityResult<Verdict> {
        let locale = options.locale;
        let mut reasons = Vec::new();

        for criterion in &schema.eligibility {
            let field = criterion.rule.field.as_str();

            let value = match subject.get(field) {
                None => {
                    reasons.push(self.missing_field(criterion, locale));
                    continue;
                }
                Some(Value::Null) if options.strict_checking => {
                    reasons.push(self.missing_field(criterion, locale));
                    continue;
                }
                Some(value) => value,
            };

            if let Some(allowed) = &criterion.required_proof_types {
                if !self.documents.has_verified_document(subject, allowed) {
                    reasons.push(self.document_invalid(criterion, allowed, locale));
                    continue;
                }
            }

            let operator = self.conditions.resolve(criterion.rule.operator.as_ref(), locale)?;
            let operands = &criterion.rule.operands;
            if !self.conditions.evaluate(value, operator, operands, locale)? {
                reasons.push(self.condition_failed(criterion, value, operator, locale));
            }
        }

        debug!(
            criteria = schema.eligibility.len(),
            failed = reasons.len(),
            "subject evaluated against schema"
        );

        Ok(Verdict::from_reasons(reasons))
    }

    /// Validate a raw benefit schema document and deserialize it.
    ///
    /// # Errors
    ///
    /// Returns `SchemaInvalid` naming `schema_id` when structural validation
    /// fails or the document does not match `BenefitSchema`.
    pub fn load_schema(&self, document: &Value, schema_id: &str) -> EligibilityResult<BenefitSchema> {
        let report = self.validator.validate(document);
        if !report.is_valid {
            warn!(
                schema_id = %schema_id,
                violations = report.errors.len(),
                "benefit schema failed structural validation"
            );
            return Err(EligibilityError::SchemaInvalid {
                schema_id: schema_id.to_string(),
                errors: report.errors,
            });
        }

        serde_json::from_value(document.clone()).map_err(|e| EligibilityError::SchemaInvalid {
            schema_id: schema_id.to_string(),
            errors: vec![e.to_string()],
        })
    }

    // ── Reason construction ───────────────────────────────────────────────────

    fn missing_field(&self, criterion: &Criterion, locale: Locale) -> Reason {
        let field = criterion.rule.field.as_str();
        Reason {
            kind: ReasonKind::MissingField,
            category: criterion.category,
            field: field.to_string(),
            message: self
                .translator
                .translate(locale, messages::MISSING_FIELD, &[("field", field)]),
            description: criterion.description.clone(),
            observed_value: None,
            required_value: Some(criterion.rule.operands.clone()),
            operator: None,
        }
    }

    fn document_invalid(&self, criterion: &Criterion, allowed: &[String], locale: Locale) -> Reason {
        let proofs = allowed.join(", ");
        Reason {
            kind: ReasonKind::DocumentInvalid,
            category: criterion.category,
            field: criterion.rule.field.clone(),
            message: self.translator.translate(
                locale,
                messages::DOCUMENT_INVALID,
                &[("field", criterion.rule.field.as_str()), ("proofs", proofs.as_str())],
            ),
            description: criterion.description.clone(),
            observed_value: None,
            required_value: Some(Value::from(allowed.to_vec())),
            operator: None,
        }
    }

    fn condition_failed(
        &self,
        criterion: &Criterion,
        observed: &Value,
        operator: Operator,
        locale: Locale,
    ) -> Reason {
        let required = display_value(&criterion.rule.operands);
        let got = display_value(observed);
        Reason {
            kind: ReasonKind::ConditionFailed,
            category: criterion.category,
            field: criterion.rule.field.clone(),
            message: self.translator.translate(
                locale,
                messages::CONDITION_FAILED,
                &[
                    ("field", criterion.rule.field.as_str()),
                    ("operator", operator.symbol()),
                    ("required", required.as_str()),
                    ("observed", got.as_str()),
                ],
            ),
            description: criterion.description.clone(),
            observed_value: Some(observed.clone()),
            required_value: Some(criterion.rule.operands.clone()),
            operator: Some(operator),
        }
    }
}
