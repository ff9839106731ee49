//! Batch entry points built on the single-pair aggregator.
//!
//! - `check_eligibility`: one subject, many schema documents
//! - `check_users_eligibility`: many subjects, one schema document
//!
//! Entries are independent. With `parallel` set they are mapped on the rayon
//! pool; either way results are collected in input order before being
//! partitioned, so output order is deterministic. A structural error in one
//! entry is isolated into `errors` and never aborts the rest of the batch.

use rayon::prelude::*;
use serde_json::Value;
use tracing::{debug, warn};

use eligibility_contracts::{
    batch::{BatchError, SchemaBatchResult, SchemaVerdict, UserBatchResult, UserEntry},
    error::EligibilityResult,
    options::EvaluationOptions,
    schema::BenefitSchema,
    subject::Subject,
};

use crate::engine::EligibilityEngine;
use crate::format::render_reasons;

impl EligibilityEngine {
    /// Evaluate one subject against every schema document in `schemas`.
    ///
    /// Each document is validated structurally first; a document that fails
    /// validation, or whose criteria raise an evaluator error, is recorded in
    /// `errors` under its `id` (or `#<index>`) and the batch continues.
    pub fn check_eligibility(
        &self,
        subject: &Subject,
        schemas: &[Value],
        options: &EvaluationOptions,
    ) -> SchemaBatchResult {
        debug!(schemas = schemas.len(), locale = %options.locale, "checking subject eligibility");

        let outcomes = self.map_entries(schemas, |index, document| {
            self.evaluate_schema_document(subject, document, index, options)
        });

        let mut result = SchemaBatchResult::default();
        for outcome in outcomes {
            match outcome {
                Ok(verdict) if verdict.is_eligible => result.eligible.push(verdict),
                Ok(verdict) => result.ineligible.push(verdict),
                Err(error) => result.errors.push(error),
            }
        }

        debug!(
            eligible = result.eligible.len(),
            ineligible = result.ineligible.len(),
            errors = result.errors.len(),
            "subject eligibility check complete"
        );
        result
    }

    /// Evaluate every subject in `subjects` against one schema document.
    ///
    /// # Errors
    ///
    /// Returns `SchemaInvalid` when the schema document fails structural
    /// validation, since every pair would fail the same way. Evaluator errors
    /// for individual subjects are recorded in `errors` under the subject's
    /// identifier.
    pub fn check_users_eligibility(
        &self,
        subjects: &[Subject],
        schema: &Value,
        options: &EvaluationOptions,
    ) -> EligibilityResult<UserBatchResult> {
        let schema_id = BenefitSchema::identifier_of(schema, 0);
        let schema = self.load_schema(schema, &schema_id)?;

        debug!(
            schema_id = %schema_id,
            subjects = subjects.len(),
            locale = %options.locale,
            "checking users eligibility"
        );

        let outcomes = self.map_entries(subjects, |index, subject| {
            let subject_id = subject.identifier(index);
            match self.evaluate_subject_against_schema(subject, &schema, options) {
                Ok(verdict) => Ok((
                    verdict.is_eligible,
                    UserEntry {
                        subject_id,
                        subject: subject.clone(),
                        reasons: (!verdict.is_eligible).then(|| render_reasons(&verdict.reasons)),
                    },
                )),
                Err(e) => {
                    warn!(
                        schema_id = %schema_id,
                        subject_id = %subject_id,
                        kind = e.kind(),
                        error = %e,
                        "subject isolated from batch"
                    );
                    Err(BatchError::new(subject_id, &e))
                }
            }
        });

        let mut result = UserBatchResult::default();
        for outcome in outcomes {
            match outcome {
                Ok((true, entry)) => result.eligible_users.push(entry),
                Ok((false, entry)) => result.ineligible_users.push(entry),
                Err(error) => result.errors.push(error),
            }
        }

        debug!(
            schema_id = %schema_id,
            eligible = result.eligible_users.len(),
            ineligible = result.ineligible_users.len(),
            errors = result.errors.len(),
            "users eligibility check complete"
        );
        Ok(result)
    }

    fn evaluate_schema_document(
        &self,
        subject: &Subject,
        document: &Value,
        index: usize,
        options: &EvaluationOptions,
    ) -> Result<SchemaVerdict, BatchError> {
        let schema_id = BenefitSchema::identifier_of(document, index);

        let verdict = self.load_schema(document, &schema_id).and_then(|schema| {
            self.evaluate_subject_against_schema(subject, &schema, options)
                .map(|verdict| (schema, verdict))
        });

        match verdict {
            Ok((schema, verdict)) => Ok(SchemaVerdict {
                schema_id,
                schema_name: schema.name,
                is_eligible: verdict.is_eligible,
                reasons: verdict.reasons,
            }),
            Err(e) => {
                warn!(
                    schema_id = %schema_id,
                    kind = e.kind(),
                    error = %e,
                    "schema isolated from batch"
                );
                Err(BatchError::new(schema_id, &e))
            }
        }
    }

    fn map_entries<T, R, F>(&self, items: &[T], f: F) -> Vec<R>
    where
        T: Sync,
        R: Send,
        F: Fn(usize, &T) -> R + Sync + Send,
    {
        if self.parallel {
            items.par_iter().enumerate().map(|(i, item)| f(i, item)).collect()
        } else {
            items.iter().enumerate().map(|(i, item)| f(i, item)).collect()
        }
    }
}
