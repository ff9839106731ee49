//! End-to-end checks with the standard components wired together.

use serde_json::{json, Value};

use eligibility_cli::{
    build_engine, collect_schemas, config::CliConfig, parse_json, subject_from_value,
    subjects_from_value,
};
use eligibility_contracts::{
    error::EligibilityError,
    options::{EvaluationOptions, Locale},
    verdict::{Operator, ReasonKind},
};
use eligibility_core::EligibilityEngine;

const SCHOLARSHIP: &str = include_str!("../fixtures/post-matric-scholarship.json");
const APPLICANTS: &str = include_str!("../fixtures/applicants.json");
const SCHEMES: &str = include_str!("../fixtures/schemes.json");
const APPLICANT: &str = include_str!("../fixtures/applicant.json");

// ── Helpers ───────────────────────────────────────────────────────────────────

fn engine() -> EligibilityEngine {
    build_engine(&CliConfig::default()).unwrap()
}

fn fixture(contents: &str) -> Value {
    parse_json(contents, "fixture").unwrap()
}

fn reasons_of(result: &eligibility_contracts::batch::UserBatchResult, id: &str) -> Vec<String> {
    result
        .ineligible_users
        .iter()
        .find(|entry| entry.subject_id == id)
        .and_then(|entry| entry.reasons.clone())
        .unwrap_or_else(|| panic!("no ineligible entry for {id}"))
}

// ── Many subjects, one schema ─────────────────────────────────────────────────

#[test]
fn age_threshold_batch_partitions_subjects() {
    let subjects = subjects_from_value(json!([{ "age": 16 }, { "age": 20 }])).unwrap();
    let schema = json!({
        "id": "adults",
        "eligibility": [{
            "type": "personal",
            "description": "Applicant must be an adult",
            "criteria": { "name": "age", "condition": "gte", "conditionValues": 18 }
        }]
    });

    let result = engine()
        .check_users_eligibility(&subjects, &schema, &EvaluationOptions::default())
        .unwrap();

    assert_eq!(result.eligible_users.len(), 1);
    assert_eq!(result.eligible_users[0].subject.get("age"), Some(&json!(20)));
    assert_eq!(
        reasons_of(&result, "#0"),
        vec!["personal: Required: >= 18, Got: 16 (Applicant must be an adult)".to_string()]
    );

    let rendered = serde_json::to_value(&result).unwrap();
    assert_eq!(rendered["eligibleUsers"][0]["age"], 20);
    assert_eq!(rendered["ineligibleUsers"][0]["age"], 16);
}

#[test]
fn scholarship_reports_every_failed_criterion() {
    let subjects = subjects_from_value(fixture(APPLICANTS)).unwrap();

    let result = engine()
        .check_users_eligibility(&subjects, &fixture(SCHOLARSHIP), &EvaluationOptions::default())
        .unwrap();

    assert!(result.errors.is_empty(), "unexpected errors: {:?}", result.errors);
    let eligible: Vec<_> = result.eligible_users.iter().map(|e| e.subject_id.as_str()).collect();
    assert_eq!(eligible, vec!["asha"]);

    assert_eq!(
        reasons_of(&result, "ravi"),
        vec![
            "personal: Required: >= 18, Got: 16 (Applicant must be at least 18 years old)",
            "educational: Required: between 60, 100, Got: 55 (Class 12 marks between 60 and 100)",
            "economical: No verified document found for income; accepted proofs: incomeCertificate \
             (Annual family income at most 250000)",
        ]
    );

    assert_eq!(
        reasons_of(&result, "meena"),
        vec![
            "personal: Required: in sc, st, obc, Got: general (Applicant must belong to an eligible category)",
            "educational: Missing required field: marks (Class 12 marks between 60 and 100)",
            "geographical: Required: = bihar, Got: assam (Resident of Bihar)",
        ]
    );
}

#[test]
fn hindi_locale_renders_reasons_in_hindi() {
    let subjects = subjects_from_value(json!([{ "id": "u-1" }])).unwrap();
    let options = EvaluationOptions { locale: Locale::Hi, ..Default::default() };

    let result = engine()
        .check_users_eligibility(&subjects, &fixture(SCHOLARSHIP), &options)
        .unwrap();

    let reasons = reasons_of(&result, "u-1");
    assert_eq!(reasons.len(), 5);
    assert!(reasons[0].contains("आवश्यक फ़ील्ड अनुपस्थित है: age"), "got: {}", reasons[0]);
}

#[test]
fn unknown_operator_is_isolated_per_subject() {
    let subjects = subjects_from_value(json!([
        { "id": "u-1", "name": "Asha" },
        { "id": "u-2" }
    ]))
    .unwrap();
    let schema = json!({
        "id": "prefix",
        "eligibility": [{
            "type": "personal",
            "description": "Name starts with A",
            "criteria": { "name": "name", "condition": "startswith", "conditionValues": "a" }
        }]
    });

    let result = engine()
        .check_users_eligibility(&subjects, &schema, &EvaluationOptions::default())
        .unwrap();

    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].id, "u-1");
    assert_eq!(result.errors[0].kind, "UnsupportedCondition");
    assert_eq!(result.errors[0].message, "Unsupported condition: startswith");
    assert_eq!(reasons_of(&result, "u-2").len(), 1);
}

#[test]
fn malformed_schema_rejects_users_batch() {
    let subjects = subjects_from_value(json!([{ "age": 20 }])).unwrap();

    let result = engine().check_users_eligibility(
        &subjects,
        &json!({ "id": "draft" }),
        &EvaluationOptions::default(),
    );

    assert!(matches!(result, Err(EligibilityError::SchemaInvalid { .. })));
}

#[test]
fn numeric_schema_id_is_accepted_by_users_batch() {
    let subjects = subjects_from_value(json!([{ "age": 30 }])).unwrap();
    let schema = json!({
        "id": 42,
        "eligibility": [{
            "type": "personal",
            "description": "Applicant must be an adult",
            "criteria": { "name": "age", "condition": "gte", "conditionValues": 18 }
        }]
    });

    let result = engine()
        .check_users_eligibility(&subjects, &schema, &EvaluationOptions::default())
        .unwrap();

    assert_eq!(result.eligible_users.len(), 1);
    assert!(result.errors.is_empty());
}

// ── One subject, many schemas ─────────────────────────────────────────────────

#[test]
fn schemes_batch_partitions_and_records_errors() {
    let subject = subject_from_value(fixture(APPLICANT)).unwrap();
    let schemas = collect_schemas(vec![fixture(SCHEMES)]);

    let result = engine().check_eligibility(&subject, &schemas, &EvaluationOptions::default());

    assert_eq!(result.eligible.len(), 1);
    assert_eq!(result.eligible[0].schema_id, "youth-skilling");
    assert_eq!(result.eligible[0].schema_name.as_deref(), Some("Youth skilling grant"));

    assert_eq!(result.ineligible.len(), 1);
    let reason = &result.ineligible[0].reasons[0];
    assert_eq!(reason.kind, ReasonKind::ConditionFailed);
    assert_eq!(reason.operator, Some(Operator::Gte));
    assert_eq!(reason.observed_value, Some(json!(24)));
    assert_eq!(reason.required_value, Some(json!(60)));

    let errors: Vec<_> = result.errors.iter().map(|e| (e.id.as_str(), e.kind.as_str())).collect();
    assert_eq!(
        errors,
        vec![("draft-scheme", "SchemaInvalid"), ("name-prefix", "UnsupportedCondition")]
    );
}

#[test]
fn numeric_schema_id_keys_the_verdict() {
    let subject = subject_from_value(json!({ "age": 30 })).unwrap();
    let schemas = vec![json!({
        "id": 42,
        "eligibility": [{
            "type": "personal",
            "description": "Applicant must be an adult",
            "criteria": { "name": "age", "condition": "gte", "conditionValues": 18 }
        }]
    })];

    let result = engine().check_eligibility(&subject, &schemas, &EvaluationOptions::default());

    assert!(result.errors.is_empty(), "{:?}", result.errors);
    assert_eq!(result.eligible.len(), 1);
    assert_eq!(result.eligible[0].schema_id, "42");
}

#[test]
fn between_with_wrong_arity_lands_in_errors() {
    let subject = subject_from_value(json!({ "age": 5 })).unwrap();
    let schemas = vec![json!({
        "id": "bad-range",
        "eligibility": [{
            "type": "personal",
            "description": "Age range",
            "criteria": { "name": "age", "condition": "between", "conditionValues": [1] }
        }]
    })];

    let result = engine().check_eligibility(&subject, &schemas, &EvaluationOptions::default());

    assert_eq!(result.errors.len(), 1);
    assert_eq!(result.errors[0].kind, "BetweenRequiresArray");
}

// ── Determinism ───────────────────────────────────────────────────────────────

#[test]
fn repeated_evaluation_is_byte_identical() {
    let subjects = subjects_from_value(fixture(APPLICANTS)).unwrap();
    let schema = fixture(SCHOLARSHIP);
    let options = EvaluationOptions::default();

    let first = engine().check_users_eligibility(&subjects, &schema, &options).unwrap();
    let second = engine().check_users_eligibility(&subjects, &schema, &options).unwrap();

    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn parallel_engine_matches_sequential() {
    let config = CliConfig { parallel: true, ..Default::default() };
    let subject = subject_from_value(fixture(APPLICANT)).unwrap();
    let schemas = collect_schemas(vec![fixture(SCHEMES), fixture(SCHOLARSHIP)]);
    let options = EvaluationOptions::default();

    let sequential = engine().check_eligibility(&subject, &schemas, &options);
    let parallel = build_engine(&config).unwrap().check_eligibility(&subject, &schemas, &options);

    assert_eq!(sequential, parallel);
}

// ── Input handling ────────────────────────────────────────────────────────────

#[test]
fn non_object_subjects_are_rejected() {
    match subjects_from_value(json!([{ "age": 1 }, 42])) {
        Err(EligibilityError::InvalidInput { reason }) => assert!(reason.contains("42")),
        other => panic!("expected InvalidInput, got {:?}", other),
    }
    assert_eq!(subjects_from_value(json!({ "age": 1 })).unwrap().len(), 1);
}

#[test]
fn invalid_json_names_its_source() {
    match parse_json("{ not json", "subjects.json") {
        Err(EligibilityError::InvalidInput { reason }) => assert!(reason.contains("subjects.json")),
        other => panic!("expected InvalidInput, got {:?}", other),
    }
}
