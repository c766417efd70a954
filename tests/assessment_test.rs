use pretty_assertions::assert_eq;
use pulmorisk::assessment::{Assessor, RiskTier, Urgency, assess};
use pulmorisk::config::AssessmentConfig;
use pulmorisk::model::rule_based::RuleBasedModel;
use pulmorisk::record::PatientRecord;
use rstest::{fixture, rstest};

#[fixture]
fn loaded_record() -> PatientRecord {
    PatientRecord::from_json(
        r#"{
            "age": 68, "sex": "M", "smokingStatus": "Former",
            "smokingPackYears": 35, "cfDNATotal": 32.5,
            "fragmentScore": 0.72, "shortFragmentRatio": 0.38,
            "tp53Mut": true, "tp53VAF": 0.12,
            "krasMut": true, "krasVAF": 0.08, "cea": 6.8
        }"#,
    )
    .unwrap()
}

#[fixture]
fn single_factor_record() -> PatientRecord {
    // only the age predicate fires
    PatientRecord::from_json(
        r#"{
            "age": 60, "sex": "F", "smokingStatus": "Never",
            "cfDNATotal": 10.0, "fragmentScore": 0.2,
            "shortFragmentRatio": 0.2, "cea": 2.0
        }"#,
    )
    .unwrap()
}

#[rstest]
fn heavily_loaded_record_is_high_tier(loaded_record: PatientRecord) {
    let report = assess(0.75, &loaded_record, None, &AssessmentConfig::default()).unwrap();

    assert_eq!(report.risk_score, 75);
    assert_eq!(report.risk_tier, RiskTier::High);
    assert_eq!(report.urgency, Urgency::Immediate);
    assert_eq!(report.risk_factors.len(), 8);
    assert!(
        report
            .clinical_alerts
            .contains(&"Multiple oncogene mutations detected".to_string()),
        "got: {:?}",
        report.clinical_alerts
    );
    // three or more corroborating factors raise the heuristic confidence
    assert_eq!(report.confidence, 0.92);
}

#[rstest]
fn mid_probability_without_ensemble_is_flagged(single_factor_record: PatientRecord) {
    let report = assess(
        0.50,
        &single_factor_record,
        None,
        &AssessmentConfig::default(),
    )
    .unwrap();

    assert_eq!(report.risk_score, 50);
    assert_eq!(report.risk_tier, RiskTier::Moderate);
    assert_eq!(report.confidence, 0.85);
    assert!((report.uncertainty - 0.15).abs() < 1e-9);
    assert!(report.is_uncertain);
}

#[rstest]
fn disagreeing_ensemble_forces_uncertain_tier(single_factor_record: PatientRecord) {
    let members = [0.1, 0.9, 0.5, 0.2];
    let report = assess(
        0.425,
        &single_factor_record,
        Some(&members),
        &AssessmentConfig::default(),
    )
    .unwrap();

    assert_eq!(report.risk_tier, RiskTier::Uncertain);
    assert_eq!(report.urgency, Urgency::Immediate);
    assert!(report.is_uncertain);
    assert!(report.uncertainty > 0.15);
}

#[rstest]
fn missing_required_field_yields_no_report() {
    let result = PatientRecord::from_json(
        r#"{
            "age": 68, "sex": "M", "smokingStatus": "Former",
            "fragmentScore": 0.72, "shortFragmentRatio": 0.38, "cea": 6.8
        }"#,
    );
    let err = result.unwrap_err();
    assert!(err.to_string().contains("cfDNATotal"), "got: {err}");
}

#[rstest]
fn rule_model_end_to_end_produces_serializable_report(loaded_record: PatientRecord) {
    let report = Assessor::default()
        .assess_with_model(&RuleBasedModel, &loaded_record)
        .unwrap();

    let value = serde_json::to_value(&report).unwrap();
    for key in [
        "risk_score",
        "risk_tier",
        "urgency",
        "confidence",
        "uncertainty",
        "is_uncertain",
        "analysis",
        "recommendations",
        "risk_factors",
        "clinical_alerts",
    ] {
        assert!(value.get(key).is_some(), "missing key {key}");
    }
    assert!(!report.recommendations.is_empty());

    // deterministic end to end
    let again = Assessor::default()
        .assess_with_model(&RuleBasedModel, &loaded_record)
        .unwrap();
    assert_eq!(report, again);
}

#[rstest]
fn custom_tier_bounds_shift_classification(single_factor_record: PatientRecord) {
    let config = AssessmentConfig {
        moderate_risk_bound: 20,
        high_risk_bound: 40,
        ..AssessmentConfig::default()
    };
    let report = assess(0.50, &single_factor_record, None, &config).unwrap();
    assert_eq!(report.risk_tier, RiskTier::High);
}
