mod alerts;
mod narrative;
mod report;
mod risk_factors;
mod uncertainty;

pub use report::{RiskReport, RiskTier, Urgency};

use crate::assessment::uncertainty::UncertaintyEstimate;
use crate::config::AssessmentConfig;
use crate::error::AssessmentError;
use crate::model::traits::RiskModel;
use crate::record::PatientRecord;
use log::{debug, info};
use validator::Validate;

/// Maps a risk probability and patient record to a structured report.
///
/// Pure and deterministic: identical inputs yield identical reports.
/// When `ensemble_probabilities` is supplied, uncertainty is the
/// population stddev of the members and may override the score-based
/// tier; without it a fixed confidence heuristic is used which never
/// overrides the tier.
///
/// # Errors
/// [`AssessmentError::InvalidInput`] when the probability is not a
/// finite number in [0, 1], the record or config fails validation, or
/// the member list is empty or contains an out-of-range value.
pub fn assess(
    probability: f64,
    record: &PatientRecord,
    ensemble_probabilities: Option<&[f64]>,
    config: &AssessmentConfig,
) -> Result<RiskReport, AssessmentError> {
    if !probability.is_finite() || !(0.0..=1.0).contains(&probability) {
        return Err(AssessmentError::invalid_field(
            "probability",
            format!("must be a finite number in [0, 1], got {probability}"),
        ));
    }
    record.validate()?;
    // config fields are pub, so a caller may hand over an inverted
    // clamp or tier ordering; reject it here rather than panic below
    config.validate()?;

    let risk_score = clamp_score(probability, config);
    let risk_factors = risk_factors::collect_risk_factors(record);

    let estimate = match ensemble_probabilities {
        Some(members) => uncertainty::from_ensemble(members, config)?,
        None => uncertainty::from_heuristic(risk_factors.len(), risk_score, config),
    };

    let (risk_tier, urgency) = classify(risk_score, &estimate, config);
    let clinical_alerts = alerts::collect_clinical_alerts(record, risk_tier);
    debug!(
        "assessed record: score {risk_score}, tier {risk_tier}, urgency {urgency}, {} factors, {} alerts",
        risk_factors.len(),
        clinical_alerts.len()
    );

    Ok(RiskReport {
        risk_score,
        risk_tier,
        urgency,
        confidence: estimate.confidence,
        uncertainty: estimate.uncertainty,
        is_uncertain: estimate.is_uncertain,
        analysis: narrative::analysis_for(
            risk_tier,
            risk_score,
            risk_factors.len(),
            estimate.uncertainty,
        ),
        recommendations: narrative::recommendations_for(risk_tier),
        risk_factors,
        clinical_alerts,
    })
}

fn clamp_score(probability: f64, config: &AssessmentConfig) -> u8 {
    let raw = (probability * 100.0).round() as u8;
    raw.clamp(config.score_floor, config.score_ceiling)
}

fn classify(
    risk_score: u8,
    estimate: &UncertaintyEstimate,
    config: &AssessmentConfig,
) -> (RiskTier, Urgency) {
    // an uncertain ensemble always overrides the score-based tier
    if estimate.ensemble_derived && estimate.is_uncertain {
        (RiskTier::Uncertain, Urgency::Immediate)
    } else if risk_score >= config.high_risk_bound {
        (RiskTier::High, Urgency::Immediate)
    } else if risk_score >= config.moderate_risk_bound {
        (RiskTier::Moderate, Urgency::Moderate)
    } else {
        (RiskTier::Low, Urgency::Routine)
    }
}

/// Convenience wrapper owning a config, for callers that assess many
/// records against the same thresholds.
#[derive(Debug, Clone, Default)]
pub struct Assessor {
    config: AssessmentConfig,
}

impl Assessor {
    pub fn new(config: AssessmentConfig) -> Assessor {
        Assessor { config }
    }

    pub fn assess(
        &self,
        probability: f64,
        record: &PatientRecord,
        ensemble_probabilities: Option<&[f64]>,
    ) -> Result<RiskReport, AssessmentError> {
        assess(probability, record, ensemble_probabilities, &self.config)
    }

    /// Runs the full flow: asks the model for its point estimate and
    /// any per-member probabilities, then maps them to a report.
    pub fn assess_with_model(
        &self,
        model: &dyn RiskModel,
        record: &PatientRecord,
    ) -> Result<RiskReport, AssessmentError> {
        let probability = model.predict_probability(record)?;
        let members = model.predict_member_probabilities(record)?;
        info!(
            "risk model produced probability {probability:.3} ({} members)",
            members.as_ref().map(|m| m.len()).unwrap_or(0)
        );
        assess(probability, record, members.as_deref(), &self.config)
    }
}
