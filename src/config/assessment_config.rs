use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use validator::{Validate, ValidationError};

/// Tunable decision thresholds for the mapper.
///
/// The upstream model variants never agreed on these values, so they
/// are configuration rather than hard-coded law. Defaults: uncertainty
/// threshold 0.15, tier bounds 30/70 on the 0-100 score, score clamp
/// [5, 95], heuristic confidences 0.92/0.85.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Validate)]
#[validate(schema(function = "validate_threshold_ordering"))]
pub struct AssessmentConfig {
    /// Ensemble-disagreement stddev above which a prediction is flagged
    /// as uncertain.
    #[serde(default = "default_uncertainty_threshold")]
    #[validate(range(min = 0.0, max = 1.0))]
    pub uncertainty_threshold: f64,
    /// Lower edge of the High tier.
    #[serde(default = "default_high_risk_bound")]
    #[validate(range(max = 100))]
    pub high_risk_bound: u8,
    /// Lower edge of the Moderate tier.
    #[serde(default = "default_moderate_risk_bound")]
    #[validate(range(max = 100))]
    pub moderate_risk_bound: u8,
    /// Scores are clamped into [floor, ceiling] so the report never
    /// claims absolute certainty either way.
    #[serde(default = "default_score_floor")]
    #[validate(range(max = 100))]
    pub score_floor: u8,
    #[serde(default = "default_score_ceiling")]
    #[validate(range(max = 100))]
    pub score_ceiling: u8,
    /// Heuristic confidence when three or more risk factors are present.
    #[serde(default = "default_strong_confidence")]
    #[validate(range(min = 0.0, max = 1.0))]
    pub strong_confidence: f64,
    /// Heuristic confidence otherwise; also the cutoff below which the
    /// heuristic flags the prediction as uncertain.
    #[serde(default = "default_baseline_confidence")]
    #[validate(range(min = 0.0, max = 1.0))]
    pub baseline_confidence: f64,
}

impl Default for AssessmentConfig {
    fn default() -> AssessmentConfig {
        AssessmentConfig {
            uncertainty_threshold: default_uncertainty_threshold(),
            high_risk_bound: default_high_risk_bound(),
            moderate_risk_bound: default_moderate_risk_bound(),
            score_floor: default_score_floor(),
            score_ceiling: default_score_ceiling(),
            strong_confidence: default_strong_confidence(),
            baseline_confidence: default_baseline_confidence(),
        }
    }
}

fn default_uncertainty_threshold() -> f64 {
    0.15
}

fn default_high_risk_bound() -> u8 {
    70
}

fn default_moderate_risk_bound() -> u8 {
    30
}

fn default_score_floor() -> u8 {
    5
}

fn default_score_ceiling() -> u8 {
    95
}

fn default_strong_confidence() -> f64 {
    0.92
}

fn default_baseline_confidence() -> f64 {
    0.85
}

fn validate_threshold_ordering(config: &AssessmentConfig) -> Result<(), ValidationError> {
    if config.moderate_risk_bound >= config.high_risk_bound {
        let mut error = ValidationError::new("tier_bounds");
        error.add_param(Cow::from("moderate_risk_bound"), &config.moderate_risk_bound);
        error.add_param(Cow::from("high_risk_bound"), &config.high_risk_bound);
        return Err(error.with_message(Cow::Borrowed(
            "moderate_risk_bound must be below high_risk_bound",
        )));
    }
    if config.score_floor >= config.score_ceiling {
        let mut error = ValidationError::new("score_clamp");
        error.add_param(Cow::from("score_floor"), &config.score_floor);
        error.add_param(Cow::from("score_ceiling"), &config.score_ceiling);
        return Err(error.with_message(Cow::Borrowed("score_floor must be below score_ceiling")));
    }
    Ok(())
}
