use crate::config::AssessmentConfig;
use crate::error::AssessmentError;

/// How sure the system is about one prediction, and where that number
/// came from. Ensemble-derived estimates may override the score-based
/// tier; heuristic ones never do.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct UncertaintyEstimate {
    pub confidence: f64,
    pub uncertainty: f64,
    pub is_uncertain: bool,
    pub ensemble_derived: bool,
}

/// Disagreement among ensemble members, measured as the population
/// standard deviation of their probability estimates.
pub(crate) fn from_ensemble(
    members: &[f64],
    config: &AssessmentConfig,
) -> Result<UncertaintyEstimate, AssessmentError> {
    if members.is_empty() {
        return Err(AssessmentError::invalid_field(
            "ensembleProbabilities",
            "member list must not be empty",
        ));
    }
    if let Some(bad) = members
        .iter()
        .find(|p| !p.is_finite() || !(0.0..=1.0).contains(*p))
    {
        return Err(AssessmentError::invalid_field(
            "ensembleProbabilities",
            format!("member probability {bad} is not a finite number in [0, 1]"),
        ));
    }

    let uncertainty = population_stddev(members);
    Ok(UncertaintyEstimate {
        confidence: 1.0 - uncertainty,
        uncertainty,
        is_uncertain: uncertainty > config.uncertainty_threshold,
        ensemble_derived: true,
    })
}

/// Fallback when no per-member probabilities are available: confidence
/// is fixed by how many corroborating risk factors were found, and any
/// score in the ambiguous mid band counts as uncertain.
pub(crate) fn from_heuristic(
    factor_count: usize,
    risk_score: u8,
    config: &AssessmentConfig,
) -> UncertaintyEstimate {
    let confidence = if factor_count >= 3 {
        config.strong_confidence
    } else {
        config.baseline_confidence
    };
    let ambiguous_band =
        (config.moderate_risk_bound..=config.high_risk_bound).contains(&risk_score);
    UncertaintyEstimate {
        confidence,
        uncertainty: 1.0 - confidence,
        is_uncertain: confidence < config.baseline_confidence || ambiguous_band,
        ensemble_derived: false,
    }
}

fn population_stddev(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    variance.sqrt()
}
