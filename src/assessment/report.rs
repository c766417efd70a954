use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Categorical risk bucket derived from the continuous probability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Display)]
pub enum RiskTier {
    Low,
    Moderate,
    High,
    /// Ensemble members disagreed too much for the score to be trusted.
    Uncertain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Display)]
pub enum Urgency {
    Routine,
    Moderate,
    Immediate,
}

/// Structured outcome of one assessment.
///
/// Constructed fresh per request and handed to the caller; nothing is
/// persisted. `uncertainty` is either the ensemble-member stddev or
/// `1 - confidence` from the heuristic, and `risk_score` is already
/// clamped into the configured floor/ceiling band.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RiskReport {
    pub risk_score: u8,
    pub risk_tier: RiskTier,
    pub urgency: Urgency,
    pub confidence: f64,
    pub uncertainty: f64,
    pub is_uncertain: bool,
    pub analysis: String,
    pub recommendations: Vec<String>,
    pub risk_factors: Vec<String>,
    pub clinical_alerts: Vec<String>,
}
