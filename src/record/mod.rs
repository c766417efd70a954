mod validation;

use crate::error::AssessmentError;
use crate::record::validation::validate_finite;
use serde::{Deserialize, Serialize};
use strum_macros::Display;
use validator::Validate;

/// Biological sex as reported on the requisition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Display)]
pub enum Sex {
    M,
    F,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Display)]
pub enum SmokingStatus {
    Never,
    Former,
    Current,
}

impl SmokingStatus {
    pub fn is_smoker(&self) -> bool {
        !matches!(self, SmokingStatus::Never)
    }
}

/// Yes/No history flags, mirroring the intake form wire values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Display, Default)]
pub enum HistoryFlag {
    Yes,
    #[default]
    No,
}

impl HistoryFlag {
    pub fn is_positive(&self) -> bool {
        matches!(self, HistoryFlag::Yes)
    }
}

/// One patient's clinical and liquid-biopsy biomarker profile.
///
/// Deserialized from the camelCase JSON the intake layer emits. Fields
/// without a `#[serde(default)]` are required; optional fields resolve
/// to their documented defaults before validation runs, so downstream
/// decision logic never sees a hole. Range constraints are enforced by
/// [`Validate`]; construct via [`PatientRecord::from_json`] to get both
/// steps in one call.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct PatientRecord {
    pub age: u32,
    pub sex: Sex,
    pub smoking_status: SmokingStatus,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub smoking_pack_years: f64,
    /// Total circulating cell-free DNA, ng/mL.
    #[serde(rename = "cfDNATotal")]
    #[validate(range(min = 0.0))]
    pub cf_dna_total: f64,
    /// Fragmentomics composite, typically in [0, 1].
    #[validate(custom(function = "validate_finite"))]
    pub fragment_score: f64,
    #[validate(custom(function = "validate_finite"))]
    pub short_fragment_ratio: f64,
    #[serde(default)]
    pub tp53_mut: bool,
    #[serde(default, rename = "tp53VAF")]
    #[validate(range(min = 0.0, max = 1.0))]
    pub tp53_vaf: f64,
    #[serde(default)]
    pub kras_mut: bool,
    #[serde(default, rename = "krasVAF")]
    #[validate(range(min = 0.0, max = 1.0))]
    pub kras_vaf: f64,
    /// Carcinoembryonic antigen, ng/mL.
    #[validate(range(min = 0.0))]
    pub cea: f64,
    #[serde(default = "default_bmi")]
    #[validate(range(min = 0.0))]
    pub bmi: f64,
    #[serde(default)]
    pub family_history: HistoryFlag,
    #[serde(default)]
    pub previous_cancer: HistoryFlag,
    #[serde(default)]
    pub chronic_lung_disease: HistoryFlag,
}

fn default_bmi() -> f64 {
    25.0
}

impl PatientRecord {
    /// Deserializes and validates a record from its JSON wire form.
    ///
    /// # Errors
    /// Returns [`AssessmentError::InvalidInput`] naming the offending
    /// field when a required field is missing, an enum value is
    /// unknown, or a measurement is outside its declared range.
    pub fn from_json(raw: &str) -> Result<Self, AssessmentError> {
        let record: PatientRecord =
            serde_json::from_str(raw).map_err(|e| AssessmentError::InvalidInput(e.to_string()))?;
        record.validate()?;
        Ok(record)
    }
}
