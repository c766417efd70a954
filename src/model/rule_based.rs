use crate::model::error::ModelError;
use crate::model::traits::RiskModel;
use crate::record::{PatientRecord, SmokingStatus};
use log::debug;

/// Logistic calibration applied to the weighted risk sum. Members use
/// different slopes and midpoints so their estimates disagree on
/// borderline records, which is what the disagreement-based uncertainty
/// measure needs.
#[derive(Debug, Clone, Copy)]
struct Calibration {
    slope: f64,
    midpoint: f64,
}

/// Deterministic rule engine standing in for a trained classifier.
///
/// The weights encode the usual clinical priors: smoking history and
/// mutation burden dominate, biomarkers and demographics contribute
/// proportionally. Three calibration variants act as ensemble members;
/// the point estimate comes from the middle one.
#[derive(Debug, Default)]
pub struct RuleBasedModel;

impl RuleBasedModel {
    const POINT: Calibration = Calibration {
        slope: 0.30,
        midpoint: 2.0,
    };

    const MEMBERS: [Calibration; 3] = [
        Calibration {
            slope: 0.25,
            midpoint: 2.5,
        },
        Self::POINT,
        Calibration {
            slope: 0.35,
            midpoint: 1.6,
        },
    ];

    fn weighted_risk(record: &PatientRecord) -> f64 {
        let smoking = match record.smoking_status {
            SmokingStatus::Current => 0.8,
            SmokingStatus::Former => 0.5,
            SmokingStatus::Never => 0.0,
        };

        let mut risk = 0.03 * (f64::from(record.age) - 50.0);
        risk += smoking + 0.02 * record.smoking_pack_years;
        risk += 0.01 * record.cf_dna_total;
        risk += 2.0 * record.fragment_score + 1.5 * record.short_fragment_ratio;
        if record.tp53_mut {
            risk += 1.5;
        }
        risk += 4.0 * record.tp53_vaf;
        if record.kras_mut {
            risk += 1.0;
        }
        risk += 3.0 * record.kras_vaf;
        risk += 0.05 * record.cea;
        risk += 0.02 * (record.bmi - 25.0);
        if record.family_history.is_positive() {
            risk += 0.6;
        }
        if record.previous_cancer.is_positive() {
            risk += 0.8;
        }
        if record.chronic_lung_disease.is_positive() {
            risk += 0.4;
        }
        risk
    }

    fn logistic(risk: f64, calibration: Calibration) -> f64 {
        1.0 / (1.0 + (-calibration.slope * (risk - calibration.midpoint)).exp())
    }
}

impl RiskModel for RuleBasedModel {
    fn predict_probability(&self, record: &PatientRecord) -> Result<f64, ModelError> {
        let risk = Self::weighted_risk(record);
        let probability = Self::logistic(risk, Self::POINT);
        debug!("rule-based risk sum {risk:.3} -> probability {probability:.3}");
        Ok(probability)
    }

    fn predict_member_probabilities(
        &self,
        record: &PatientRecord,
    ) -> Result<Option<Vec<f64>>, ModelError> {
        let risk = Self::weighted_risk(record);
        Ok(Some(
            Self::MEMBERS
                .iter()
                .map(|calibration| Self::logistic(risk, *calibration))
                .collect(),
        ))
    }
}
