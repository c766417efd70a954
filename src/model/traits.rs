use crate::model::error::ModelError;
use crate::record::PatientRecord;

/// An opaque source of malignancy probabilities.
///
/// The decision mapper consumes this boundary without knowing whether
/// the implementation is a trained classifier, a rule table or a
/// constant stub. Implementations must be deterministic for identical
/// records.
pub trait RiskModel {
    /// Point estimate of malignancy probability for the record, in [0, 1].
    fn predict_probability(&self, record: &PatientRecord) -> Result<f64, ModelError>;

    /// Per-member probability estimates when the model is an ensemble.
    ///
    /// Defaults to `Ok(None)` for single models; the mapper then falls
    /// back to its heuristic confidence instead of disagreement-based
    /// uncertainty. A member that cannot produce a probability is the
    /// model's failure to handle; the returned sequence must already be
    /// clean.
    fn predict_member_probabilities(
        &self,
        record: &PatientRecord,
    ) -> Result<Option<Vec<f64>>, ModelError> {
        let _ = record;
        Ok(None)
    }
}
