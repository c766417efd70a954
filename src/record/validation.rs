use std::borrow::Cow;
use validator::ValidationError;

/// Rejects NaN and infinite measurement values before any decision
/// logic sees them. Takes the scalar by value, which is how the
/// `Validate` derive hands Copy fields to custom validators.
pub(crate) fn validate_finite(value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        let mut error = ValidationError::new("not_finite");
        error.add_param(Cow::from("value"), &value.to_string());
        Err(error.with_message(Cow::Borrowed("measurement must be a finite number")))
    }
}
