use crate::error::DocumentError;
use crate::observability::labels::Labels;
use metrics::{counter, Counter};

/// Outcome counters of a validator.
pub struct Metrics {
    pub valid: Counter,
    pub input_missing: Counter,
    pub structural_invalid: Counter,
    pub check_digit_mismatch: Counter,
}

impl Metrics {
    pub fn new(labels: &Labels) -> Self {
        Metrics {
            valid: counter!("document.validation.valid", labels.clone()),
            input_missing: counter!("document.validation.input_missing", labels.clone()),
            structural_invalid: counter!(
                "document.validation.structural_invalid",
                labels.clone()
            ),
            check_digit_mismatch: counter!(
                "document.validation.check_digit_mismatch",
                labels.clone()
            ),
        }
    }

    /// Count one validation, `error` being its failure if any.
    pub fn record(&self, error: Option<&DocumentError>) {
        match error {
            None => self.valid.increment(1),
            Some(DocumentError::InputMissing { .. }) => self.input_missing.increment(1),
            Some(DocumentError::StructuralInvalid { .. }) => self.structural_invalid.increment(1),
            Some(DocumentError::CheckDigitMismatch { .. }) => {
                self.check_digit_mismatch.increment(1)
            }
            // engines only see bases shaped by the pipeline
            Some(DocumentError::BaseMalformed { .. }) => {}
        }
    }
}
