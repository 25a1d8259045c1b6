//! The validation pipeline: blank check, clearing (and CNPJ classification), the
//! repeated-character guard, then check-digit verification.

pub mod config;
pub mod metrics;

use crate::check_digit;
use crate::check_digit::cnpj::CNPJ_BASE_LENGTH;
use crate::check_digit::cpf::CPF_BASE_LENGTH;
use crate::classifier::{CnpjClassifier, CnpjType};
use crate::codec::to_digit_array;
use crate::document::DocumentKind;
use crate::error::{DocumentError, StructuralReason};
use crate::normalization::{CnpjNormalizer, CpfNormalizer, Normalizer};
use crate::observability::labels::Labels;
use crate::str_utils::is_single_repeated_char;
use self::metrics::Metrics;
use tracing::{debug, warn};

pub trait DocumentValidator: Send + Sync {
    fn kind(&self) -> DocumentKind;

    /// Run the full validation sequence on a raw, possibly punctuated, input.
    fn validate(&self, raw: &str) -> Result<(), DocumentError>;

    /// Same as [`DocumentValidator::validate`] with every error collapsed to `false`.
    fn is_valid(&self, raw: &str) -> bool {
        self.validate(raw).is_ok()
    }
}

/// Feed the outcome to the counters and the diagnostics log, then hand it back.
fn observe<T>(
    kind: DocumentKind,
    metrics: &Metrics,
    cleared_len: Option<usize>,
    outcome: Result<T, DocumentError>,
) -> Result<T, DocumentError> {
    let error = outcome.as_ref().err();
    metrics.record(error);
    match error {
        None => {}
        Some(DocumentError::InputMissing { .. }) => {
            debug!(kind = %kind, "rejected blank document");
        }
        Some(DocumentError::StructuralInvalid { reason, .. }) => {
            debug!(kind = %kind, reason = %reason, cleared_len, "rejected malformed document");
        }
        Some(DocumentError::CheckDigitMismatch {
            expected, actual, ..
        }) => {
            debug!(kind = %kind, %expected, %actual, "rejected document with wrong check digits");
        }
        Some(err @ DocumentError::BaseMalformed { .. }) => {
            warn!(kind = %kind, error = %err, "check-digit engine refused a validated base");
        }
    }
    outcome
}

fn repeated_guard(kind: DocumentKind, cleared: &str) -> Result<(), DocumentError> {
    if is_single_repeated_char(cleared) {
        return Err(DocumentError::structural(
            kind,
            StructuralReason::RepeatedCharacters,
        ));
    }
    Ok(())
}

pub struct CpfValidator {
    normalizer: CpfNormalizer,
    metrics: Metrics,
}

impl CpfValidator {
    pub fn new(normalizer: CpfNormalizer) -> Self {
        Self {
            normalizer,
            metrics: Metrics::new(&Labels::for_kind(DocumentKind::Cpf)),
        }
    }

    fn check(&self, cleared: &str) -> Result<(), DocumentError> {
        let actual = cleared.len();
        if actual != DocumentKind::Cpf.length() {
            return Err(DocumentError::structural(
                DocumentKind::Cpf,
                StructuralReason::Length {
                    expected: DocumentKind::Cpf.length(),
                    actual,
                },
            ));
        }
        repeated_guard(DocumentKind::Cpf, cleared)?;

        // cleared input only holds ASCII digits
        let (base, provided) = cleared.split_at(CPF_BASE_LENGTH);
        let base = to_digit_array(base).ok_or_else(|| {
            DocumentError::base_malformed(DocumentKind::Cpf, "base holds a non-digit")
        })?;
        let [first, second] = check_digit::cpf::calculate_check_digits(&base)?;
        let expected = format!("{}{}", first, second);
        if expected != provided {
            return Err(DocumentError::CheckDigitMismatch {
                kind: DocumentKind::Cpf,
                expected,
                actual: provided.to_string(),
            });
        }
        Ok(())
    }
}

impl Default for CpfValidator {
    fn default() -> Self {
        Self::new(CpfNormalizer)
    }
}

impl DocumentValidator for CpfValidator {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Cpf
    }

    fn validate(&self, raw: &str) -> Result<(), DocumentError> {
        let cleared = match self.normalizer.clear(raw) {
            Ok(cleared) => cleared,
            Err(err) => return observe(DocumentKind::Cpf, &self.metrics, None, Err(err)),
        };
        let outcome = self.check(&cleared);
        observe(
            DocumentKind::Cpf,
            &self.metrics,
            Some(cleared.len()),
            outcome,
        )
    }
}

pub struct CnpjValidator {
    normalizer: CnpjNormalizer,
    classifier: CnpjClassifier,
    metrics: Metrics,
}

impl CnpjValidator {
    pub fn new(normalizer: CnpjNormalizer, classifier: CnpjClassifier) -> Self {
        Self {
            normalizer,
            classifier,
            metrics: Metrics::new(&Labels::for_kind(DocumentKind::Cnpj)),
        }
    }

    /// Validate and report the variant the document was classified as.
    pub fn validate_and_classify(&self, raw: &str) -> Result<CnpjType, DocumentError> {
        self.run(raw, None)
    }

    /// Validate, additionally requiring the detected variant to be admitted by
    /// `cnpj_type`. A numeric CNPJ passes as alphanumeric, not the other way around.
    ///
    /// This is stricter than the historical library, whose typed check ignored the
    /// requested variant and accepted any valid CNPJ: here an alphanumeric document
    /// requested as [`CnpjType::Numeric`] fails with
    /// [`StructuralReason::TypeMismatch`].
    pub fn validate_as(&self, raw: &str, cnpj_type: CnpjType) -> Result<(), DocumentError> {
        self.validate_and_classify_as(raw, cnpj_type).map(|_| ())
    }

    /// [`CnpjValidator::validate_as`], reporting the detected variant.
    pub fn validate_and_classify_as(
        &self,
        raw: &str,
        cnpj_type: CnpjType,
    ) -> Result<CnpjType, DocumentError> {
        self.run(raw, Some(cnpj_type))
    }

    pub fn is_valid_as(&self, raw: &str, cnpj_type: CnpjType) -> bool {
        self.validate_as(raw, cnpj_type).is_ok()
    }

    fn run(&self, raw: &str, requested: Option<CnpjType>) -> Result<CnpjType, DocumentError> {
        let cleared = match self.normalizer.clear(raw) {
            Ok(cleared) => cleared,
            Err(err) => return observe(DocumentKind::Cnpj, &self.metrics, None, Err(err)),
        };
        let outcome = self.check(&cleared, requested);
        observe(
            DocumentKind::Cnpj,
            &self.metrics,
            Some(cleared.chars().count()),
            outcome,
        )
    }

    fn check(&self, cleared: &str, requested: Option<CnpjType>) -> Result<CnpjType, DocumentError> {
        let detected = self.classifier.classify(cleared).map_err(|err| match err {
            // blank input was caught by `clear`; only punctuation remained
            DocumentError::InputMissing { kind } => {
                DocumentError::structural(kind, StructuralReason::UnrecognizedPattern)
            }
            other => other,
        })?;
        if let Some(expected) = requested {
            if !expected.admits(detected) {
                return Err(DocumentError::structural(
                    DocumentKind::Cnpj,
                    StructuralReason::TypeMismatch { expected, detected },
                ));
            }
        }
        repeated_guard(DocumentKind::Cnpj, cleared)?;

        // a classified CNPJ is 14 ASCII chars
        let (base, provided) = cleared.split_at(CNPJ_BASE_LENGTH);
        let expected: String = check_digit::cnpj::calculate_check_digits(base)?
            .iter()
            .collect();
        if expected != provided {
            return Err(DocumentError::CheckDigitMismatch {
                kind: DocumentKind::Cnpj,
                expected,
                actual: provided.to_string(),
            });
        }
        Ok(detected)
    }
}

impl Default for CnpjValidator {
    fn default() -> Self {
        Self::new(CnpjNormalizer, CnpjClassifier)
    }
}

impl DocumentValidator for CnpjValidator {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Cnpj
    }

    fn validate(&self, raw: &str) -> Result<(), DocumentError> {
        self.validate_and_classify(raw).map(|_| ())
    }
}
