//! Stripping of punctuation and noise, and canonical fixed-length forms.

use crate::document::DocumentKind;
use crate::error::{DocumentError, StructuralReason};
use crate::str_utils::{is_blank, retain_chars};
use tracing::debug;

pub trait Normalizer: Send + Sync {
    fn kind(&self) -> DocumentKind;

    /// Whether `c` survives [`Normalizer::clear`].
    fn is_permitted(&self, c: char) -> bool;

    /// Drop every char outside the permitted alphabet, keeping order and case.
    /// The length is not checked.
    fn clear(&self, input: &str) -> Result<String, DocumentError> {
        if is_blank(input) {
            return Err(DocumentError::input_missing(self.kind()));
        }
        Ok(retain_chars(input, |c| self.is_permitted(c)))
    }

    /// Canonical form: cleared, case-folded where the alphabet has letters, and exactly
    /// as long as the document kind requires.
    fn normalize(&self, input: &str) -> Result<String, DocumentError>;
}

fn require_length(kind: DocumentKind, value: String) -> Result<String, DocumentError> {
    let actual = value.chars().count();
    if actual != kind.length() {
        debug!(
            kind = %kind,
            expected = kind.length(),
            actual,
            "normalized document has the wrong length"
        );
        return Err(DocumentError::structural(
            kind,
            StructuralReason::Length {
                expected: kind.length(),
                actual,
            },
        ));
    }
    Ok(value)
}

/// CPF alphabet: ASCII digits.
#[derive(Debug, Clone, Copy, Default)]
pub struct CpfNormalizer;

impl Normalizer for CpfNormalizer {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Cpf
    }

    fn is_permitted(&self, c: char) -> bool {
        c.is_ascii_digit()
    }

    fn normalize(&self, input: &str) -> Result<String, DocumentError> {
        let cleared = self.clear(input)?;
        require_length(DocumentKind::Cpf, cleared)
    }
}

/// CNPJ alphabet: ASCII letters and digits. Letters are upper-cased by `normalize`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CnpjNormalizer;

impl Normalizer for CnpjNormalizer {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Cnpj
    }

    fn is_permitted(&self, c: char) -> bool {
        c.is_ascii_alphanumeric()
    }

    fn normalize(&self, input: &str) -> Result<String, DocumentError> {
        let cleared = self.clear(input)?.to_ascii_uppercase();
        require_length(DocumentKind::Cnpj, cleared)
    }
}

#[cfg(test)]
mod test;
