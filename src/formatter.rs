use crate::document::DocumentKind;
use crate::error::{DocumentError, StructuralReason};
use crate::normalization::{CnpjNormalizer, CpfNormalizer, Normalizer};

pub trait Formatter: Send + Sync {
    /// Normalize the input and render it with the official separators.
    fn format(&self, input: &str) -> Result<String, DocumentError>;
}

/// `DDD.DDD.DDD-DD`. Expects an 11-char normalized CPF.
pub(crate) fn punctuate_cpf(normalized: &str) -> String {
    format!(
        "{}.{}.{}-{}",
        &normalized[0..3],
        &normalized[3..6],
        &normalized[6..9],
        &normalized[9..11]
    )
}

/// `XX.XXX.XXX/XXXX-DD`. Expects a 14-char normalized CNPJ.
pub(crate) fn punctuate_cnpj(normalized: &str) -> String {
    format!(
        "{}.{}.{}/{}-{}",
        &normalized[0..2],
        &normalized[2..5],
        &normalized[5..8],
        &normalized[8..12],
        &normalized[12..14]
    )
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CpfFormatter {
    normalizer: CpfNormalizer,
}

impl CpfFormatter {
    pub const fn new(normalizer: CpfNormalizer) -> Self {
        Self { normalizer }
    }
}

impl Formatter for CpfFormatter {
    fn format(&self, input: &str) -> Result<String, DocumentError> {
        Ok(punctuate_cpf(&self.normalizer.normalize(input)?))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CnpjFormatter {
    normalizer: CnpjNormalizer,
}

impl CnpjFormatter {
    pub const fn new(normalizer: CnpjNormalizer) -> Self {
        Self { normalizer }
    }
}

impl Formatter for CnpjFormatter {
    /// Fails with [`StructuralReason::UnrecognizedPattern`] when the two trailing
    /// characters are not digits.
    fn format(&self, input: &str) -> Result<String, DocumentError> {
        let normalized = self.normalizer.normalize(input)?;
        // normalized CNPJs are 14 ASCII chars
        let check_digits = &normalized[DocumentKind::Cnpj.base_length()..];
        if !check_digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(DocumentError::structural(
                DocumentKind::Cnpj,
                StructuralReason::UnrecognizedPattern,
            ));
        }
        Ok(punctuate_cnpj(&normalized))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_cpf_format() {
        let formatter = CpfFormatter::default();
        let test_cases = vec![
            ("01234567890", "012.345.678-90"),
            ("012.345.678-90", "012.345.678-90"),
            ("012 345 678 90", "012.345.678-90"),
        ];
        for (input, expected) in test_cases {
            let formatted = formatter.format(input).unwrap();
            assert_eq!(formatted, expected);
            assert_eq!(formatted.len(), DocumentKind::Cpf.formatted_length());
        }
    }

    #[test]
    fn test_cpf_separator_positions() {
        let formatted = CpfFormatter::default().format("12345678909").unwrap();
        let chars: Vec<char> = formatted.chars().collect();
        assert_eq!(chars[3], '.');
        assert_eq!(chars[7], '.');
        assert_eq!(chars[11], '-');
    }

    #[test]
    fn test_cnpj_format() {
        let formatter = CnpjFormatter::default();
        let test_cases = vec![
            ("12345678000195", "12.345.678/0001-95"),
            ("12abc34501de35", "12.ABC.345/01DE-35"),
        ];
        for (input, expected) in test_cases {
            let formatted = formatter.format(input).unwrap();
            assert_eq!(formatted, expected);
            assert_eq!(formatted.len(), DocumentKind::Cnpj.formatted_length());
        }
    }

    #[test]
    fn test_cnpj_separator_positions() {
        let formatted = CnpjFormatter::default().format("12ABC34501DE35").unwrap();
        let chars: Vec<char> = formatted.chars().collect();
        assert_eq!(chars[2], '.');
        assert_eq!(chars[6], '.');
        assert_eq!(chars[10], '/');
        assert_eq!(chars[15], '-');
    }

    #[test]
    fn test_cnpj_check_digits_must_be_digits() {
        let formatter = CnpjFormatter::default();
        for input in ["12ABC34501DEAB", "12.ABC.345/01DE-3b", "1234567800019X"] {
            assert_eq!(
                formatter.format(input),
                Err(DocumentError::StructuralInvalid {
                    kind: DocumentKind::Cnpj,
                    reason: StructuralReason::UnrecognizedPattern,
                }),
                "input: {}",
                input
            );
        }
    }

    #[test]
    fn test_format_propagates_normalization_errors() {
        assert_eq!(
            CpfFormatter::default().format("  "),
            Err(DocumentError::InputMissing {
                kind: DocumentKind::Cpf
            })
        );
        assert!(CnpjFormatter::default()
            .format("123")
            .unwrap_err()
            .is_invalid());
    }
}
