//! CPF (Cadastro de Pessoas Físicas), the 11-digit individual taxpayer number.

use crate::document::DocumentKind;
use crate::error::DocumentError;
use crate::formatter::{punctuate_cpf, CpfFormatter, Formatter};
use crate::generation::CpfGenerator;
use crate::normalization::{CpfNormalizer, Normalizer};
use crate::validation::{CpfValidator, DocumentValidator};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const NORMALIZER: CpfNormalizer = CpfNormalizer;
const FORMATTER: CpfFormatter = CpfFormatter::new(CpfNormalizer);
const GENERATOR: CpfGenerator = CpfGenerator;

lazy_static! {
    static ref VALIDATOR: CpfValidator = CpfValidator::default();
}

/// A validated CPF, kept in its normalized 11-digit form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cpf {
    value: String,
}

impl Cpf {
    pub const LENGTH: usize = DocumentKind::Cpf.length();
    pub const FORMATTED_LENGTH: usize = DocumentKind::Cpf.formatted_length();

    /// Validate `raw` and keep its normalized form.
    pub fn new(raw: &str) -> Result<Self, DocumentError> {
        validate(raw)?;
        Ok(Cpf {
            value: normalize(raw)?,
        })
    }

    /// The 9 leading digits.
    pub fn base(&self) -> &str {
        &self.value[..DocumentKind::Cpf.base_length()]
    }

    pub fn check_digits(&self) -> &str {
        &self.value[DocumentKind::Cpf.base_length()..]
    }

    /// The unformatted 11 digits.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn formatted(&self) -> String {
        punctuate_cpf(&self.value)
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl FromStr for Cpf {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Cpf::new(s)
    }
}

impl TryFrom<&str> for Cpf {
    type Error = DocumentError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Cpf::new(value)
    }
}

impl TryFrom<String> for Cpf {
    type Error = DocumentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Cpf::new(&value)
    }
}

impl From<Cpf> for String {
    fn from(cpf: Cpf) -> Self {
        cpf.value
    }
}

/// A random valid CPF, unformatted. Meant for test data only.
pub fn generate() -> Result<String, DocumentError> {
    GENERATOR.generate()
}

/// A random valid CPF in the `DDD.DDD.DDD-DD` layout. Meant for test data only.
pub fn generate_formatted() -> Result<String, DocumentError> {
    GENERATOR.generate_formatted()
}

pub fn is_valid(raw: &str) -> bool {
    VALIDATOR.is_valid(raw)
}

pub fn validate(raw: &str) -> Result<(), DocumentError> {
    VALIDATOR.validate(raw)
}

/// Keep only the ASCII digits of `raw`.
pub fn clear(raw: &str) -> Result<String, DocumentError> {
    NORMALIZER.clear(raw)
}

/// The 11 digits of `raw`, or an error when there are not exactly 11.
pub fn normalize(raw: &str) -> Result<String, DocumentError> {
    NORMALIZER.normalize(raw)
}

pub fn format(raw: &str) -> Result<String, DocumentError> {
    FORMATTER.format(raw)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::StructuralReason;
    use std::collections::HashSet;

    #[test]
    fn test_module_operations() {
        assert!(is_valid("01234567890"));
        assert!(!is_valid("000.000.000-00"));
        assert!(!is_valid(""));
        assert_eq!(clear("012.345.678-90").unwrap(), "01234567890");
        assert_eq!(normalize(" 012.345.678-90 ").unwrap(), "01234567890");
        assert_eq!(format("01234567890").unwrap(), "012.345.678-90");
        assert_eq!(generate().unwrap().len(), Cpf::LENGTH);
        assert_eq!(generate_formatted().unwrap().len(), Cpf::FORMATTED_LENGTH);
    }

    #[test]
    fn test_value() {
        let cpf = Cpf::new("529.982.247-25").unwrap();
        assert_eq!(cpf.value(), "52998224725");
        assert_eq!(cpf.base(), "529982247");
        assert_eq!(cpf.check_digits(), "25");
        assert_eq!(cpf.to_string(), "529.982.247-25");
        assert_eq!(cpf.value().len(), Cpf::LENGTH);
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            Cpf::new("   "),
            Err(DocumentError::InputMissing {
                kind: DocumentKind::Cpf
            })
        );
        assert_eq!(
            "11111111111".parse::<Cpf>().unwrap_err().structural_reason(),
            Some(&StructuralReason::RepeatedCharacters)
        );
        assert!(matches!(
            Cpf::try_from("529.982.247-26"),
            Err(DocumentError::CheckDigitMismatch { .. })
        ));
    }

    #[test]
    fn test_equality_ignores_punctuation() {
        let values: HashSet<Cpf> = ["529.982.247-25", "52998224725", "529 982 247 25"]
            .iter()
            .map(|raw| Cpf::new(raw).unwrap())
            .collect();
        assert_eq!(values.len(), 1);
    }

    #[test]
    fn test_value_owns_its_data() {
        let mut raw = String::from("012.345.678-90");
        let cpf = Cpf::try_from(raw.clone()).unwrap();
        raw.clear();
        raw.push_str("garbage");
        assert_eq!(cpf.value(), "01234567890");
    }

    #[test]
    fn test_serde() {
        let cpf: Cpf = serde_json::from_str(r#""012.345.678-90""#).unwrap();
        assert_eq!(serde_json::to_string(&cpf).unwrap(), r#""01234567890""#);
        assert!(serde_json::from_str::<Cpf>(r#""012.345.678-91""#).is_err());
    }
}
