//! CNPJ (Cadastro Nacional da Pessoa Jurídica), the 14-character legal-entity number,
//! in its numeric and alphanumeric variants.

use crate::classifier::{CnpjClassifier, CnpjType};
use crate::document::DocumentKind;
use crate::error::DocumentError;
use crate::formatter::{punctuate_cnpj, CnpjFormatter, Formatter};
use crate::generation::CnpjGenerator;
use crate::normalization::{CnpjNormalizer, Normalizer};
use crate::validation::{CnpjValidator, DocumentValidator};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const ROOT_LENGTH: usize = 8;
const ORDER_LENGTH: usize = 4;

const NORMALIZER: CnpjNormalizer = CnpjNormalizer;
const CLASSIFIER: CnpjClassifier = CnpjClassifier;
const FORMATTER: CnpjFormatter = CnpjFormatter::new(CnpjNormalizer);
const GENERATOR: CnpjGenerator = CnpjGenerator;

lazy_static! {
    static ref VALIDATOR: CnpjValidator = CnpjValidator::default();
}

/// A validated CNPJ, kept in its normalized 14-character form along with the variant
/// it was classified as.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cnpj {
    value: String,
    cnpj_type: CnpjType,
}

impl Cnpj {
    pub const LENGTH: usize = DocumentKind::Cnpj.length();
    pub const FORMATTED_LENGTH: usize = DocumentKind::Cnpj.formatted_length();

    /// Validate `raw` and keep its normalized form.
    pub fn new(raw: &str) -> Result<Self, DocumentError> {
        Self::build(&VALIDATOR, raw, None)
    }

    /// Like [`Cnpj::new`], also requiring the variant to be admitted by `cnpj_type`.
    pub fn new_as(raw: &str, cnpj_type: CnpjType) -> Result<Self, DocumentError> {
        Self::build(&VALIDATOR, raw, Some(cnpj_type))
    }

    fn build(
        validator: &CnpjValidator,
        raw: &str,
        requested: Option<CnpjType>,
    ) -> Result<Self, DocumentError> {
        let cnpj_type = match requested {
            Some(cnpj_type) => validator.validate_and_classify_as(raw, cnpj_type)?,
            None => validator.validate_and_classify(raw)?,
        };
        Ok(Cnpj {
            value: NORMALIZER.normalize(raw)?,
            cnpj_type,
        })
    }

    /// The 8 characters identifying the entity.
    pub fn root(&self) -> &str {
        &self.value[..ROOT_LENGTH]
    }

    /// The 4 characters identifying the establishment.
    pub fn order(&self) -> &str {
        &self.value[ROOT_LENGTH..ROOT_LENGTH + ORDER_LENGTH]
    }

    pub fn base(&self) -> &str {
        &self.value[..DocumentKind::Cnpj.base_length()]
    }

    pub fn check_digits(&self) -> &str {
        &self.value[DocumentKind::Cnpj.base_length()..]
    }

    pub fn cnpj_type(&self) -> CnpjType {
        self.cnpj_type
    }

    /// The unformatted 14 characters.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn formatted(&self) -> String {
        punctuate_cnpj(&self.value)
    }
}

impl fmt::Display for Cnpj {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted())
    }
}

impl FromStr for Cnpj {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Cnpj::new(s)
    }
}

impl TryFrom<&str> for Cnpj {
    type Error = DocumentError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Cnpj::new(value)
    }
}

impl TryFrom<String> for Cnpj {
    type Error = DocumentError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Cnpj::new(&value)
    }
}

impl From<Cnpj> for String {
    fn from(cnpj: Cnpj) -> Self {
        cnpj.value
    }
}

/// A random valid CNPJ of the given variant, unformatted. Meant for test data only.
pub fn generate(cnpj_type: CnpjType) -> Result<String, DocumentError> {
    GENERATOR.generate(cnpj_type)
}

/// A random valid CNPJ in the `XX.XXX.XXX/XXXX-DD` layout. Meant for test data only.
pub fn generate_formatted(cnpj_type: CnpjType) -> Result<String, DocumentError> {
    GENERATOR.generate_formatted(cnpj_type)
}

/// Validity under whichever variant `raw` is classified as.
pub fn is_valid(raw: &str) -> bool {
    VALIDATOR.is_valid(raw)
}

pub fn is_valid_as(raw: &str, cnpj_type: CnpjType) -> bool {
    VALIDATOR.is_valid_as(raw, cnpj_type)
}

pub fn validate(raw: &str) -> Result<(), DocumentError> {
    VALIDATOR.validate(raw)
}

pub fn validate_as(raw: &str, cnpj_type: CnpjType) -> Result<(), DocumentError> {
    VALIDATOR.validate_as(raw, cnpj_type)
}

/// Keep only the ASCII letters and digits of `raw`, case untouched.
pub fn clear(raw: &str) -> Result<String, DocumentError> {
    NORMALIZER.clear(raw)
}

/// The 14 upper-cased characters of `raw`, or an error when there are not exactly 14.
pub fn normalize(raw: &str) -> Result<String, DocumentError> {
    NORMALIZER.normalize(raw)
}

pub fn format(raw: &str) -> Result<String, DocumentError> {
    FORMATTER.format(raw)
}

/// Variant of a formatted or unformatted CNPJ. The input is matched as is, without
/// clearing.
pub fn classify(raw: &str) -> Result<CnpjType, DocumentError> {
    CLASSIFIER.classify(raw)
}
