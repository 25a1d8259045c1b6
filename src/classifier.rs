use crate::document::DocumentKind;
use crate::error::{DocumentError, StructuralReason};
use crate::str_utils::is_blank;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

const NUMERIC_FORMATTED: &str = r"[0-9]{2}\.[0-9]{3}\.[0-9]{3}/[0-9]{4}-[0-9]{2}";
const NUMERIC_UNFORMATTED: &str = r"[0-9]{14}";
const ALPHANUMERIC_FORMATTED: &str =
    r"[A-Z0-9]{2}\.[A-Z0-9]{3}\.[A-Z0-9]{3}/[A-Z0-9]{4}-[0-9]{2}";
const ALPHANUMERIC_UNFORMATTED: &str = r"[A-Z0-9]{12}[0-9]{2}";

const DIGITS: &str = "0123456789";
const DIGITS_AND_LETTERS: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

fn full_match(pattern: &str) -> Regex {
    Regex::new(&format!("^(?:{})$", pattern)).expect("CNPJ layout patterns are valid")
}

lazy_static! {
    static ref NUMERIC_FORMATTED_RE: Regex = full_match(NUMERIC_FORMATTED);
    static ref NUMERIC_UNFORMATTED_RE: Regex = full_match(NUMERIC_UNFORMATTED);
    static ref ALPHANUMERIC_FORMATTED_RE: Regex = full_match(ALPHANUMERIC_FORMATTED);
    static ref ALPHANUMERIC_UNFORMATTED_RE: Regex = full_match(ALPHANUMERIC_UNFORMATTED);
}

/// Structural variant of a CNPJ.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum CnpjType {
    /// Digits only, the historical layout.
    Numeric,
    /// Digits or upper-case letters in the 12-character base, digits in the check digits.
    Alphanumeric,
}

impl CnpjType {
    /// Variants in detection order. The numeric layout is a subset of the alphanumeric
    /// one, so it has to be tried first.
    pub const DETECTION_ORDER: [CnpjType; 2] = [CnpjType::Numeric, CnpjType::Alphanumeric];

    /// Pattern of the punctuated layout `XX.XXX.XXX/XXXX-DD`.
    pub fn formatted_pattern(self) -> &'static str {
        match self {
            CnpjType::Numeric => NUMERIC_FORMATTED,
            CnpjType::Alphanumeric => ALPHANUMERIC_FORMATTED,
        }
    }

    /// Pattern of the bare 14-character layout.
    pub fn unformatted_pattern(self) -> &'static str {
        match self {
            CnpjType::Numeric => NUMERIC_UNFORMATTED,
            CnpjType::Alphanumeric => ALPHANUMERIC_UNFORMATTED,
        }
    }

    /// Full-string match against either layout of this variant.
    pub fn matches(self, input: &str) -> bool {
        let (formatted, unformatted): (&Regex, &Regex) = match self {
            CnpjType::Numeric => (&*NUMERIC_FORMATTED_RE, &*NUMERIC_UNFORMATTED_RE),
            CnpjType::Alphanumeric => (&*ALPHANUMERIC_FORMATTED_RE, &*ALPHANUMERIC_UNFORMATTED_RE),
        };
        formatted.is_match(input) || unformatted.is_match(input)
    }

    /// First variant whose layout matches the whole input.
    pub fn detect(input: &str) -> Option<CnpjType> {
        Self::DETECTION_ORDER
            .into_iter()
            .find(|cnpj_type| cnpj_type.matches(input))
    }

    /// Characters a generated base of this variant is drawn from.
    pub fn base_alphabet(self) -> &'static str {
        match self {
            CnpjType::Numeric => DIGITS,
            CnpjType::Alphanumeric => DIGITS_AND_LETTERS,
        }
    }

    /// Whether a document detected as `detected` is acceptable when `self` was asked for.
    /// Every numeric CNPJ also fits the alphanumeric layout.
    pub fn admits(self, detected: CnpjType) -> bool {
        match self {
            CnpjType::Numeric => detected == CnpjType::Numeric,
            CnpjType::Alphanumeric => true,
        }
    }
}

/// Decides which [`CnpjType`] a CNPJ string belongs to.
#[derive(Debug, Clone, Copy, Default)]
pub struct CnpjClassifier;

impl CnpjClassifier {
    pub fn classify(&self, input: &str) -> Result<CnpjType, DocumentError> {
        if is_blank(input) {
            return Err(DocumentError::input_missing(DocumentKind::Cnpj));
        }
        CnpjType::detect(input).ok_or_else(|| {
            DocumentError::structural(DocumentKind::Cnpj, StructuralReason::UnrecognizedPattern)
        })
    }
}
