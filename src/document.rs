use serde::{Deserialize, Serialize};

/// The two identifier families handled by this crate.
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
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum DocumentKind {
    /// Cadastro de Pessoas Físicas, the individual taxpayer identifier.
    Cpf,
    /// Cadastro Nacional da Pessoa Jurídica, the legal-entity identifier.
    Cnpj,
}

impl DocumentKind {
    /// Canonical length once punctuation is removed.
    pub const fn length(self) -> usize {
        match self {
            DocumentKind::Cpf => 11,
            DocumentKind::Cnpj => 14,
        }
    }

    /// Length of the punctuated form.
    pub const fn formatted_length(self) -> usize {
        match self {
            DocumentKind::Cpf => 14,
            DocumentKind::Cnpj => 18,
        }
    }

    /// Length of the base, i.e. everything before the two check digits.
    pub const fn base_length(self) -> usize {
        self.length() - 2
    }

    /// Value used for the `kind` metric label.
    pub const fn label(self) -> &'static str {
        match self {
            DocumentKind::Cpf => "cpf",
            DocumentKind::Cnpj => "cnpj",
        }
    }
}
