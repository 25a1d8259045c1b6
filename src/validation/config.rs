use crate::classifier::CnpjType;
use crate::document::DocumentKind;
use crate::error::DocumentError;
use crate::validation::{CnpjValidator, CpfValidator, DocumentValidator};
use serde::{Deserialize, Serialize};

/// Serializable description of a validator.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum DocumentValidatorConfig {
    BrazilianCpf,
    BrazilianCnpj {
        /// When set, the document must also be admitted by this variant.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        cnpj_type: Option<CnpjType>,
    },
}

impl DocumentValidatorConfig {
    pub fn kind(&self) -> DocumentKind {
        match self {
            DocumentValidatorConfig::BrazilianCpf => DocumentKind::Cpf,
            DocumentValidatorConfig::BrazilianCnpj { .. } => DocumentKind::Cnpj,
        }
    }

    pub fn build(&self) -> Box<dyn DocumentValidator> {
        match self {
            DocumentValidatorConfig::BrazilianCpf => Box::new(CpfValidator::default()),
            DocumentValidatorConfig::BrazilianCnpj { cnpj_type: None } => {
                Box::new(CnpjValidator::default())
            }
            DocumentValidatorConfig::BrazilianCnpj {
                cnpj_type: Some(cnpj_type),
            } => Box::new(TypedCnpjValidator {
                validator: CnpjValidator::default(),
                cnpj_type: *cnpj_type,
            }),
        }
    }
}

impl From<DocumentKind> for DocumentValidatorConfig {
    fn from(kind: DocumentKind) -> Self {
        match kind {
            DocumentKind::Cpf => DocumentValidatorConfig::BrazilianCpf,
            DocumentKind::Cnpj => DocumentValidatorConfig::BrazilianCnpj { cnpj_type: None },
        }
    }
}

impl DocumentValidator for DocumentValidatorConfig {
    fn kind(&self) -> DocumentKind {
        DocumentValidatorConfig::kind(self)
    }

    fn validate(&self, raw: &str) -> Result<(), DocumentError> {
        match self {
            DocumentValidatorConfig::BrazilianCpf => crate::cpf::validate(raw),
            DocumentValidatorConfig::BrazilianCnpj { cnpj_type: None } => crate::cnpj::validate(raw),
            DocumentValidatorConfig::BrazilianCnpj {
                cnpj_type: Some(cnpj_type),
            } => crate::cnpj::validate_as(raw, *cnpj_type),
        }
    }
}

struct TypedCnpjValidator {
    validator: CnpjValidator,
    cnpj_type: CnpjType,
}

impl DocumentValidator for TypedCnpjValidator {
    fn kind(&self) -> DocumentKind {
        DocumentKind::Cnpj
    }

    fn validate(&self, raw: &str) -> Result<(), DocumentError> {
        self.validator.validate_as(raw, self.cnpj_type)
    }
}
