use crate::classifier::CnpjType;
use crate::document::DocumentKind;
use crate::observability::labels::Labels;
use lazy_static::lazy_static;
use metrics::{counter, Counter};

lazy_static! {
    pub static ref GLOBAL_STATS: Stats = Stats::new();
}

/// Process-wide counters of generated documents.
pub struct Stats {
    pub cpf_generated: Counter,
    pub numeric_cnpj_generated: Counter,
    pub alphanumeric_cnpj_generated: Counter,
}

impl Stats {
    pub fn new() -> Self {
        Self {
            cpf_generated: counter!(
                "document.generated",
                Labels::for_kind(DocumentKind::Cpf)
            ),
            numeric_cnpj_generated: counter!(
                "document.generated",
                Labels::for_cnpj_type(CnpjType::Numeric)
            ),
            alphanumeric_cnpj_generated: counter!(
                "document.generated",
                Labels::for_cnpj_type(CnpjType::Alphanumeric)
            ),
        }
    }

    pub fn record_cpf_generated(&self) {
        self.cpf_generated.increment(1);
    }

    pub fn record_cnpj_generated(&self, cnpj_type: CnpjType) {
        match cnpj_type {
            CnpjType::Numeric => self.numeric_cnpj_generated.increment(1),
            CnpjType::Alphanumeric => self.alphanumeric_cnpj_generated.increment(1),
        }
    }
}

impl Default for Stats {
    fn default() -> Self {
        Self::new()
    }
}
