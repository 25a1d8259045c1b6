use crate::classifier::CnpjType;
use crate::document::DocumentKind;
use metrics::{IntoLabels, Label, SharedString};

pub const KIND: &str = "kind";
pub const CNPJ_TYPE: &str = "cnpj_type";

/// Holder of the [Label]s attached to every metric a component emits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Labels(Vec<Label>);

impl Labels {
    pub fn new(
        labels: &[(
            impl Into<SharedString> + Clone,
            impl Into<SharedString> + Clone,
        )],
    ) -> Self {
        Labels(labels.iter().map(Label::from).collect())
    }

    /// Labels identifying a document kind.
    pub fn for_kind(kind: DocumentKind) -> Self {
        Labels::new(&[(KIND, kind.label())])
    }

    /// Labels identifying a CNPJ variant.
    pub fn for_cnpj_type(cnpj_type: CnpjType) -> Self {
        Labels::for_kind(DocumentKind::Cnpj).clone_with_labels(&[(
            CNPJ_TYPE,
            match cnpj_type {
                CnpjType::Numeric => "numeric",
                CnpjType::Alphanumeric => "alphanumeric",
            },
        )])
    }

    /// Clone these labels with additional key-value pairs appended.
    pub fn clone_with_labels(
        &self,
        additional_labels: &[(
            impl Into<SharedString> + Clone,
            impl Into<SharedString> + Clone,
        )],
    ) -> Labels {
        let mut tags = self.0.clone();
        tags.extend(additional_labels.iter().map(Label::from));
        Labels(tags)
    }
}

impl IntoLabels for Labels {
    fn into_labels(self) -> Vec<Label> {
        self.0
    }
}
