use crate::classifier::CnpjType;
use crate::document::DocumentKind;
use thiserror::Error;

/// Why a structurally unsound input was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructuralReason {
    #[error("must be {expected} characters long, found {actual}")]
    Length { expected: usize, actual: usize },

    #[error("does not match any known format")]
    UnrecognizedPattern,

    #[error("every character is identical")]
    RepeatedCharacters,

    #[error("is {detected} but {expected} was requested")]
    TypeMismatch {
        expected: CnpjType,
        detected: CnpjType,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// The raw input was empty or only whitespace.
    #[error("The {kind} cannot be empty or blank")]
    InputMissing { kind: DocumentKind },

    /// Wrong length, disallowed characters or an unrecognized layout.
    #[error("The {kind} is not valid")]
    StructuralInvalid {
        kind: DocumentKind,
        reason: StructuralReason,
    },

    /// The supplied check digits differ from the recomputed ones. The public message is
    /// the same as [`DocumentError::StructuralInvalid`].
    #[error("The {kind} is not valid")]
    CheckDigitMismatch {
        kind: DocumentKind,
        expected: String,
        actual: String,
    },

    /// A check-digit engine received a base it cannot work with. This only happens when
    /// the engine is called directly with a hand-built base.
    #[error("The {kind} base is malformed: {reason}")]
    BaseMalformed {
        kind: DocumentKind,
        reason: String,
    },
}

impl DocumentError {
    pub(crate) fn input_missing(kind: DocumentKind) -> Self {
        DocumentError::InputMissing { kind }
    }

    pub(crate) fn structural(kind: DocumentKind, reason: StructuralReason) -> Self {
        DocumentError::StructuralInvalid { kind, reason }
    }

    pub(crate) fn base_malformed(kind: DocumentKind, reason: impl Into<String>) -> Self {
        DocumentError::BaseMalformed {
            kind,
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> DocumentKind {
        match self {
            DocumentError::InputMissing { kind }
            | DocumentError::StructuralInvalid { kind, .. }
            | DocumentError::CheckDigitMismatch { kind, .. }
            | DocumentError::BaseMalformed { kind, .. } => *kind,
        }
    }

    /// True for the recoverable "identifier is invalid" outcomes.
    pub fn is_invalid(&self) -> bool {
        matches!(
            self,
            DocumentError::StructuralInvalid { .. } | DocumentError::CheckDigitMismatch { .. }
        )
    }

    /// True when the caller broke the contract of the operation (blank input, or a
    /// malformed base handed straight to an engine).
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            DocumentError::InputMissing { .. } | DocumentError::BaseMalformed { .. }
        )
    }

    /// The structural reason, if this is a [`DocumentError::StructuralInvalid`].
    pub fn structural_reason(&self) -> Option<&StructuralReason> {
        match self {
            DocumentError::StructuralInvalid { reason, .. } => Some(reason),
            _ => None,
        }
    }
}
