// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

pub mod check_digit;
pub mod classifier;
pub mod cnpj;
pub mod codec;
pub mod cpf;
mod document;
mod error;
pub mod formatter;
pub mod generation;
pub mod normalization;
mod observability;
mod stats;
mod str_utils;
pub mod validation;

// This is the public API of the library
pub use classifier::{CnpjClassifier, CnpjType};
pub use cnpj::Cnpj;
pub use cpf::Cpf;
pub use document::DocumentKind;
pub use error::{DocumentError, StructuralReason};
pub use formatter::{CnpjFormatter, CpfFormatter, Formatter};
pub use generation::{CnpjGenerator, CpfGenerator};
pub use normalization::{CnpjNormalizer, CpfNormalizer, Normalizer};
pub use validation::config::DocumentValidatorConfig;
pub use validation::{CnpjValidator, CpfValidator, DocumentValidator};
