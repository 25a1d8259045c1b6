//! Random, check-digit-consistent documents.
//!
//! Generated values are synthetic test data. They are valid by construction but are not
//! issued to anyone, and the random source is not cryptographic.

use crate::check_digit;
use crate::check_digit::cnpj::CNPJ_BASE_LENGTH;
use crate::check_digit::cpf::CPF_BASE_LENGTH;
use crate::classifier::CnpjType;
use crate::codec::digits_to_string;
use crate::error::DocumentError;
use crate::formatter::{punctuate_cnpj, punctuate_cpf};
use crate::stats::GLOBAL_STATS;
use rand::Rng;

fn pick<R: Rng + ?Sized>(rng: &mut R, alphabet: &'static str) -> char {
    let bytes = alphabet.as_bytes();
    char::from(bytes[rng.gen_range(0..bytes.len())])
}

/// A base made of one repeated value yields a document made of one repeated char,
/// which validation refuses. Swap the last position for another value in that case.
fn break_repetition<T: PartialEq + Copy, R: Rng + ?Sized>(
    base: &mut [T],
    alphabet: &[T],
    rng: &mut R,
) {
    let Some((&last, rest)) = base.split_last() else {
        return;
    };
    if !rest.iter().all(|value| *value == last) {
        return;
    }
    if let Some(idx) = alphabet.iter().position(|value| *value == last) {
        let shift = 1 + rng.gen_range(0..alphabet.len() - 1);
        if let Some(slot) = base.last_mut() {
            *slot = alphabet[(idx + shift) % alphabet.len()];
        }
    }
}

const DIGIT_VALUES: [u32; 10] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];

#[derive(Debug, Clone, Copy, Default)]
pub struct CpfGenerator;

impl CpfGenerator {
    /// An unformatted, valid CPF drawn from the thread-local generator.
    pub fn generate(&self) -> Result<String, DocumentError> {
        self.generate_with(&mut rand::thread_rng())
    }

    /// Same as [`CpfGenerator::generate`] with an explicit random source.
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, DocumentError> {
        let mut digits: Vec<u32> = (0..CPF_BASE_LENGTH).map(|_| rng.gen_range(0..10)).collect();
        break_repetition(&mut digits, &DIGIT_VALUES, rng);
        let check_digits = check_digit::cpf::calculate_check_digits(&digits)?;
        digits.extend_from_slice(&check_digits);
        GLOBAL_STATS.record_cpf_generated();
        // every value is below 10
        Ok(digits_to_string(&digits).unwrap_or_default())
    }

    pub fn generate_formatted(&self) -> Result<String, DocumentError> {
        self.generate().map(|cpf| punctuate_cpf(&cpf))
    }

    pub fn generate_formatted_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<String, DocumentError> {
        self.generate_with(rng).map(|cpf| punctuate_cpf(&cpf))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CnpjGenerator;

impl CnpjGenerator {
    /// An unformatted, valid CNPJ of the given variant drawn from the thread-local
    /// generator.
    pub fn generate(&self, cnpj_type: CnpjType) -> Result<String, DocumentError> {
        self.generate_with(cnpj_type, &mut rand::thread_rng())
    }

    /// Every base position is drawn uniformly from [`CnpjType::base_alphabet`], so an
    /// alphanumeric CNPJ may occasionally come out with digits only.
    pub fn generate_with<R: Rng + ?Sized>(
        &self,
        cnpj_type: CnpjType,
        rng: &mut R,
    ) -> Result<String, DocumentError> {
        let alphabet = cnpj_type.base_alphabet();
        let mut base: Vec<char> = (0..CNPJ_BASE_LENGTH).map(|_| pick(rng, alphabet)).collect();
        let alphabet: Vec<char> = alphabet.chars().collect();
        break_repetition(&mut base, &alphabet, rng);
        let mut cnpj: String = base.into_iter().collect();
        let check_digits = check_digit::cnpj::calculate_check_digits(&cnpj)?;
        cnpj.extend(check_digits);
        GLOBAL_STATS.record_cnpj_generated(cnpj_type);
        Ok(cnpj)
    }

    pub fn generate_formatted(&self, cnpj_type: CnpjType) -> Result<String, DocumentError> {
        self.generate(cnpj_type).map(|cnpj| punctuate_cnpj(&cnpj))
    }

    pub fn generate_formatted_with<R: Rng + ?Sized>(
        &self,
        cnpj_type: CnpjType,
        rng: &mut R,
    ) -> Result<String, DocumentError> {
        self.generate_with(cnpj_type, rng)
            .map(|cnpj| punctuate_cnpj(&cnpj))
    }
}
