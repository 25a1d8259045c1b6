use crate::check_digit::mod11_check_digit;
use crate::document::DocumentKind;
use crate::error::DocumentError;

pub const CPF_BASE_LENGTH: usize = 9;

// Ascending table; the value at `len - idx` weights position `idx` of a `len`-long
// sequence, so the leading digit gets 10 for the first check digit and 11 for the second.
const WEIGHTS: [u32; 11] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11];

fn weighted_check_digit(digits: &[u32]) -> u32 {
    let len = digits.len();
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(idx, digit)| digit * WEIGHTS[len - idx])
        .sum();
    mod11_check_digit(i64::from(sum))
}

/// Compute both CPF check digits for a 9-digit base.
///
/// Fails with [`DocumentError::BaseMalformed`] when the base is not exactly 9 values in
/// `0..=9`.
pub fn calculate_check_digits(base: &[u32]) -> Result<[u32; 2], DocumentError> {
    if base.len() != CPF_BASE_LENGTH {
        return Err(DocumentError::base_malformed(
            DocumentKind::Cpf,
            format!(
                "expected {} digits, found {}",
                CPF_BASE_LENGTH,
                base.len()
            ),
        ));
    }
    if let Some(value) = base.iter().find(|d| **d > 9) {
        return Err(DocumentError::base_malformed(
            DocumentKind::Cpf,
            format!("{} is not a decimal digit", value),
        ));
    }

    let mut digits = [0u32; CPF_BASE_LENGTH + 1];
    digits[..CPF_BASE_LENGTH].copy_from_slice(base);

    let first = weighted_check_digit(base);
    digits[CPF_BASE_LENGTH] = first;
    let second = weighted_check_digit(&digits);

    Ok([first, second])
}
