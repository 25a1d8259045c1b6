use crate::check_digit::mod11_check_digit;
use crate::codec::{cnpj_char_value, digit_to_char};
use crate::document::DocumentKind;
use crate::error::DocumentError;

pub const CNPJ_BASE_LENGTH: usize = 12;

// Cyclic weights read from the least significant position: the last value of the
// sequence is weighted by 2, the one before by 3, and so on wrapping after 9.
const WEIGHTS: [i64; 13] = [2, 3, 4, 5, 6, 7, 8, 9, 2, 3, 4, 5, 6];

fn weighted_check_digit(values: &[i32]) -> u32 {
    let last = values.len() - 1;
    let sum: i64 = values
        .iter()
        .enumerate()
        .map(|(idx, value)| i64::from(*value) * WEIGHTS[last - idx])
        .sum();
    mod11_check_digit(sum)
}

/// Compute both CNPJ check digits for a 12-character base.
///
/// Every char is converted with [`cnpj_char_value`], so numeric and alphanumeric bases go
/// through the same arithmetic. The engine does not check which characters are allowed
/// for a given variant: that is decided by the classifier before the engine is reached.
/// Only the length is enforced here.
pub fn calculate_check_digits(base: &str) -> Result<[char; 2], DocumentError> {
    let mut values = [0i32; CNPJ_BASE_LENGTH + 1];
    let mut len = 0;
    for c in base.chars() {
        if len == CNPJ_BASE_LENGTH {
            len += 1;
            break;
        }
        values[len] = cnpj_char_value(c);
        len += 1;
    }
    if len != CNPJ_BASE_LENGTH {
        return Err(DocumentError::base_malformed(
            DocumentKind::Cnpj,
            format!(
                "expected {} characters, found {}",
                CNPJ_BASE_LENGTH,
                base.chars().count()
            ),
        ));
    }

    let first = weighted_check_digit(&values[..CNPJ_BASE_LENGTH]);
    values[CNPJ_BASE_LENGTH] = first as i32;
    let second = weighted_check_digit(&values);

    match (digit_to_char(first), digit_to_char(second)) {
        (Some(first), Some(second)) => Ok([first, second]),
        // the modulo-11 collapse never yields more than 9
        _ => Err(DocumentError::base_malformed(
            DocumentKind::Cnpj,
            "check digit out of range",
        )),
    }
}
