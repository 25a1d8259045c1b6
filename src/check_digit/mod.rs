//! Weighted modulo-11 check-digit engines.
//!
//! Both identifiers append two check digits to their base. Each digit is the weighted sum
//! of the preceding values collapsed through the same modulo-11 rule: a remainder below 2
//! gives `0`, anything else gives `11 - remainder`.

pub mod cnpj;
pub mod cpf;

const MODULUS: i64 = 11;

/// Collapse a weighted sum into a single check digit.
///
/// The remainder uses truncated division, so a negative sum produces a non-positive
/// remainder and collapses to `0`.
#[inline]
fn mod11_check_digit(sum: i64) -> u32 {
    let rest = sum % MODULUS;
    if rest < 2 {
        0
    } else {
        (MODULUS - rest) as u32
    }
}

#[cfg(test)]
mod test {
    use super::mod11_check_digit;

    #[test]
    fn collapse_rule() {
        let test_cases = vec![
            (0, 0),
            (11, 0),
            (12, 0),
            (13, 9),
            (21, 1),
            (459, 3),
            (424, 5),
            (-3, 0),
        ];
        for (sum, expected) in test_cases {
            assert_eq!(mod11_check_digit(sum), expected, "sum: {}", sum);
        }
    }

    #[test]
    fn always_a_single_digit() {
        for sum in -50..500 {
            assert!(mod11_check_digit(sum) <= 9);
        }
    }
}
