//! Conversions between characters and the numeric values fed to the check-digit engines.

/// Numeric value of an ASCII decimal digit. Any other char, including non-ASCII
/// digits such as `'３'`, yields `None`.
#[inline]
pub fn char_to_digit(c: char) -> Option<u32> {
    if c.is_ascii_digit() {
        c.to_digit(10)
    } else {
        None
    }
}

/// ASCII char for a digit value in `0..=9`.
#[inline]
pub fn digit_to_char(digit: u32) -> Option<char> {
    char::from_digit(digit, 10)
}

/// Convert a string made only of ASCII digits into their values.
pub fn to_digit_array(input: &str) -> Option<Vec<u32>> {
    input.chars().map(char_to_digit).collect()
}

/// Render digit values back to text. Values above 9 are not digits and yield `None`.
pub fn digits_to_string(digits: &[u32]) -> Option<String> {
    digits.iter().map(|d| digit_to_char(*d)).collect()
}

/// Value of a CNPJ character for the checksum: its code point minus the code point of
/// `'0'`. Digits map to 0-9 and upper-case letters to 17-42, which is what the
/// alphanumeric CNPJ algorithm expects.
#[inline]
pub fn cnpj_char_value(c: char) -> i32 {
    c as i32 - '0' as i32
}
