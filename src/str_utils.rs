/// An input is blank when it is empty or made only of whitespace.
pub fn is_blank(input: &str) -> bool {
    input.trim().is_empty()
}

/// True when the input has at least one char and every char equals the first one.
pub fn is_single_repeated_char(input: &str) -> bool {
    let mut chars = input.chars();
    match chars.next() {
        Some(first) => chars.all(|c| c == first),
        None => false,
    }
}

/// Keep only the chars accepted by `keep`, preserving their order.
pub fn retain_chars(input: &str, keep: impl Fn(char) -> bool) -> String {
    input.chars().filter(|c| keep(*c)).collect()
}
