//! Shared utility functions
//!
//! Digit normalization used by both the check-digit validators and the
//! display masks.

/// Strip every character that is not an ASCII digit
///
/// # Examples
/// ```
/// use cadastro::util::only_digits;
/// assert_eq!(only_digits("123.456.789-09"), "12345678909");
/// assert_eq!(only_digits("(11) 3333-4444"), "1133334444");
/// assert_eq!(only_digits("abc"), "");
/// ```
pub fn only_digits(s: &str) -> String {
    s.chars().filter(char::is_ascii_digit).collect()
}

/// Numeric values of the ASCII digits in `s`, in order
///
/// # Examples
/// ```
/// use cadastro::util::digit_values;
/// assert_eq!(digit_values("1.2-3"), vec![1, 2, 3]);
/// ```
pub fn digit_values(s: &str) -> Vec<u8> {
    s.bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect()
}

/// True when every digit is the same, e.g. `00000000000`
///
/// An empty slice is not a repdigit.
pub fn is_repdigit(digits: &[u8]) -> bool {
    match digits.split_first() {
        Some((first, rest)) => rest.iter().all(|d| d == first),
        None => false,
    }
}
