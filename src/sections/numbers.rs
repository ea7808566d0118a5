//! Number sections - digit count, repeated digits and the zero ban.

use crate::charset::{is_counted_digit, is_digit};

const MIN_NUMBERS: usize = 4;

/// Checks that the password holds at least [`MIN_NUMBERS`] digits from 1 to 9.
pub fn min_numbers_section(password: &str) -> bool {
    password.chars().filter(|&c| is_counted_digit(c)).count() >= MIN_NUMBERS
}

/// Checks that no digit is immediately followed by the same digit.
///
/// Zero is a digit here even though it never counts towards the minimum.
pub fn no_consecutive_numbers_section(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();
    !chars.windows(2).any(|w| is_digit(w[0]) && w[0] == w[1])
}

/// Checks that the digit `0` never appears.
pub fn no_zero_section(password: &str) -> bool {
    !password.contains('0')
}
