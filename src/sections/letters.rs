//! Letter sections - case mixing and repeated letters.

use crate::charset::is_letter;

/// Checks that the password mixes ASCII lowercase and uppercase letters.
pub fn lowercase_uppercase_section(password: &str) -> bool {
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    has_lower && has_upper
}

/// Checks that no ASCII letter is immediately followed by the same letter.
///
/// Comparison is case-sensitive: `"aa"` fails, `"aA"` passes.
pub fn no_consecutive_letters_section(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();
    !chars.windows(2).any(|w| is_letter(w[0]) && w[0] == w[1])
}
