//! Length section - checks password minimum length.

const MIN_LENGTH: usize = 16;

/// Checks if the password has at least [`MIN_LENGTH`] characters.
///
/// Length is counted in `char`s, so a multi-byte character counts once.
pub fn length_section(password: &str) -> bool {
    password.chars().count() >= MIN_LENGTH
}
