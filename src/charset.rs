//! Character classes used by the rule sections.

/// Characters recognised as "special" by the `minSpecialChars` rule.
pub const SPECIAL_CHARACTERS: [char; 13] = [
    '!', '@', '#', '$', '%', '^', '&', '*', '-', '_', '+', '=', '?',
];

/// Returns `true` if `c` belongs to [`SPECIAL_CHARACTERS`].
pub fn is_special_character(c: char) -> bool {
    SPECIAL_CHARACTERS.contains(&c)
}

/// ASCII letters only; accented and non-Latin letters are not letters here.
pub(crate) fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}

/// Digits `1`-`9`. Zero never counts towards the minimum.
pub(crate) fn is_counted_digit(c: char) -> bool {
    matches!(c, '1'..='9')
}

pub(crate) fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Unicode `White_Space` plus the byte order mark, which browsers also
/// classify as whitespace.
pub(crate) fn is_whitespace(c: char) -> bool {
    c.is_whitespace() || c == '\u{FEFF}'
}
