//! Whitespace section.

use crate::charset::is_whitespace;

/// Checks that the password contains no whitespace at all.
pub fn no_spaces_section(password: &str) -> bool {
    !password.chars().any(is_whitespace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", true)]
    #[case("NoSpacesHere!1", true)]
    #[case("with space", false)]
    #[case("tab\there", false)]
    #[case("line\nbreak", false)]
    #[case("trailing ", false)]
    #[case("nbsp\u{00A0}inside", false)]
    #[case("\u{FEFF}bom", false)]
    fn test_no_spaces_section(#[case] pwd: &str, #[case] expected: bool) {
        assert_eq!(no_spaces_section(pwd), expected);
    }
}
