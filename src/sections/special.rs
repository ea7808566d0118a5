//! Special character section - count, uniqueness and adjacency.

use std::collections::BTreeSet;

use crate::charset::{SPECIAL_CHARACTERS, is_special_character};

const MIN_SPECIAL: usize = 2;

/// Checks the special character requirements.
///
/// Passes when at least [`MIN_SPECIAL`] distinct characters of
/// [`SPECIAL_CHARACTERS`] appear and no special character sits right after
/// another one. Adjacency is judged at the *first* occurrence of each special
/// character: later repeats are not looked at on their own, so `"!a@@"`
/// passes while `"!@"` does not.
pub fn min_special_chars_section(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();

    let alphabet_present = SPECIAL_CHARACTERS
        .iter()
        .filter(|&c| chars.contains(c))
        .count();

    let occurrences: Vec<char> = chars
        .iter()
        .copied()
        .filter(|&c| is_special_character(c))
        .collect();
    let distinct: BTreeSet<char> = occurrences.iter().copied().collect();

    alphabet_present >= MIN_SPECIAL
        && distinct.len() >= MIN_SPECIAL
        && no_adjacent_specials(&chars, &occurrences)
}

fn no_adjacent_specials(chars: &[char], occurrences: &[char]) -> bool {
    occurrences.iter().all(|&special| {
        chars
            .iter()
            .position(|&c| c == special)
            .and_then(|first| first.checked_sub(1))
            .is_none_or(|prev| !is_special_character(chars[prev]))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", false)]
    #[case("!!", false)]
    #[case("!", false)]
    #[case("!@", false)]
    #[case("a!@", false)]
    #[case("!a@", true)]
    #[case("a!b@c!", true)]
    #[case("!a@b#$", false)]
    #[case(".,;:~", false)]
    #[case("Ab#d$f1234567890", true)]
    fn test_min_special_chars_section(#[case] pwd: &str, #[case] expected: bool) {
        assert_eq!(min_special_chars_section(pwd), expected);
    }

    #[rstest]
    #[case("!a@@")]
    #[case("x!y@!!")]
    fn test_repeats_are_judged_at_first_occurrence(#[case] pwd: &str) {
        assert!(min_special_chars_section(pwd));
    }

    #[test]
    fn test_repeat_after_special_at_first_occurrence_fails() {
        // the first '!' follows '@', so every '!' fails
        assert!(!min_special_chars_section("@!a!"));
    }

    #[test]
    fn test_non_alphabet_punctuation_separates_specials() {
        // '.' is not special, so '@' has no special neighbour
        assert!(min_special_chars_section("!.@"));
    }
}
