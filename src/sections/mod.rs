//! Password rule sections
//!
//! Each section checks a single rule and returns whether it holds.

mod length;
mod letters;
mod numbers;
mod special;
mod whitespace;

pub use length::length_section;
pub use letters::{lowercase_uppercase_section, no_consecutive_letters_section};
pub use numbers::{min_numbers_section, no_consecutive_numbers_section, no_zero_section};
pub use special::min_special_chars_section;
pub use whitespace::no_spaces_section;

use crate::rule::Rule;

/// Signature shared by every section: `true` when the rule holds.
pub type SectionFn = fn(&str) -> bool;

/// Returns the section implementing `rule`.
pub fn section_for(rule: Rule) -> SectionFn {
    match rule {
        Rule::Length => length_section,
        Rule::LowercaseUppercase => lowercase_uppercase_section,
        Rule::NoConsecutiveLetters => no_consecutive_letters_section,
        Rule::MinNumbers => min_numbers_section,
        Rule::NoConsecutiveNumbers => no_consecutive_numbers_section,
        Rule::MinSpecialChars => min_special_chars_section,
        Rule::NoZero => no_zero_section,
        Rule::NoSpaces => no_spaces_section,
    }
}
