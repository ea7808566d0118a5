//! Rule identifiers.

use std::str::FromStr;

use strum::{Display, EnumCount, EnumIter, IntoEnumIterator, IntoStaticStr};
use thiserror::Error;

/// One of the eight password rules, in canonical order.
///
/// `Display` and [`Rule::name`] yield the camelCase wire name (e.g. `minNumbers`),
/// which `FromStr` accepts back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[derive(Display, EnumCount, EnumIter, IntoStaticStr)]
pub enum Rule {
    #[strum(serialize = "length")]
    Length,
    #[strum(serialize = "lowercaseUppercase")]
    LowercaseUppercase,
    #[strum(serialize = "noConsecutiveLetters")]
    NoConsecutiveLetters,
    #[strum(serialize = "minNumbers")]
    MinNumbers,
    #[strum(serialize = "noConsecutiveNumbers")]
    NoConsecutiveNumbers,
    #[strum(serialize = "minSpecialChars")]
    MinSpecialChars,
    #[strum(serialize = "noZero")]
    NoZero,
    #[strum(serialize = "noSpaces")]
    NoSpaces,
}

/// Number of rules; every `RuleResults` holds exactly this many entries.
pub(crate) const RULE_COUNT: usize = <Rule as EnumCount>::COUNT;

impl Rule {
    /// The camelCase wire name.
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Human-readable requirement, suitable for a checklist next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Self::Length => "At least 16 characters",
            Self::LowercaseUppercase => "Uppercase and lowercase letters",
            Self::NoConsecutiveLetters => "No two identical consecutive letters",
            Self::MinNumbers => "At least 4 numbers (excluding 0)",
            Self::NoConsecutiveNumbers => "No two identical consecutive numbers",
            Self::MinSpecialChars => {
                "At least 2 special characters, not repeated or consecutive (!@#$%^&*-_+=?)"
            }
            Self::NoZero => "The number 0 is not used",
            Self::NoSpaces => "No spaces",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown password rule: {name}")]
pub struct UnknownRuleError {
    pub name: String,
}

impl FromStr for Rule {
    type Err = UnknownRuleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::iter()
            .find(|rule| rule.name() == s)
            .ok_or_else(|| UnknownRuleError { name: s.to_string() })
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Rule {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}
