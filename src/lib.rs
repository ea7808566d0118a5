//! Password rule validation library
//!
//! This library checks a password against eight fixed rules and reports
//! the outcome of each rule plus an overall verdict.
//!
//! | Rule | Holds when |
//! |---|---|
//! | `length` | at least 16 characters |
//! | `lowercaseUppercase` | both ASCII lowercase and uppercase letters |
//! | `noConsecutiveLetters` | no letter directly repeated (`aa`, `AA`) |
//! | `minNumbers` | at least 4 digits from 1 to 9 |
//! | `noConsecutiveNumbers` | no digit directly repeated |
//! | `minSpecialChars` | at least 2 distinct characters of `!@#$%^&*-_+=?`, never adjacent |
//! | `noZero` | no `0` |
//! | `noSpaces` | no whitespace |
//!
//! # Features
//!
//! - `async`: Enables debounced validation sent over a channel
//! - `tracing`: Enables logging via tracing crate
//! - `serde`: Implements `Serialize` for [`Rule`] and [`RuleResults`]
//!
//! # Example
//!
//! ```rust
//! use pwd_validator::{validate_password, Rule};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Ab#d$f1234567890".to_string().into());
//! let results = validate_password(&password);
//!
//! assert!(results[Rule::Length]);
//! assert!(!results[Rule::NoZero]);
//! assert!(!results.is_valid());
//! println!("Missing: {:?}", results.reasons());
//! ```

// Internal modules
mod charset;
mod evaluator;
mod results;
mod rule;
mod sections;

// Public API
pub use charset::{SPECIAL_CHARACTERS, is_special_character};
pub use evaluator::{check_rule, validate_password};
pub use results::RuleResults;
pub use rule::{Rule, UnknownRuleError};

#[cfg(feature = "async")]
pub use evaluator::{DEBOUNCE, validate_password_tx};
