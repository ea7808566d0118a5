//! Password validator - runs every rule section against a password.

use secrecy::{ExposeSecret, SecretString};
use strum::IntoEnumIterator;

#[cfg(feature = "async")]
use std::time::Duration;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::results::RuleResults;
use crate::rule::Rule;
use crate::sections::section_for;

/// Delay before a debounced validation runs.
#[cfg(feature = "async")]
pub const DEBOUNCE: Duration = Duration::from_millis(300);

/// Validates a password against every rule.
///
/// Never fails: any string, including the empty one, yields one result per
/// rule.
pub fn validate_password(password: &SecretString) -> RuleResults {
    let pwd = password.expose_secret();
    let mut results = RuleResults::new();

    for rule in Rule::iter() {
        let passed = section_for(rule)(pwd);

        #[cfg(feature = "tracing")]
        tracing::trace!(rule = %rule, passed, "rule evaluated");

        results.record(rule, passed);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        passed = results.passed_count(),
        valid = results.is_valid(),
        "password validated"
    );

    results
}

/// Checks a single rule.
pub fn check_rule(rule: Rule, password: &SecretString) -> bool {
    section_for(rule)(password.expose_secret())
}

/// Debounced version that sends the results via channel.
///
/// Waits [`DEBOUNCE`] first; if `token` was cancelled meanwhile (a newer input
/// superseded this one) nothing is sent.
#[cfg(feature = "async")]
pub async fn validate_password_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<RuleResults>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("validation is about to start...");

    tokio::time::sleep(DEBOUNCE).await;
    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::info!("validation superseded, skipping");
        return;
    }

    let results = validate_password(password);

    if let Err(_e) = tx.send(results).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password validation result: {}", _e);
    }
}
