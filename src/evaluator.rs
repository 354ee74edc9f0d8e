//! Password policy evaluator - runs the rule sections in order.

use serde::Serialize;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::config::PolicyConfig;
use crate::delegate::PasswordDelegate;
use crate::error::Result;
use crate::error_code::ErrorCode;
use crate::score::{final_score, PasswordScore};
use crate::sections::{
    cases_section, chunk_section, length_section, numbers_section, previous_password_section,
    special_characters_section, substrings_section, username_section, wordlist_section,
    wordlist_substring_section, Pass, SectionResult,
};

#[cfg(feature = "async")]
use crate::{error::ValidatorError, validator::PasswordValidator};

/// Outcome of one evaluation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evaluation {
    errors: Vec<ErrorCode>,
    score: PasswordScore,
    repeated_chunks: usize,
}

impl Evaluation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Violations in section order.
    pub fn errors(&self) -> &[ErrorCode] {
        &self.errors
    }

    pub fn score(&self) -> PasswordScore {
        self.score
    }

    /// Chunks of 2 to 4 characters repeating an earlier chunk. Does not
    /// affect validity or score.
    pub fn repeated_chunks(&self) -> usize {
        self.repeated_chunks
    }
}

/// Evaluates a password against a policy.
///
/// # Errors
/// Fails on the first misconfigured option or missing collaborator; policy
/// violations are reported in the returned [`Evaluation`] instead.
pub fn evaluate_policy(
    config: &PolicyConfig,
    password: &str,
    username: &str,
    delegate: Option<&dyn PasswordDelegate>,
) -> Result<Evaluation> {
    let mut pass = Pass::new(config, password, username, delegate);

    // Orchestrator: execute sections in sequence
    let sections: [(&str, fn(&mut Pass<'_>) -> SectionResult); 10] = [
        ("length", length_section),
        ("numbers", numbers_section),
        ("special_characters", special_characters_section),
        ("cases", cases_section),
        ("previous_passwords", previous_password_section),
        ("username", username_section),
        ("substrings", substrings_section),
        ("wordlist", wordlist_section),
        ("wordlist_substring", wordlist_substring_section),
        ("chunks", chunk_section),
    ];

    for (section_name, section_fn) in sections {
        if let Err(e) = section_fn(&mut pass) {
            #[cfg(feature = "tracing")]
            tracing::error!("Password policy section {} failed: {}", section_name, e);
            return Err(e);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!("section {} done, {} errors so far", section_name, pass.errors.len());
        #[cfg(not(feature = "tracing"))]
        let _ = section_name;
    }

    Ok(Evaluation {
        score: final_score(pass.score, &pass.counters),
        errors: pass.errors,
        repeated_chunks: pass.repeated_chunks,
    })
}

/// Waits for typing to settle before evaluating.
#[cfg(feature = "async")]
pub const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Async glue for interactive forms: debounces, then sends the evaluation.
///
/// Nothing is sent if `token` is cancelled during the debounce, which is how
/// a newer keystroke supersedes this one.
#[cfg(feature = "async")]
pub async fn evaluate_password_tx(
    validator: &mut PasswordValidator,
    token: CancellationToken,
    tx: mpsc::Sender<std::result::Result<Evaluation, ValidatorError>>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::time::sleep(DEBOUNCE).await;
    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("evaluation cancelled during debounce");
        return;
    }

    let result = validator.evaluate().cloned();

    if let Err(e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}
