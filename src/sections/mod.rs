//! Password policy sections
//!
//! Each section checks one aspect of the password, appends its violations
//! and adjusts the running score and counters of the current [`Pass`].

mod blacklist;
mod chunks;
mod history;
mod length;
mod substrings;
mod variety;

pub use blacklist::{wordlist_section, wordlist_substring_section};
pub use chunks::chunk_section;
pub use history::{previous_password_section, username_section};
pub use length::length_section;
pub use substrings::substrings_section;
pub use variety::{cases_section, numbers_section, special_characters_section};

use crate::config::PolicyConfig;
use crate::delegate::PasswordDelegate;
use crate::error::Result;
use crate::error_code::ErrorCode;
use crate::score::ScoreCounters;

/// Result type for section functions.
/// - `Ok(())` - Section ran; violations, if any, were pushed on the pass
/// - `Err(_)` - Misconfiguration or missing collaborator, evaluation aborts
pub type SectionResult = Result<()>;

/// State shared by all sections during one evaluation.
pub struct Pass<'a> {
    pub config: &'a PolicyConfig,
    pub password: &'a str,
    pub username: &'a str,
    pub delegate: Option<&'a dyn PasswordDelegate>,
    pub errors: Vec<ErrorCode>,
    pub counters: ScoreCounters,
    pub score: i64,
    pub repeated_chunks: usize,
}

impl<'a> Pass<'a> {
    pub fn new(
        config: &'a PolicyConfig,
        password: &'a str,
        username: &'a str,
        delegate: Option<&'a dyn PasswordDelegate>,
    ) -> Self {
        Self {
            config,
            password,
            username,
            delegate,
            errors: Vec::new(),
            counters: ScoreCounters::default(),
            score: 0,
            repeated_chunks: 0,
        }
    }
}
