//! Password policy validation library
//!
//! Checks a candidate password against configurable policy rules (length,
//! character classes, forbidden substrings, username and previous-password
//! rejection, wordlist blacklists) and yields both itemized
//! [`ErrorCode`]s and a heuristic strength score in `0..=100`.
//!
//! # Features
//!
//! - `async`: Enables debounced async evaluation with cancellation
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_MESSAGES_PATH`: Custom path to the error message template file
//!   (default: `./assets/messages.i18n`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_policy::{keys, PasswordValidator, PolicyConfig};
//! use secrecy::SecretString;
//!
//! let config = PolicyConfig::new()
//!     .set(keys::MINIMUM_LENGTH, 8)
//!     .set(keys::CONTAINS_NUMBER, true)
//!     .set(keys::REJECT_SUBSTRINGS, vec!["secret", "unlock"]);
//!
//! let mut validator = PasswordValidator::new(config);
//! validator.set_password(SecretString::new("MySecret!".to_string().into()));
//!
//! if !validator.is_password_valid().expect("Invalid policy") {
//!     for message in validator.error_messages().expect("Missing templates") {
//!         println!("{message}");
//!     }
//! }
//! println!("Score: {}", validator.score().expect("Invalid policy"));
//! ```

// Internal modules
mod config;
mod delegate;
mod error;
mod error_code;
mod evaluator;
mod score;
mod sections;
mod validator;

pub mod messages;
pub mod wordlist;

// Public API
pub use config::{keys, OptionValue, PolicyConfig};
pub use delegate::{PasswordDelegate, PreviousPasswords};
pub use error::{Result, ValidatorError};
pub use error_code::ErrorCode;
pub use evaluator::{evaluate_policy, Evaluation};
pub use messages::{format_error, init_messages, init_messages_from_path};
pub use score::{PasswordScore, ScoreCounters};
pub use validator::PasswordValidator;

#[cfg(feature = "async")]
pub use evaluator::{evaluate_password_tx, DEBOUNCE};
