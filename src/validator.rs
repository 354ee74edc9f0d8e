//! Stateful validator with memoized evaluation.

use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;

use crate::config::PolicyConfig;
use crate::delegate::PasswordDelegate;
use crate::error::Result;
use crate::error_code::ErrorCode;
use crate::evaluator::{evaluate_policy, Evaluation};
use crate::messages;

/// Validates one password at a time against a fixed policy.
///
/// Setters invalidate the cached [`Evaluation`]; the next read runs the
/// rule sections once and caches the result until the next setter call.
///
/// ```rust
/// use pwd_policy::{keys, PasswordValidator, PolicyConfig};
/// use secrecy::SecretString;
///
/// let config = PolicyConfig::new()
///     .set(keys::MINIMUM_LENGTH, 8)
///     .set(keys::CONTAINS_NUMBER, true)
///     .set(keys::CONTAINS_SPECIAL_CHARACTER, true);
///
/// let mut validator = PasswordValidator::new(config);
/// validator.set_password(SecretString::new("Passw0rd!".to_string().into()));
///
/// assert!(validator.is_password_valid().unwrap());
/// assert_eq!(validator.score().unwrap(), 91);
/// ```
pub struct PasswordValidator {
    config: PolicyConfig,
    password: SecretString,
    username: String,
    delegate: Option<Box<dyn PasswordDelegate>>,
    cached: Option<Evaluation>,
}

impl PasswordValidator {
    pub fn new(config: PolicyConfig) -> Self {
        Self {
            config,
            password: SecretString::new(String::new().into()),
            username: String::new(),
            delegate: None,
            cached: None,
        }
    }

    /// Builds a validator from a JSON configuration mapping.
    ///
    /// # Errors
    /// [`ValidatorError::Configuration`](crate::ValidatorError::Configuration)
    /// if `config` is not a JSON object.
    pub fn from_json(config: Value) -> Result<Self> {
        Ok(Self::new(PolicyConfig::from_value(config)?))
    }

    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    pub fn set_password(&mut self, password: SecretString) -> &mut Self {
        self.password = password;
        self.cached = None;
        self
    }

    pub fn set_username(&mut self, username: impl Into<String>) -> &mut Self {
        self.username = username.into();
        self.cached = None;
        self
    }

    pub fn set_delegate<D: PasswordDelegate + 'static>(&mut self, delegate: D) {
        self.delegate = Some(Box::new(delegate));
        self.cached = None;
    }

    /// `true` when the next read will run the rule sections.
    pub fn is_dirty(&self) -> bool {
        self.cached.is_none()
    }

    /// Returns the cached evaluation, running the sections first if needed.
    ///
    /// Failed evaluations are not cached.
    pub fn evaluate(&mut self) -> Result<&Evaluation> {
        let evaluation = match self.cached.take() {
            Some(evaluation) => evaluation,
            None => evaluate_policy(
                &self.config,
                self.password.expose_secret(),
                &self.username,
                self.delegate.as_deref(),
            )?,
        };
        Ok(&*self.cached.insert(evaluation))
    }

    pub fn is_password_valid(&mut self) -> Result<bool> {
        Ok(self.evaluate()?.is_valid())
    }

    pub fn errors(&mut self) -> Result<&[ErrorCode]> {
        Ok(self.evaluate()?.errors())
    }

    pub fn score(&mut self) -> Result<u8> {
        Ok(self.evaluate()?.score().value())
    }

    /// Human-readable message for `code`, see [`messages::format_error`].
    pub fn format_error(&self, code: &ErrorCode) -> Result<String> {
        messages::format_error(code)
    }

    /// Messages for every current violation, in order.
    pub fn error_messages(&mut self) -> Result<Vec<String>> {
        self.evaluate()?.errors().iter().map(messages::format_error).collect()
    }
}

impl std::fmt::Debug for PasswordValidator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordValidator")
            .field("config", &self.config)
            .field("password", &self.password)
            .field("username", &self.username)
            .field("delegate", &self.delegate.is_some())
            .field("cached", &self.cached)
            .finish()
    }
}
