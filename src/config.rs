//! Policy configuration.
//!
//! A [`PolicyConfig`] maps option names to loosely typed [`OptionValue`]s.
//! Each rule checks the accepted type of its own option when it reads it, so
//! a malformed option only fails once the rule that owns it runs.
//!
//! # Example
//!
//! ```rust
//! use pwd_policy::{PolicyConfig, keys};
//!
//! let config = PolicyConfig::new()
//!     .set(keys::MINIMUM_LENGTH, 8)
//!     .set(keys::CONTAINS_NUMBER, true)
//!     .set(keys::REJECT_SUBSTRINGS, vec!["secret", "unlock"]);
//!
//! assert!(config.contains(keys::REJECT_SUBSTRINGS));
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{Result, ValidatorError};

/// Recognized option names.
pub mod keys {
    pub const MINIMUM_LENGTH: &str = "minimumLength";
    pub const CONTAINS_NUMBER: &str = "containsNumber";
    pub const CONTAINS_SPECIAL_CHARACTER: &str = "containsSpecialCharacter";
    pub const VALIDATE_CASES: &str = "validateCases";
    pub const REJECT_PREVIOUS_PASSWORDS: &str = "rejectPreviousPasswords";
    pub const REJECT_USERNAME_IN_PASSWORD: &str = "rejectUsernameInPassword";
    pub const REJECT_SUBSTRINGS: &str = "rejectSubstrings";
    pub const REJECT_WORDLIST: &str = "rejectWordlist";
    pub const REJECT_WORDLIST_SUBSTRING: &str = "rejectWordlistSubstring";
}

#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    List(Vec<OptionValue>),
}

impl OptionValue {
    fn from_json(key: &str, value: Value) -> Result<Option<Self>> {
        let value = match value {
            Value::Null => return Ok(None),
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => n
                .as_i64()
                .map(Self::Integer)
                .or_else(|| n.as_f64().map(Self::Float))
                .ok_or_else(|| {
                    ValidatorError::Configuration(format!("option {key} holds an unsupported number"))
                })?,
            Value::String(s) => Self::Text(s),
            Value::Array(items) => {
                let mut list = Vec::with_capacity(items.len());
                for item in items {
                    match Self::from_json(key, item)? {
                        Some(v) => list.push(v),
                        None => {
                            return Err(ValidatorError::Configuration(format!(
                                "option {key} contains a null entry"
                            )));
                        }
                    }
                }
                Self::List(list)
            }
            Value::Object(_) => {
                return Err(ValidatorError::Configuration(format!(
                    "option {key} holds a nested mapping"
                )));
            }
        };
        Ok(Some(value))
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for OptionValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for OptionValue {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<u32> for OptionValue {
    fn from(value: u32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&Path> for OptionValue {
    fn from(value: &Path) -> Self {
        Self::Text(value.to_string_lossy().into_owned())
    }
}

impl From<PathBuf> for OptionValue {
    fn from(value: PathBuf) -> Self {
        value.as_path().into()
    }
}

impl<T: Into<OptionValue>> From<Vec<T>> for OptionValue {
    fn from(value: Vec<T>) -> Self {
        Self::List(value.into_iter().map(Into::into).collect())
    }
}

/// Password policy options. Absent options disable their rule.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PolicyConfig {
    options: BTreeMap<String, OptionValue>,
}

impl PolicyConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an option, replacing any previous value.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.options.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.options.contains_key(key)
    }

    /// Builds a configuration from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`ValidatorError::Configuration`] if `value` is not an object,
    /// or if an option holds a nested object or a null list entry.
    /// Options set to `null` are treated as absent.
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(map) = value else {
            return Err(ValidatorError::Configuration(
                "configuration must be a mapping".to_string(),
            ));
        };

        let mut options = BTreeMap::new();
        for (key, value) in map {
            if let Some(option) = OptionValue::from_json(&key, value)? {
                options.insert(key, option);
            }
        }
        Ok(Self { options })
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| ValidatorError::Configuration(e.to_string()))?;
        Self::from_value(value)
    }

    /// Reads a JSON configuration file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|source| ValidatorError::ResourceNotFound {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_json_str(&content)
    }

    /// Minimum trimmed length. Anything that does not resolve to a positive
    /// integer falls back to 1.
    pub(crate) fn minimum_length(&self) -> u32 {
        let configured = match self.get(keys::MINIMUM_LENGTH) {
            Some(OptionValue::Integer(n)) => *n,
            Some(OptionValue::Float(f)) if f.is_finite() => f.trunc() as i64,
            Some(OptionValue::Bool(true)) => 1,
            Some(OptionValue::Text(s)) => leading_integer(s),
            _ => 0,
        };
        if configured < 1 {
            1
        } else {
            u32::try_from(configured).unwrap_or(u32::MAX)
        }
    }

    /// Minimum count for a `true | false | integer` option. Absent means 0.
    ///
    /// Integers are returned as configured; a minimum of 0 or below can never
    /// be violated.
    pub(crate) fn minimum_count(&self, key: &'static str) -> Result<i64> {
        match self.get(key) {
            None | Some(OptionValue::Bool(false)) => Ok(0),
            Some(OptionValue::Bool(true)) => Ok(1),
            Some(OptionValue::Integer(n)) => Ok(*n),
            Some(_) => Err(ValidatorError::invalid_config(
                key,
                "only true or false or an integer is allowed",
            )),
        }
    }

    /// `Some(flag)` when the option is present, failing on non-booleans.
    pub(crate) fn strict_flag(&self, key: &'static str) -> Result<Option<bool>> {
        match self.get(key) {
            None => Ok(None),
            Some(OptionValue::Bool(b)) => Ok(Some(*b)),
            Some(_) => Err(ValidatorError::invalid_config(
                key,
                "only true or false is allowed",
            )),
        }
    }

    /// Only a literal `true` enables a plain switch.
    pub(crate) fn is_enabled(&self, key: &str) -> bool {
        matches!(self.get(key), Some(OptionValue::Bool(true)))
    }

    /// Forbidden substrings, `None` when the rule is off.
    pub(crate) fn substrings(&self) -> Result<Option<Vec<&str>>> {
        const EXPECTED: &str = "a list of strings is needed";
        match self.get(keys::REJECT_SUBSTRINGS) {
            None | Some(OptionValue::Bool(false)) => Ok(None),
            Some(OptionValue::List(items)) => items
                .iter()
                .map(|item| match item {
                    OptionValue::Text(word) => Ok(word.as_str()),
                    _ => Err(ValidatorError::invalid_config(keys::REJECT_SUBSTRINGS, EXPECTED)),
                })
                .collect::<Result<Vec<_>>>()
                .map(Some),
            Some(_) => Err(ValidatorError::invalid_config(keys::REJECT_SUBSTRINGS, EXPECTED)),
        }
    }

    /// Wordlist location, `None` when the rule is off.
    pub(crate) fn wordlist_path(&self, key: &'static str) -> Result<Option<PathBuf>> {
        match self.get(key) {
            None => Ok(None),
            Some(OptionValue::Text(path)) => Ok(Some(PathBuf::from(path))),
            Some(_) => Err(ValidatorError::invalid_config(key, "a file path is needed")),
        }
    }
}

impl<'de> Deserialize<'de> for PolicyConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Self::from_value(value).map_err(serde::de::Error::custom)
    }
}

/// Leading optional sign and digits of `s`, 0 when there are none.
fn leading_integer(s: &str) -> i64 {
    let s = s.trim_start();
    let (negative, digits) = match s.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    let value = digits[..end].parse::<i64>().unwrap_or(0);
    if negative { -value } else { value }
}
