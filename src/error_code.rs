//! Structured policy violation codes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidatorError;

/// One policy violation, rendered as `IDENTIFIER` or `IDENTIFIER:parameter`.
///
/// Which variants carry a parameter is fixed per identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ErrorCode {
    /// Trimmed password is shorter than the minimum length.
    Length(u32),
    /// Configured minimum digit count; may be zero or negative.
    NotEnoughNumbers(i64),
    NotEnoughSpecialCharacters(i64),
    NoLowercase,
    NoUppercase,
    PreviouslyUsed,
    ContainsUsername,
    /// A configured forbidden substring, as configured.
    ContainsSubstring(String),
    InBlacklist,
    /// A substring-wordlist entry found inside the password.
    PartInBlacklist(String),
}

impl ErrorCode {
    pub const LENGTH: &'static str = "PASSWORD_LENGTH";
    pub const NOT_ENOUGH_NUMBERS: &'static str = "PASSWORD_NOT_ENOUGH_NUMBERS";
    pub const NOT_ENOUGH_SPECIAL_CHARACTERS: &'static str =
        "PASSWORD_NOT_ENOUGH_SPECIAL_CHARACTERS";
    pub const NO_LOWERCASE: &'static str = "PASSWORD_CONTAINS_NO_LOWERCASE";
    pub const NO_UPPERCASE: &'static str = "PASSWORD_CONTAINS_NO_UPPERCASE";
    pub const PREVIOUSLY_USED: &'static str = "PASSWORD_PREVIOUSLY_USED";
    pub const CONTAINS_USERNAME: &'static str = "PASSWORD_CONTAINS_USERNAME";
    pub const CONTAINS_SUBSTRING: &'static str = "PASSWORD_CONTAINS_SUBSTRING";
    pub const IN_BLACKLIST: &'static str = "PASSWORD_IN_BLACKLIST";
    pub const PART_IN_BLACKLIST: &'static str = "PASSWORD_PART_IN_BLACKLIST";

    /// The identifier used as the message template key.
    pub fn identifier(&self) -> &'static str {
        match self {
            Self::Length(_) => Self::LENGTH,
            Self::NotEnoughNumbers(_) => Self::NOT_ENOUGH_NUMBERS,
            Self::NotEnoughSpecialCharacters(_) => Self::NOT_ENOUGH_SPECIAL_CHARACTERS,
            Self::NoLowercase => Self::NO_LOWERCASE,
            Self::NoUppercase => Self::NO_UPPERCASE,
            Self::PreviouslyUsed => Self::PREVIOUSLY_USED,
            Self::ContainsUsername => Self::CONTAINS_USERNAME,
            Self::ContainsSubstring(_) => Self::CONTAINS_SUBSTRING,
            Self::InBlacklist => Self::IN_BLACKLIST,
            Self::PartInBlacklist(_) => Self::PART_IN_BLACKLIST,
        }
    }

    pub fn parameter(&self) -> Option<String> {
        match self {
            Self::Length(n) => Some(n.to_string()),
            Self::NotEnoughNumbers(n) | Self::NotEnoughSpecialCharacters(n) => Some(n.to_string()),
            Self::ContainsSubstring(word) | Self::PartInBlacklist(word) => Some(word.clone()),
            _ => None,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.parameter() {
            Some(param) => write!(f, "{}:{}", self.identifier(), param),
            None => f.write_str(self.identifier()),
        }
    }
}

impl FromStr for ErrorCode {
    type Err = ValidatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || ValidatorError::UnknownErrorCode(s.to_string());
        let (identifier, param) = match s.split_once(':') {
            Some((identifier, param)) => (identifier, Some(param)),
            None => (s, None),
        };

        let code = match (identifier, param) {
            (Self::LENGTH, _) => Self::Length(count(param).ok_or_else(unknown)?),
            (Self::NOT_ENOUGH_NUMBERS, _) => {
                Self::NotEnoughNumbers(count(param).ok_or_else(unknown)?)
            }
            (Self::NOT_ENOUGH_SPECIAL_CHARACTERS, _) => {
                Self::NotEnoughSpecialCharacters(count(param).ok_or_else(unknown)?)
            }
            (Self::CONTAINS_SUBSTRING, Some(word)) => Self::ContainsSubstring(word.to_string()),
            (Self::PART_IN_BLACKLIST, Some(word)) => Self::PartInBlacklist(word.to_string()),
            (Self::NO_LOWERCASE, None) => Self::NoLowercase,
            (Self::NO_UPPERCASE, None) => Self::NoUppercase,
            (Self::PREVIOUSLY_USED, None) => Self::PreviouslyUsed,
            (Self::CONTAINS_USERNAME, None) => Self::ContainsUsername,
            (Self::IN_BLACKLIST, None) => Self::InBlacklist,
            _ => return Err(unknown()),
        };
        Ok(code)
    }
}

fn count<T: FromStr>(param: Option<&str>) -> Option<T> {
    param?.parse().ok()
}

impl From<ErrorCode> for String {
    fn from(code: ErrorCode) -> Self {
        code.to_string()
    }
}

impl TryFrom<String> for ErrorCode {
    type Error = ValidatorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
