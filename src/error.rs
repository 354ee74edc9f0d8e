//! Configuration and usage errors.
//!
//! Password policy violations never show up here: they are collected as
//! [`ErrorCode`](crate::ErrorCode) values on the [`Evaluation`](crate::Evaluation).

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ValidatorError {
    #[error("Invalid password configuration: {0}")]
    Configuration(String),
    #[error("Invalid parameter for {option}: {expected}")]
    InvalidConfig {
        option: &'static str,
        expected: &'static str,
    },
    #[error("Password delegate is not set")]
    DelegateMissing,
    #[error("Password delegate cannot answer isPreviousPassword")]
    DelegateCapability,
    #[error("Username is unknown")]
    UsernameMissing,
    #[error("Resource not found: {}", .path.display())]
    ResourceNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("No message template for error code {0}")]
    UnknownErrorCode(String),
}

pub type Result<T> = std::result::Result<T, ValidatorError>;

impl ValidatorError {
    pub(crate) fn invalid_config(option: &'static str, expected: &'static str) -> Self {
        Self::InvalidConfig { option, expected }
    }
}
