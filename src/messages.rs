//! Human-readable error messages.
//!
//! Templates live in a text file with one `IDENTIFIER:TEMPLATE` entry per
//! line. A parameterized template carries one `%s` placeholder. The file is
//! loaded once per process and cached.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use crate::error::{Result, ValidatorError};
use crate::error_code::ErrorCode;

static TEMPLATES: RwLock<Option<HashMap<String, String>>> = RwLock::new(None);

pub const MESSAGES_PATH_ENV: &str = "PWD_MESSAGES_PATH";
pub const DEFAULT_MESSAGES_PATH: &str = "./assets/messages.i18n";
pub const PLACEHOLDER: &str = "%s";

/// Returns the message template file path.
///
/// Priority:
/// 1. Environment variable `PWD_MESSAGES_PATH`
/// 2. Default path `./assets/messages.i18n`
pub fn get_messages_path() -> PathBuf {
    std::env::var(MESSAGES_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_MESSAGES_PATH))
}

/// Loads message templates from the path given by [`get_messages_path`].
///
/// Does nothing if templates are already loaded.
///
/// # Errors
///
/// Returns [`ValidatorError::ResourceNotFound`] if the file cannot be read.
pub fn init_messages() -> Result<usize> {
    init_messages_from_path(get_messages_path())
}

/// Loads message templates from a specific file.
///
/// Idempotent: once loaded, later calls return the cached template count
/// without touching the file system.
pub fn init_messages_from_path<P: AsRef<Path>>(path: P) -> Result<usize> {
    {
        let guard = TEMPLATES.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(templates) = guard.as_ref() {
            return Ok(templates.len());
        }
    }

    // Re-checked under the write lock so concurrent first calls load once.
    let mut guard = TEMPLATES.write().unwrap_or_else(PoisonError::into_inner);
    if let Some(templates) = guard.as_ref() {
        return Ok(templates.len());
    }

    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| {
        #[cfg(feature = "tracing")]
        tracing::error!("Message templates initialization FAILED: {}", path.display());
        ValidatorError::ResourceNotFound {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let templates = parse_templates(&content);
    let count = templates.len();
    *guard = Some(templates);

    #[cfg(feature = "tracing")]
    tracing::info!("Message templates initialized: {} entries from {:?}", count, path);

    Ok(count)
}

/// Parses `IDENTIFIER:TEMPLATE` lines. Lines without a colon are skipped.
/// Only the first colon separates, so templates may contain colons.
pub fn parse_templates(content: &str) -> HashMap<String, String> {
    content
        .lines()
        .filter_map(|line| line.split_once(':'))
        .filter(|(identifier, _)| !identifier.trim().is_empty())
        .map(|(identifier, template)| (identifier.trim().to_string(), template.to_string()))
        .collect()
}

/// Renders an error code with its template, loading templates on first use.
///
/// # Errors
///
/// - [`ValidatorError::UnknownErrorCode`] if no template is registered for the
///   code's identifier
/// - [`ValidatorError::ResourceNotFound`] if templates were not loaded yet and
///   the template file cannot be read
pub fn format_error(code: &ErrorCode) -> Result<String> {
    init_messages()?;

    let guard = TEMPLATES.read().unwrap_or_else(PoisonError::into_inner);
    let template = guard
        .as_ref()
        .and_then(|templates| templates.get(code.identifier()))
        .ok_or_else(|| ValidatorError::UnknownErrorCode(code.identifier().to_string()))?;

    Ok(match code.parameter() {
        Some(param) => template.replacen(PLACEHOLDER, &param, 1),
        None => template.clone(),
    })
}

/// Like [`format_error`], for a raw `IDENTIFIER[:parameter]` string.
pub fn format_error_str(code: &str) -> Result<String> {
    format_error(&code.parse()?)
}

/// Resets the template cache for testing purposes.
#[cfg(test)]
pub fn reset_messages_for_testing() {
    let mut guard = TEMPLATES.write().unwrap_or_else(PoisonError::into_inner);
    *guard = None;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn set_env(key: &str, value: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe { std::env::set_var(key, value); }
    }

    fn remove_env(key: &str) {
        // SAFETY: This is only for testing purposes in single-threaded test context
        unsafe { std::env::remove_var(key); }
    }

    fn setup_with_tempfile(lines: &[&str]) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().expect("Failed to create temp file");
        for line in lines {
            writeln!(temp_file, "{}", line).expect("Failed to write");
        }
        temp_file
    }

    #[test]
    #[serial]
    fn test_get_messages_path_default() {
        remove_env(MESSAGES_PATH_ENV);
        assert_eq!(get_messages_path(), PathBuf::from(DEFAULT_MESSAGES_PATH));
    }

    #[test]
    #[serial]
    fn test_get_messages_path_from_env() {
        set_env(MESSAGES_PATH_ENV, "/custom/messages.i18n");
        assert_eq!(get_messages_path(), PathBuf::from("/custom/messages.i18n"));
        remove_env(MESSAGES_PATH_ENV);
    }

    #[test]
    fn test_parse_templates() {
        let templates = parse_templates(
            "PASSWORD_LENGTH:At least %s characters\nno colon here\n\nPASSWORD_IN_BLACKLIST:Too common: pick another\r\n",
        );
        assert_eq!(templates.len(), 2);
        assert_eq!(templates["PASSWORD_LENGTH"], "At least %s characters");
        assert_eq!(templates["PASSWORD_IN_BLACKLIST"], "Too common: pick another");
    }

    #[test]
    #[serial]
    fn test_format_error_substitutes_parameter() {
        reset_messages_for_testing();
        let file = setup_with_tempfile(&[
            "PASSWORD_LENGTH:Password must be at least %s characters",
            "PASSWORD_CONTAINS_SUBSTRING:Password must not contain \"%s\"",
        ]);
        init_messages_from_path(file.path()).unwrap();

        assert_eq!(
            format_error(&ErrorCode::Length(8)).unwrap(),
            "Password must be at least 8 characters"
        );
        assert_eq!(
            format_error_str("PASSWORD_CONTAINS_SUBSTRING:secret").unwrap(),
            "Password must not contain \"secret\""
        );
    }

    #[test]
    #[serial]
    fn test_format_error_verbatim_without_parameter() {
        reset_messages_for_testing();
        let file = setup_with_tempfile(&["PASSWORD_PREVIOUSLY_USED:Password was used before (%s)"]);
        init_messages_from_path(file.path()).unwrap();

        assert_eq!(
            format_error(&ErrorCode::PreviouslyUsed).unwrap(),
            "Password was used before (%s)"
        );
    }

    #[test]
    #[serial]
    fn test_format_error_unknown_code() {
        reset_messages_for_testing();
        let file = setup_with_tempfile(&["PASSWORD_LENGTH:Too short"]);
        init_messages_from_path(file.path()).unwrap();

        let result = format_error(&ErrorCode::InBlacklist);
        assert!(matches!(result, Err(ValidatorError::UnknownErrorCode(id)) if id == "PASSWORD_IN_BLACKLIST"));

        let result = format_error_str("NOT_A_CODE");
        assert!(matches!(result, Err(ValidatorError::UnknownErrorCode(_))));
    }

    #[test]
    #[serial]
    fn test_format_error_loads_lazily_from_env() {
        reset_messages_for_testing();
        let file = setup_with_tempfile(&["PASSWORD_CONTAINS_USERNAME:Password contains the username"]);
        set_env(MESSAGES_PATH_ENV, file.path().to_str().unwrap());

        assert_eq!(
            format_error(&ErrorCode::ContainsUsername).unwrap(),
            "Password contains the username"
        );

        remove_env(MESSAGES_PATH_ENV);
    }

    #[test]
    #[serial]
    fn test_init_messages_is_idempotent() {
        reset_messages_for_testing();
        let first = setup_with_tempfile(&["PASSWORD_LENGTH:first", "PASSWORD_IN_BLACKLIST:listed"]);
        let second = setup_with_tempfile(&["PASSWORD_LENGTH:second"]);

        assert_eq!(init_messages_from_path(first.path()).unwrap(), 2);
        assert_eq!(init_messages_from_path(second.path()).unwrap(), 2);
        assert_eq!(format_error(&ErrorCode::Length(3)).unwrap(), "first");
    }

    #[test]
    #[serial]
    fn test_missing_template_file() {
        reset_messages_for_testing();
        set_env(MESSAGES_PATH_ENV, "/nonexistent/messages.i18n");

        let result = format_error(&ErrorCode::NoLowercase);
        assert!(matches!(result, Err(ValidatorError::ResourceNotFound { .. })));

        remove_env(MESSAGES_PATH_ENV);
    }

    #[test]
    #[serial]
    fn test_shipped_templates_cover_every_code() {
        reset_messages_for_testing();
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/messages.i18n");
        init_messages_from_path(&path).unwrap();

        let codes = [
            ErrorCode::Length(8),
            ErrorCode::NotEnoughNumbers(1),
            ErrorCode::NotEnoughSpecialCharacters(1),
            ErrorCode::NoLowercase,
            ErrorCode::NoUppercase,
            ErrorCode::PreviouslyUsed,
            ErrorCode::ContainsUsername,
            ErrorCode::ContainsSubstring("secret".to_string()),
            ErrorCode::InBlacklist,
            ErrorCode::PartInBlacklist("dragon".to_string()),
        ];
        for code in &codes {
            let message = format_error(code).unwrap();
            assert!(!message.contains(PLACEHOLDER), "unfilled placeholder for {code}");
        }
        reset_messages_for_testing();
    }
}
