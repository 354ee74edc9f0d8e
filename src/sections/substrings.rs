//! Forbidden substring section.

use super::{Pass, SectionResult};
use crate::error_code::ErrorCode;

/// Reports every configured word found in the password, ignoring case, in
/// configuration order.
pub fn substrings_section(pass: &mut Pass<'_>) -> SectionResult {
    let Some(words) = pass.config.substrings()? else {
        return Ok(());
    };

    let password = pass.password.to_lowercase();
    for word in words {
        if password.contains(&word.to_lowercase()) {
            pass.errors.push(ErrorCode::ContainsSubstring(word.to_string()));
        }
    }
    Ok(())
}
