//! Account-bound sections - previous passwords and username containment.

use super::{Pass, SectionResult};
use crate::config::keys;
use crate::error::ValidatorError;
use crate::error_code::ErrorCode;

/// Asks the delegate whether the password was used before.
pub fn previous_password_section(pass: &mut Pass<'_>) -> SectionResult {
    if pass.config.strict_flag(keys::REJECT_PREVIOUS_PASSWORDS)? != Some(true) {
        return Ok(());
    }

    let delegate = pass.delegate.ok_or(ValidatorError::DelegateMissing)?;
    let history = delegate
        .previous_passwords()
        .ok_or(ValidatorError::DelegateCapability)?;

    if history.is_previous_password(pass.password) {
        pass.errors.push(ErrorCode::PreviouslyUsed);
    }
    Ok(())
}

/// Rejects passwords containing the username, ignoring case.
///
/// The username is required whenever the option is present, even when it
/// is `false`.
pub fn username_section(pass: &mut Pass<'_>) -> SectionResult {
    let Some(reject) = pass.config.strict_flag(keys::REJECT_USERNAME_IN_PASSWORD)? else {
        return Ok(());
    };
    if pass.username.is_empty() {
        return Err(ValidatorError::UsernameMissing);
    }

    if reject
        && pass
            .password
            .to_lowercase()
            .contains(&pass.username.to_lowercase())
    {
        pass.errors.push(ErrorCode::ContainsUsername);
    }
    Ok(())
}
