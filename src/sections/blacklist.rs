//! Blacklist sections - checks the password against wordlist files.

use super::{Pass, SectionResult};
use crate::config::keys;
use crate::error_code::ErrorCode;
use crate::wordlist::Wordlist;

/// Rejects a password listed verbatim in the `rejectWordlist` file.
pub fn wordlist_section(pass: &mut Pass<'_>) -> SectionResult {
    let Some(path) = pass.config.wordlist_path(keys::REJECT_WORDLIST)? else {
        return Ok(());
    };

    if Wordlist::load(&path)?.contains_exact(pass.password) {
        pass.errors.push(ErrorCode::InBlacklist);
    }
    Ok(())
}

/// Reports every `rejectWordlistSubstring` entry found inside the password.
pub fn wordlist_substring_section(pass: &mut Pass<'_>) -> SectionResult {
    let Some(path) = pass.config.wordlist_path(keys::REJECT_WORDLIST_SUBSTRING)? else {
        return Ok(());
    };

    let wordlist = Wordlist::load(&path)?;
    for word in wordlist.substring_matches(pass.password) {
        pass.errors.push(ErrorCode::PartInBlacklist(word.to_string()));
    }
    Ok(())
}
