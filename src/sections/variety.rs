//! Character variety sections - digits, special characters and letter cases.

use super::{Pass, SectionResult};
use crate::config::keys;
use crate::error_code::ErrorCode;

/// Characters counted as special.
pub const SPECIAL_CHARACTERS: &[char] = &[
    '|', '!', '@', '#', '$', '%', '&', '*', '/', '=', '?', ',', ';', '.', ':', '-', '_', '+',
    '~', '^', '¨', '<', '>', '(', ')', '[', ']', '€', '{', '}', '`', '\'', '\\',
];

pub fn is_special_character(c: char) -> bool {
    SPECIAL_CHARACTERS.contains(&c)
}

/// Counts ASCII digits against `containsNumber`.
///
/// Three or more digits are worth 5 points.
pub fn numbers_section(pass: &mut Pass<'_>) -> SectionResult {
    let minimum = pass.config.minimum_count(keys::CONTAINS_NUMBER)?;
    let digits = pass.password.chars().filter(|c| c.is_ascii_digit()).count();

    pass.counters.digits = digits;
    if digits >= 3 {
        pass.score += 5;
    }
    if (digits as i64) < minimum {
        pass.errors.push(ErrorCode::NotEnoughNumbers(minimum));
    }
    Ok(())
}

/// Counts special characters against `containsSpecialCharacter`.
///
/// Two or more are worth 5 points.
pub fn special_characters_section(pass: &mut Pass<'_>) -> SectionResult {
    let minimum = pass.config.minimum_count(keys::CONTAINS_SPECIAL_CHARACTER)?;
    let specials = pass.password.chars().filter(|&c| is_special_character(c)).count();

    pass.counters.specials = specials;
    if specials >= 2 {
        pass.score += 5;
    }
    if (specials as i64) < minimum {
        pass.errors.push(ErrorCode::NotEnoughSpecialCharacters(minimum));
    }
    Ok(())
}

/// Scores mixed case and, with `validateCases`, requires both cases.
pub fn cases_section(pass: &mut Pass<'_>) -> SectionResult {
    let lowercase = pass.password.chars().filter(|c| c.is_ascii_lowercase()).count();
    let uppercase = pass.password.chars().filter(|c| c.is_ascii_uppercase()).count();

    if lowercase > 0 && uppercase > 0 {
        pass.score += 10;
    }
    pass.counters.letters = lowercase + uppercase;

    if pass.config.is_enabled(keys::VALIDATE_CASES) {
        if lowercase == 0 {
            pass.errors.push(ErrorCode::NoLowercase);
        }
        if uppercase == 0 {
            pass.errors.push(ErrorCode::NoUppercase);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PolicyConfig;
    use crate::error::ValidatorError;

    #[test]
    fn test_numbers_section_minimum_from_integer() {
        let config = PolicyConfig::new().set(keys::CONTAINS_NUMBER, 2);
        let mut pass = Pass::new(&config, "abc1", "", None);
        numbers_section(&mut pass).unwrap();
        assert_eq!(pass.errors, vec![ErrorCode::NotEnoughNumbers(2)]);
        assert_eq!(pass.counters.digits, 1);
        assert_eq!(pass.score, 0);
    }

    #[test]
    fn test_numbers_section_bonus_for_three_digits() {
        let config = PolicyConfig::new().set(keys::CONTAINS_NUMBER, true);
        let mut pass = Pass::new(&config, "a1b2c3", "", None);
        numbers_section(&mut pass).unwrap();
        assert!(pass.errors.is_empty());
        assert_eq!(pass.counters.digits, 3);
        assert_eq!(pass.score, 5);
    }

    #[test]
    fn test_numbers_section_disabled_still_counts() {
        let config = PolicyConfig::new();
        let mut pass = Pass::new(&config, "nodigits", "", None);
        numbers_section(&mut pass).unwrap();
        assert!(pass.errors.is_empty());
        assert_eq!(pass.counters.digits, 0);
    }

    #[test]
    fn test_non_positive_minimum_never_fires() {
        let config = PolicyConfig::new()
            .set(keys::CONTAINS_NUMBER, -1)
            .set(keys::CONTAINS_SPECIAL_CHARACTER, 0);
        let mut pass = Pass::new(&config, "abcdef", "", None);
        numbers_section(&mut pass).unwrap();
        special_characters_section(&mut pass).unwrap();
        assert!(pass.errors.is_empty());
    }

    #[test]
    fn test_huge_minimum_is_kept() {
        let config = PolicyConfig::new().set(keys::CONTAINS_NUMBER, i64::MAX);
        let mut pass = Pass::new(&config, "123", "", None);
        numbers_section(&mut pass).unwrap();
        assert_eq!(pass.errors, vec![ErrorCode::NotEnoughNumbers(i64::MAX)]);
    }

    #[test]
    fn test_numbers_section_invalid_option() {
        let config = PolicyConfig::new().set(keys::CONTAINS_NUMBER, "yes");
        let mut pass = Pass::new(&config, "abc", "", None);
        let result = numbers_section(&mut pass);
        assert!(matches!(result, Err(ValidatorError::InvalidConfig { .. })));
    }

    #[test]
    fn test_special_characters_section_full_set() {
        let config = PolicyConfig::new().set(keys::CONTAINS_SPECIAL_CHARACTER, 33);
        let all: String = SPECIAL_CHARACTERS.iter().collect();
        let mut pass = Pass::new(&config, &all, "", None);
        special_characters_section(&mut pass).unwrap();
        assert!(pass.errors.is_empty());
        assert_eq!(pass.counters.specials, SPECIAL_CHARACTERS.len());
        assert_eq!(pass.score, 5);
    }

    #[test]
    fn test_special_characters_section_not_enough() {
        let config = PolicyConfig::new().set(keys::CONTAINS_SPECIAL_CHARACTER, true);
        // space and quote marks are not in the set
        let mut pass = Pass::new(&config, "no \"specials\" here", "", None);
        special_characters_section(&mut pass).unwrap();
        assert_eq!(pass.errors, vec![ErrorCode::NotEnoughSpecialCharacters(1)]);
        assert_eq!(pass.counters.specials, 0);
    }

    #[test]
    fn test_cases_section_bonus_without_validation() {
        let config = PolicyConfig::new();
        let mut pass = Pass::new(&config, "aB", "", None);
        cases_section(&mut pass).unwrap();
        assert!(pass.errors.is_empty());
        assert_eq!(pass.score, 10);
        assert_eq!(pass.counters.letters, 2);
    }

    #[test]
    fn test_cases_section_reports_both_missing() {
        let config = PolicyConfig::new().set(keys::VALIDATE_CASES, true);
        let mut pass = Pass::new(&config, "1234!", "", None);
        cases_section(&mut pass).unwrap();
        assert_eq!(pass.errors, vec![ErrorCode::NoLowercase, ErrorCode::NoUppercase]);
        assert_eq!(pass.score, 0);
    }

    #[test]
    fn test_cases_section_missing_uppercase() {
        let config = PolicyConfig::new().set(keys::VALIDATE_CASES, true);
        let mut pass = Pass::new(&config, "lowercase", "", None);
        cases_section(&mut pass).unwrap();
        assert_eq!(pass.errors, vec![ErrorCode::NoUppercase]);
        assert_eq!(pass.counters.letters, 9);
    }
}
