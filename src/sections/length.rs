//! Length section - checks password minimum length and seeds the score.

use super::{Pass, SectionResult};
use crate::error_code::ErrorCode;

const POINTS_PER_CHARACTER: i64 = 4;

/// Checks the trimmed password against `minimumLength`.
///
/// Always resets the score to four points per trimmed character.
pub fn length_section(pass: &mut Pass<'_>) -> SectionResult {
    let minimum = pass.config.minimum_length();
    let length = pass.password.trim().chars().count();

    pass.score = length as i64 * POINTS_PER_CHARACTER;

    if length < minimum as usize {
        pass.errors.push(ErrorCode::Length(minimum));
    }
    Ok(())
}
