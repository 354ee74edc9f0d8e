//! Chunk analysis section - measures repeated fixed-size chunks.
//!
//! The measure is informational: it is exposed on the evaluation but has no
//! effect on errors or score.

use std::collections::HashSet;

use super::{Pass, SectionResult};

/// Counts, for chunk sizes 2 to 4, how many chunks repeat an earlier one.
pub fn chunk_section(pass: &mut Pass<'_>) -> SectionResult {
    pass.repeated_chunks = repeated_chunks(pass.password);

    #[cfg(feature = "tracing")]
    tracing::trace!("chunk analysis: {} repeated chunks", pass.repeated_chunks);

    Ok(())
}

fn repeated_chunks(password: &str) -> usize {
    let chars: Vec<char> = password.chars().collect();
    (2..=4)
        .map(|size| {
            let chunks: Vec<&[char]> = chars.chunks(size).collect();
            let unique: HashSet<&[char]> = chunks.iter().copied().collect();
            chunks.len() - unique.len()
        })
        .sum()
}
