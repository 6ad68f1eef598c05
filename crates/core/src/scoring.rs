//! Scoring module - word value rules
//!
//! A word scores the sum of its letter values multiplied by its length, so
//! long words pay more than the sum of their letters.

/// Minimum number of tiles that can form a word
pub const MIN_WORD_TILES: usize = 2;

/// Score for a word with the given letter values
///
/// Saturates instead of overflowing; real tables never get close.
pub fn calculate_word_score(values: &[u32]) -> u32 {
    let sum = values.iter().fold(0u32, |acc, &v| acc.saturating_add(v));
    sum.saturating_mul(values.len() as u32)
}
