//! Reading time estimation.

/// Average reading speed, in words per minute.
pub const WORDS_PER_MINUTE: usize = 200;

/// Estimate reading time in minutes for the given text.
///
/// Words are approximated by splitting on runs of whitespace. The result
/// is rounded up to the next whole minute with a floor of one, so even
/// empty text reports a single minute instead of zero.
///
/// Total over all inputs; no error conditions.
pub fn estimate(text: &str) -> usize {
    let words = text.split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1)
}
