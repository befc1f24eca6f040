pub const WORDS_PER_MINUTE: usize = 220;

/// Estimated reading time in whole minutes, never less than one.
///
/// Any started block of 220 words counts as a minute: 220 words read in one
/// minute, 221 to 440 in two.
pub fn estimate_minutes(text: &str) -> u32 {
    let words = text.split_whitespace().count();
    let minutes = words.div_ceil(WORDS_PER_MINUTE);

    u32::try_from(minutes).unwrap_or(u32::MAX).max(1)
}
