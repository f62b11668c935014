//! Total parser for AI mood responses.
//!
//! Grammar is `mood:color` with mood drawn from the fixed vocabulary and
//! color matching `#RRGGBB`. Responses that miss the grammar degrade in
//! two documented steps: vocabulary substring scan, then a rotation table
//! keyed by response length. Every input yields a result.

use crate::models::{Mood, MoodResult};

/// Rotation of fallback pairs. Indexed by response length for parse
/// fallbacks and by wall-clock seconds for network fallbacks; both are
/// simple deliberate heuristics, not randomness.
pub const FALLBACK_ROTATION: [(Mood, &str); 5] = [
    (Mood::Inspirational, "#FFD700"),
    (Mood::Contemplative, "#9370DB"),
    (Mood::Optimistic, "#32CD32"),
    (Mood::Wise, "#8B4513"),
    (Mood::Uplifting, "#00CED1"),
];

/// Parses free-form AI output into a mood/color pair. Total: falls back
/// rather than failing.
pub fn parse_mood_response(text: &str) -> MoodResult {
    let trimmed = text.trim();

    // Step 1: the strict grammar
    if let Some((label, color)) = trimmed.split_once(':') {
        let label = label.trim().to_lowercase();
        let color = color.trim();
        if let Some(mood) = Mood::from_label(&label) {
            if is_hex_color(color) {
                return MoodResult::new(mood, color);
            }
        }
    }

    // Step 2: any vocabulary word mentioned anywhere, paired with its
    // default color
    let lowered = trimmed.to_lowercase();
    for mood in Mood::ALL {
        if lowered.contains(mood.label()) {
            return MoodResult::new(mood, mood.default_color());
        }
    }

    // Step 3: deterministic rotation keyed by response length
    fallback_for_length(text.len())
}

/// Parse-fallback pair at index `len % rotation size`
pub fn fallback_for_length(len: usize) -> MoodResult {
    let (mood, color) = FALLBACK_ROTATION[len % FALLBACK_ROTATION.len()];
    MoodResult::new(mood, color)
}

/// Network-fallback pair at index `unix seconds % rotation size`
pub fn fallback_for_timestamp(unix_secs: i64) -> MoodResult {
    let index = unix_secs.rem_euclid(FALLBACK_ROTATION.len() as i64) as usize;
    let (mood, color) = FALLBACK_ROTATION[index];
    MoodResult::new(mood, color)
}

fn is_hex_color(s: &str) -> bool {
    match s.strip_prefix('#') {
        Some(hex) => hex.len() == 6 && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}
