//! Reading-speed pacing checks.
//!
//! A viewer can only read so many characters per second. The advisor
//! flags cues whose display window is too short for their text and
//! computes the corrected end time. The reading speed is a fixed
//! constant, not a user setting.

use crate::cue::SubtitleCue;

/// Assumed reading speed in characters per second.
pub const READING_SPEED_CPS: f64 = 15.0;

/// Milliseconds required to read `text` at `chars_per_second`.
pub fn required_duration_ms(text: &str, chars_per_second: f64) -> i64 {
    let chars = text.chars().count() as f64;
    (chars / chars_per_second * 1000.0).ceil() as i64
}

/// Whether the cue's display window is too short for its text.
///
/// A cue with zero or negative duration is NOT flagged here: an
/// inverted window is a malformed range, a different class of problem
/// from "too short for the text". Empty text is never flagged.
pub fn is_too_short(cue: &SubtitleCue, chars_per_second: f64) -> bool {
    let duration = cue.duration_ms();
    duration > 0
        && duration < required_duration_ms(&cue.text, chars_per_second)
        && !cue.text.is_empty()
}

/// Recommended end time that makes the cue readable.
///
/// Applying the recommendation is idempotent: the corrected cue has
/// exactly the required duration, so [`is_too_short`] no longer flags
/// it.
pub fn recommended_end_ms(cue: &SubtitleCue, chars_per_second: f64) -> i64 {
    cue.start_ms + required_duration_ms(&cue.text, chars_per_second)
}
