//! Line reflow: split over-long cues into multiple time-coded cues.
//!
//! Reflow enforces a soft maximum-characters-per-line budget. A cue
//! whose text exceeds the budget is greedily word-wrapped, and each
//! resulting line receives a share of the original display window
//! proportional to its share of the original text length.

use crate::cue::SubtitleCue;

/// Id stride between lines derived from the same source cue.
///
/// Best-effort uniqueness for one interactive session; assumes no two
/// existing ids sit within the stride of the same base.
const DERIVED_ID_STRIDE: u64 = 10_000;

/// Reflow a cue against a character budget.
///
/// Returns the cue unchanged (as a single-element vec) when the
/// budget is 0 (disabled), when the text already fits, or when the
/// text is empty: an empty cue has no length to apportion time by.
///
/// Otherwise the text is wrapped into lines and laid out gaplessly
/// from `cue.start_ms`: each line's duration is
/// `round(total * line_len / text_len)` and each subsequent line
/// starts where the previous one ended. Rounding drift accumulates
/// into the final end rather than being redistributed. Line ids are
/// `cue.id + index * 10_000`.
pub fn reflow_cue(cue: &SubtitleCue, max_chars: usize) -> Vec<SubtitleCue> {
    let text_len = cue.text.chars().count();
    if max_chars == 0 || text_len <= max_chars || cue.text.trim().is_empty() {
        return vec![cue.clone()];
    }

    let lines = wrap_words(&cue.text, max_chars);
    let total_duration = cue.duration_ms();
    let mut start_ms = cue.start_ms;

    lines
        .into_iter()
        .enumerate()
        .map(|(index, line)| {
            let ratio = line.chars().count() as f64 / text_len as f64;
            let line_duration = (total_duration as f64 * ratio).round() as i64;
            let line_cue = SubtitleCue::new(
                cue.id + index as u64 * DERIVED_ID_STRIDE,
                start_ms,
                start_ms + line_duration,
                line,
            );
            start_ms += line_duration;
            line_cue
        })
        .collect()
}

/// Greedy word-wrap: pack whitespace-separated words into lines of at
/// most `max_chars` characters. A single word longer than the budget
/// is never broken; it becomes an over-long line of its own. When that
/// word is the very first one, the closed-out accumulator is still
/// empty, so an empty zero-length line precedes it.
fn wrap_words(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let tentative_len = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };

        if tentative_len > max_chars {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        } else {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
        }
    }
    // The final accumulator is always emitted, even over budget.
    lines.push(current);
    lines
}
