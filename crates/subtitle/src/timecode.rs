//! Millisecond ↔ `HH:MM:SS,mmm` timecode conversion.
//!
//! Both directions are total functions: formatting clamps invalid
//! input to `"00:00:00,000"` and parsing maps any non-matching string
//! to `0`. One bad timestamp must never sink a whole batch; callers
//! that care about degraded values log them at the boundary.

/// Format milliseconds as an SRT timestamp: `HH:MM:SS,mmm`.
///
/// Negative input yields `"00:00:00,000"`. The hour field is padded
/// to two digits but widens for durations of 100 hours or more.
pub fn format_timestamp(ms: i64) -> String {
    if ms < 0 {
        return "00:00:00,000".to_string();
    }

    let hours = ms / 3_600_000;
    let minutes = (ms % 3_600_000) / 60_000;
    let seconds = (ms % 60_000) / 1000;
    let millis = ms % 1000;
    format!("{hours:02}:{minutes:02}:{seconds:02},{millis:03}")
}

/// Parse an SRT timestamp (`HH:MM:SS,mmm`, exactly two digit hours)
/// into milliseconds.
///
/// Returns `0` for anything that does not match the pattern exactly:
/// wrong punctuation, wrong digit counts, empty string. Timestamps at
/// or beyond 100 hours therefore do not round-trip; [`format_timestamp`]
/// widens the hour field but this parser only recognizes two digits.
pub fn parse_timestamp(text: &str) -> i64 {
    match parse_fields(text) {
        Some((h, m, s, ms)) => h * 3_600_000 + m * 60_000 + s * 1000 + ms,
        None => 0,
    }
}

/// Split `DD:DD:DD,DDD` into its four numeric fields.
fn parse_fields(text: &str) -> Option<(i64, i64, i64, i64)> {
    let bytes = text.as_bytes();
    if !text.is_ascii()
        || bytes.len() != 12
        || bytes[2] != b':'
        || bytes[5] != b':'
        || bytes[8] != b','
    {
        return None;
    }

    let h = digits(&text[0..2])?;
    let m = digits(&text[3..5])?;
    let s = digits(&text[6..8])?;
    let ms = digits(&text[9..12])?;
    Some((h, m, s, ms))
}

fn digits(field: &str) -> Option<i64> {
    if !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}
