//! Normalization of raw transcription-service output.
//!
//! The service returns a JSON array of
//! `{"startTime", "endTime", "text"}` records with textual SRT
//! timestamps. Normalization turns them into [`SubtitleCue`] values
//! with millisecond offsets and batch-unique ids, all or nothing: a
//! non-array or schema-violating payload rejects the whole response,
//! while an individual unparseable timestamp only degrades to 0.

use serde::{Deserialize, Serialize};
use subsmith_common::error::{SubsmithError, SubsmithResult};
use subsmith_subtitle::cue::SubtitleCue;
use subsmith_subtitle::timecode::parse_timestamp;

/// One raw record as produced by the transcription service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSegment {
    /// Segment start in `HH:MM:SS,mmm` format.
    pub start_time: String,

    /// Segment end in `HH:MM:SS,mmm` format.
    pub end_time: String,

    /// Transcribed text for the segment.
    pub text: String,
}

/// Validate and convert a raw service response into cues.
///
/// Record order is preserved; nothing is merged, reordered, or
/// checked for `start <= end` (downstream editing surfaces those as
/// warnings). Ids are `base + index` with a wall-clock base, distinct
/// across the batch.
pub fn normalize_segments(value: &serde_json::Value) -> SubsmithResult<Vec<SubtitleCue>> {
    if !value.is_array() {
        return Err(SubsmithError::malformed_response(
            "service did not return a JSON array of subtitle segments",
        ));
    }

    let segments: Vec<RawSegment> = serde_json::from_value(value.clone())
        .map_err(|e| SubsmithError::malformed_response(format!("segment schema violation: {e}")))?;

    let base = chrono::Utc::now().timestamp_millis() as u64;
    Ok(segments
        .into_iter()
        .enumerate()
        .map(|(index, segment)| {
            SubtitleCue::new(
                base + index as u64,
                parse_or_zero(&segment.start_time, index),
                parse_or_zero(&segment.end_time, index),
                segment.text,
            )
        })
        .collect())
}

/// Parse a service timestamp, degrading to 0 on failure.
///
/// One bad timestamp must not block review of the rest of the batch,
/// but the fallback is logged so upstream service bugs stay visible.
fn parse_or_zero(raw: &str, index: usize) -> i64 {
    let ms = parse_timestamp(raw);
    if ms == 0 && raw != "00:00:00,000" {
        tracing::warn!(segment = index, timestamp = raw, "unparseable timestamp, using 0");
    }
    ms
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_normalize_preserves_order_and_text() {
        let value = json!([
            { "startTime": "00:00:01,000", "endTime": "00:00:02,500", "text": "first" },
            { "startTime": "00:00:02,500", "endTime": "00:00:04,000", "text": "second" },
        ]);

        let cues = normalize_segments(&value).unwrap();
        assert_eq!(cues.len(), 2);
        assert_eq!(cues[0].start_ms, 1000);
        assert_eq!(cues[0].end_ms, 2500);
        assert_eq!(cues[0].text, "first");
        assert_eq!(cues[1].start_ms, 2500);
        assert_eq!(cues[1].text, "second");
    }

    #[test]
    fn test_batch_ids_are_distinct_and_ordered() {
        let value = json!([
            { "startTime": "00:00:00,000", "endTime": "00:00:01,000", "text": "a" },
            { "startTime": "00:00:01,000", "endTime": "00:00:02,000", "text": "b" },
            { "startTime": "00:00:02,000", "endTime": "00:00:03,000", "text": "c" },
        ]);

        let cues = normalize_segments(&value).unwrap();
        assert_eq!(cues[1].id, cues[0].id + 1);
        assert_eq!(cues[2].id, cues[0].id + 2);
    }

    #[test]
    fn test_non_array_is_malformed() {
        let value = json!({ "segments": [] });
        let err = normalize_segments(&value).unwrap_err();
        assert!(matches!(err, SubsmithError::MalformedResponse { .. }));
    }

    #[test]
    fn test_schema_violation_rejects_whole_batch() {
        let value = json!([
            { "startTime": "00:00:01,000", "endTime": "00:00:02,000", "text": "ok" },
            { "startTime": "00:00:02,000", "text": "missing end" },
        ]);
        let err = normalize_segments(&value).unwrap_err();
        assert!(matches!(err, SubsmithError::MalformedResponse { .. }));
    }

    #[test]
    fn test_bad_timestamp_degrades_to_zero() {
        let value = json!([
            { "startTime": "oops", "endTime": "00:00:02,000", "text": "resilient" },
        ]);

        let cues = normalize_segments(&value).unwrap();
        assert_eq!(cues[0].start_ms, 0);
        assert_eq!(cues[0].end_ms, 2000);
    }

    #[test]
    fn test_empty_array_is_valid() {
        let cues = normalize_segments(&json!([])).unwrap();
        assert!(cues.is_empty());
    }
}
