//! Subtitle cue model and the editable cue collection.
//!
//! A [`CueList`] is an ordered sequence of [`SubtitleCue`] values.
//! Display/sequence order is insertion order; the SRT sequence number
//! is derived purely from position. Ids are the sole identity key and
//! are never reused within a session. Temporal ordering (`start_ms`
//! non-decreasing) is a desired property surfaced through warnings,
//! not an enforced invariant: during editing the user may leave gaps,
//! overlaps, or out-of-order cues.

use serde::{Deserialize, Serialize};

/// One timed line of subtitle text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubtitleCue {
    /// Unique within a cue list, stable across edits.
    pub id: u64,

    /// Inclusive start of the display window (milliseconds).
    pub start_ms: i64,

    /// Inclusive end of the display window (milliseconds). Expected
    /// to be `>= start_ms`, but transient violations during editing
    /// are tolerated.
    pub end_ms: i64,

    /// Cue text. May be empty (e.g., a freshly inserted cue).
    pub text: String,
}

impl SubtitleCue {
    pub fn new(id: u64, start_ms: i64, end_ms: i64, text: impl Into<String>) -> Self {
        Self {
            id,
            start_ms,
            end_ms,
            text: text.into(),
        }
    }

    /// Display duration in milliseconds. Negative when the window is
    /// inverted by an edit in progress.
    pub fn duration_ms(&self) -> i64 {
        self.end_ms - self.start_ms
    }
}

/// Partial update for a single cue. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CuePatch {
    pub start_ms: Option<i64>,
    pub end_ms: Option<i64>,
    pub text: Option<String>,
}

impl CuePatch {
    pub fn start(ms: i64) -> Self {
        Self {
            start_ms: Some(ms),
            ..Self::default()
        }
    }

    pub fn end(ms: i64) -> Self {
        Self {
            end_ms: Some(ms),
            ..Self::default()
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }
}

/// The editable, ordered cue collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CueList {
    cues: Vec<SubtitleCue>,
}

impl CueList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cues(cues: Vec<SubtitleCue>) -> Self {
        Self { cues }
    }

    pub fn len(&self) -> usize {
        self.cues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cues.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SubtitleCue> {
        self.cues.iter()
    }

    pub fn as_slice(&self) -> &[SubtitleCue] {
        &self.cues
    }

    /// Merge a partial update into the cue with the given id.
    /// Returns `false` (list untouched) when the id is not present.
    pub fn update(&mut self, id: u64, patch: CuePatch) -> bool {
        let Some(cue) = self.cues.iter_mut().find(|c| c.id == id) else {
            return false;
        };
        if let Some(start_ms) = patch.start_ms {
            cue.start_ms = start_ms;
        }
        if let Some(end_ms) = patch.end_ms {
            cue.end_ms = end_ms;
        }
        if let Some(text) = patch.text {
            cue.text = text;
        }
        true
    }

    /// Insert a fresh one-second placeholder cue immediately after the
    /// cue with `anchor_id`, starting 1 ms past the anchor's end.
    /// Returns the new cue's id, or `None` (list untouched) when the
    /// anchor is not present.
    pub fn insert_after(&mut self, anchor_id: u64) -> Option<u64> {
        let index = self.cues.iter().position(|c| c.id == anchor_id)?;
        let anchor_end = self.cues[index].end_ms;
        let id = fresh_cue_id();
        self.cues.insert(
            index + 1,
            SubtitleCue::new(id, anchor_end + 1, anchor_end + 1001, ""),
        );
        Some(id)
    }

    /// Delete the cue with the given id. Returns `false` when absent.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.cues.len();
        self.cues.retain(|c| c.id != id);
        self.cues.len() != before
    }

    /// First cue (in sequence order) whose display window contains
    /// `at_ms`, inclusive on both ends. Drives playback highlighting.
    pub fn find_active(&self, at_ms: i64) -> Option<&SubtitleCue> {
        self.cues
            .iter()
            .find(|c| at_ms >= c.start_ms && at_ms <= c.end_ms)
    }

    /// Replace the whole collection, discarding prior edits. Used for
    /// all-or-nothing population after a transcription.
    pub fn replace_all(&mut self, cues: Vec<SubtitleCue>) {
        self.cues = cues;
    }
}

impl<'a> IntoIterator for &'a CueList {
    type Item = &'a SubtitleCue;
    type IntoIter = std::slice::Iter<'a, SubtitleCue>;

    fn into_iter(self) -> Self::IntoIter {
        self.cues.iter()
    }
}

/// Generate a fresh cue id from the wall clock (millisecond
/// resolution). Unique in practice for interactive use; batch
/// normalization spreads ids as `base + index` instead.
pub fn fresh_cue_id() -> u64 {
    chrono::Utc::now().timestamp_millis() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_list() -> CueList {
        CueList::from_cues(vec![
            SubtitleCue::new(1, 0, 1000, "first"),
            SubtitleCue::new(2, 1500, 2500, "second"),
            SubtitleCue::new(3, 3000, 4000, "third"),
        ])
    }

    #[test]
    fn test_update_merges_partial_fields() {
        let mut list = sample_list();
        assert!(list.update(2, CuePatch::text("edited")));
        let cue = list.iter().find(|c| c.id == 2).unwrap();
        assert_eq!(cue.text, "edited");
        assert_eq!(cue.start_ms, 1500);
        assert_eq!(cue.end_ms, 2500);

        assert!(list.update(2, CuePatch::end(2600)));
        assert_eq!(list.iter().find(|c| c.id == 2).unwrap().end_ms, 2600);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut list = sample_list();
        let before = list.clone();
        assert!(!list.update(99, CuePatch::text("nope")));
        assert_eq!(list, before);
    }

    #[test]
    fn test_insert_after_places_placeholder() {
        let mut list = sample_list();
        let id = list.insert_after(1).expect("anchor exists");

        assert_eq!(list.len(), 4);
        let inserted = &list.as_slice()[1];
        assert_eq!(inserted.id, id);
        assert_eq!(inserted.start_ms, 1001);
        assert_eq!(inserted.end_ms, 2001);
        assert_eq!(inserted.text, "");
        // Position, not id, defines sequence order.
        assert_eq!(list.as_slice()[2].id, 2);
    }

    #[test]
    fn test_insert_after_unknown_id_is_noop() {
        let mut list = sample_list();
        let before = list.clone();
        assert_eq!(list.insert_after(99), None);
        assert_eq!(list, before);
    }

    #[test]
    fn test_remove() {
        let mut list = sample_list();
        assert!(list.remove(2));
        assert_eq!(list.len(), 2);
        assert!(list.iter().all(|c| c.id != 2));

        let before = list.clone();
        assert!(!list.remove(2));
        assert_eq!(list, before);
    }

    #[test]
    fn test_find_active_is_inclusive_on_both_ends() {
        let list = CueList::from_cues(vec![SubtitleCue::new(7, 1000, 2000, "x")]);
        assert_eq!(list.find_active(1000).map(|c| c.id), Some(7));
        assert_eq!(list.find_active(2000).map(|c| c.id), Some(7));
        assert_eq!(list.find_active(1500).map(|c| c.id), Some(7));
        assert!(list.find_active(999).is_none());
        assert!(list.find_active(2001).is_none());
    }

    #[test]
    fn test_find_active_prefers_first_in_sequence_order() {
        let list = CueList::from_cues(vec![
            SubtitleCue::new(1, 0, 2000, "a"),
            SubtitleCue::new(2, 1000, 3000, "b"),
        ]);
        assert_eq!(list.find_active(1500).map(|c| c.id), Some(1));
    }

    #[test]
    fn test_cue_list_round_trips_through_json() {
        let list = sample_list();
        let json = serde_json::to_string(&list).unwrap();
        let parsed: CueList = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, list);
    }

    #[test]
    fn test_replace_all_discards_prior_edits() {
        let mut list = sample_list();
        list.update(1, CuePatch::text("edited"));
        list.replace_all(vec![SubtitleCue::new(10, 0, 500, "fresh")]);
        assert_eq!(list.len(), 1);
        assert_eq!(list.as_slice()[0].text, "fresh");
    }
}
