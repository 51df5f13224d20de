//! Session state: the audio source, the cue list, and the
//! transcription status, owned by one controller value.
//!
//! The session is single-threaded by design: every mutation is a
//! synchronous read-then-replace on the owned state, and the one
//! suspend point is the service call. At most one transcription may
//! be outstanding; the gate is a status check, not a queue, and an
//! in-flight request cannot be cancelled.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use subsmith_common::error::{SubsmithError, SubsmithResult};
use subsmith_subtitle::cue::{CueList, SubtitleCue};
use subsmith_subtitle::reflow::reflow_cue;

use crate::client::GeminiClient;
use crate::segment::normalize_segments;

/// The loaded audio recording, described but never decoded here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioSource {
    /// Path to the audio file.
    pub path: PathBuf,

    /// MIME type sent to the transcription service.
    pub mime_type: String,

    /// Total duration in milliseconds, as reported by the player or
    /// probe that loaded the file. Informational hint only.
    pub duration_ms: i64,
}

/// Transcription lifecycle state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SessionStatus {
    #[default]
    Idle,
    Transcribing,
    Failed(String),
}

/// One editing session: audio source, cue collection, and status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    audio: Option<AudioSource>,
    cues: CueList,
    status: SessionStatus,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a new audio source, discarding existing cues and any
    /// previous failure state.
    pub fn load_audio(&mut self, path: impl Into<PathBuf>, duration_ms: i64) {
        let path = path.into();
        let mime_type = mime_for_path(&path).to_string();
        tracing::info!(path = %path.display(), %mime_type, "Loading audio source");

        self.audio = Some(AudioSource {
            path,
            mime_type,
            duration_ms,
        });
        self.cues = CueList::new();
        self.status = SessionStatus::Idle;
    }

    pub fn audio(&self) -> Option<&AudioSource> {
        self.audio.as_ref()
    }

    pub fn cues(&self) -> &CueList {
        &self.cues
    }

    pub fn cues_mut(&mut self) -> &mut CueList {
        &mut self.cues
    }

    pub fn status(&self) -> &SessionStatus {
        &self.status
    }

    pub fn is_transcribing(&self) -> bool {
        self.status == SessionStatus::Transcribing
    }

    /// Run one transcription round trip and populate the cue list.
    ///
    /// Each returned segment is reflowed against `max_chars` before
    /// the collection is replaced in one step: on any failure the
    /// previous cues remain untouched and the error is also recorded
    /// in the session status. Returns the number of cues committed.
    pub async fn transcribe(
        &mut self,
        client: &GeminiClient,
        max_chars: usize,
    ) -> SubsmithResult<usize> {
        if self.is_transcribing() {
            return Err(SubsmithError::TranscriptionInFlight);
        }
        let Some(audio) = self.audio.clone() else {
            return Err(SubsmithError::NoInputSelected);
        };

        let bytes = tokio::fs::read(&audio.path)
            .await
            .map_err(|e| SubsmithError::read_failure(&audio.path, e))?;

        self.status = SessionStatus::Transcribing;
        let result = client
            .transcribe(&bytes, &audio.mime_type, audio.duration_ms as f64 / 1000.0)
            .await
            .and_then(|value| normalize_segments(&value));

        match result {
            Ok(cues) => {
                let reflowed: Vec<SubtitleCue> = cues
                    .iter()
                    .flat_map(|cue| reflow_cue(cue, max_chars))
                    .collect();
                let count = reflowed.len();
                tracing::info!(segments = cues.len(), cues = count, "Transcription committed");
                self.cues.replace_all(reflowed);
                self.status = SessionStatus::Idle;
                Ok(count)
            }
            Err(e) => {
                tracing::error!("Transcription failed: {e}");
                self.status = SessionStatus::Failed(e.to_string());
                Err(e)
            }
        }
    }
}

/// Guess the MIME type from the file extension. The service only
/// needs a plausible container label; unknown extensions fall back to
/// an opaque byte stream.
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some("wav") => "audio/wav",
        Some("mp3") => "audio/mpeg",
        Some("m4a") => "audio/mp4",
        Some("aac") => "audio/aac",
        Some("ogg") | Some("oga") | Some("opus") => "audio/ogg",
        Some("flac") => "audio/flac",
        Some("webm") => "audio/webm",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use subsmith_subtitle::cue::SubtitleCue;

    fn client() -> GeminiClient {
        GeminiClient::new("test-key", "gemini-2.5-flash").unwrap()
    }

    #[test]
    fn test_mime_guesses() {
        assert_eq!(mime_for_path(Path::new("a.WAV")), "audio/wav");
        assert_eq!(mime_for_path(Path::new("a.mp3")), "audio/mpeg");
        assert_eq!(mime_for_path(Path::new("a.opus")), "audio/ogg");
        assert_eq!(mime_for_path(Path::new("a.xyz")), "application/octet-stream");
        assert_eq!(mime_for_path(Path::new("noext")), "application/octet-stream");
    }

    #[test]
    fn test_load_audio_resets_cues_and_status() {
        let mut session = Session::new();
        session
            .cues_mut()
            .replace_all(vec![SubtitleCue::new(1, 0, 1000, "old")]);

        session.load_audio("/tmp/take.mp3", 30_000);
        assert!(session.cues().is_empty());
        assert_eq!(*session.status(), SessionStatus::Idle);
        let audio = session.audio().unwrap();
        assert_eq!(audio.mime_type, "audio/mpeg");
        assert_eq!(audio.duration_ms, 30_000);
    }

    #[tokio::test]
    async fn test_transcribe_without_audio_is_rejected() {
        let mut session = Session::new();
        let err = session.transcribe(&client(), 42).await.unwrap_err();
        assert!(matches!(err, SubsmithError::NoInputSelected));
        // No state change: still idle, still no cues.
        assert_eq!(*session.status(), SessionStatus::Idle);
        assert!(session.cues().is_empty());
    }

    #[tokio::test]
    async fn test_unreadable_audio_leaves_prior_cues_untouched() {
        let mut session = Session::new();
        session.load_audio("/nonexistent/audio.wav", 10_000);
        session
            .cues_mut()
            .replace_all(vec![SubtitleCue::new(1, 0, 1000, "kept")]);

        let err = session.transcribe(&client(), 42).await.unwrap_err();
        assert!(matches!(err, SubsmithError::ReadFailure { .. }));
        assert_eq!(session.cues().len(), 1);
        assert_eq!(session.cues().as_slice()[0].text, "kept");
    }

    #[tokio::test]
    async fn test_service_failure_sets_failed_status_and_keeps_cues() {
        let dir = std::env::temp_dir().join("subsmith_test_service_failure");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        let audio_path = dir.join("take.wav");
        std::fs::write(&audio_path, b"RIFF").unwrap();

        // Readable audio, unroutable endpoint: the request itself fails
        // after the session has entered the transcribing state.
        let client = client().with_base_url("http://127.0.0.1:1");
        let mut session = Session::new();
        session.load_audio(&audio_path, 1_000);
        session
            .cues_mut()
            .replace_all(vec![SubtitleCue::new(1, 0, 1000, "kept")]);

        let err = session.transcribe(&client, 42).await.unwrap_err();
        assert!(matches!(err, SubsmithError::Service { .. }));
        assert!(matches!(session.status(), SessionStatus::Failed(_)));
        assert!(!session.is_transcribing());
        // The error commits nothing: prior cues survive verbatim.
        assert_eq!(session.cues().len(), 1);
        assert_eq!(session.cues().as_slice()[0].text, "kept");

        std::fs::remove_dir_all(&dir).ok();
    }
}
