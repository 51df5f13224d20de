//! SRT (SubRip Text) rendering.

use std::path::{Path, PathBuf};

use crate::cue::SubtitleCue;
use crate::timecode::format_timestamp;

/// Render cues as SRT text.
///
/// Each block is `<1-based index>\n<start> --> <end>\n<text>`, blocks
/// joined by exactly one blank line with no trailing blank line.
/// Sequence numbers are positional: reordering or deleting cues
/// renumbers downstream blocks but never touches stored ids.
pub fn render_srt<'a, I>(cues: I) -> String
where
    I: IntoIterator<Item = &'a SubtitleCue>,
{
    cues.into_iter()
        .enumerate()
        .map(|(index, cue)| {
            format!(
                "{}\n{} --> {}\n{}",
                index + 1,
                format_timestamp(cue.start_ms),
                format_timestamp(cue.end_ms),
                cue.text
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Derive the `.srt` output path from the source audio filename:
/// extension stripped and replaced. A path with no usable file name
/// falls back to `subtitles.srt`.
pub fn srt_path_for(audio_path: &Path) -> PathBuf {
    match audio_path.file_stem().and_then(|s| s.to_str()) {
        Some(stem) if !stem.is_empty() => audio_path.with_file_name(format!("{stem}.srt")),
        _ => audio_path.with_file_name("subtitles.srt"),
    }
}
