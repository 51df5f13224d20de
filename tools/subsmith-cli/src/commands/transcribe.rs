//! Transcribe an audio file and write SRT subtitles.

use std::path::PathBuf;

use subsmith_common::config::{AppConfig, MAX_CHARS_PER_LINE_LIMIT};
use subsmith_subtitle::pacing::{is_too_short, recommended_end_ms, READING_SPEED_CPS};
use subsmith_subtitle::srt::{render_srt, srt_path_for};
use subsmith_subtitle::timecode::format_timestamp;
use subsmith_transcribe::client::GeminiClient;
use subsmith_transcribe::session::Session;

pub async fn run(
    audio: PathBuf,
    output: Option<PathBuf>,
    max_chars: Option<u32>,
    model: Option<String>,
    api_key: Option<String>,
    duration_secs: f64,
) -> anyhow::Result<()> {
    let config = AppConfig::load();

    let max_chars = max_chars
        .unwrap_or(config.subtitles.max_chars_per_line)
        .min(MAX_CHARS_PER_LINE_LIMIT);
    let model = model.unwrap_or_else(|| config.transcription.model.clone());
    let api_key = match api_key {
        Some(key) => key,
        None => std::env::var(&config.transcription.api_key_env).map_err(|_| {
            anyhow::anyhow!(
                "No API key: pass --api-key or set {}",
                config.transcription.api_key_env
            )
        })?,
    };

    let client = GeminiClient::new(api_key, model)
        .map_err(|e| anyhow::anyhow!("Failed to create client: {e}"))?;

    let mut session = Session::new();
    session.load_audio(&audio, (duration_secs * 1000.0) as i64);

    println!("Transcribing: {}", audio.display());
    let count = session
        .transcribe(&client, max_chars as usize)
        .await
        .map_err(|e| anyhow::anyhow!("Transcription failed: {e}"))?;
    println!("  Cues: {count} (max {max_chars} chars/line)");

    // Reading-speed report: which cues are on screen too briefly.
    let rushed: Vec<_> = session
        .cues()
        .iter()
        .filter(|cue| is_too_short(cue, READING_SPEED_CPS))
        .collect();
    if !rushed.is_empty() {
        println!("  {} cue(s) shorter than their text needs:", rushed.len());
        for cue in rushed {
            println!(
                "    {} --> {}: consider extending to {}",
                format_timestamp(cue.start_ms),
                format_timestamp(cue.end_ms),
                format_timestamp(recommended_end_ms(cue, READING_SPEED_CPS))
            );
        }
    }

    let output_path = output.unwrap_or_else(|| srt_path_for(&audio));
    std::fs::write(&output_path, render_srt(session.cues()))?;
    println!("Wrote {}", output_path.display());

    Ok(())
}
