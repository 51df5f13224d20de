//! Subsmith CLI — Command-line interface for audio-to-SRT transcription.
//!
//! Usage:
//!   subsmith transcribe <AUDIO>    Transcribe audio and write an SRT file
//!   subsmith check                 Check configuration and API key

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "subsmith",
    about = "Turn an audio recording into an editable SRT subtitle file",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Transcribe an audio file and write SRT subtitles
    Transcribe {
        /// Path to the audio file
        audio: PathBuf,

        /// Output SRT path (defaults to the audio name with .srt)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Maximum characters per subtitle line, 0..=100 (0 = no limit)
        #[arg(long)]
        max_chars: Option<u32>,

        /// Model identifier sent to the transcription service
        #[arg(long)]
        model: Option<String>,

        /// API key (falls back to the configured environment variable)
        #[arg(long)]
        api_key: Option<String>,

        /// Approximate audio duration in seconds, passed to the
        /// service as a hint
        #[arg(long, default_value = "0")]
        duration_secs: f64,
    },

    /// Check configuration and service credentials
    Check,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    subsmith_common::logging::init_logging(&subsmith_common::config::LoggingConfig {
        level: log_level.to_string(),
        json: false,
        file: None,
    });

    match cli.command {
        Commands::Transcribe {
            audio,
            output,
            max_chars,
            model,
            api_key,
            duration_secs,
        } => {
            commands::transcribe::run(audio, output, max_chars, model, api_key, duration_secs)
                .await
        }
        Commands::Check => commands::check::run(),
    }
}
