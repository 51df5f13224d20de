//! Check configuration and service credentials.

use subsmith_common::config::AppConfig;

pub fn run() -> anyhow::Result<()> {
    let config = AppConfig::load();

    println!("Configuration:");
    println!("  Model: {}", config.transcription.model);
    println!(
        "  Max chars per line: {}{}",
        config.subtitles.max_chars_per_line,
        if config.subtitles.max_chars_per_line == 0 {
            " (reflow disabled)"
        } else {
            ""
        }
    );
    println!("  Log level: {}", config.logging.level);

    match std::env::var(&config.transcription.api_key_env) {
        Ok(key) if !key.trim().is_empty() => {
            println!("  API key: present ({})", config.transcription.api_key_env);
        }
        _ => {
            println!(
                "  API key: NOT SET (export {} before transcribing)",
                config.transcription.api_key_env
            );
        }
    }

    Ok(())
}
