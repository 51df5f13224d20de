//! Gemini transcription client.
//!
//! Sends the raw audio inline (base64) together with a prompt that
//! pins the response to a JSON array of timed segments, and extracts
//! that array from the first candidate. Service failures surface
//! their message verbatim; there is no automatic retry and no
//! cancellation of an in-flight request.

use base64::Engine as _;
use serde_json::json;
use subsmith_common::error::{SubsmithError, SubsmithResult};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Client for the Gemini `generateContent` endpoint.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    /// Create a client. An empty API key is a configuration error,
    /// caught here before any request is attempted.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> SubsmithResult<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(SubsmithError::config("transcription API key is empty"));
        }
        Ok(Self {
            http: reqwest::Client::new(),
            api_key,
            model: model.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Override the endpoint base URL (tests, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Transcribe raw audio bytes into the service's JSON segment
    /// array. `duration_secs` is an informational hint only.
    pub async fn transcribe(
        &self,
        audio: &[u8],
        mime_type: &str,
        duration_secs: f64,
    ) -> SubsmithResult<serde_json::Value> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.base_url, self.model
        );
        let body = request_body(audio, mime_type, duration_secs);

        tracing::info!(
            model = %self.model,
            audio_bytes = audio.len(),
            mime_type,
            "Requesting transcription"
        );

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| SubsmithError::service(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(SubsmithError::service(format!(
                "transcription request failed with status {status}: {detail}"
            )));
        }

        let payload: serde_json::Value = response
            .json()
            .await
            .map_err(|e| SubsmithError::service(e.to_string()))?;

        extract_segment_json(&payload)
    }
}

/// Build the `generateContent` request: the duration-hint prompt plus
/// the inline audio, with the response pinned to a JSON segment array.
fn request_body(audio: &[u8], mime_type: &str, duration_secs: f64) -> serde_json::Value {
    let prompt = format!(
        "Transcribe the following audio recording accurately. The total audio \
         duration is approximately {} seconds. Structure the output as a list of \
         subtitle entries. Each entry must have a start time, an end time, and the \
         transcribed text for that segment. Ensure the timestamps are in \
         HH:MM:SS,ms format and are sequential and logical within the audio's \
         duration.",
        duration_secs.round() as i64
    );

    json!({
        "contents": [{
            "parts": [
                { "text": prompt },
                {
                    "inline_data": {
                        "mime_type": mime_type,
                        "data": base64::engine::general_purpose::STANDARD.encode(audio),
                    }
                },
            ]
        }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "startTime": {
                            "type": "STRING",
                            "description": "The start time of the subtitle segment in HH:MM:SS,ms format.",
                        },
                        "endTime": {
                            "type": "STRING",
                            "description": "The end time of the subtitle segment in HH:MM:SS,ms format.",
                        },
                        "text": {
                            "type": "STRING",
                            "description": "The transcribed text for this segment.",
                        },
                    },
                    "required": ["startTime", "endTime", "text"],
                }
            }
        }
    })
}

/// Pull the first candidate's text part out of the API envelope and
/// parse it as JSON.
fn extract_segment_json(payload: &serde_json::Value) -> SubsmithResult<serde_json::Value> {
    let text = payload
        .pointer("/candidates/0/content/parts/0/text")
        .and_then(|v| v.as_str())
        .ok_or_else(|| SubsmithError::service("response contained no candidate text"))?;

    serde_json::from_str(text)
        .map_err(|e| SubsmithError::service(format!("candidate text is not valid JSON: {e}")))
}
