//! Subsmith Transcription Boundary
//!
//! Everything that touches the external speech-to-text service:
//! - **Client:** the Gemini `generateContent` request/response cycle
//! - **Segments:** validating and normalizing the service's timed
//!   output into subtitle cues
//! - **Session:** the owned state container tying an audio source,
//!   the cue list, and the single in-flight transcription gate
//!   together
//!
//! The service is a black box: this crate never performs speech
//! recognition or audio decoding itself.

pub mod client;
pub mod segment;
pub mod session;

pub use client::*;
pub use segment::*;
pub use session::*;
