//! Subsmith Subtitle Core
//!
//! Defines the subtitle timing engine:
//! - **Timecode:** millisecond ↔ `HH:MM:SS,mmm` conversion
//! - **Cues:** the editable, ordered, uniquely-keyed cue collection
//! - **Reflow:** word-preserving line wrapping with proportional
//!   time redistribution
//! - **Pacing:** reading-speed checks and end-time recommendations
//! - **SRT:** rendering the cue collection to SubRip text
//!
//! All times are integer milliseconds from the start of the audio.

pub mod cue;
pub mod pacing;
pub mod reflow;
pub mod srt;
pub mod timecode;

pub use cue::*;
pub use pacing::*;
pub use reflow::*;
pub use srt::*;
pub use timecode::*;
