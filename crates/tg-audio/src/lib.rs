//! `tg-audio` — narration playback behind a pluggable backend.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                      |
//! |-----------------|---------------------------------------------------------------|
//! | [`backend`]     | `AudioBackend` trait — the host's audio/TTS capability        |
//! | [`coordinator`] | `AudioSyncCoordinator<A>` — one narration at a time, finish edge |
//! | [`null`]        | `NullAudio` — every narration finishes immediately            |
//! | [`scripted`]    | `ScriptedAudio` — in-memory durations driven by the tick clock |
//! | [`error`]       | `AudioError`, `AudioResult<T>`                                |
//!
//! # Design notes
//!
//! The engine never blocks on audio.  `start` only *issues* playback; the
//! coordinator polls `is_finished` once per tick and turns the level signal
//! into a one-shot "finished" edge that the sequencer consumes.  A track that
//! fails to start is treated as already finished, so a missing asset delays
//! the tour by at most one tick.

pub mod backend;
pub mod coordinator;
pub mod error;
pub mod null;
pub mod scripted;

#[cfg(test)]
mod tests;

pub use backend::AudioBackend;
pub use coordinator::{AudioSyncCoordinator, NarrationStatus};
pub use error::{AudioError, AudioResult};
pub use null::NullAudio;
pub use scripted::ScriptedAudio;
