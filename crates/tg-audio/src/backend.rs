//! The `AudioBackend` trait — what the host must provide to play narration.

use tg_core::{NarrationHandle, NarrationId};

use crate::AudioResult;

/// The host's narration playback capability.
///
/// Implementations wrap whatever actually produces sound: an audio-file
/// player, a streaming TTS client, or a test double.  The engine depends
/// only on this trait.
///
/// # Required methods
///
/// `start`, `stop`, and `is_finished` are required.  `pause`, `resume`, and
/// `update` default to no-ops for backends that cannot pause or that run on
/// their own clock.
///
/// # Contract
///
/// - `start` must not block; it issues playback and returns a handle.
/// - `is_finished` must keep returning `true` for a handle once it has, and
///   must return `true` for handles it does not recognise.
/// - `stop` on a finished or unknown handle is a no-op.
///
/// # Example
///
/// ```rust,ignore
/// struct FilePlayer { sink: rodio::Sink, next: u64 }
///
/// impl AudioBackend for FilePlayer {
///     fn start(&mut self, id: &NarrationId) -> AudioResult<NarrationHandle> {
///         let file = open_asset(id).map_err(|_| AudioError::AssetNotFound(id.clone()))?;
///         self.sink.append(decode(file));
///         self.next += 1;
///         Ok(NarrationHandle(self.next))
///     }
///     fn stop(&mut self, _h: NarrationHandle) { self.sink.clear(); }
///     fn is_finished(&self, _h: NarrationHandle) -> bool { self.sink.empty() }
/// }
/// ```
pub trait AudioBackend {
    /// Begin playing `narration`.
    ///
    /// # Errors
    ///
    /// Any error here means the narration will not play; the coordinator
    /// reports it as `NarrationLoadFailed` and treats the track as finished.
    fn start(&mut self, narration: &NarrationId) -> AudioResult<NarrationHandle>;

    /// Stop `handle` immediately.
    fn stop(&mut self, handle: NarrationHandle);

    /// `true` once `handle` has played to the end (or was stopped).
    fn is_finished(&self, handle: NarrationHandle) -> bool;

    /// Pause `handle` in place.
    fn pause(&mut self, _handle: NarrationHandle) {}

    /// Resume a paused `handle`.
    fn resume(&mut self, _handle: NarrationHandle) {}

    /// Called once per engine tick with the tick's delta, before completion
    /// is polled.  Backends driven by the engine clock advance playback here.
    fn update(&mut self, _delta_ms: f32) {}
}

impl<A: AudioBackend + ?Sized> AudioBackend for Box<A> {
    fn start(&mut self, narration: &NarrationId) -> AudioResult<NarrationHandle> {
        (**self).start(narration)
    }

    fn stop(&mut self, handle: NarrationHandle) {
        (**self).stop(handle)
    }

    fn is_finished(&self, handle: NarrationHandle) -> bool {
        (**self).is_finished(handle)
    }

    fn pause(&mut self, handle: NarrationHandle) {
        (**self).pause(handle)
    }

    fn resume(&mut self, handle: NarrationHandle) {
        (**self).resume(handle)
    }

    fn update(&mut self, delta_ms: f32) {
        (**self).update(delta_ms)
    }
}
