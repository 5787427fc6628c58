//! `AudioSyncCoordinator` — owns the narration lifecycle for the current
//! waypoint.

use tg_core::{NarrationHandle, NarrationId};

use crate::{AudioBackend, AudioResult};

/// Coarse narration state as seen by the sequencer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum NarrationStatus {
    /// Nothing started since the last `stop` (or ever).
    #[default]
    Idle,
    Playing,
    /// Held in place by [`pause`][AudioSyncCoordinator::pause]; not audible.
    Paused,
    /// The last started narration played out, or failed to start.
    Finished,
}

struct ActiveNarration {
    id:     NarrationId,
    handle: NarrationHandle,
    paused: bool,
}

/// Wraps an [`AudioBackend`] and enforces one narration at a time.
///
/// # Finish edge
///
/// [`advance`][Self::advance] polls the backend; the first time it sees the
/// active track finished it latches a one-shot flag.
/// [`take_finished`][Self::take_finished] returns `true` exactly once per
/// latch, so the sequencer reacts to a completion once and never re-fires on
/// the steady "finished" level.
pub struct AudioSyncCoordinator<A: AudioBackend> {
    backend:          A,
    active:           Option<ActiveNarration>,
    status:           NarrationStatus,
    finished_pending: bool,
}

impl<A: AudioBackend> AudioSyncCoordinator<A> {
    pub fn new(backend: A) -> Self {
        Self {
            backend,
            active:           None,
            status:           NarrationStatus::Idle,
            finished_pending: false,
        }
    }

    /// Start `narration`, stopping any narration that is still playing.
    ///
    /// On failure the coordinator reports `Finished` and latches the finish
    /// edge immediately, then returns the backend error so the caller can
    /// surface a diagnostic.
    pub fn start(&mut self, narration: &NarrationId) -> AudioResult<NarrationHandle> {
        self.stop();

        match self.backend.start(narration) {
            Ok(handle) => {
                log::debug!("narration {narration} started as {handle}");
                self.active = Some(ActiveNarration {
                    id: narration.clone(),
                    handle,
                    paused: false,
                });
                self.status = NarrationStatus::Playing;
                Ok(handle)
            }
            Err(e) => {
                log::warn!("narration {narration} failed to start: {e}");
                self.status = NarrationStatus::Finished;
                self.finished_pending = true;
                Err(e)
            }
        }
    }

    /// Stop the active narration, if any, and clear any pending finish edge.
    ///
    /// Returns `true` if a playing track was actually stopped.
    pub fn stop(&mut self) -> bool {
        self.finished_pending = false;
        self.status = NarrationStatus::Idle;
        match self.active.take() {
            Some(active) => {
                log::debug!("narration {} stopped", active.id);
                self.backend.stop(active.handle);
                true
            }
            None => false,
        }
    }

    /// Forward the tick to the backend and poll the active track.
    pub fn advance(&mut self, delta_ms: f32) {
        self.backend.update(delta_ms);

        let done = self
            .active
            .as_ref()
            .is_some_and(|a| self.backend.is_finished(a.handle));
        if done {
            if let Some(active) = self.active.take() {
                log::debug!("narration {} finished", active.id);
            }
            self.status = NarrationStatus::Finished;
            self.finished_pending = true;
        }
    }

    /// Consume the finish edge.  `true` at most once per completed track.
    #[inline]
    pub fn take_finished(&mut self) -> bool {
        std::mem::take(&mut self.finished_pending)
    }

    pub fn pause(&mut self) {
        if let Some(active) = self.active.as_mut().filter(|a| !a.paused) {
            active.paused = true;
            self.backend.pause(active.handle);
            self.status = NarrationStatus::Paused;
        }
    }

    pub fn resume(&mut self) {
        if let Some(active) = self.active.as_mut().filter(|a| a.paused) {
            active.paused = false;
            self.backend.resume(active.handle);
            self.status = NarrationStatus::Playing;
        }
    }

    #[inline]
    pub fn status(&self) -> NarrationStatus {
        self.status
    }

    /// `true` while a track is audible; a paused track is not playing.
    #[inline]
    pub fn is_playing(&self) -> bool {
        self.status == NarrationStatus::Playing
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.status == NarrationStatus::Paused
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.status == NarrationStatus::Finished
    }

    /// The narration currently playing, if any.
    pub fn current(&self) -> Option<&NarrationId> {
        self.active.as_ref().map(|a| &a.id)
    }

    pub fn backend(&self) -> &A {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut A {
        &mut self.backend
    }

    pub fn into_backend(self) -> A {
        self.backend
    }
}
