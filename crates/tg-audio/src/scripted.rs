//! An in-memory backend with fixed narration lengths.

use std::collections::HashMap;

use tg_core::{NarrationHandle, NarrationId};

use crate::{AudioBackend, AudioError, AudioResult};

#[derive(Debug)]
struct Track {
    remaining_ms: f32,
    paused:       bool,
}

/// An [`AudioBackend`] that "plays" narrations for a configured number of
/// milliseconds of engine time.
///
/// Playback advances only through [`AudioBackend::update`], i.e. with the
/// engine's tick deltas, so runs are deterministic.  Starting a narration
/// that was never registered fails with [`AudioError::AssetNotFound`], which
/// makes this backend convenient for exercising the missing-asset path.
#[derive(Debug, Default)]
pub struct ScriptedAudio {
    durations:   HashMap<NarrationId, f32>,
    tracks:      HashMap<NarrationHandle, Track>,
    next_handle: u64,
    started:     Vec<NarrationId>,
    stopped:     usize,
}

impl ScriptedAudio {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `narration` with a playback length of `duration_ms`.
    pub fn with_track(mut self, narration: impl Into<NarrationId>, duration_ms: f32) -> Self {
        self.insert(narration, duration_ms);
        self
    }

    pub fn insert(&mut self, narration: impl Into<NarrationId>, duration_ms: f32) {
        self.durations.insert(narration.into(), duration_ms.max(0.0));
    }

    /// Every narration passed to `start`, in order, including failed ones.
    pub fn started(&self) -> &[NarrationId] {
        &self.started
    }

    /// How many tracks were stopped before they finished.
    pub fn stopped_count(&self) -> usize {
        self.stopped
    }

    /// Number of tracks that have been started and are not yet finished.
    pub fn playing_count(&self) -> usize {
        self.tracks.values().filter(|t| t.remaining_ms > 0.0).count()
    }

    /// `true` if `handle` is paused.
    pub fn is_paused(&self, handle: NarrationHandle) -> bool {
        self.tracks.get(&handle).is_some_and(|t| t.paused)
    }
}

impl AudioBackend for ScriptedAudio {
    fn start(&mut self, narration: &NarrationId) -> AudioResult<NarrationHandle> {
        self.started.push(narration.clone());
        let duration = *self
            .durations
            .get(narration)
            .ok_or_else(|| AudioError::AssetNotFound(narration.clone()))?;

        self.next_handle += 1;
        let handle = NarrationHandle(self.next_handle);
        self.tracks.insert(handle, Track { remaining_ms: duration, paused: false });
        Ok(handle)
    }

    fn stop(&mut self, handle: NarrationHandle) {
        if let Some(track) = self.tracks.remove(&handle) {
            if track.remaining_ms > 0.0 {
                self.stopped += 1;
            }
        }
    }

    fn is_finished(&self, handle: NarrationHandle) -> bool {
        self.tracks.get(&handle).is_none_or(|t| t.remaining_ms <= 0.0)
    }

    fn pause(&mut self, handle: NarrationHandle) {
        if let Some(track) = self.tracks.get_mut(&handle) {
            track.paused = true;
        }
    }

    fn resume(&mut self, handle: NarrationHandle) {
        if let Some(track) = self.tracks.get_mut(&handle) {
            track.paused = false;
        }
    }

    fn update(&mut self, delta_ms: f32) {
        for track in self.tracks.values_mut().filter(|t| !t.paused) {
            track.remaining_ms = (track.remaining_ms - delta_ms).max(0.0);
        }
    }
}
