//! Fluent builder for constructing a [`TourSequencer`].

use tg_audio::AudioBackend;
use tg_core::{TourConfig, TourResult};
use tg_sequence::WaypointSequence;

use crate::{NoopObserver, TourObserver, TourSequencer};

/// Fluent builder for [`TourSequencer<A, O>`].
///
/// # Required inputs
///
/// - [`TourConfig`] — speeds, thresholds, policies
/// - `A: AudioBackend` — the host's narration player (e.g.
///   [`tg_audio::NullAudio`] when there is no audio)
///
/// # Optional inputs (have defaults)
///
/// | Method           | Default                         |
/// |------------------|---------------------------------|
/// | `.observer(o)`   | `NoopObserver`                  |
/// | `.sequence(s)`   | None; call `load` before `play` |
///
/// # Example
///
/// ```rust,ignore
/// let mut tour = TourBuilder::new(config, ScriptedAudio::new())
///     .observer(EventRecorder::new())
///     .sequence(sequence)
///     .build()?;
/// tour.play()?;
/// ```
pub struct TourBuilder<A: AudioBackend, O: TourObserver = NoopObserver> {
    config:   TourConfig,
    audio:    A,
    observer: O,
    sequence: Option<WaypointSequence>,
}

impl<A: AudioBackend> TourBuilder<A, NoopObserver> {
    pub fn new(config: TourConfig, audio: A) -> Self {
        Self {
            config,
            audio,
            observer: NoopObserver,
            sequence: None,
        }
    }
}

impl<A: AudioBackend, O: TourObserver> TourBuilder<A, O> {
    /// Attach an observer, replacing the current one.
    pub fn observer<O2: TourObserver>(self, observer: O2) -> TourBuilder<A, O2> {
        TourBuilder {
            config:   self.config,
            audio:    self.audio,
            observer,
            sequence: self.sequence,
        }
    }

    /// Load `sequence` as part of `build()`.
    pub fn sequence(mut self, sequence: WaypointSequence) -> Self {
        self.sequence = Some(sequence);
        self
    }

    /// Validate the config (and sequence, if given) and return an `Idle`
    /// sequencer.
    pub fn build(self) -> TourResult<TourSequencer<A, O>> {
        self.config.validate()?;

        let mut tour = TourSequencer::from_parts(self.config, self.audio, self.observer);
        if let Some(sequence) = self.sequence {
            tour.load(sequence)?;
        }
        Ok(tour)
    }
}
