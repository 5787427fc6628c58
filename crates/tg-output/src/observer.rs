//! `TourLogObserver<W>` — bridges `TourObserver` to an `OutputWriter`.

use tg_core::{NarrationId, TourError};
use tg_tour::{TickResult, TourEvent, TourObserver, TourPhase};

use crate::row::{EventRow, SnapshotRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`TourObserver`] that writes tick snapshots and discrete events to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `TourObserver`
/// methods have no return value.  Check for them with
/// [`take_error`][Self::take_error] or [`finish`][Self::finish].
pub struct TourLogObserver<W: OutputWriter> {
    writer:            W,
    snapshot_interval: u64,
    last_tick:         u64,
    last_error:        Option<OutputError>,
}

impl<W: OutputWriter> TourLogObserver<W> {
    /// Log every tick's snapshot to `writer`.
    pub fn new(writer: W) -> Self {
        Self::with_interval(writer, 1)
    }

    /// Log a snapshot every `interval` ticks (0 disables snapshots).
    pub fn with_interval(writer: W, interval: u64) -> Self {
        Self {
            writer,
            snapshot_interval: interval,
            last_tick:         0,
            last_error:        None,
        }
    }

    /// Take the stored write error, if any.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the writer, reporting the first stored error before any flush
    /// error.
    pub fn finish(&mut self) -> OutputResult<()> {
        if let Some(e) = self.last_error.take() {
            return Err(e);
        }
        self.writer.finish()
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Unwrap the inner writer (e.g. to inspect files after the tour).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn event(&mut self, event: TourEvent) {
        let row = EventRow::new(self.last_tick + 1, &event);
        let result = self.writer.write_event(&row);
        self.store_err(result);
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> TourObserver for TourLogObserver<W> {
    fn on_speaking_changed(&mut self, speaking: bool) {
        self.event(TourEvent::SpeakingChanged(speaking));
    }

    fn on_phase_changed(&mut self, from: TourPhase, to: TourPhase) {
        self.event(TourEvent::PhaseChanged { from, to });
    }

    fn on_waypoint_reached(&mut self, index: usize) {
        self.event(TourEvent::WaypointReached(index));
    }

    fn on_tour_completed(&mut self) {
        self.event(TourEvent::TourCompleted);
        let result = self.writer.finish();
        self.store_err(result);
    }

    fn on_narration_requested(&mut self, narration: &NarrationId) {
        self.event(TourEvent::NarrationRequested(narration.clone()));
    }

    fn on_narration_stop_requested(&mut self) {
        self.event(TourEvent::NarrationStopRequested);
    }

    fn on_diagnostic(&mut self, diagnostic: &TourError) {
        self.event(TourEvent::Diagnostic(diagnostic.clone()));
    }

    fn on_tick_end(&mut self, result: &TickResult) {
        self.last_tick = result.tick;
        if self.snapshot_interval > 0 && result.tick % self.snapshot_interval == 0 {
            let result = self.writer.write_snapshot(&SnapshotRow::from(result));
            self.store_err(result);
        }
    }
}
