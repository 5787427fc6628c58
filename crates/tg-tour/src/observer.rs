//! Outbound notifications for renderers, UI, and telemetry.

use tg_core::{NarrationId, Point3, TourError};

use crate::{TickResult, TourPhase};

/// Callbacks invoked by [`TourSequencer`][crate::TourSequencer] as the tour
/// runs.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// `on_waypoint_reached`, `on_tour_completed`, `on_narration_requested`,
/// `on_narration_stop_requested` and `on_speaking_changed` fire at most once
/// per tick.  `on_phase_changed` may fire more than once when a tick
/// cascades through several phases (`AtWaypoint → AwaitingVisitor →
/// Moving`).
///
/// # Example — subtitle trigger
///
/// ```rust,ignore
/// struct Subtitles { ui: UiHandle }
///
/// impl TourObserver for Subtitles {
///     fn on_narration_requested(&mut self, narration: &NarrationId) {
///         self.ui.show_caption(narration);
///     }
///     fn on_narration_stop_requested(&mut self) {
///         self.ui.hide_caption();
///     }
/// }
/// ```
pub trait TourObserver {
    /// The agent's pose after an active, unpaused tick.
    fn on_position(&mut self, _position: Point3, _heading: f32) {}

    /// Narration started or stopped being audible, including a pause or
    /// resume that holds the track.
    fn on_speaking_changed(&mut self, _speaking: bool) {}

    fn on_phase_changed(&mut self, _from: TourPhase, _to: TourPhase) {}

    /// The agent arrived at waypoint `index` (stops and transitions).
    fn on_waypoint_reached(&mut self, _index: usize) {}

    /// The last waypoint was passed and the tour went `Idle`.
    fn on_tour_completed(&mut self) {}

    /// The narration for the waypoint just reached was requested from the
    /// audio backend.
    fn on_narration_requested(&mut self, _narration: &NarrationId) {}

    /// A playing narration was cut short (skip, goto, or stop).
    fn on_narration_stop_requested(&mut self) {}

    /// A non-fatal problem, e.g. `NarrationLoadFailed`.
    fn on_diagnostic(&mut self, _diagnostic: &TourError) {}

    /// Called at the end of every tick with the snapshot being returned.
    fn on_tick_end(&mut self, _result: &TickResult) {}
}

/// A [`TourObserver`] that does nothing.
pub struct NoopObserver;

impl TourObserver for NoopObserver {}

// ── Event recording ───────────────────────────────────────────────────────────

/// Discrete tour events, as delivered to a [`TourObserver`].
///
/// Position updates and tick ends are not events; they fire every tick.
#[derive(Clone, Debug, PartialEq)]
pub enum TourEvent {
    PhaseChanged { from: TourPhase, to: TourPhase },
    SpeakingChanged(bool),
    WaypointReached(usize),
    TourCompleted,
    NarrationRequested(NarrationId),
    NarrationStopRequested,
    Diagnostic(TourError),
}

impl TourEvent {
    /// Short stable name, used as the event column in output files.
    pub fn name(&self) -> &'static str {
        match self {
            TourEvent::PhaseChanged { .. }     => "phase_changed",
            TourEvent::SpeakingChanged(_)      => "speaking_changed",
            TourEvent::WaypointReached(_)      => "waypoint_reached",
            TourEvent::TourCompleted           => "tour_completed",
            TourEvent::NarrationRequested(_)   => "narration_requested",
            TourEvent::NarrationStopRequested  => "narration_stop_requested",
            TourEvent::Diagnostic(_)           => "diagnostic",
        }
    }

    /// Free-form detail for the event, empty when there is none.
    pub fn detail(&self) -> String {
        match self {
            TourEvent::PhaseChanged { from, to } => format!("{from}->{to}"),
            TourEvent::SpeakingChanged(s)        => s.to_string(),
            TourEvent::WaypointReached(i)        => i.to_string(),
            TourEvent::NarrationRequested(n)     => n.to_string(),
            TourEvent::Diagnostic(e)             => e.to_string(),
            TourEvent::TourCompleted | TourEvent::NarrationStopRequested => String::new(),
        }
    }
}

/// A [`TourObserver`] that keeps every event with the number of ticks that
/// had completed when it fired.
///
/// Events raised by commands between tick `n` and tick `n + 1` are stamped
/// `n`, the same as events raised inside tick `n + 1`.
#[derive(Debug, Default)]
pub struct EventRecorder {
    pub events:    Vec<(u64, TourEvent)>,
    pub positions: Vec<Point3>,
    ticks:         u64,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of recorded events matching `pred`.
    pub fn count(&self, pred: impl Fn(&TourEvent) -> bool) -> usize {
        self.events.iter().filter(|(_, e)| pred(e)).count()
    }

    fn push(&mut self, event: TourEvent) {
        self.events.push((self.ticks, event));
    }
}

impl TourObserver for EventRecorder {
    fn on_position(&mut self, position: Point3, _heading: f32) {
        self.positions.push(position);
    }

    fn on_speaking_changed(&mut self, speaking: bool) {
        self.push(TourEvent::SpeakingChanged(speaking));
    }

    fn on_phase_changed(&mut self, from: TourPhase, to: TourPhase) {
        self.push(TourEvent::PhaseChanged { from, to });
    }

    fn on_waypoint_reached(&mut self, index: usize) {
        self.push(TourEvent::WaypointReached(index));
    }

    fn on_tour_completed(&mut self) {
        self.push(TourEvent::TourCompleted);
    }

    fn on_narration_requested(&mut self, narration: &NarrationId) {
        self.push(TourEvent::NarrationRequested(narration.clone()));
    }

    fn on_narration_stop_requested(&mut self) {
        self.push(TourEvent::NarrationStopRequested);
    }

    fn on_diagnostic(&mut self, diagnostic: &TourError) {
        self.push(TourEvent::Diagnostic(diagnostic.clone()));
    }

    fn on_tick_end(&mut self, _result: &TickResult) {
        self.ticks += 1;
    }
}
