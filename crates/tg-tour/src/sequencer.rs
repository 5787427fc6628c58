//! The `TourSequencer` struct and its tick loop.

use log::{debug, info, warn};

use tg_audio::{AudioBackend, AudioSyncCoordinator};
use tg_core::time::sanitize_delta_ms;
use tg_core::{PausePolicy, Point3, TourClock, TourConfig, TourError, TourResult};
use tg_motion::{AgentState, MovementController, ProximityGate};
use tg_sequence::{Waypoint, WaypointSequence};

use crate::{NoopObserver, TickResult, TourObserver, TourPhase, TourRunState};

// ── TourSequencer ─────────────────────────────────────────────────────────────

/// Drives one guide agent through a [`WaypointSequence`].
///
/// Owns the agent (through its [`MovementController`]), the narration
/// coordinator, and the observer.  The host calls [`tick`][Self::tick] once
/// per frame with the frame delta and the visitor's position, and issues
/// commands (`play`, `pause`, `skip_forward`, …) in between.
///
/// Create via [`TourBuilder`][crate::TourBuilder].
pub struct TourSequencer<A: AudioBackend, O: TourObserver = NoopObserver> {
    config:   TourConfig,
    clock:    TourClock,
    sequence: Option<WaypointSequence>,
    run:      TourRunState,
    motion:   MovementController,
    gate:     ProximityGate,
    audio:    AudioSyncCoordinator<A>,
    observer: O,
}

impl<A: AudioBackend, O: TourObserver> TourSequencer<A, O> {
    /// Assemble a sequencer from a validated config.  Used by the builder.
    pub(crate) fn from_parts(config: TourConfig, audio: A, observer: O) -> Self {
        Self {
            clock:    TourClock::new(),
            sequence: None,
            run:      TourRunState::default(),
            motion:   MovementController::new(&config),
            gate:     ProximityGate::from_config(&config),
            audio:    AudioSyncCoordinator::new(audio),
            observer,
            config,
        }
    }

    // ── Commands ──────────────────────────────────────────────────────────

    /// Replace the loaded sequence.
    ///
    /// Only allowed while `Idle`; an active tour must be stopped first.  The
    /// agent returns to its start pose and the start cursor to 0.
    pub fn load(&mut self, sequence: WaypointSequence) -> TourResult<()> {
        if self.is_active() {
            return Err(TourError::TourInProgress);
        }
        sequence.validate()?;

        info!(
            "loaded tour '{}' ({} waypoints, {} stops)",
            sequence.name(),
            sequence.len(),
            sequence.stop_count()
        );
        self.sequence = Some(sequence);
        self.run = TourRunState::default();
        self.motion.reset();
        Ok(())
    }

    /// Start the tour, or resume it if paused.
    ///
    /// From `Idle` the agent heads for the start cursor (0 unless moved by
    /// `go_to`/`skip_*`).  A no-op on a running, unpaused tour.
    pub fn play(&mut self) -> TourResult<()> {
        self.sequence_len()?;

        if self.run.paused {
            return self.resume();
        }
        if !self.is_active() {
            let start = self.run.current_index;
            info!("tour started at waypoint {start}");
            self.retarget(start);
            self.sync_speaking();
        }
        Ok(())
    }

    /// Freeze movement and timers.  Narration follows `config.pause_policy`.
    pub fn pause(&mut self) -> TourResult<()> {
        self.sequence_len()?;

        if self.is_active() && !self.run.paused {
            debug!("tour paused in {}", self.run.phase);
            self.run.paused = true;
            if self.config.pause_policy == PausePolicy::PauseNarration {
                self.audio.pause();
                self.sync_speaking();
            }
        }
        Ok(())
    }

    pub fn resume(&mut self) -> TourResult<()> {
        self.sequence_len()?;

        if self.run.paused {
            debug!("tour resumed in {}", self.run.phase);
            self.run.paused = false;
            self.audio.resume();
            self.sync_speaking();
        }
        Ok(())
    }

    /// Stop the tour: cut narration, return the agent to its start pose,
    /// go `Idle`.  Idempotent, and never an error.
    pub fn stop(&mut self) {
        if !self.is_active() {
            return;
        }
        info!("tour stopped at waypoint {}", self.run.current_index);

        self.stop_narration();
        let from = self.run.phase;
        self.run = TourRunState::default();
        self.motion.reset();
        self.notify_phase(from, TourPhase::Idle);
        self.sync_speaking();
    }

    /// Move on to the next waypoint now, cutting any narration.
    ///
    /// Past the last waypoint the tour completes (or loops).  While `Idle`
    /// this moves the start cursor instead.
    pub fn skip_forward(&mut self) -> TourResult<()> {
        let len  = self.sequence_len()?;
        let next = self.run.current_index + 1;

        if self.is_active() {
            self.advance_to(next);
            self.sync_speaking();
        } else if next < len {
            self.run.current_index = next;
        } else {
            return Err(TourError::InvalidIndex { index: next, len });
        }
        Ok(())
    }

    /// Go back one waypoint (staying at 0 when already there), cutting any
    /// narration.  While `Idle` this moves the start cursor instead.
    pub fn skip_backward(&mut self) -> TourResult<()> {
        self.sequence_len()?;
        let prev = self.run.current_index.saturating_sub(1);

        if self.is_active() {
            self.retarget(prev);
            self.sync_speaking();
        } else {
            self.run.current_index = prev;
        }
        Ok(())
    }

    /// Jump to waypoint `index`, cutting any narration.  While `Idle` this
    /// moves the start cursor instead.
    pub fn go_to(&mut self, index: usize) -> TourResult<()> {
        let len = self.sequence_len()?;
        if index >= len {
            return Err(TourError::InvalidIndex { index, len });
        }

        if self.is_active() {
            self.retarget(index);
            self.sync_speaking();
        } else {
            self.run.current_index = index;
        }
        Ok(())
    }

    // ── Tick ──────────────────────────────────────────────────────────────

    /// Advance the tour by `delta_ms` with the visitor at `visitor`
    /// (`None` when the host has no visitor position this frame).
    ///
    /// Negative or non-finite deltas are treated as 0.  Idle and paused
    /// ticks advance neither the agent nor any timer.
    pub fn tick(&mut self, delta_ms: f32, visitor: Option<Point3>) -> TickResult {
        let dt = sanitize_delta_ms(delta_ms);
        let mut diagnostic = None;

        if !self.is_active() {
            self.clock.advance_frozen();
        } else if self.run.paused {
            self.clock.advance_frozen();
            // A track left running under ContinueNarration still finishes;
            // its edge stays latched until the tour resumes.
            self.audio.advance(dt);
            self.run.is_visitor_near = self.visitor_near(visitor);
        } else {
            self.clock.advance(dt);
            self.audio.advance(dt);
            self.step(dt, visitor, &mut diagnostic);
            self.observer.on_position(self.motion.state.position, self.motion.state.heading);
        }

        self.sync_speaking();
        let result = self.result(diagnostic);
        self.observer.on_tick_end(&result);
        result
    }

    fn step(&mut self, dt: f32, visitor: Option<Point3>, diagnostic: &mut Option<TourError>) {
        // ── Phase 1: movement or dwell ────────────────────────────────────
        match self.run.phase {
            TourPhase::Moving => self.step_moving(dt, diagnostic),
            TourPhase::AtWaypoint | TourPhase::AwaitingVisitor => {
                self.run.elapsed_at_waypoint_ms += f64::from(dt);
                if let Some(look_at) = self.current_waypoint().and_then(|w| w.look_at) {
                    self.motion.face(look_at, dt);
                }
            }
            TourPhase::Idle => {}
        }

        // ── Phase 2: proximity gate at the new position ───────────────────
        self.run.is_visitor_near = self.visitor_near(visitor);

        // ── Phase 3: dwell/narration exit, then visitor exit ──────────────
        if self.run.phase == TourPhase::AtWaypoint {
            self.check_dwell();
        }
        if self.run.phase == TourPhase::AwaitingVisitor
            && self.config.auto_advance
            && self.run.is_visitor_near
        {
            self.advance_to(self.run.current_index + 1);
        }
    }

    fn step_moving(&mut self, dt: f32, diagnostic: &mut Option<TourError>) {
        let index = self.run.current_index;
        let Some(target) = self.current_waypoint().map(|w| w.position) else {
            return;
        };
        if self.motion.step_toward(target, dt).arrived {
            self.arrive(index, diagnostic);
        }
    }

    fn arrive(&mut self, index: usize, diagnostic: &mut Option<TourError>) {
        let Some(waypoint) = self.current_waypoint() else {
            return;
        };
        let is_transition = waypoint.is_transition;
        let narration     = waypoint.narration().cloned();

        debug!("arrived at waypoint {index}");
        self.observer.on_waypoint_reached(index);

        if is_transition {
            self.advance_to(index + 1);
            return;
        }

        self.run.elapsed_at_waypoint_ms = 0.0;
        self.run.narration_done = false;
        self.set_phase(TourPhase::AtWaypoint);

        if let Some(narration) = narration {
            self.observer.on_narration_requested(&narration);
            if let Err(e) = self.audio.start(&narration) {
                let diag = TourError::NarrationLoadFailed {
                    narration,
                    reason: e.to_string(),
                };
                warn!("{diag}");
                self.observer.on_diagnostic(&diag);
                *diagnostic = Some(diag);
            }
        }
    }

    /// `AtWaypoint → AwaitingVisitor` once the dwell has elapsed and the
    /// narration (if any) has reported finished.
    fn check_dwell(&mut self) {
        if self.audio.take_finished() {
            self.run.narration_done = true;
        }
        let Some(waypoint) = self.current_waypoint() else {
            return;
        };
        let dwell_done     = self.run.elapsed_at_waypoint_ms >= waypoint.dwell_ms() as f64;
        let narration_done = waypoint.narration().is_none() || self.run.narration_done;

        if dwell_done && narration_done {
            self.set_phase(TourPhase::AwaitingVisitor);
        }
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// Head for `index`: cut narration, reset the dwell, go `Moving`.
    fn retarget(&mut self, index: usize) {
        self.stop_narration();
        self.run.current_index = index;
        self.run.elapsed_at_waypoint_ms = 0.0;
        self.run.narration_done = false;
        self.motion.set_target(index);
        self.set_phase(TourPhase::Moving);
    }

    /// Head for `next`, or finish (or loop) when it is past the end.
    fn advance_to(&mut self, next: usize) {
        let len = self.sequence.as_ref().map_or(0, WaypointSequence::len);
        if next < len {
            self.retarget(next);
        } else if self.config.looping {
            info!("tour looped back to the first waypoint");
            self.retarget(0);
        } else {
            self.complete();
        }
    }

    /// Past the last waypoint: go `Idle`, keep the agent where it stands.
    fn complete(&mut self) {
        self.stop_narration();
        let from = self.run.phase;
        self.run = TourRunState::default();
        self.motion.clear_target();
        self.notify_phase(from, TourPhase::Idle);
        info!("tour completed ({})", self.clock);
        self.observer.on_tour_completed();
    }

    fn stop_narration(&mut self) {
        if self.audio.stop() {
            self.observer.on_narration_stop_requested();
        }
    }

    fn set_phase(&mut self, to: TourPhase) {
        let from = self.run.phase;
        self.run.phase = to;
        self.notify_phase(from, to);
    }

    fn notify_phase(&mut self, from: TourPhase, to: TourPhase) {
        if from != to {
            debug!("phase {from} -> {to}");
            self.observer.on_phase_changed(from, to);
        }
    }

    fn sync_speaking(&mut self) {
        let playing = self.audio.is_playing();
        if playing != self.run.is_narration_playing {
            self.run.is_narration_playing = playing;
            self.observer.on_speaking_changed(playing);
        }
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    fn sequence_len(&self) -> TourResult<usize> {
        self.sequence
            .as_ref()
            .map(WaypointSequence::len)
            .ok_or(TourError::NoSequenceLoaded)
    }

    fn visitor_near(&self, visitor: Option<Point3>) -> bool {
        self.gate.is_visitor_near(self.motion.state.position, visitor)
    }

    fn result(&self, diagnostic: Option<TourError>) -> TickResult {
        TickResult {
            tick:                 self.clock.tick,
            position:             self.motion.state.position,
            heading:              self.motion.state.heading,
            phase:                self.run.phase,
            current_index:        self.run.current_index,
            is_narration_playing: self.run.is_narration_playing,
            is_paused:            self.run.paused,
            is_visitor_near:      self.run.is_visitor_near,
            diagnostic,
        }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// `true` in any phase other than `Idle`, paused or not.
    #[inline]
    pub fn is_active(&self) -> bool {
        self.run.phase != TourPhase::Idle
    }

    #[inline]
    pub fn phase(&self) -> TourPhase {
        self.run.phase
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.run.paused
    }

    pub fn run_state(&self) -> &TourRunState {
        &self.run
    }

    pub fn agent(&self) -> &AgentState {
        &self.motion.state
    }

    pub fn config(&self) -> &TourConfig {
        &self.config
    }

    pub fn clock(&self) -> &TourClock {
        &self.clock
    }

    pub fn sequence(&self) -> Option<&WaypointSequence> {
        self.sequence.as_ref()
    }

    pub fn current_index(&self) -> usize {
        self.run.current_index
    }

    /// The waypoint being approached or visited (the start cursor while
    /// `Idle`).
    pub fn current_waypoint(&self) -> Option<&Waypoint> {
        self.sequence.as_ref()?.get(self.run.current_index)
    }

    /// Snapshot of the current state without advancing time.
    pub fn snapshot(&self) -> TickResult {
        self.result(None)
    }

    /// Fraction of the sequence reached, `(index + 1) / len` while active
    /// and 0 while `Idle`.
    pub fn progress(&self) -> f32 {
        match self.sequence.as_ref() {
            Some(seq) if self.is_active() && !seq.is_empty() => {
                (self.run.current_index + 1) as f32 / seq.len() as f32
            }
            _ => 0.0,
        }
    }

    pub fn has_next(&self) -> bool {
        self.sequence
            .as_ref()
            .is_some_and(|s| self.run.current_index + 1 < s.len())
    }

    pub fn has_previous(&self) -> bool {
        self.sequence.is_some() && self.run.current_index > 0
    }

    /// Lower bound on the dwell time still ahead, in ms: the minimum
    /// durations from the current waypoint onward, less the time already
    /// spent at it.
    pub fn remaining_min_duration_ms(&self) -> u64 {
        let Some(seq) = self.sequence.as_ref() else {
            return 0;
        };
        let spent = match self.run.phase {
            TourPhase::AtWaypoint | TourPhase::AwaitingVisitor => {
                self.run.elapsed_at_waypoint_ms as u64
            }
            _ => 0,
        };
        let current = seq.get(self.run.current_index).map_or(0, Waypoint::dwell_ms);
        seq.min_duration_from(self.run.current_index)
            .saturating_sub(spent.min(current))
    }

    /// Rough length of a full run in ms: the walk from the configured start
    /// position through every waypoint at `speed`, plus every minimum dwell.
    /// Narration length is not known up front and is not counted.
    pub fn estimated_duration_ms(&self) -> u64 {
        let Some(seq) = self.sequence.as_ref() else {
            return 0;
        };
        let approach = seq
            .get(0)
            .map_or(0.0, |w| self.config.start_position.distance(w.position));
        let walk_ms = f64::from(approach + seq.path_length()) / f64::from(self.config.speed) * 1_000.0;
        (walk_ms.round() as u64).saturating_add(seq.min_duration_from(0))
    }

    pub fn audio(&self) -> &AudioSyncCoordinator<A> {
        &self.audio
    }

    /// Mutable access to the audio backend, e.g. to register tracks.
    pub fn audio_backend_mut(&mut self) -> &mut A {
        self.audio.backend_mut()
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    pub fn into_observer(self) -> O {
        self.observer
    }
}
