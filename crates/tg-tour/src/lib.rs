//! `tg-tour` — the guided-tour state machine.
//!
//! # Phases
//!
//! ```text
//!            play()                arrived            dwell ∧ narration done
//!   Idle ─────────────▶ Moving ─────────────▶ AtWaypoint ─────────────────▶ AwaitingVisitor
//!    ▲                  ▲   │ arrived at a transition                              │
//!    │                  │   └──────────────▶ Moving (next)                         │
//!    │                  └──────────────────────────────────────────────────────────┘
//!    │                                      visitor near (next index)
//!    └── stop(), or past the last waypoint (tour_completed)
//! ```
//!
//! `paused` overlays any active phase: movement and timers freeze until
//! `resume()`.
//!
//! # Tick order
//!
//! Commands are applied synchronously when called.  Each `tick()` then:
//!
//! 1. Polls narration (backend `update`, finish edge latched).
//! 2. Moves the agent (`Moving`) or advances the dwell timer (`AtWaypoint`).
//! 3. Evaluates the proximity gate at the agent's new position.
//! 4. Resolves `AtWaypoint → AwaitingVisitor → Moving` in that order.
//! 5. Notifies the observer and returns a [`TickResult`].
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use tg_audio::NullAudio;
//! use tg_core::TourConfig;
//! use tg_tour::TourBuilder;
//!
//! let mut tour = TourBuilder::new(TourConfig::default(), NullAudio::default())
//!     .sequence(sequence)
//!     .build()?;
//! tour.play()?;
//! loop {
//!     let frame = tour.tick(16.0, visitor_position());
//!     render(frame.position, frame.heading);
//! }
//! ```

pub mod builder;
pub mod observer;
pub mod sequencer;
pub mod state;


pub use builder::TourBuilder;
pub use observer::{EventRecorder, NoopObserver, TourEvent, TourObserver};
pub use sequencer::TourSequencer;
pub use state::{TickResult, TourPhase, TourRunState};

pub use tg_core::{TourError, TourResult};
