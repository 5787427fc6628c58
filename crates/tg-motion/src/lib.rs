//! `tg-motion` — agent movement state, steering, and proximity gating.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                       |
//! |----------------|----------------------------------------------------------------|
//! | [`state`]      | `AgentState` — the agent's pose and current target             |
//! | [`controller`] | `MovementController` — per-tick translation and heading easing |
//! | [`gate`]       | `ProximityGate` — stateless "is the visitor close enough?"     |
//!
//! # Movement model (continuous steering)
//!
//! Each tick the controller moves the agent in a straight line toward the
//! target at `speed · dt`, clamped so it never overshoots, and turns its
//! heading toward the direction of travel by at most `rotation_speed · dt`.
//!
//! ```text
//! remaining = |target − position|
//! if remaining ≤ step:  position = target
//! else:                 position += (target − position) / remaining · step
//! arrived = |target − position| ≤ arrival_epsilon
//! ```
//!
//! Because the step is clamped, the agent reaches any target within
//! `ceil(distance / step)` ticks and never oscillates around it.

pub mod controller;
pub mod gate;
pub mod state;

#[cfg(test)]
mod tests;

pub use controller::{MoveStep, MovementController};
pub use gate::ProximityGate;
pub use state::AgentState;
