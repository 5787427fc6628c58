//! `tg-core` — foundational types for the `tour_guide` playback engine.
//!
//! This crate is a dependency of every other `tg-*` crate.  It has no `tg-*`
//! dependencies and only `thiserror` externally, plus optional `serde`.
//!
//! # What lives here
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`ids`]       | `NarrationId`, `ArtworkId`, `NarrationHandle`           |
//! | [`geo`]       | `Point3`, bearing and angle helpers                     |
//! | [`time`]      | `TourClock`, delta sanitising                           |
//! | [`config`]    | `TourConfig`, `AbsentVisitorPolicy`, `PausePolicy`      |
//! | [`error`]     | `TourError`, `TourResult`                               |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{AbsentVisitorPolicy, PausePolicy, TourConfig};
pub use error::{TourError, TourResult};
pub use geo::Point3;
pub use ids::{ArtworkId, NarrationHandle, NarrationId};
pub use time::TourClock;
