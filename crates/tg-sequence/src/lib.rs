//! `tg-sequence` — waypoints, tour sequences, and CSV loading.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`waypoint`]  | `Waypoint` — one authored stop or pass-through point      |
//! | [`sequence`]  | `WaypointSequence` — validated, read-only ordered list    |
//! | [`builder`]   | `SequenceBuilder` — fluent construction, transition insertion |
//! | [`loader`]    | `load_sequence_csv`, `load_sequence_reader`               |
//! | [`error`]     | `SequenceError`, `SequenceResult<T>`                      |
//!
//! # Validity
//!
//! A `WaypointSequence` can only be obtained through a validating path
//! (`WaypointSequence::new`, the builder, the loader, or serde with the
//! `serde` feature).  A valid sequence:
//!
//! ```text
//! - has at least one waypoint
//! - has at least one non-transition waypoint
//! - has only finite coordinates
//! ```
//!
//! `min_duration_ms` is unsigned, so the "no negative dwell" rule is carried
//! by the type; the CSV loader reports negative input as an invalid sequence.

pub mod builder;
pub mod error;
pub mod loader;
pub mod sequence;
pub mod waypoint;


pub use builder::SequenceBuilder;
pub use error::{SequenceError, SequenceResult};
pub use loader::{load_sequence_csv, load_sequence_reader};
pub use sequence::WaypointSequence;
pub use waypoint::Waypoint;
