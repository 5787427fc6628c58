//! `tg-output` — tour log writers for the tour_guide engine.
//!
//! | Backend | Files created                             |
//! |---------|-------------------------------------------|
//! | CSV     | `tour_snapshots.csv`, `tour_events.csv`   |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`TourLogObserver`], which implements `tg_tour::TourObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use tg_output::{CsvWriter, TourLogObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut tour = TourBuilder::new(config, audio)
//!     .observer(TourLogObserver::new(writer))
//!     .sequence(sequence)
//!     .build()?;
//! // ... drive the tour ...
//! tour.observer_mut().finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TourLogObserver;
pub use row::{EventRow, SnapshotRow};
pub use writer::OutputWriter;
