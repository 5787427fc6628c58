//! The `OutputWriter` trait implemented by log backends.

use crate::{EventRow, OutputResult, SnapshotRow};

/// Sink for tour snapshots and events.
///
/// Errors are returned to the caller; [`TourLogObserver`][crate::TourLogObserver]
/// keeps the first one for [`take_error`][crate::TourLogObserver::take_error].
pub trait OutputWriter {
    /// Write one per-tick snapshot.
    fn write_snapshot(&mut self, row: &SnapshotRow) -> OutputResult<()>;

    /// Write one discrete event.
    fn write_event(&mut self, row: &EventRow) -> OutputResult<()>;

    /// Flush everything written so far.
    ///
    /// Idempotent.  Writes after `finish` are allowed and need another
    /// `finish`.
    fn finish(&mut self) -> OutputResult<()>;
}
