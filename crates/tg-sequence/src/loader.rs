//! CSV tour loader.
//!
//! # CSV format
//!
//! One row per waypoint, in tour order.  Optional columns may be left empty.
//!
//! ```csv
//! x,y,z,look_x,look_y,look_z,artwork_id,min_duration_ms,narration_id,is_transition
//! 0,0.5,-12,0,2.5,-14.5,mona-lisa,3000,intro-mona-lisa,false
//! 4,0.5,-10,,,,,0,,true
//! 8,0.5,-12,8,2.5,-14.5,night-watch,5000,night-watch-story,false
//! ```
//!
//! **`look_x/look_y/look_z`** are all-or-nothing: either all three are set
//! or all three are empty.
//!
//! **`is_transition`** accepts `true`/`false`, `1`/`0`, `yes`/`no`, or empty
//! (false).
//!
//! Tour metadata (`name`, `theme`) is not part of the file; the caller
//! supplies it, usually from the database row that referenced the file.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use tg_core::{ArtworkId, NarrationId, Point3, TourError};

use crate::{SequenceError, Waypoint, WaypointSequence};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct WaypointRecord {
    x:               f32,
    y:               f32,
    z:               f32,
    look_x:          Option<f32>,
    look_y:          Option<f32>,
    look_z:          Option<f32>,
    artwork_id:      Option<String>,
    min_duration_ms: Option<i64>,
    narration_id:    Option<String>,
    is_transition:   Option<String>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`WaypointSequence`] from a CSV file.
pub fn load_sequence_csv(
    path:  &Path,
    name:  &str,
    theme: Option<&str>,
) -> Result<WaypointSequence, SequenceError> {
    let file = std::fs::File::open(path)
        .map_err(SequenceError::Io)?;
    load_sequence_reader(file, name, theme)
}

/// Like [`load_sequence_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for tour files fetched
/// over the network.
pub fn load_sequence_reader<R: Read>(
    reader: R,
    name:   &str,
    theme:  Option<&str>,
) -> Result<WaypointSequence, SequenceError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut waypoints: Vec<Waypoint> = Vec::new();

    for (row_no, result) in csv_reader.deserialize::<WaypointRecord>().enumerate() {
        let row = result.map_err(|e| SequenceError::Parse(e.to_string()))?;
        waypoints.push(to_waypoint(row_no, row)?);
    }

    let seq = WaypointSequence::new(name, theme.map(str::to_owned), waypoints)?;
    log::debug!(
        "loaded sequence {:?}: {} waypoints ({} stops)",
        seq.name(),
        seq.len(),
        seq.stop_count()
    );
    Ok(seq)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn to_waypoint(row_no: usize, r: WaypointRecord) -> Result<Waypoint, SequenceError> {
    let look_at = match (r.look_x, r.look_y, r.look_z) {
        (Some(x), Some(y), Some(z)) => Some(Point3::new(x, y, z)),
        (None, None, None) => None,
        _ => {
            return Err(SequenceError::Parse(format!(
                "row {row_no}: look_x/look_y/look_z must be all set or all empty"
            )));
        }
    };

    let min_duration_ms = match r.min_duration_ms {
        None => 0,
        Some(ms) => u64::try_from(ms).map_err(|_| {
            TourError::InvalidSequence(format!(
                "waypoint {row_no} has negative min_duration_ms ({ms})"
            ))
        })?,
    };

    Ok(Waypoint {
        position: Point3::new(r.x, r.y, r.z),
        look_at,
        artwork_id: non_empty(r.artwork_id).map(ArtworkId::from),
        min_duration_ms,
        narration_id: non_empty(r.narration_id).map(NarrationId::from),
        is_transition: parse_flag(row_no, r.is_transition.as_deref())?,
    })
}

fn non_empty(s: Option<String>) -> Option<String> {
    s.map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

fn parse_flag(row_no: usize, s: Option<&str>) -> Result<bool, SequenceError> {
    match s.map(str::trim).unwrap_or("") {
        "" | "false" | "0" | "no" => Ok(false),
        "true" | "1" | "yes" => Ok(true),
        other => Err(SequenceError::Parse(format!(
            "row {row_no}: invalid is_transition {other:?}: expected true/false, 1/0, or yes/no"
        ))),
    }
}
