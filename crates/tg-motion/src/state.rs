//! The agent's pose.

use tg_core::Point3;

/// Pose of the guide agent plus the waypoint it is heading for.
///
/// Owned exclusively by [`MovementController`][crate::MovementController];
/// the sequencer reads it but never writes it directly.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentState {
    pub position: Point3,

    /// Yaw about +Y in radians, wrapped into `(-π, π]`.
    pub heading: f32,

    /// Index of the waypoint being approached, `None` when no tour runs.
    pub target_index: Option<usize>,
}

impl AgentState {
    /// An agent standing at `position` facing `heading`, with no target.
    #[inline]
    pub fn at_rest(position: Point3, heading: f32) -> Self {
        Self {
            position,
            heading: tg_core::geo::wrap_angle(heading),
            target_index: None,
        }
    }
}
