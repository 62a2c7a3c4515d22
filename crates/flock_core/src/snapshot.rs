use crate::flock::FlockState;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rounded read-out of a flock at one moment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlockSnapshot {
    pub state: FlockState,
    pub members: usize,
    pub position_x: f64,
    pub position_y: f64,
    pub total_distance: f64,
    pub line_distance_from_start: f64,
}

impl FlockSnapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for FlockSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "members: {} | position: ({:.1}, {:.1}) | travelled: {:.1} | from start: {:.2}",
            self.members,
            self.position_x,
            self.position_y,
            self.total_distance,
            self.line_distance_from_start
        )
    }
}
