//! Position sinks: where a run writes the marker position each frame.

use tm_core::Waypoint;

/// Anything that accepts "set the current position to (lng, lat)".
///
/// The animator only ever writes; it never reads a position back.
pub trait PositionSink {
    fn set_position(&mut self, position: Waypoint);
}

impl<F: FnMut(Waypoint)> PositionSink for F {
    #[inline]
    fn set_position(&mut self, position: Waypoint) {
        self(position)
    }
}

/// A sink that keeps every position it receives, oldest first.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct RecordingSink {
    pub positions: Vec<Waypoint>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent position, if any.
    #[inline]
    pub fn last(&self) -> Option<Waypoint> {
        self.positions.last().copied()
    }

    #[inline]
    pub fn writes(&self) -> usize {
        self.positions.len()
    }

    pub fn clear(&mut self) {
        self.positions.clear();
    }
}

impl PositionSink for RecordingSink {
    fn set_position(&mut self, position: Waypoint) {
        self.positions.push(position);
    }
}
