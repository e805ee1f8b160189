//! Pacing strategies: how elapsed frame time maps to progress along a path.

use std::fmt;

use tm_core::Speed;

use crate::{AnimateError, AnimateResult};

/// The strategy a run uses to turn elapsed time into a position.
///
/// Both strategies write a planar lerp of the current segment's endpoints;
/// they differ only in how the segment and the ratio are chosen.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Pacing {
    /// Constant ground speed over the whole path.  Progress is measured in
    /// Haversine metres; the last frame snaps to the final waypoint exactly.
    ConstantSpeed(Speed),

    /// Every segment takes the same wall-clock time regardless of its
    /// length.  The run stops after the last segment's transition frame.
    SegmentDuration {
        millis: f64,
    },
}

impl Pacing {
    #[inline]
    pub fn constant_kmh(kmh: f64) -> Self {
        Pacing::ConstantSpeed(Speed::from_kmh(kmh))
    }

    #[inline]
    pub fn constant_mps(mps: f64) -> Self {
        Pacing::ConstantSpeed(Speed::from_mps(mps))
    }

    #[inline]
    pub fn per_segment_ms(millis: f64) -> Self {
        Pacing::SegmentDuration { millis }
    }

    /// Reject non-positive or non-finite pacing parameters.
    pub fn validate(self) -> AnimateResult<Self> {
        match self {
            Pacing::ConstantSpeed(speed) if !speed.is_valid() => Err(AnimateError::InvalidInput(
                format!("speed must be positive and finite, got {} m/s", speed.mps()),
            )),
            Pacing::SegmentDuration { millis } if !(millis.is_finite() && millis > 0.0) => {
                Err(AnimateError::InvalidInput(format!(
                    "segment duration must be positive and finite, got {millis} ms"
                )))
            }
            ok => Ok(ok),
        }
    }

    /// The speed for `ConstantSpeed`, `None` otherwise.
    #[inline]
    pub fn speed(self) -> Option<Speed> {
        match self {
            Pacing::ConstantSpeed(s) => Some(s),
            Pacing::SegmentDuration { .. } => None,
        }
    }
}

impl fmt::Display for Pacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pacing::ConstantSpeed(s)            => write!(f, "constant {s}"),
            Pacing::SegmentDuration { millis } => write!(f, "{millis} ms per segment"),
        }
    }
}
