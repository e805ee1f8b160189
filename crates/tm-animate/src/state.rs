//! Per-run animation state.

use std::fmt;

use tm_core::{FrameTime, FrameToken};

/// Lifecycle of one run.
///
/// ```text
/// Pending ──first frame──▶ Running ──path exhausted──▶ Completed
///    │                        │
///    └────────cancel──────────┴──────────────────────▶ Cancelled
/// ```
///
/// `Completed` and `Cancelled` are terminal: no frame is requested after
/// either.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RunPhase {
    Pending,
    Running,
    Completed,
    Cancelled,
}

impl RunPhase {
    /// `true` for `Pending` and `Running`.
    #[inline]
    pub fn is_live(self) -> bool {
        matches!(self, RunPhase::Pending | RunPhase::Running)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            RunPhase::Pending   => "pending",
            RunPhase::Running   => "running",
            RunPhase::Completed => "completed",
            RunPhase::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for RunPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How far along the path a run is, in the unit its pacing uses.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Progress {
    /// Constant-speed pacing: metres covered since the first frame.
    Distance(f64),
    /// Per-segment pacing: unclamped fraction of the current segment.
    SegmentFraction(f64),
}

/// Mutable state owned by exactly one run.
///
/// Dropped when the run completes or is cancelled; nothing outside the
/// owning [`AnimationRun`][crate::AnimationRun] holds a reference to it.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationState {
    pub phase: RunPhase,

    /// Index of the segment the last written position lies on.
    pub segment: usize,

    /// Timestamp of the run's first frame.
    pub run_started_at: Option<FrameTime>,

    /// Timestamp of the current segment's first frame (per-segment pacing
    /// only).  Reset to `None` on every segment transition.
    pub segment_started_at: Option<FrameTime>,

    pub progress: Progress,

    /// The single outstanding frame request, if any.
    pub pending_frame: Option<FrameToken>,

    /// Frames processed so far.
    pub frames: u64,
}

impl AnimationState {
    pub fn new(progress: Progress) -> Self {
        Self {
            phase:              RunPhase::Pending,
            segment:            0,
            run_started_at:     None,
            segment_started_at: None,
            progress,
            pending_frame:      None,
            frames:             0,
        }
    }
}
