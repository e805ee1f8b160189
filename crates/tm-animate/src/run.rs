//! One animation run and its per-frame transition function.

use std::sync::Arc;

use tm_core::{FrameTime, Path, RunId, Speed, Waypoint};

use crate::{AnimateError, AnimateResult, AnimationState, Pacing, Progress, RunPhase};

/// The immutable inputs of a run: what to traverse and how fast.
///
/// Shared between a run and every handle to it, so `restart` can start over
/// with the same inputs after the run's state has been dropped.
#[derive(Clone, Debug, PartialEq)]
pub struct RunSpec {
    pub path:   Path,
    pub pacing: Pacing,
}

impl RunSpec {
    /// Check the start preconditions: at least two waypoints and a valid
    /// pacing parameter.
    pub fn new(path: Path, pacing: Pacing) -> AnimateResult<Self> {
        if path.len() < 2 {
            return Err(AnimateError::InvalidInput(format!(
                "path needs at least two waypoints to animate, got {}",
                path.len()
            )));
        }
        let pacing = pacing.validate()?;
        Ok(Self { path, pacing })
    }
}

/// What one frame produced.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FrameStep {
    /// The position written to the sink this frame.
    pub position: Waypoint,
    /// Milliseconds since the run's first frame.
    pub elapsed_ms: f64,
    /// Estimated whole seconds left, rounded up, never negative.
    pub remaining_secs: f64,
    /// `true` if this was the run's last frame.
    pub finished: bool,
}

/// A single run: its shared inputs, precomputed distances, and state.
pub struct AnimationRun {
    pub id:          RunId,
    spec:            Arc<RunSpec>,
    /// Running distance to each waypoint.  Same length as the path.
    cumulative_m:    Vec<f64>,
    segment_lengths: Vec<f64>,
    pub state:       AnimationState,
}

impl AnimationRun {
    pub fn new(id: RunId, spec: Arc<RunSpec>) -> Self {
        let cumulative_m    = spec.path.cumulative_m();
        let segment_lengths = spec.path.segment_lengths_m();
        let progress = match spec.pacing {
            Pacing::ConstantSpeed(_)       => Progress::Distance(0.0),
            Pacing::SegmentDuration { .. } => Progress::SegmentFraction(0.0),
        };
        Self {
            id,
            spec,
            cumulative_m,
            segment_lengths,
            state: AnimationState::new(progress),
        }
    }

    #[inline]
    pub fn spec(&self) -> &Arc<RunSpec> {
        &self.spec
    }

    /// Total Haversine length of the path, metres.
    #[inline]
    pub fn total_length_m(&self) -> f64 {
        self.cumulative_m[self.cumulative_m.len() - 1]
    }

    /// Expected wall-clock duration of the whole run, seconds.
    pub fn estimated_duration_secs(&self) -> f64 {
        match self.spec.pacing {
            Pacing::ConstantSpeed(speed) => speed.duration_secs(self.total_length_m()),
            Pacing::SegmentDuration { millis } => {
                self.spec.path.segment_count() as f64 * millis / 1_000.0
            }
        }
    }

    /// Advance the state machine to `now` and return the position to write.
    ///
    /// Must only be called while the run is live.  The first call moves the
    /// run from `Pending` to `Running`; the call that exhausts the path moves
    /// it to `Completed`.
    pub fn advance(&mut self, now: FrameTime) -> FrameStep {
        debug_assert!(self.state.phase.is_live(), "advance on a {} run", self.state.phase);

        let started = *self.state.run_started_at.get_or_insert(now);
        self.state.phase = RunPhase::Running;
        self.state.frames += 1;

        let elapsed_ms = now.since(started);
        let step = match self.spec.pacing {
            Pacing::ConstantSpeed(speed)       => self.advance_constant_speed(speed, elapsed_ms),
            Pacing::SegmentDuration { millis } => self.advance_segment_duration(millis, now),
        };
        let step = FrameStep { elapsed_ms, ..step };

        if step.finished {
            self.state.phase = RunPhase::Completed;
        }
        step
    }

    fn advance_constant_speed(&mut self, speed: Speed, elapsed_ms: f64) -> FrameStep {
        let path   = &self.spec.path;
        let total  = self.total_length_m();
        let target = speed.distance_after(elapsed_ms / 1_000.0);
        self.state.progress = Progress::Distance(target);

        let remaining_secs = (speed.duration_secs(total) - elapsed_ms / 1_000.0).ceil().max(0.0);

        if target >= total {
            self.state.segment = path.segment_count() - 1;
            return FrameStep {
                position: path.last(),
                elapsed_ms,
                remaining_secs: 0.0,
                finished: true,
            };
        }

        // First waypoint whose running distance exceeds `target`; the
        // segment before it contains the target.  `cumulative_m[0] == 0 <=
        // target` and `cumulative_m[last] > target`, so `i` is a valid
        // segment index.
        let i = self.cumulative_m.partition_point(|&c| c <= target) - 1;
        let seg_len = self.segment_lengths[i];
        let ratio = if seg_len == 0.0 {
            1.0
        } else {
            ((target - self.cumulative_m[i]) / seg_len).clamp(0.0, 1.0)
        };

        self.state.segment = i;
        let (a, b) = (path.waypoints()[i], path.waypoints()[i + 1]);
        FrameStep {
            position: Waypoint::lerp(a, b, ratio),
            elapsed_ms,
            remaining_secs,
            finished: false,
        }
    }

    fn advance_segment_duration(&mut self, millis: f64, now: FrameTime) -> FrameStep {
        let path  = &self.spec.path;
        let index = self.state.segment;
        let start = *self.state.segment_started_at.get_or_insert(now);

        let progress = now.since(start) / millis;
        self.state.progress = Progress::SegmentFraction(progress);

        let (a, b) = (path.waypoints()[index], path.waypoints()[index + 1]);
        let position = Waypoint::lerp(a, b, progress.min(1.0));

        let segments_left = (path.segment_count() - index) as f64 - progress.min(1.0);
        let remaining_secs = (segments_left * millis / 1_000.0).ceil().max(0.0);

        if progress >= 1.0 {
            self.state.segment_started_at = None;
            self.state.segment = index + 1;
        }

        FrameStep {
            position,
            elapsed_ms: 0.0,
            remaining_secs,
            finished: self.state.segment >= path.segment_count(),
        }
    }
}
