//! Animation observer trait for progress reporting and data collection.

use log::{debug, info};
use tm_core::{RunId, Speed, Waypoint};

use crate::FrameStep;

/// Summary handed to [`AnimationObserver::on_run_start`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RunStart {
    pub total_distance_m: f64,
    /// `None` for per-segment pacing.
    pub speed:            Option<Speed>,
    pub estimated_secs:   f64,
    pub segments:         usize,
}

/// Callbacks invoked by the [`Animator`][crate::Animator] at key points in
/// a run's life.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
pub trait AnimationObserver {
    /// A run passed validation and requested its first frame.
    fn on_run_start(&mut self, _run: RunId, _start: &RunStart) {}

    /// A frame was processed and `step.position` written to the sink.
    fn on_frame(&mut self, _run: RunId, _frame: u64, _step: &FrameStep) {}

    /// The run wrote its last position and will request no more frames.
    fn on_run_complete(&mut self, _run: RunId, _final_position: Waypoint, _frames: u64) {}

    /// A live run was cancelled (directly or by a restart).
    fn on_run_cancelled(&mut self, _run: RunId, _frames: u64) {}
}

/// An [`AnimationObserver`] that does nothing.
pub struct NoopObserver;

impl AnimationObserver for NoopObserver {}

/// Writes human-readable progress text through the `log` facade.
///
/// Run-level events go to `info`; the per-frame countdown goes to `debug`.
#[derive(Default)]
pub struct LogObserver {
    last_remaining: Option<f64>,
}

impl LogObserver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AnimationObserver for LogObserver {
    fn on_run_start(&mut self, run: RunId, start: &RunStart) {
        self.last_remaining = None;
        info!("{run}: total distance {:.3} km over {} segments", start.total_distance_m / 1_000.0, start.segments);
        if let Some(speed) = start.speed {
            info!("{run}: speed {speed}");
        }
        info!("{run}: estimated duration {:.0} s", start.estimated_secs.ceil());
    }

    fn on_frame(&mut self, run: RunId, _frame: u64, step: &FrameStep) {
        // One line per whole second rather than one per frame.
        if self.last_remaining != Some(step.remaining_secs) {
            self.last_remaining = Some(step.remaining_secs);
            debug!("{run}: time left {:.0} s", step.remaining_secs);
        }
    }

    fn on_run_complete(&mut self, run: RunId, final_position: Waypoint, frames: u64) {
        info!("{run}: animation complete after {frames} frames");
        info!("{run}: final position {final_position}");
    }

    fn on_run_cancelled(&mut self, run: RunId, frames: u64) {
        info!("{run}: cancelled after {frames} frames");
    }
}
