//! `TraceObserver<W>`: bridges `AnimationObserver` to a `TraceWriter`.

use std::collections::HashMap;

use tm_animate::{AnimationObserver, FrameStep};
use tm_core::{RunId, Waypoint};

use crate::row::{FrameRow, RunOutcome, RunRow};
use crate::writer::TraceWriter;
use crate::{OutputError, OutputResult};

/// An [`AnimationObserver`] that writes every frame and every finished run
/// to a [`TraceWriter`] backend.
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  Check with [`take_error`][Self::take_error].
pub struct TraceObserver<W: TraceWriter> {
    writer:        W,
    last_position: HashMap<RunId, Waypoint>,
    last_error:    Option<OutputError>,
}

impl<W: TraceWriter> TraceObserver<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            last_position: HashMap::new(),
            last_error:    None,
        }
    }

    /// Flush the writer.  Call once the host stops driving frames.
    pub fn finish(&mut self) {
        let result = self.writer.finish();
        self.store_err(result);
    }

    /// Take the stored write error (if any).
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }

    fn finish_run(&mut self, run: RunId, outcome: RunOutcome, frames: u64) {
        let final_position = self.last_position.remove(&run).map(|p| (p.lng, p.lat));
        let row = RunRow { run_id: run.0, outcome, frames, final_position };
        let result = self.writer.write_run(&row);
        self.store_err(result);
    }
}

impl<W: TraceWriter> AnimationObserver for TraceObserver<W> {
    fn on_frame(&mut self, run: RunId, frame: u64, step: &FrameStep) {
        self.last_position.insert(run, step.position);
        let row = FrameRow {
            run_id:         run.0,
            frame,
            elapsed_ms:     step.elapsed_ms,
            lng:            step.position.lng,
            lat:            step.position.lat,
            remaining_secs: step.remaining_secs,
        };
        let result = self.writer.write_frame(&row);
        self.store_err(result);
    }

    fn on_run_complete(&mut self, run: RunId, _final_position: Waypoint, frames: u64) {
        self.finish_run(run, RunOutcome::Completed, frames);
    }

    fn on_run_cancelled(&mut self, run: RunId, frames: u64) {
        self.finish_run(run, RunOutcome::Cancelled, frames);
    }
}
