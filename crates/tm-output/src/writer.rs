//! The `TraceWriter` trait implemented by all backend writers.

use crate::{FrameRow, OutputResult, RunRow};

/// Trait implemented by trace backends.
///
/// Errors are stored by [`TraceObserver`][crate::TraceObserver] and
/// retrieved with `take_error`, since observer callbacks return nothing.
pub trait TraceWriter {
    fn write_frame(&mut self, row: &FrameRow) -> OutputResult<()>;

    fn write_run(&mut self, row: &RunRow) -> OutputResult<()>;

    /// Flush all underlying handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
