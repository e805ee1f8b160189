//! `tm-output`: frame trace writers for trailmark runs.
//!
//! | Type               | Role                                                    |
//! |--------------------|---------------------------------------------------------|
//! | [`TraceWriter`]    | Backend trait: frame rows, run rows, `finish`           |
//! | [`CsvTraceWriter`] | Writes `frames.csv` and `runs.csv`                      |
//! | [`TraceObserver`]  | `AnimationObserver` that feeds any `TraceWriter`        |
//!
//! # Usage
//!
//! ```rust,ignore
//! use tm_output::{CsvTraceWriter, TraceObserver};
//!
//! let writer = CsvTraceWriter::new(Path::new("./trace"))?;
//! let mut anim = Animator::new(sink, FrameQueue::new())
//!     .with_observer(TraceObserver::new(writer));
//! // ... drive frames ...
//! let (_, _, mut obs) = anim.into_parts();
//! obs.finish();
//! obs.take_error().map(|e| eprintln!("trace error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvTraceWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TraceObserver;
pub use row::{FrameRow, RunOutcome, RunRow};
pub use writer::TraceWriter;
