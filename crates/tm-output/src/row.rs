//! Plain data row types written by trace backends.

use std::fmt;

/// One processed frame of one run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameRow {
    pub run_id:         u32,
    pub frame:          u64,
    /// Milliseconds since the run's first frame.
    pub elapsed_ms:     f64,
    pub lng:            f64,
    pub lat:            f64,
    pub remaining_secs: f64,
}

/// How a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Completed,
    Cancelled,
}

impl RunOutcome {
    pub fn as_str(self) -> &'static str {
        match self {
            RunOutcome::Completed => "completed",
            RunOutcome::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Summary of one finished run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunRow {
    pub run_id:  u32,
    pub outcome: RunOutcome,
    pub frames:  u64,
    /// Last position written, `None` if the run never got a frame.
    pub final_position: Option<(f64, f64)>,
}
